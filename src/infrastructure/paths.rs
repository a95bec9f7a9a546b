//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Name of the OTLP trace file inside [`data_dir`].
pub const TRACE_FILE_NAME: &str = "zallery-otlp.json";

/// Returns the directory Zallery writes its trace files to.
///
/// In the plugin sandbox `/host` is the directory Zellij was started from,
/// which is normally the user's home, so this resolves to
/// `~/.local/share/zellij/zallery` on the host.
///
/// # Examples
///
/// ```
/// use zallery::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/zallery"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zallery")
}

/// Returns the path of the OTLP trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Maps a `~`-prefixed path to its location under `/host`.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// # Examples
///
/// ```
/// use zallery::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file().parent(), Some(data_dir().as_path()));
        assert!(trace_file().ends_with(TRACE_FILE_NAME));
    }

    #[test]
    fn tilde_forms() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/a"), "relative/a");
    }
}
