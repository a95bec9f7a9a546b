//! Error types for the Zallery plugin.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Fetch failures are the only errors a user ever sees: they are stored in the
//! controller state for inline display and duplicated into a toast. Everything
//! else is logged by the plugin shim.

use thiserror::Error;

/// The main error type for Zallery plugin operations.
///
/// # Examples
///
/// ```
/// use zallery::GalleryError;
///
/// let err = GalleryError::FetchFailed("Request failed with status 503".to_string());
/// assert_eq!(err.user_message(), "Request failed with status 503");
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// An image API request did not succeed.
    ///
    /// Covers transport failures reported by the host, non-success HTTP
    /// statuses and response bodies that could not be decoded. The string is
    /// already human-readable and is shown to the user as-is.
    #[error("{0}")]
    FetchFailed(String),

    /// JSON encoding or decoding failed outside of a fetch response.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Raised when a search is attempted without an API access key, among
    /// other malformed settings.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GalleryError {
    /// Returns the text shown inline and in the error toast.
    ///
    /// Fetch failures carry their message verbatim; other variants use their
    /// `Display` form so the category stays visible.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::FetchFailed(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for Zallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_message_is_shown_verbatim() {
        let err = GalleryError::FetchFailed("OAuth error: The access token is invalid".into());
        assert_eq!(err.user_message(), "OAuth error: The access token is invalid");
    }

    #[test]
    fn config_error_keeps_category_prefix() {
        let err = GalleryError::Config("access_key is not set".into());
        assert_eq!(err.user_message(), "Configuration error: access_key is not set");
    }
}
