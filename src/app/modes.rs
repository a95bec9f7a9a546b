//! Input mode state for the application.
//!
//! The mode decides how key presses are interpreted:
//! - **Browse**: navigation and commands over the gallery
//! - **Search**: characters are typed into the search bar draft
//!
//! The image modal is not a separate mode. It is open exactly while
//! [`AppState::selected_image`](super::AppState::selected_image) is set,
//! and it takes precedence over both modes.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), Enter (open image),
    /// m (load more), g/G (first/last), q (quit).
    #[default]
    Browse,

    /// The search bar has focus.
    ///
    /// Characters edit the draft query, Enter submits it, Esc cancels.
    Search,
}
