//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host. It returns a `Vec<Action>`
//! after each event and the plugin shim executes them in order. This keeps
//! every state transition testable without a running Zellij.
//!
//! # Example
//!
//! ```rust
//! use zallery::Action;
//!
//! let actions = vec![Action::ScheduleTick { millis: 100 }, Action::CloseFocus];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::api::HttpRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET through the host's `web_request`.
    ///
    /// The result comes back as a `WebRequestResult` event carrying the
    /// request's context map.
    Fetch(HttpRequest),

    /// Asks the host for a `Timer` event after the given delay.
    ///
    /// Drives the loader animation and toast expiry.
    ScheduleTick {
        /// Delay in milliseconds.
        millis: u64,
    },
}
