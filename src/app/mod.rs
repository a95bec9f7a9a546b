//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the api/domain
//! layers. It implements the event-driven architecture that powers the
//! gallery.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Completions ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state container and view model computation
//! - [`toast`]: Transient notification stack
//!
//! # Example
//!
//! ```rust
//! use zallery::app::{handle_event, AppState, Event};
//! use zallery::api::ImageApi;
//! use zallery::Theme;
//!
//! let mut state = AppState::new(ImageApi::default(), Theme::default(), 4_000);
//! let (render, _actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(render);
//! # Ok::<(), zallery::GalleryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod toast;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
pub use toast::{Toast, ToastLevel, Toasts};
