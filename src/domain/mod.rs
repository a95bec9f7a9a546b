//! Domain layer for the Zallery plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs and of the image API's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image record and search page models
//!
//! # Examples
//!
//! ```
//! use zallery::domain::{ImageRecord, Result};
//!
//! fn first_result() -> Result<ImageRecord> {
//!     Ok(ImageRecord::new("id", "a cat", "https://thumb", "https://full"))
//! }
//! ```

pub mod error;
pub mod image;

pub use error::{GalleryError, Result};
pub use image::{ImageRecord, SearchPage};
