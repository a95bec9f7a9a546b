//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a sandbox where the host filesystem is mounted under
//! `/host`. Everything that turns user-facing paths into sandbox paths lives
//! here.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file};
