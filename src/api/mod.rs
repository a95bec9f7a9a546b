//! Image search API layer.
//!
//! This module wraps the single paginated endpoint the gallery talks to. It
//! is pure: it describes requests and interprets responses, while the Zellij
//! host performs the actual network call.
//!
//! ```text
//! RequestTicket ─► ImageApi::search_request ─► HttpRequest ─► web_request (host)
//!                                                                  │
//! SearchPage ◄── ImageApi::parse_response ◄── WebRequestResult ◄──┘
//! ```
//!
//! # Modules
//!
//! - [`client`]: Request building and response interpretation
//! - [`request`]: Request descriptions and completion correlation
//! - [`wire`]: JSON wire types of the API
//! - [`encoding`]: URL query encoding

pub mod client;
pub mod encoding;
pub mod request;
pub mod wire;

pub use client::{ImageApi, Orientation, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use encoding::{encode_component, encode_query};
pub use request::{FetchKind, HttpRequest, RequestTicket, TraceContext};
