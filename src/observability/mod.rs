//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → OTLP/JSON file
//! ```
//!
//! Traces go to `~/.local/share/zellij/zallery/zallery-otlp.json`, one OTLP
//! document per line, rotated at 10 MB with three rotations kept.
//!
//! Fetches are asynchronous host calls, so the span that issued a request
//! has ended by the time the result arrives. Request tickets carry the trace
//! and span ids across, and the completion span is parented to them (see
//! [`crate::api::TraceContext`]).
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `otlp`: OTLP/JSON encoding
//! - `file_writer`: Size-rotated trace file

mod exporter;
mod file_writer;
mod init;
mod otlp;

pub use init::init_tracing;
