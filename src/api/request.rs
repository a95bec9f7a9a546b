//! Outgoing request descriptions and completion correlation.
//!
//! The Zellij host performs HTTP calls on the plugin's behalf and reports the
//! result later as a separate event. Everything the controller needs to match
//! a result to the request that produced it travels in the string-to-string
//! context map that the host echoes back untouched. [`RequestTicket`] is the
//! typed view of that map.
//!
//! The map also carries the trace and span ids active when the request was
//! issued, so the completion span can be linked to the request span in the
//! exported traces.

use crate::domain::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context key marking a request as one of ours.
const KEY_SOURCE: &str = "source";
/// Value stored under [`KEY_SOURCE`].
const SOURCE: &str = "zallery";
/// Context key holding the JSON-encoded [`RequestTicket`].
const KEY_TICKET: &str = "ticket";

/// A fully described GET request ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the encoded query string.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Correlation data echoed back with the result.
    pub context: BTreeMap<String, String>,
}

/// Why a page is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchKind {
    /// First page of a freshly submitted query. Replaces the image list.
    Search,
    /// A following page. Appends to the image list.
    LoadMore,
}

/// Distributed tracing context for linking request and completion spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace context of the current tracing span.
    ///
    /// Returns `None` when no valid OpenTelemetry span is active, which is the
    /// case whenever tracing has not been initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Attaches this context as the remote parent of spans created while the
    /// returned guard is alive.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

/// Identity of one in-flight page request.
///
/// `generation` is the search generation the request was issued under. A
/// completion whose generation differs from the controller's current one
/// belongs to a superseded query and is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTicket {
    pub kind: FetchKind,
    pub generation: u64,
    pub page: u32,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl RequestTicket {
    /// Creates a ticket, capturing the current trace context.
    #[must_use]
    pub fn new(kind: FetchKind, generation: u64, page: u32, query: impl Into<String>) -> Self {
        Self {
            kind,
            generation,
            page,
            query: query.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Encodes the ticket into a host context map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GalleryError::Decode`] if the ticket cannot be
    /// serialized.
    pub fn to_context(&self) -> Result<BTreeMap<String, String>> {
        let mut context = BTreeMap::new();
        context.insert(KEY_SOURCE.to_string(), SOURCE.to_string());
        context.insert(KEY_TICKET.to_string(), serde_json::to_string(self)?);
        Ok(context)
    }

    /// Decodes a ticket from a host context map.
    ///
    /// Returns `None` if the map was not produced by [`Self::to_context`]
    /// (for example a result for some other plugin component) or the ticket
    /// does not parse.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        if context.get(KEY_SOURCE).map(String::as_str) != Some(SOURCE) {
            return None;
        }

        match serde_json::from_str(context.get(KEY_TICKET)?) {
            Ok(ticket) => Some(ticket),
            Err(e) => {
                tracing::warn!(error = %e, "undecodable request ticket in host context");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_survives_the_host_context_map() {
        let ticket = RequestTicket {
            kind: FetchKind::LoadMore,
            generation: 7,
            page: 3,
            query: "red cats & dogs".into(),
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".into(),
                parent_span_id: "b7ad6b7169203331".into(),
            }),
        };

        let decoded = RequestTicket::from_context(&ticket.to_context().unwrap());
        assert_eq!(decoded, Some(ticket));
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut context = BTreeMap::new();
        context.insert("kind".to_string(), "search".to_string());
        assert!(RequestTicket::from_context(&context).is_none());
    }

    #[test]
    fn malformed_ticket_is_rejected() {
        let ticket = RequestTicket::new(FetchKind::Search, 1, 1, "cats");
        let mut context = ticket.to_context().unwrap();
        context.insert(KEY_TICKET.to_string(), r#"{"kind":"search","page":"one"}"#.to_string());
        assert!(RequestTicket::from_context(&context).is_none());
    }

    #[test]
    fn ticket_without_tracing_omits_the_trace_context() {
        let ticket = RequestTicket::new(FetchKind::Search, 1, 1, "cats");
        let context = ticket.to_context().unwrap();
        let json: serde_json::Value = serde_json::from_str(&context[KEY_TICKET]).unwrap();

        assert_eq!(json["kind"], "search");
        assert!(json.get("trace_context").is_none());
        assert_eq!(RequestTicket::from_context(&context), Some(ticket));
    }
}
