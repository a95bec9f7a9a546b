//! Image search API client.
//!
//! [`ImageApi`] turns a query and page number into an [`HttpRequest`] and
//! turns the host-reported status and body back into a [`SearchPage`]. It
//! performs no I/O itself; the plugin shim hands the request to Zellij's
//! `web_request` and feeds the result back through the event handler. No
//! retries, caching or rate limiting happen here.

use super::encoding::encode_query;
use super::request::{HttpRequest, RequestTicket};
use super::wire::{ErrorResponse, SearchResponse};
use crate::domain::{GalleryError, Result, SearchPage};
use crate::Config;
use std::collections::BTreeMap;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Default number of images per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 30;

/// Search endpoint path appended to the base URL.
const SEARCH_PATH: &str = "/search/photos";

/// Photo orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    /// Parses a configuration value, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "landscape" => Some(Self::Landscape),
            "portrait" => Some(Self::Portrait),
            "squarish" => Some(Self::Squarish),
            _ => None,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }
}

/// Client for the paginated image search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageApi {
    base_url: String,
    access_key: Option<String>,
    per_page: u32,
    orientation: Option<Orientation>,
}

impl Default for ImageApi {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
            per_page: DEFAULT_PER_PAGE,
            orientation: None,
        }
    }
}

impl ImageApi {
    /// Creates a client for `base_url` authenticated with `access_key`.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_key: Option<String>, per_page: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_key: access_key.filter(|key| !key.trim().is_empty()),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            orientation: None,
        }
    }

    /// Creates a client from the plugin configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut api = Self::new(
            config.api_base_url.clone(),
            config.access_key.clone(),
            config.per_page,
        );
        api.orientation = config.orientation;
        api
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Builds the GET request for one page of `ticket.query`.
    ///
    /// # Errors
    ///
    /// - [`GalleryError::Config`] if no access key is configured
    /// - [`GalleryError::FetchFailed`] if the query is blank or the page is 0
    /// - [`GalleryError::Decode`] if the ticket cannot be encoded into the context
    pub fn search_request(&self, ticket: &RequestTicket) -> Result<HttpRequest> {
        let access_key = self.access_key.as_ref().ok_or_else(|| {
            GalleryError::Config("access_key is not set in the plugin configuration".to_string())
        })?;

        let query = ticket.query.trim();
        if query.is_empty() {
            return Err(GalleryError::FetchFailed("Search query is empty".to_string()));
        }
        if ticket.page == 0 {
            return Err(GalleryError::FetchFailed("Pages are numbered from 1".to_string()));
        }

        let mut params = vec![
            ("query", query.to_string()),
            ("page", ticket.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        if let Some(orientation) = self.orientation {
            params.push(("orientation", orientation.as_str().to_string()));
        }

        let url = format!("{}{SEARCH_PATH}?{}", self.base_url, encode_query(&params));

        let mut headers = BTreeMap::new();
        headers.insert("Accept-Version".to_string(), "v1".to_string());
        headers.insert("Authorization".to_string(), format!("Client-ID {access_key}"));

        tracing::debug!(url = %url, page = ticket.page, generation = ticket.generation, "built search request");

        Ok(HttpRequest {
            url,
            headers,
            context: ticket.to_context()?,
        })
    }

    /// Interprets a host-reported response.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::FetchFailed`] when the status is not 2xx (the
    /// message lists the API's `errors`, or names the status when there are
    /// none) or when a 2xx body cannot be decoded.
    pub fn parse_response(status: u16, body: &[u8]) -> Result<SearchPage> {
        if !(200..300).contains(&status) {
            return Err(GalleryError::FetchFailed(Self::failure_message(status, body)));
        }

        let response: SearchResponse = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, body_len = body.len(), "undecodable search response");
            GalleryError::FetchFailed(format!("Unexpected response from the image service: {e}"))
        })?;

        Ok(SearchPage::from(response))
    }

    /// Builds the user-facing message for a non-success response.
    fn failure_message(status: u16, body: &[u8]) -> String {
        let api_errors = serde_json::from_slice::<ErrorResponse>(body)
            .map(|response| response.errors)
            .unwrap_or_default();

        if !api_errors.is_empty() {
            return api_errors.join("; ");
        }

        // The host reports transport failures with a plain-text body.
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() || text.starts_with('{') || text.starts_with('<') {
            format!("Request failed with status {status}")
        } else {
            format!("Request failed with status {status}: {text}")
        }
    }
}
