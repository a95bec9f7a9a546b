//! Zallery: a Zellij plugin for searching and browsing image collections.
//!
//! Zallery queries a paginated image search API and presents the results as a
//! keyboard-driven gallery inside a Zellij pane:
//! - Query submission from a search bar, one page fetched per request
//! - "Load more" appending the next page until the last page is reached
//! - Loader, inline error, load-more and end-of-results status lines
//! - An image detail modal and transient toast notifications
//! - Stale response detection so a newer search always wins
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                    ┌───────────────┐
//! │ UI Layer      │                    │ API Layer     │
//! │ (ui/)         │                    │ (api/)        │
//! │ - Rendering   │                    │ - Requests    │
//! │ - Theming     │                    │ - Responses   │
//! │ - Components  │                    │ - Correlation │
//! └───────────────┘                    └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Image model (domain/image)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Image search requests and response parsing
//! - [`domain`]: Core domain types (images, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zallery.wasm" {
//!         access_key "YOUR_UNSPLASH_ACCESS_KEY"
//!         per_page "12"
//!         orientation "landscape"
//!         initial_query "mountains"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Basic Usage (Library)
//!
//! ```rust
//! use zallery::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     access_key: Some("key".to_string()),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! let (_render, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into()))?;
//! for action in actions {
//!     // Execute actions against the host...
//!     # let _ = action;
//! }
//! # Ok::<(), zallery::GalleryError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with truecolor

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use api::{ImageApi, Orientation};
pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{GalleryError, ImageRecord, Result, SearchPage};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Toast lifetime used when `toast_seconds` is absent or invalid.
pub const DEFAULT_TOAST_SECONDS: u64 = 4;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zallery.wasm" {
///     access_key "abc123"
///     api_base_url "https://api.unsplash.com"
///     per_page "20"
///     toast_seconds "6"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API access key sent as `Authorization: Client-ID <key>`.
    ///
    /// Searches fail with a configuration error while unset.
    pub access_key: Option<String>,

    /// Base URL of the image search API. Default: `https://api.unsplash.com`
    pub api_base_url: String,

    /// Images per page, clamped to `1..=30`. Default: 12
    pub per_page: u32,

    /// Optional orientation filter.
    pub orientation: Option<Orientation>,

    /// Query submitted once web access is granted.
    pub initial_query: Option<String>,

    /// Seconds a toast stays visible. Default: 4
    pub toast_seconds: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: None,
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
            per_page: api::DEFAULT_PER_PAGE,
            orientation: None,
            initial_query: None,
            toast_seconds: DEFAULT_TOAST_SECONDS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - Blank values count as absent
    /// - `per_page`, `toast_seconds`: unparsable values fall back to defaults
    /// - `orientation`: unknown values are ignored
    /// - `theme`: maps to `theme_name`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zallery::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("access_key".to_string(), "abc".to_string());
    /// map.insert("per_page".to_string(), "20".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.access_key.as_deref(), Some("abc"));
    /// assert_eq!(config.per_page, 20);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let per_page = text("per_page")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(api::DEFAULT_PER_PAGE)
            .clamp(1, api::MAX_PER_PAGE);

        let toast_seconds = text("toast_seconds")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TOAST_SECONDS);

        Self {
            access_key: text("access_key"),
            api_base_url: text("api_base_url").unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string()),
            per_page,
            orientation: text("orientation").as_deref().and_then(Orientation::parse),
            initial_query: text("initial_query"),
            toast_seconds,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Toast lifetime in milliseconds.
    #[must_use]
    pub fn toast_lifetime_ms(&self) -> i64 {
        i64::try_from(self.toast_seconds.saturating_mul(1_000)).unwrap_or(i64::MAX)
    }
}

/// Initializes the plugin state from configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - An API client built from the configuration
/// - The initial query, submitted later when permissions are granted
///
/// # Example
///
/// ```rust
/// use zallery::{initialize, Config};
///
/// let config = Config {
///     initial_query: Some("forest".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.initial_query.as_deref(), Some("forest"));
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zallery plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    if config.access_key.is_none() {
        tracing::warn!("no access_key configured; searches will fail");
    }

    let mut state = AppState::new(ImageApi::from_config(config), theme, config.toast_lifetime_ms());
    state.initial_query.clone_from(&config.initial_query);
    state
}
