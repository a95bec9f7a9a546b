//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Zallery library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translates host
//! events into library events and carries out the actions the library
//! returns.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the initial query (if any) is
//!    submitted once the host grants it
//! 3. **Subscribe**: Register for `Key`, `WebRequestResult`, `Timer` and
//!    `PermissionRequestResult` events
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → navigation, search bar and modal events (see below)
//! - `WebRequestResult` → `Event::FetchCompleted` when the context map
//!   carries a request ticket
//! - `Timer` → `Event::Tick`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global (outside the search bar):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move down / up
//! - `g`/`Home`, `G`/`End`: First / last image
//! - `Enter`: Open image details
//! - `/`: Focus the search bar
//! - `m`: Load more
//! - `q`/`Esc`: Close plugin
//!
//! Search bar:
//! - Characters: Edit the query
//! - `Enter`: Submit
//! - `Esc`: Cancel
//!
//! Modal:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zallery::api::RequestTicket;
use zallery::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zallery::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zallery::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue HTTP requests to the image API
    /// - `ReadApplicationState`: Pane state for `hide_self`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zallery::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            base_url = %config.api_base_url,
            per_page = config.per_page,
            has_access_key = config.access_key.is_some(),
            "parsed configuration"
        );
        self.app = zallery::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
        ]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick {
                now_ms: chrono::Utc::now().timestamp_millis(),
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let granted = matches!(status, PermissionStatus::Granted);
                tracing::debug!(granted, "permission request result");
                Event::PermissionsResult { granted }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zallery::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The modal takes precedence over the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if self.app.is_modal_open() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseModal),
                _ => None,
            };
        }

        if self.app.input_mode == InputMode::Search {
            return match key.bare_key {
                BareKey::Enter => Some(Event::SubmitDraft),
                BareKey::Esc => Some(Event::CancelSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c)
                    if !key.has_modifiers(&[KeyModifier::Ctrl])
                        && !key.has_modifiers(&[KeyModifier::Alt]) =>
                {
                    Some(Event::Char(c))
                }
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Home | BareKey::Char('g') => Event::CursorFirst,
            BareKey::End | BareKey::Char('G') => Event::CursorLast,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Char('m') => Event::LoadMore,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a web request result to a fetch completion.
    ///
    /// Results whose context is not one of our request tickets are ignored.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(ticket) = RequestTicket::from_context(context) else {
            tracing::warn!(context = ?context, "ignoring web request result with unknown context");
            return None;
        };

        tracing::debug!(
            status,
            body_len = body.len(),
            generation = ticket.generation,
            page = ticket.page,
            "web request result"
        );
        Some(Event::FetchCompleted {
            ticket,
            status,
            body,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide plugin pane
    /// - `Fetch`: Issue a GET through the host
    /// - `ScheduleTick`: Arm the host timer
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "issuing web request");
                web_request(
                    request.url.clone(),
                    HttpVerb::Get,
                    request.headers.clone(),
                    vec![],
                    request.context.clone(),
                );
            }
            Action::ScheduleTick { millis } => {
                #[allow(clippy::cast_precision_loss)]
                set_timeout(*millis as f64 / 1_000.0);
            }
        }
    }
}
