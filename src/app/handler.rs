//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch completions and timer ticks, translating them into state changes
//! and action sequences. It is the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `CursorFirst`, `CursorLast`
//! - **Search bar**: `FocusSearch`, `Char`, `Backspace`, `CancelSearch`, `SubmitDraft`
//! - **Controller**: `SubmitSearch`, `LoadMore`
//! - **Modal**: `OpenSelected`, `CloseModal`
//! - **System**: `FetchCompleted`, `Tick`, `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use zallery::{handle_event, Action, AppState, Event, Theme};
//! use zallery::api::ImageApi;
//!
//! let api = ImageApi::new("https://api.unsplash.com", Some("key".into()), 12);
//! let mut state = AppState::new(api, Theme::default(), 4_000);
//! let (render, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into()))?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), zallery::GalleryError>(())
//! ```

use super::modes::InputMode;
use super::toast::{ToastLevel, Toasts};
use crate::api::{ImageApi, RequestTicket};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Delay between timer ticks while the loader spins or toasts are visible.
pub const TICK_MILLIS: u64 = 100;

/// Toast raised when an empty query is submitted.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";

/// Events triggered by user input, host callbacks, or timers.
///
/// The event handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down by one entry (wraps to top).
    CursorDown,
    /// Moves the cursor up by one entry (wraps to bottom).
    CursorUp,
    /// Jumps to the first entry.
    CursorFirst,
    /// Jumps to the last entry.
    CursorLast,

    /// Gives the search bar focus, seeding the draft with the active query.
    FocusSearch,
    /// Appends a character to the draft.
    Char(char),
    /// Removes the last character from the draft.
    Backspace,
    /// Leaves the search bar without submitting.
    CancelSearch,
    /// Submits the draft as a new search and leaves the search bar.
    SubmitDraft,

    /// Starts a new search for the given query.
    SubmitSearch(String),
    /// Requests the next page of the active query.
    LoadMore,

    /// Opens the image under the cursor in the modal.
    OpenSelected,
    /// Closes the modal.
    CloseModal,

    /// Hides the plugin pane.
    CloseFocus,

    /// Reports the outcome of a `web_request`.
    FetchCompleted {
        /// Identity of the request, recovered from its context map.
        ticket: RequestTicket,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Timer tick.
    Tick {
        /// Current time in milliseconds since the Unix epoch.
        now_ms: i64,
    },

    /// Reports whether the host granted the requested permissions.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions run in order; `should_render` tells
/// the shim whether the pane needs a redraw.
///
/// # Errors
///
/// Nothing in the current event set fails; request-building and response
/// errors are absorbed into state as an inline error plus a toast. The
/// `Result` is kept so the shim has one error path to log.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CursorFirst => {
            state.move_cursor_first();
            Ok((true, vec![]))
        }
        Event::CursorLast => {
            state.reveal_last();
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            tracing::debug!("focusing search bar");
            state.input_mode = InputMode::Search;
            state.draft.clone_from(&state.query);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.draft.push(*c);
            tracing::trace!(draft = %state.draft, char = %c, "draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.draft.pop();
            Ok((true, vec![]))
        }
        Event::CancelSearch => {
            state.input_mode = InputMode::Browse;
            state.draft.clear();
            Ok((true, vec![]))
        }
        Event::SubmitDraft => {
            state.input_mode = InputMode::Browse;
            let draft = std::mem::take(&mut state.draft);
            Ok(submit_search(state, &draft))
        }
        Event::SubmitSearch(query) => Ok(submit_search(state, query)),
        Event::LoadMore => {
            let Some(ticket) = state.begin_load_more() else {
                return Ok((false, vec![]));
            };
            let mut actions = fetch_actions(state, &ticket);
            actions.extend(tick_action(state));
            Ok((true, actions))
        }
        Event::OpenSelected => {
            let Some(image) = state.image_under_cursor().cloned() else {
                tracing::debug!("no image under cursor");
                return Ok((false, vec![]));
            };
            tracing::debug!(image_id = %image.id, "opening image");
            state.selected_image = Some(image);
            Ok((true, vec![]))
        }
        Event::CloseModal => {
            if state.selected_image.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FetchCompleted {
            ticket,
            status,
            body,
        } => {
            let _parent = ticket.trace_context.as_ref().and_then(|ctx| ctx.attach());
            let _span = tracing::info_span!(
                "fetch_completed",
                kind = ?ticket.kind,
                generation = ticket.generation,
                page = ticket.page,
                status = status
            )
            .entered();

            if !state.is_pending(ticket) {
                tracing::debug!(
                    ticket_generation = ticket.generation,
                    current_generation = state.generation,
                    "discarding stale response"
                );
                return Ok((false, vec![]));
            }

            match ImageApi::parse_response(*status, body) {
                Ok(page) => {
                    let count = page.images.len();
                    state.apply_page(ticket, page);
                    if state.has_no_results() {
                        let message = format!("No images found for “{}”", state.query);
                        state.toasts.push(ToastLevel::Info, message, Toasts::now_ms());
                    }
                    tracing::info!(received = count, total = state.images.len(), "page received");
                }
                Err(err) => {
                    let message = err.user_message();
                    tracing::warn!(error = %message, "fetch failed");
                    state.apply_failure(ticket, &message);
                }
            }

            Ok((true, tick_action(state).into_iter().collect()))
        }
        Event::Tick { now_ms } => {
            state.tick_pending = false;
            let expired = state.toasts.expire(*now_ms);
            if state.loading {
                state.advance_spinner();
            }
            let render = expired || state.loading;
            Ok((render, tick_action(state).into_iter().collect()))
        }
        Event::PermissionsResult { granted } => {
            if !*granted {
                tracing::warn!("web access permission denied");
                state.toasts.push(
                    ToastLevel::Error,
                    "Web access was not granted; searches cannot run",
                    Toasts::now_ms(),
                );
                return Ok((true, tick_action(state).into_iter().collect()));
            }

            match state.initial_query.take() {
                Some(query) => Ok(submit_search(state, &query)),
                None => Ok((false, vec![])),
            }
        }
    }
}

/// Single entry point for new searches.
///
/// A blank query raises a toast and leaves the current results untouched.
fn submit_search(state: &mut AppState, query: &str) -> (bool, Vec<Action>) {
    if query.trim().is_empty() {
        tracing::debug!("empty query submitted");
        state
            .toasts
            .push(ToastLevel::Error, EMPTY_QUERY_MESSAGE, Toasts::now_ms());
        return (true, tick_action(state).into_iter().collect());
    }

    let ticket = state.begin_search(query);
    let mut actions = fetch_actions(state, &ticket);
    actions.extend(tick_action(state));
    (true, actions)
}

/// Builds the fetch for `ticket`, or records the failure when the request
/// cannot be built (no access key configured, for instance).
fn fetch_actions(state: &mut AppState, ticket: &RequestTicket) -> Vec<Action> {
    match state.api.search_request(ticket) {
        Ok(request) => {
            tracing::debug!(url = %request.url, page = ticket.page, "issuing fetch");
            vec![Action::Fetch(request)]
        }
        Err(err) => {
            let message = err.user_message();
            tracing::warn!(error = %message, "could not build request");
            state.apply_failure(ticket, &message);
            vec![]
        }
    }
}

/// Requests a timer tick if something is animating and none is outstanding.
fn tick_action(state: &mut AppState) -> Option<Action> {
    if state.tick_pending || !state.needs_tick() {
        return None;
    }
    state.tick_pending = true;
    Some(Action::ScheduleTick {
        millis: TICK_MILLIS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchKind;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        let api = ImageApi::new("https://api.example.test", Some("secret".into()), 2);
        AppState::new(api, Theme::default(), 4_000)
    }

    fn body(ids: &[&str], total_pages: u32) -> Vec<u8> {
        let results: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "alt_description": format!("photo {id}"),
                    "urls": { "small": format!("https://img.test/{id}-s"), "regular": format!("https://img.test/{id}-r") },
                    "user": { "name": "Jane", "username": "jane" }
                })
            })
            .collect();
        serde_json::to_vec(&serde_json::json!({
            "total": u64::from(total_pages) * 2,
            "total_pages": total_pages,
            "results": results
        }))
        .unwrap()
    }

    fn fetched_ticket(actions: &[Action]) -> RequestTicket {
        let request = actions
            .iter()
            .find_map(|a| match a {
                Action::Fetch(request) => Some(request),
                _ => None,
            })
            .expect("a fetch action");
        RequestTicket::from_context(&request.context).expect("a decodable ticket")
    }

    #[test]
    fn submit_search_emits_fetch_and_tick() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();

        assert!(render);
        assert!(state.loading);
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Action::ScheduleTick { millis: TICK_MILLIS }));

        let ticket = fetched_ticket(&actions);
        assert_eq!(ticket.kind, FetchKind::Search);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.query, "cats");
    }

    #[test]
    fn empty_query_only_raises_a_toast() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SubmitSearch("   ".into())).unwrap();

        assert!(render);
        assert!(!actions.iter().any(|a| matches!(a, Action::Fetch(_))));
        assert!(!state.loading);
        assert_eq!(state.toasts.latest().map(|t| t.message.as_str()), Some(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn draft_submission_goes_through_the_search_path() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "dogs".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Backspace).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::SubmitDraft).unwrap();

        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.draft.is_empty());
        assert_eq!(fetched_ticket(&actions).query, "dog");
    }

    #[test]
    fn chars_are_ignored_while_browsing() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn completion_replaces_then_load_more_appends() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        let ticket = fetched_ticket(&actions);

        handle_event(
            &mut state,
            &Event::FetchCompleted { ticket, status: 200, body: body(&["a", "b"], 3) },
        )
        .unwrap();
        assert_eq!(state.images.len(), 2);
        assert_eq!(state.cursor, 1);
        assert!(!state.loading);

        let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        let ticket = fetched_ticket(&actions);
        assert_eq!(ticket.page, 2);

        handle_event(
            &mut state,
            &Event::FetchCompleted { ticket, status: 200, body: body(&["c", "d"], 3) },
        )
        .unwrap();
        assert_eq!(state.images.len(), 4);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn load_more_is_ignored_while_loading() {
        let mut state = state();
        handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = state();
        let (_, first) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        let stale = fetched_ticket(&first);
        handle_event(&mut state, &Event::SubmitSearch("dogs".into())).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::FetchCompleted { ticket: stale, status: 200, body: body(&["a"], 1) },
        )
        .unwrap();

        assert!(!render);
        assert!(state.images.is_empty());
        assert!(state.loading);
        assert_eq!(state.query, "dogs");
    }

    #[test]
    fn error_status_sets_error_and_toast() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        let ticket = fetched_ticket(&actions);

        handle_event(
            &mut state,
            &Event::FetchCompleted {
                ticket,
                status: 401,
                body: br#"{"errors":["OAuth error: The access token is invalid"]}"#.to_vec(),
            },
        )
        .unwrap();

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("OAuth error: The access token is invalid"));
        assert_eq!(
            state.toasts.latest().map(|t| t.level),
            Some(ToastLevel::Error)
        );
    }

    #[test]
    fn missing_access_key_fails_without_fetching() {
        let mut state = AppState::new(ImageApi::default(), Theme::default(), 4_000);
        let (render, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();

        assert!(render);
        assert!(!actions.iter().any(|a| matches!(a, Action::Fetch(_))));
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.pending.is_none());
    }

    #[test]
    fn zero_results_raise_an_info_toast() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("qwzx".into())).unwrap();
        let ticket = fetched_ticket(&actions);

        handle_event(
            &mut state,
            &Event::FetchCompleted { ticket, status: 200, body: body(&[], 0) },
        )
        .unwrap();

        assert!(state.has_no_results());
        let toast = state.toasts.latest().unwrap();
        assert_eq!(toast.level, ToastLevel::Info);
        assert_eq!(toast.message, "No images found for “qwzx”");
    }

    #[test]
    fn modal_opens_on_cursor_and_closes() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        let ticket = fetched_ticket(&actions);
        handle_event(
            &mut state,
            &Event::FetchCompleted { ticket, status: 200, body: body(&["a", "b"], 1) },
        )
        .unwrap();

        handle_event(&mut state, &Event::CursorFirst).unwrap();
        handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(state.selected_image.as_ref().map(|i| i.id.as_str()), Some("a"));

        let (render, _) = handle_event(&mut state, &Event::CloseModal).unwrap();
        assert!(render);
        assert!(!state.is_modal_open());

        let (render, _) = handle_event(&mut state, &Event::CloseModal).unwrap();
        assert!(!render);
    }

    #[test]
    fn ticks_stop_once_nothing_animates() {
        let mut state = state();
        state.toasts.push(ToastLevel::Info, "hello", 0);

        let (render, actions) = handle_event(&mut state, &Event::Tick { now_ms: 100 }).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::ScheduleTick { millis: TICK_MILLIS }]);

        let (render, actions) = handle_event(&mut state, &Event::Tick { now_ms: 10_000 }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.tick_pending);
    }

    #[test]
    fn only_one_tick_is_outstanding() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("cats".into())).unwrap();
        assert!(actions.contains(&Action::ScheduleTick { millis: TICK_MILLIS }));

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch("dogs".into())).unwrap();
        assert!(!actions.iter().any(|a| matches!(a, Action::ScheduleTick { .. })));
    }

    #[test]
    fn granted_permissions_submit_initial_query_once() {
        let mut state = state();
        state.initial_query = Some("mountains".into());

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(fetched_ticket(&actions).query, "mountains");

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn denied_permissions_raise_a_toast() {
        let mut state = state();
        let (render, _) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(render);
        assert_eq!(state.toasts.latest().map(|t| t.level), Some(ToastLevel::Error));
    }
}
