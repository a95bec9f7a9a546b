//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of every piece of
//! mutable gallery state, along with the fetch lifecycle transitions and the
//! view model computation. The event handler is the only caller that mutates
//! it.
//!
//! # State Components
//!
//! - **Query / page / total pages**: the active search and how far it has been paged
//! - **Images**: results of the active search, in API order
//! - **Loading / error**: fetch status shown by the loader and error views
//! - **Selected image**: the image shown in the modal, if open
//! - **Cursor**: highlighted gallery entry, drives the viewport window
//! - **Generation / pending**: identity of the request that may still update state
//! - **Toasts / spinner**: transient feedback animated by timer ticks
//!
//! # Fetch Lifecycle
//!
//! ```text
//! begin_search ──► pending(Search, gen N) ──► apply_page   → images replaced
//!                                        └──► apply_failure → error + toast
//! begin_load_more ─► pending(LoadMore, gen N) ─► apply_page → images appended
//!                                           └──► apply_failure → page rolled back
//! ```
//!
//! A completion whose ticket is not the pending one (an older generation, or a
//! duplicate delivery) is ignored.

use super::modes::InputMode;
use super::toast::{ToastLevel, Toasts};
use crate::api::{FetchKind, ImageApi, RequestTicket};
use crate::domain::{ImageRecord, SearchPage};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, GalleryColumns, GalleryItem, HeaderInfo, LoadMoreInfo, LoaderInfo,
    ModalInfo, SearchBarInfo, StatusInfo, ToastInfo, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Loader animation frames, advanced once per timer tick while loading.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text of the end-of-results line.
pub const END_OF_RESULTS: &str = "You have reached the end of search results.";

/// Rows above the gallery: blank, header, border, search box (3), column headers.
const CHROME_TOP: usize = 7;

/// Rows below the gallery: border and footer.
const CHROME_BOTTOM: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The submitted query the gallery currently shows results for.
    pub query: String,

    /// 1-based index of the last page requested for `query`.
    pub page: u32,

    /// Result list, replaced on new search and appended on load more.
    pub images: Vec<ImageRecord>,

    /// True exactly while a request for the current generation is in flight.
    pub loading: bool,

    /// Message of the last failed fetch, cleared when a new search starts.
    pub error: Option<String>,

    /// Image shown in the modal. The modal is open iff this is set.
    pub selected_image: Option<ImageRecord>,

    /// Page count reported by the API for `query`.
    pub total_pages: u32,

    /// Result count reported by the API for `query`.
    pub total_results: u64,

    /// Zero-based index of the highlighted gallery entry.
    pub cursor: usize,

    /// Search bar text before submission.
    pub draft: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Bumped on every new search. Responses from older generations are stale.
    pub generation: u64,

    /// The request whose completion is awaited, if any.
    pub pending: Option<RequestTicket>,

    /// Transient notifications.
    pub toasts: Toasts,

    /// Index into [`SPINNER_FRAMES`].
    pub spinner_frame: usize,

    /// True while a timer tick has been requested and not yet delivered.
    pub tick_pending: bool,

    /// Query to submit once the host grants permissions. Consumed once.
    pub initial_query: Option<String>,

    /// Image API client.
    pub api: ImageApi,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with no query and an empty gallery.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zallery::{AppState, Theme};
    /// use zallery::api::ImageApi;
    ///
    /// let state = AppState::new(ImageApi::default(), Theme::default(), 4_000);
    /// assert_eq!(state.page, 1);
    /// assert!(!state.loading);
    /// ```
    #[must_use]
    pub fn new(api: ImageApi, theme: Theme, toast_lifetime_ms: i64) -> Self {
        Self {
            query: String::new(),
            page: 1,
            images: Vec::new(),
            loading: false,
            error: None,
            selected_image: None,
            total_pages: 0,
            total_results: 0,
            cursor: 0,
            draft: String::new(),
            input_mode: InputMode::Browse,
            generation: 0,
            pending: None,
            toasts: Toasts::new(toast_lifetime_ms),
            spinner_frame: 0,
            tick_pending: false,
            initial_query: None,
            api,
            theme,
        }
    }

    /// Whether the load-more control is shown (and load more is honoured).
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.images.is_empty() && self.page < self.total_pages && !self.loading
    }

    /// Whether the end-of-results line is shown.
    #[must_use]
    pub fn reached_end(&self) -> bool {
        self.page == self.total_pages
    }

    /// Whether the last search completed successfully with no results.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        !self.query.is_empty() && !self.loading && self.error.is_none() && self.images.is_empty()
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.selected_image.is_some()
    }

    /// Returns the image under the cursor, if any.
    #[must_use]
    pub fn image_under_cursor(&self) -> Option<&ImageRecord> {
        self.images.get(self.cursor)
    }

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.images.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.images.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.images.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_first(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the last image so the viewport reveals it.
    ///
    /// Called whenever the image list changes, mirroring a scroll of the
    /// last gallery item into view.
    pub fn reveal_last(&mut self) {
        self.cursor = self.images.len().saturating_sub(1);
    }

    /// Starts a new search and returns the ticket of its page-1 request.
    ///
    /// Sets the query, resets the page to 1, clears images, total pages, error
    /// and cursor, marks loading and bumps the generation so that any
    /// response still in flight for an earlier query becomes stale.
    pub fn begin_search(&mut self, query: &str) -> RequestTicket {
        self.generation += 1;
        self.query = query.trim().to_string();
        self.page = 1;
        self.images.clear();
        self.total_pages = 0;
        self.total_results = 0;
        self.cursor = 0;
        self.loading = true;
        self.error = None;
        self.selected_image = None;

        let ticket = RequestTicket::new(FetchKind::Search, self.generation, 1, self.query.clone());
        self.pending = Some(ticket.clone());

        tracing::debug!(query = %self.query, generation = self.generation, "search started");
        ticket
    }

    /// Starts loading the next page, if the load-more control is visible.
    ///
    /// Increments the page and marks loading. Returns `None` without touching
    /// state when load more is not currently allowed.
    pub fn begin_load_more(&mut self) -> Option<RequestTicket> {
        if !self.can_load_more() {
            tracing::debug!(
                page = self.page,
                total_pages = self.total_pages,
                loading = self.loading,
                "load more ignored"
            );
            return None;
        }

        self.page += 1;
        self.loading = true;

        let ticket = RequestTicket::new(
            FetchKind::LoadMore,
            self.generation,
            self.page,
            self.query.clone(),
        );
        self.pending = Some(ticket.clone());

        tracing::debug!(page = self.page, generation = self.generation, "load more started");
        Some(ticket)
    }

    /// Whether `ticket` is the request the state is waiting for.
    #[must_use]
    pub fn is_pending(&self, ticket: &RequestTicket) -> bool {
        self.pending.as_ref().is_some_and(|pending| {
            pending.generation == ticket.generation
                && pending.kind == ticket.kind
                && pending.page == ticket.page
                && pending.query == ticket.query
        })
    }

    /// Applies a successful page. Returns `false` if the ticket is stale.
    pub fn apply_page(&mut self, ticket: &RequestTicket, page: SearchPage) -> bool {
        if !self.is_pending(ticket) {
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding stale page"
            );
            return false;
        }

        self.pending = None;
        self.loading = false;

        match ticket.kind {
            FetchKind::Search => {
                self.images = page.images;
                self.total_pages = page.total_pages;
                self.total_results = page.total;
            }
            FetchKind::LoadMore => {
                self.images.extend(page.images);
            }
        }

        if !self.images.is_empty() {
            self.reveal_last();
        }

        tracing::debug!(
            image_count = self.images.len(),
            page = self.page,
            total_pages = self.total_pages,
            "page applied"
        );
        true
    }

    /// Records a failed fetch. Returns `false` if the ticket is stale.
    ///
    /// A failed load more rolls the page back so the next attempt requests
    /// the same page again.
    pub fn apply_failure(&mut self, ticket: &RequestTicket, message: &str) -> bool {
        if !self.is_pending(ticket) {
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                "discarding stale failure"
            );
            return false;
        }

        self.pending = None;
        self.loading = false;
        self.error = Some(message.to_string());

        if ticket.kind == FetchKind::LoadMore {
            self.page = ticket.page.saturating_sub(1).max(1);
        }

        self.toasts.push(ToastLevel::Error, message, Toasts::now_ms());
        true
    }

    /// Advances the loader animation by one frame.
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Whether anything on screen still needs timer ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.loading || !self.toasts.is_empty()
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting chrome and status lines
    /// 2. Center window around the cursor
    /// 3. Shift the window back if it runs past the end, so the last item
    ///    sits on the bottom row when the cursor is on it
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let status = self.compute_status();
        let available_rows = Self::calculate_available_rows(rows, status.line_count());
        let columns = GalleryColumns::for_width(cols);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.images.len());

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && self.images.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }
        visible_start = visible_start.min(visible_end);

        let matcher = if self.query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let gallery = self.images[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, image)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_gallery_item(image, absolute_idx, &columns, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            gallery,
            columns,
            status,
            empty_state: self.compute_empty_state(),
            modal: self.compute_modal(),
            toasts: self
                .toasts
                .iter()
                .rev()
                .map(|t| ToastInfo {
                    message: t.message.clone(),
                    is_error: t.level == ToastLevel::Error,
                })
                .collect(),
            footer: self.compute_footer(),
        }
    }

    fn compute_gallery_item(
        &self,
        image: &ImageRecord,
        absolute_idx: usize,
        columns: &GalleryColumns,
        matcher: Option<&SkimMatcherV2>,
    ) -> GalleryItem {
        let title = truncate(image.title(), columns.title_width);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            let limit = title.chars().count();
            self.compute_highlight_ranges(&title, m)
                .into_iter()
                .filter(|&(start, _)| start < limit)
                .map(|(start, end)| (start, end.min(limit)))
                .collect()
        });

        GalleryItem {
            position: absolute_idx + 1,
            title,
            author: truncate(image.author.as_deref().unwrap_or(""), columns.author_width),
            size: image.dimensions(),
            likes: if image.likes == 0 {
                String::new()
            } else {
                format!("♥ {}", image.likes)
            },
            is_selected: absolute_idx == self.cursor,
            highlight_ranges,
        }
    }

    /// Coalesces fuzzy match indices into contiguous `(start, end)` ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.query) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.query.is_empty() {
            " Zallery ".to_string()
        } else if self.total_results > 0 {
            format!(
                " “{}” · {} of {} images ",
                self.query,
                self.images.len(),
                self.total_results
            )
        } else {
            format!(" “{}” ", self.query)
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        match self.input_mode {
            InputMode::Search => SearchBarInfo {
                text: self.draft.clone(),
                is_editing: true,
            },
            InputMode::Browse => SearchBarInfo {
                text: self.query.clone(),
                is_editing: false,
            },
        }
    }

    fn compute_status(&self) -> StatusInfo {
        StatusInfo {
            loader: self.loading.then(|| LoaderInfo {
                frame: SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()].to_string(),
                label: if self.page > 1 {
                    format!("Loading page {}…", self.page)
                } else {
                    "Loading images…".to_string()
                },
            }),
            error: self.error.clone(),
            load_more: self.can_load_more().then(|| LoadMoreInfo {
                next_page: self.page + 1,
                total_pages: self.total_pages,
            }),
            end_of_results: self.reached_end().then(|| END_OF_RESULTS.to_string()),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.images.is_empty() || self.loading || self.error.is_some() {
            return None;
        }

        if self.query.is_empty() {
            Some(EmptyState {
                message: "Search for images".to_string(),
                subtitle: "Press / to type a query and Enter to search".to_string(),
            })
        } else {
            Some(EmptyState {
                message: format!("No images found for “{}”", self.query),
                subtitle: "Try a different search term".to_string(),
            })
        }
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        self.selected_image.as_ref().map(|image| {
            let mut fields = vec![("By".to_string(), image.credit())];
            if let Some(description) = image.description.as_deref().filter(|d| !d.trim().is_empty()) {
                fields.push(("Caption".to_string(), description.trim().to_string()));
            }
            let dimensions = image.dimensions();
            if !dimensions.is_empty() {
                fields.push(("Size".to_string(), dimensions));
            }
            fields.push(("Likes".to_string(), image.likes.to_string()));
            if let Some(color) = &image.color {
                fields.push(("Color".to_string(), color.clone()));
            }
            fields.push(("Full size".to_string(), image.full_url.clone()));
            fields.push(("Thumbnail".to_string(), image.thumb_url.clone()));

            ModalInfo {
                title: image.title().to_string(),
                fields,
                swatch: image.color.clone(),
            }
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_modal_open() {
            "Esc/Enter/q: close".to_string()
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: search  Esc: cancel  Type to edit query".to_string(),
                InputMode::Browse if self.can_load_more() => {
                    "j/k: navigate  Enter: open  /: search  m: load more  q: quit".to_string()
                }
                InputMode::Browse => "j/k: navigate  Enter: open  /: search  q: quit".to_string(),
            }
        };
        FooterInfo { keybindings }
    }

    /// Rows left for gallery entries once chrome and status lines are placed.
    const fn calculate_available_rows(total_rows: usize, status_lines: usize) -> usize {
        total_rows.saturating_sub(CHROME_TOP + CHROME_BOTTOM + status_lines)
    }
}

/// Truncates `text` to at most `max` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            ImageApi::new("https://api.example.com", Some("KEY".into()), 2),
            Theme::default(),
            4_000,
        )
    }

    fn images(prefix: &str, n: usize) -> Vec<ImageRecord> {
        (0..n)
            .map(|i| ImageRecord::new(format!("{prefix}{i}"), format!("{prefix} {i}"), "t", "f"))
            .collect()
    }

    fn page(prefix: &str, n: usize, total_pages: u32) -> SearchPage {
        SearchPage {
            images: images(prefix, n),
            total_pages,
            total: u64::from(total_pages) * 2,
        }
    }

    #[test]
    fn begin_search_resets_everything() {
        let mut state = state();
        state.page = 3;
        state.images = images("old", 4);
        state.error = Some("boom".into());
        state.cursor = 3;

        let ticket = state.begin_search("  cats ");

        assert_eq!(state.query, "cats");
        assert_eq!(state.page, 1);
        assert!(state.images.is_empty());
        assert!(state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.cursor, 0);
        assert_eq!(ticket.page, 1);
        assert_eq!(ticket.kind, FetchKind::Search);
        assert_eq!(ticket.generation, state.generation);
    }

    #[test]
    fn ticket_for_another_query_is_not_pending() {
        let mut state = state();
        let ticket = state.begin_search("cats");
        let mut other = ticket.clone();
        other.query = "dogs".into();

        assert!(state.is_pending(&ticket));
        assert!(!state.is_pending(&other));
        assert!(!state.apply_page(&other, page("dog", 2, 1)));
        assert!(state.images.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn newest_toast_is_listed_first() {
        let mut state = state();
        state.toasts.push(ToastLevel::Info, "first", 0);
        state.toasts.push(ToastLevel::Error, "second", 0);

        let vm = state.compute_viewmodel(24, 80);
        let messages: Vec<_> = vm.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
        assert!(vm.toasts[0].is_error);
    }

    #[test]
    fn load_more_requires_visible_control() {
        let mut state = state();
        assert!(state.begin_load_more().is_none(), "empty list");

        let ticket = state.begin_search("cats");
        state.apply_page(&ticket, page("cat", 2, 1));
        assert!(state.begin_load_more().is_none(), "already on last page");

        state.total_pages = 3;
        state.loading = true;
        assert!(state.begin_load_more().is_none(), "loading");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn stale_page_is_discarded() {
        let mut state = state();
        let old = state.begin_search("dogs");
        let current = state.begin_search("cats");

        assert!(!state.apply_page(&old, page("dog", 2, 5)));
        assert!(state.images.is_empty());
        assert!(state.loading, "still waiting for the current search");

        assert!(state.apply_page(&current, page("cat", 2, 5)));
        assert_eq!(state.images[0].id, "cat0");
        assert!(!state.loading);
    }

    #[test]
    fn duplicate_delivery_is_ignored() {
        let mut state = state();
        let ticket = state.begin_search("cats");
        assert!(state.apply_page(&ticket, page("cat", 2, 3)));
        assert!(!state.apply_page(&ticket, page("cat", 2, 3)));
        assert_eq!(state.images.len(), 2);
    }

    #[test]
    fn failed_load_more_rolls_page_back() {
        let mut state = state();
        let ticket = state.begin_search("cats");
        state.apply_page(&ticket, page("cat", 2, 3));

        let more = state.begin_load_more().unwrap();
        assert_eq!(state.page, 2);
        assert!(state.apply_failure(&more, "Request failed with status 500"));

        assert_eq!(state.page, 1);
        assert_eq!(state.images.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Request failed with status 500"));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.begin_load_more().map(|t| t.page), Some(2));
    }

    #[test]
    fn applying_a_page_reveals_the_last_item() {
        let mut state = state();
        let ticket = state.begin_search("cats");
        state.apply_page(&ticket, page("cat", 2, 3));
        assert_eq!(state.cursor, 1);

        let more = state.begin_load_more().unwrap();
        state.apply_page(&more, page("kit", 2, 3));
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn cursor_wraps() {
        let mut state = state();
        state.images = images("cat", 3);
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn window_keeps_last_item_on_bottom_row() {
        let mut state = state();
        state.query = "cat".into();
        state.images = images("cat", 40);
        state.total_pages = 20;
        state.page = 20;
        state.reveal_last();

        // 24 rows: 9 chrome + 1 status line (end of results) leaves 14.
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.gallery.len(), 14);
        assert_eq!(vm.gallery.last().map(|i| i.position), Some(40));
        assert!(vm.gallery.last().is_some_and(|i| i.is_selected));
        assert_eq!(vm.gallery.iter().filter(|i| i.is_selected).count(), 1);
    }

    #[test]
    fn tiny_terminal_shows_no_rows() {
        let mut state = state();
        state.images = images("cat", 5);
        let vm = state.compute_viewmodel(5, 80);
        assert!(vm.gallery.is_empty());
    }

    #[test]
    fn empty_state_before_first_search_and_after_no_results() {
        let mut state = state();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.map(|e| e.message).as_deref(), Some("Search for images"));

        let ticket = state.begin_search("zzzz");
        assert!(state.compute_viewmodel(24, 80).empty_state.is_none(), "loading");

        state.apply_page(&ticket, SearchPage::default());
        assert!(state.has_no_results());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.message).as_deref(),
            Some("No images found for “zzzz”")
        );
    }

    #[test]
    fn highlight_ranges_are_coalesced() {
        let mut state = state();
        state.query = "cat".into();
        let ranges = state.compute_highlight_ranges("a cat nap", &SkimMatcherV2::default());
        assert_eq!(ranges, vec![(2, 5)]);
    }

    #[test]
    fn modal_lists_full_size_url() {
        let mut state = state();
        let mut image = ImageRecord::new("a", "grey cat", "https://t/a", "https://f/a");
        image.color = Some("#112233".into());
        state.selected_image = Some(image);

        let modal = state.compute_viewmodel(24, 80).modal.unwrap();
        assert_eq!(modal.title, "grey cat");
        assert!(modal
            .fields
            .iter()
            .any(|(label, value)| label == "Full size" && value == "https://f/a"));
        assert_eq!(modal.swatch.as_deref(), Some("#112233"));
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
