//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! every decision about *whether* something is shown (loader, error,
//! load-more control, end-of-results line, modal) has already been made.

/// Width of the position column, e.g. `" 12 "`.
pub const POSITION_WIDTH: usize = 5;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, result counts).
    pub header: HeaderInfo,

    /// Search bar content.
    pub search_bar: SearchBarInfo,

    /// Visible window of gallery entries.
    pub gallery: Vec<GalleryItem>,

    /// Column widths for the gallery at the current terminal width.
    pub columns: GalleryColumns,

    /// Loader, error, load-more and end-of-results lines.
    pub status: StatusInfo,

    /// Centered message shown instead of the gallery, if any.
    pub empty_state: Option<EmptyState>,

    /// Image detail overlay, if open.
    pub modal: Option<ModalInfo>,

    /// Visible toasts, newest first.
    pub toasts: Vec<ToastInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// One gallery row.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    /// 1-based position in the full result list.
    pub position: usize,

    /// Image title, already truncated to the title column.
    pub title: String,

    /// Photographer name, already truncated to the author column.
    pub author: String,

    /// Pixel dimensions, e.g. `"4000×3000"`.
    pub size: String,

    /// Like counter, e.g. `"♥ 12"`.
    pub likes: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Character ranges of `title` matching the query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Responsive column layout of the gallery.
///
/// Narrow panes drop the size and likes columns first, then the author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryColumns {
    pub title_width: usize,
    pub author_width: usize,
    pub size_width: usize,
    pub likes_width: usize,
}

impl GalleryColumns {
    /// Picks column widths for a pane `cols` characters wide.
    #[must_use]
    pub fn for_width(cols: usize) -> Self {
        let (author_width, size_width, likes_width) = if cols >= 100 {
            (24, 11, 8)
        } else if cols >= 64 {
            (20, 0, 0)
        } else {
            (0, 0, 0)
        };

        let gaps = [author_width, size_width, likes_width]
            .iter()
            .filter(|w| **w > 0)
            .count();
        let fixed = POSITION_WIDTH + author_width + size_width + likes_width + gaps;

        Self {
            title_width: cols.saturating_sub(fixed).max(8),
            author_width,
            size_width,
            likes_width,
        }
    }
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Draft while editing, otherwise the submitted query.
    pub text: String,

    /// Whether the search bar has input focus.
    pub is_editing: bool,
}

/// Status lines rendered between the gallery and the footer, in this order.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub loader: Option<LoaderInfo>,
    pub error: Option<String>,
    pub load_more: Option<LoadMoreInfo>,
    pub end_of_results: Option<String>,
}

impl StatusInfo {
    /// Number of lines the status block occupies.
    #[must_use]
    pub fn line_count(&self) -> usize {
        usize::from(self.loader.is_some())
            + usize::from(self.error.is_some())
            + usize::from(self.load_more.is_some())
            + usize::from(self.end_of_results.is_some())
    }
}

/// Loader line content.
#[derive(Debug, Clone)]
pub struct LoaderInfo {
    /// Current spinner frame.
    pub frame: String,
    pub label: String,
}

/// Load-more control content.
#[derive(Debug, Clone)]
pub struct LoadMoreInfo {
    pub next_page: u32,
    pub total_pages: u32,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Image detail overlay content.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub title: String,

    /// `(label, value)` rows.
    pub fields: Vec<(String, String)>,

    /// Dominant colour rendered as a swatch next to the title.
    pub swatch: Option<String>,
}

/// Toast display information.
#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub message: String,
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_panes_show_every_column() {
        let columns = GalleryColumns::for_width(120);
        assert_eq!(columns.author_width, 24);
        assert_eq!(columns.size_width, 11);
        assert_eq!(columns.title_width, 120 - (5 + 24 + 11 + 8 + 3));
    }

    #[test]
    fn narrow_panes_keep_only_the_title() {
        let columns = GalleryColumns::for_width(40);
        assert_eq!(columns.author_width, 0);
        assert_eq!(columns.title_width, 35);
    }

    #[test]
    fn status_line_count() {
        let status = StatusInfo {
            error: Some("boom".into()),
            end_of_results: Some("end".into()),
            ..StatusInfo::default()
        };
        assert_eq!(status.line_count(), 2);
    }
}
