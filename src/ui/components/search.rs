//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame. While the
//! bar has focus it shows the draft with a block cursor; otherwise it shows
//! the submitted query, or a placeholder before the first search.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Placeholder shown in an empty, unfocused search bar.
const PLACEHOLDER: &str = "Search images and photos";

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: cats▏     │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_editing {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    if search.is_editing {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(&format!(" Search: {}▏", search.text), inner_width);
    } else if search.text.is_empty() {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_padded(&format!(" {PLACEHOLDER}"), inner_width);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print_padded(&format!(" Search: {}", search.text), inner_width);
    }
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
