//! Status block renderer.
//!
//! Draws the lines that follow the gallery, in a fixed order: the loader,
//! the inline error, the load-more control and the end-of-results line. Each
//! line is present only when the view model carries it.

use crate::ui::helpers::{centered_padding, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Prefix of the inline error line.
const ERROR_PREFIX: &str = "Whoops, something went wrong:";

/// Renders the status block starting at `row`.
///
/// # Returns
///
/// The next available row position (row + `status.line_count()`)
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    if let Some(loader) = &status.loader {
        let text = format!("{} {}", loader.frame, loader.label);
        current_row = render_centered(current_row, &text, &theme.colors.accent_fg, false, cols);
    }

    if let Some(error) = &status.error {
        position_cursor(current_row, 1);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print_padded(&format!(" {ERROR_PREFIX} {error}"), cols);
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(more) = &status.load_more {
        let text = format!("[ Load more (m) · page {} of {} ]", more.next_page, more.total_pages);
        current_row = render_centered(current_row, &text, &theme.colors.accent_fg, true, cols);
    }

    if let Some(end) = &status.end_of_results {
        current_row = render_centered(current_row, end, &theme.colors.text_dim, false, cols);
    }

    current_row
}

fn render_centered(row: usize, text: &str, color: &str, bold: bool, cols: usize) -> usize {
    let padding = centered_padding(text.chars().count(), cols);

    position_cursor(row, 1);
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print_padded(text, cols.saturating_sub(padding));
    print!("{}", Theme::reset());
    row + 1
}
