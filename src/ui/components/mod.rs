//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with the query and result counts
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query or draft text)
//! - [`gallery`]: Result list with columns (#, TITLE, AUTHOR, SIZE, LIKES)
//! - [`status`]: Loader, error, load-more and end-of-results lines
//! - [`empty`]: Empty state message for no images
//! - [`modal`]: Image detail overlay
//! - [`toast`]: Transient notifications

mod empty;
mod footer;
mod gallery;
mod header;
mod modal;
mod search;
mod status;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use gallery::{render_gallery_headers, render_gallery_rows};
use header::render_header;
use modal::render_modal;
use search::render_search_bar;
use status::render_status;
use toast::render_toasts;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full gallery layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Column Headers]          or  [Empty State]
/// [Gallery Rows]
/// [Status Lines]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// The modal and the toast stack are drawn afterwards, on top of the layout.
///
/// # Line Accounting
///
/// Reserves 9 lines for chrome (blank, header, 2 borders, search bar [3 lines],
/// column headers, footer). The view model already sized the gallery window
/// to what is left after the status lines.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        current_row = render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_gallery_headers(current_row, &vm.columns, theme, cols);
        current_row = render_gallery_rows(current_row, &vm.gallery, &vm.columns, theme, cols);
    }
    let _current_row = render_status(current_row, &vm.status, theme, cols);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme, rows, cols);
    }
    render_toasts(&vm.toasts, theme, cols);
}
