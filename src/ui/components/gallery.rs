//! Gallery component renderer.
//!
//! This module renders the result list as a table with a position column, the
//! image title and, on wider panes, the author, pixel size and like counter.
//! It supports selection highlighting and query match highlighting.

use crate::ui::helpers::{self, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GalleryColumns, GalleryItem, POSITION_WIDTH};

/// Renders the gallery column headers at the specified row.
///
/// Hidden columns (width 0) get no header.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```text
///    # TITLE                         AUTHOR                   SIZE        LIKES
/// ```
pub fn render_gallery_headers(row: usize, columns: &GalleryColumns, theme: &Theme, cols: usize) -> usize {
    let mut line = format!("{:>width$} ", "#", width = POSITION_WIDTH - 1);
    line.push_str(&format!("{:<width$}", "TITLE", width = columns.title_width));
    for (label, width) in [
        ("AUTHOR", columns.author_width),
        ("SIZE", columns.size_width),
        ("LIKES", columns.likes_width),
    ] {
        if width > 0 {
            line.push_str(&format!(" {label:<width$}"));
        }
    }

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_padded(&line, cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all gallery rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_gallery_rows(
    row: usize,
    items: &[GalleryItem],
    columns: &GalleryColumns,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_gallery_row(current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders a single gallery row at the specified row position.
///
/// # Layout
///
/// ```text
/// [pos] TITLE (title_width) [AUTHOR] [SIZE] [LIKES] [padding to fill line]
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Query match highlights (unless selected)
/// 3. Normal text color, dimmed for the secondary columns
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line.
fn render_gallery_row(
    row: usize,
    item: &GalleryItem,
    columns: &GalleryColumns,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    print!("{}", Theme::fg(if item.is_selected { base_fg } else { &theme.colors.text_dim }));
    print!("{:>width$} ", item.position, width = POSITION_WIDTH - 1);
    print!("{}", Theme::fg(base_fg));

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    if !item.is_selected {
        print!("{}", Theme::fg(base_fg));
    }
    let title_len = item.title.chars().count();
    print!("{}", " ".repeat(columns.title_width.saturating_sub(title_len)));

    let mut line_len = POSITION_WIDTH + columns.title_width.max(title_len);
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    for (text, width) in [
        (&item.author, columns.author_width),
        (&item.size, columns.size_width),
        (&item.likes, columns.likes_width),
    ] {
        if width > 0 {
            print!(" ");
            print_padded(text, width);
            line_len += width + 1;
        }
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}
