//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning, padded
//! line output, and query-match highlighting that is aware of selection.
//! All widths are measured in characters, not bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` and pads with spaces up to `width` characters.
///
/// Text longer than `width` is cut at `width` characters.
pub fn print_padded(text: &str, width: usize) {
    let len = text.chars().count();
    if len > width {
        let cut: String = text.chars().take(width).collect();
        print!("{cut}");
    } else {
        print!("{text}{}", " ".repeat(width - len));
    }
}

/// Left padding that centers `len` characters within `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Renders text with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices with exclusive end. When the
/// row is selected, highlighting is skipped so it does not fight with the
/// selection background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
