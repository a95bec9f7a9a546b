//! Empty state component renderer.
//!
//! This module renders the message shown in place of the gallery before the
//! first search and when a search returns no images.

use crate::ui::helpers::{centered_padding, position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Blank lines between the top of the gallery area and the message.
const TOP_GAP: usize = 2;

/// Renders the empty state message inside the gallery area.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses the `empty_state_fg`
/// theme color, and the subtitle uses `text_dim` with dim styling.
///
/// # Returns
///
/// The row following the subtitle.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + TOP_GAP;

    let msg_padding = centered_padding(empty.message.chars().count(), cols);
    position_cursor(message_row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print_padded(&empty.message, cols.saturating_sub(msg_padding));
    print!("{}", Theme::reset());

    let sub_padding = centered_padding(empty.subtitle.chars().count(), cols);
    position_cursor(message_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print_padded(&empty.subtitle, cols.saturating_sub(sub_padding));
    print!("{}", Theme::reset());

    message_row + 2
}
