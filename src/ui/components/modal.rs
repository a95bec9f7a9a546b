//! Image detail overlay renderer.
//!
//! The modal is drawn last, over whatever the gallery rendered, as a framed
//! box centered in the pane. Long values such as image URLs wrap onto
//! continuation lines instead of being cut.

use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

/// Widest the box grows on large panes.
const MAX_WIDTH: usize = 84;

/// Continuation lines allowed per field before the value is cut.
const MAX_LINES_PER_FIELD: usize = 3;

/// Renders the modal centered in a `rows` x `cols` pane.
///
/// # Layout
///
/// ```text
/// ┌─ Title ██ ─────────────────────────┐
/// │                                    │
/// │  By         Jane Doe (@jane)       │
/// │  Full size  https://images.example │
/// │             /photo-1               │
/// │                                    │
/// │  Esc/Enter to close                │
/// └────────────────────────────────────┘
/// ```
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    if width < 20 {
        return;
    }
    let inner = width - 2;

    let label_width = modal
        .fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        + 2;
    let value_width = inner.saturating_sub(label_width + 2).max(1);

    let mut body: Vec<(String, String)> = Vec::new();
    for (label, value) in &modal.fields {
        for (i, chunk) in wrap_value(value, value_width).into_iter().enumerate() {
            let label = if i == 0 { label.clone() } else { String::new() };
            body.push((label, chunk));
        }
    }

    let height = (body.len() + 5).min(rows);
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = (cols.saturating_sub(width)) / 2 + 1;
    let frame = &theme.colors.search_bar_border;

    let title_budget = inner.saturating_sub(8);
    let title: String = modal.title.chars().take(title_budget).collect();
    let swatch_len = if modal.swatch.is_some() { 3 } else { 0 };
    let used = title.chars().count() + 3 + swatch_len;

    position_cursor(top, left);
    print!("{}┌─ ", Theme::fg(frame));
    print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), title);
    print!("{}", Theme::reset());
    if let Some(color) = &modal.swatch {
        print!(" {}██{}", Theme::fg(color), Theme::reset());
    }
    print!("{} {}┐{}", Theme::fg(frame), "─".repeat(inner.saturating_sub(used)), Theme::reset());

    let mut row = top + 1;
    let last_body_row = top + height.saturating_sub(2);

    let mut lines: Vec<Option<(String, String)>> = vec![None];
    lines.extend(body.into_iter().map(Some));
    lines.push(None);

    for line in lines {
        if row >= last_body_row {
            break;
        }
        position_cursor(row, left);
        print!("{}│{}", Theme::fg(frame), Theme::reset());
        match line {
            Some((label, value)) => {
                print!("  {}", Theme::fg(&theme.colors.text_dim));
                print_padded(&label, label_width);
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print_padded(&value, inner.saturating_sub(label_width + 2));
            }
            None => print!("{}", " ".repeat(inner)),
        }
        print!("{}│{}", Theme::fg(frame), Theme::reset());
        row += 1;
    }

    position_cursor(row, left);
    print!("{}│{}", Theme::fg(frame), Theme::reset());
    print!("  {}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print_padded("Esc/Enter to close", inner.saturating_sub(2));
    print!("{}{}│{}", Theme::reset(), Theme::fg(frame), Theme::reset());

    position_cursor(row + 1, left);
    print!("{}└{}┘{}", Theme::fg(frame), "─".repeat(inner), Theme::reset());
}

/// Splits `value` into chunks of at most `width` characters.
fn wrap_value(value: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }

    let mut chunks: Vec<String> = chars
        .chunks(width)
        .take(MAX_LINES_PER_FIELD)
        .map(|chunk| chunk.iter().collect())
        .collect();

    if chars.len() > width * MAX_LINES_PER_FIELD {
        if let Some(last) = chunks.last_mut() {
            let keep = width.saturating_sub(3);
            *last = last.chars().take(keep).collect::<String>() + "...";
        }
    }
    chunks
}
