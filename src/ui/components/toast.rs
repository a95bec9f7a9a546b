//! Toast stack renderer.
//!
//! Toasts are drawn last, right-aligned from the top row down, newest on
//! top.

use crate::app::state::truncate;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Renders `toasts` in the top-right corner of a pane `cols` wide.
pub fn render_toasts(toasts: &[ToastInfo], theme: &Theme, cols: usize) {
    let max_len = (cols / 2).max(16).min(cols.saturating_sub(2));

    for (i, toast) in toasts.iter().enumerate() {
        let (icon, color) = if toast.is_error {
            ("✖", &theme.colors.error_fg)
        } else {
            ("●", &theme.colors.accent_fg)
        };
        let text = truncate(&format!(" {icon} {} ", toast.message), max_len);
        let left = cols.saturating_sub(text.chars().count()) + 1;

        position_cursor(i + 1, left);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(color));
        print!("{text}");
        print!("{}", Theme::reset());
    }
}
