//! Placeholder state renderers.
//!
//! Loading, fetch error, no results and not found all render as a centered
//! message in the body area.

use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn centered(out: &mut String, row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = width(&text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(out, row, 1);
    pad(out, padding);
    out.push_str(&text);
    pad(out, cols.saturating_sub(padding + len));
}

/// Renders a two-line message centered in the body area.
///
/// The message uses `color`; the subtitle uses `text_dim` with dim styling.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    height: usize,
    empty: &EmptyState,
    color: &str,
    theme: &Theme,
    cols: usize,
) {
    if height == 0 {
        return;
    }
    let top = row + height.saturating_sub(2) / 2;

    out.push_str(&Theme::fg(color));
    centered(out, top, &empty.message, cols);
    out.push_str(Theme::reset());

    if height > 1 {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        centered(out, top + 1, &empty.subtitle, cols);
        out.push_str(Theme::reset());
    }
}

/// Renders a single dimmed loading line in the middle of the body area.
pub fn render_loading(out: &mut String, row: usize, height: usize, message: &str, theme: &Theme, cols: usize) {
    if height == 0 {
        return;
    }
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, row + height / 2, message, cols);
    out.push_str(Theme::reset());
}
