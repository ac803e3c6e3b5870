//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and the live
//! input text.

use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::icons::{Glyph, GlyphSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────────┐ [margin]
/// [margin] │ ⌕ Search: input_    │ [margin]
/// [margin] └─────────────────────┘ [margin]
/// ```
///
/// The border uses `search_bar_border` while the input is focused and the
/// plain border color otherwise. A trailing `…` marks input that has not been
/// applied yet.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(
    out: &mut String,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let mut search_text = format!(" {} Search: {}", glyphs.resolve(Glyph::Search), search.input);
    if search.focused {
        search_text.push('_');
    }
    if search.pending {
        search_text.push_str(" …");
    }
    let search_text = truncate(&search_text, inner_width);
    let padding = inner_width.saturating_sub(width(&search_text));

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    if search.input.is_empty() && !search.focused {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&search_text);
    pad(out, padding);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
