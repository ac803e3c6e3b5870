//! Article list renderer.
//!
//! Each post takes two lines: the title with like count and bookmark marker,
//! then the category and meta line. The window scrolls to keep the selection
//! visible.

use crate::ui::helpers::{self, pad, position_cursor, truncate, width};
use crate::ui::icons::{Glyph, GlyphSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListInfo};

const LINES_PER_ITEM: usize = 2;

/// First item index of the window that keeps `selected` visible.
fn window_start(selected: usize, per_page: usize) -> usize {
    if per_page == 0 || selected < per_page {
        0
    } else {
        selected + 1 - per_page
    }
}

/// Renders the visible slice of the list into `height` rows starting at `row`.
pub fn render_list(
    out: &mut String,
    row: usize,
    height: usize,
    list: &ListInfo,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) {
    let per_page = height / LINES_PER_ITEM;
    let first = window_start(list.selected_index, per_page);

    let mut current_row = row;
    for item in list.items.iter().skip(first).take(per_page) {
        current_row = render_item(out, current_row, item, theme, glyphs, cols);
    }
}

fn render_item(
    out: &mut String,
    row: usize,
    item: &DisplayItem,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) -> usize {
    let row_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let pointer = if item.is_selected { glyphs.resolve(Glyph::Pointer) } else { " " };
    let bookmark = if item.bookmarked {
        glyphs.resolve(Glyph::Bookmarked)
    } else {
        glyphs.resolve(Glyph::NotBookmarked)
    };
    let badge = format!("{} {}  {} ", glyphs.resolve(Glyph::Like), item.likes, bookmark);

    let lead = format!(" {pointer} ");
    let title_room = cols.saturating_sub(width(&lead) + width(&badge) + 1);
    let title = truncate(&item.title, title_room);

    position_cursor(out, row, 1);
    out.push_str(&row_style);
    out.push_str(&lead);
    out.push_str(Theme::bold());
    helpers::push_highlighted(out, &title, &item.highlight_ranges, theme, &row_style, item.is_selected);
    out.push_str(Theme::reset());
    out.push_str(&row_style);
    pad(out, title_room.saturating_sub(width(&title)) + 1);
    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.likes_fg));
    }
    out.push_str(&badge);
    out.push_str(Theme::reset());

    let category = format!("{} {}", glyphs.resolve(Glyph::Category), item.category);
    let meta = truncate(&item.meta, cols.saturating_sub(width(&category) + 6));

    position_cursor(out, row + 1, 1);
    pad(out, 3);
    out.push_str(&Theme::fg(&item.category_color));
    out.push_str(&category);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("  ");
    out.push_str(&meta);
    out.push_str(Theme::reset());

    row + LINES_PER_ITEM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_the_selection() {
        assert_eq!(window_start(0, 3), 0);
        assert_eq!(window_start(2, 3), 0);
        assert_eq!(window_start(3, 3), 1);
        assert_eq!(window_start(5, 3), 3);
        assert_eq!(window_start(4, 0), 0);
    }
}
