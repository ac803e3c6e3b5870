//! Article page renderer.

use crate::ui::helpers::{pad, position_cursor, truncate};
use crate::ui::icons::{Glyph, GlyphSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ArticleLine, DetailInfo};

/// Renders the article into `height` rows starting at `row`.
///
/// Title and meta stay pinned; the body scrolls from `detail.scroll`; related
/// posts take the last lines when there is room.
pub fn render_detail(
    out: &mut String,
    row: usize,
    height: usize,
    detail: &DetailInfo,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) {
    if height < 3 {
        return;
    }
    let mut current_row = row;

    position_cursor(out, current_row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!(" {} back", glyphs.resolve(Glyph::Back)));
    out.push_str(Theme::reset());
    current_row += 1;

    position_cursor(out, current_row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!("  {}", truncate(&detail.title, cols.saturating_sub(3))));
    out.push_str(Theme::reset());
    current_row += 1;

    let bookmark = if detail.bookmarked {
        glyphs.resolve(Glyph::Bookmarked)
    } else {
        glyphs.resolve(Glyph::NotBookmarked)
    };
    let likes = if detail.liking {
        format!("{} {} {}", glyphs.resolve(Glyph::Like), detail.likes, glyphs.resolve(Glyph::Loading))
    } else {
        format!("{} {}", glyphs.resolve(Glyph::Like), detail.likes)
    };

    position_cursor(out, current_row, 1);
    pad(out, 2);
    out.push_str(&Theme::fg(&detail.category_color));
    out.push_str(&format!("{} {}", glyphs.resolve(Glyph::Category), detail.category));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("  {}  ", detail.meta));
    out.push_str(&Theme::fg(&theme.colors.likes_fg));
    out.push_str(&likes);
    out.push_str(&Theme::fg(&theme.colors.bookmark_fg));
    out.push_str(&format!("  {bookmark}"));
    out.push_str(Theme::reset());
    current_row += 1;

    let end = row + height;
    let related_rows = if detail.related.is_empty() { 0 } else { detail.related.len() + 2 };
    let body_end = if end.saturating_sub(current_row) > related_rows + 3 {
        end - related_rows
    } else {
        end
    };

    current_row += 1;
    for line in detail.lines.iter().skip(detail.scroll) {
        if current_row >= body_end {
            break;
        }
        position_cursor(out, current_row, 1);
        pad(out, 2);
        match line {
            ArticleLine::Heading(text) => {
                out.push_str(Theme::bold());
                out.push_str(&Theme::fg(&theme.colors.header_fg));
                out.push_str(text);
                out.push_str(Theme::reset());
            }
            ArticleLine::Text(text) => {
                out.push_str(&Theme::fg(&theme.colors.text_normal));
                out.push_str(text);
                out.push_str(Theme::reset());
            }
            ArticleLine::Blank => {}
        }
        current_row += 1;
    }

    if body_end < end {
        let mut related_row = body_end + 1;
        position_cursor(out, related_row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("  Related articles");
        out.push_str(Theme::reset());
        related_row += 1;

        for (i, title) in detail.related.iter().enumerate() {
            position_cursor(out, related_row, 1);
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&format!("  {} {}", i + 1, truncate(title, cols.saturating_sub(6))));
            out.push_str(Theme::reset());
            related_row += 1;
        }
    }
}
