//! Header component renderer.
//!
//! The title bar, the category quick-filter tabs and the optional catalog
//! stats strip at the top of the pane.

use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::icons::{Glyph, GlyphSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryTab, HeaderInfo, StatsInfo};

/// Renders the title bar at `row`: title on the left, result summary on the
/// right. Returns the next free row.
///
/// The line is padded to the full width so the optional header background
/// covers it.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let subtitle = truncate(&header.subtitle, cols.saturating_sub(width(&title) + 2));
    let gap = cols.saturating_sub(width(&title) + width(&subtitle) + 1);

    position_cursor(out, row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&title);
    out.push_str(Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    pad(out, gap);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&subtitle);
    out.push(' ');
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the category tabs, `0` standing for all categories.
pub fn render_category_tabs(out: &mut String, row: usize, tabs: &[CategoryTab], theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let none_active = tabs.iter().all(|t| !t.active);
    let mut used = 0;

    let mut push_tab = |out: &mut String, label: String, color: &str, active: bool| {
        let len = width(&label) + 1;
        if used + len > cols {
            return;
        }
        out.push(' ');
        if active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(color));
        } else {
            out.push_str(&Theme::fg(color));
        }
        out.push_str(&label);
        out.push_str(Theme::reset());
        used += len;
    };

    push_tab(out, " 0 All ".to_string(), &theme.colors.header_fg, none_active);
    for tab in tabs {
        push_tab(out, format!(" {} {} ", tab.shortcut, tab.name), &tab.color, tab.active);
    }
    row + 1
}

/// Renders the stats strip with trending topics.
pub fn render_stats(
    out: &mut String,
    row: usize,
    stats: &StatsInfo,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) -> usize {
    let mut line = format!(
        " {} articles · {} authors · {} categories",
        stats.posts, stats.authors, stats.categories
    );
    if !stats.trending.is_empty() {
        let topics: Vec<String> = stats
            .trending
            .iter()
            .map(|(name, count)| format!("{name} ({count})"))
            .collect();
        line.push_str(&format!("  {} {}", glyphs.resolve(Glyph::Trending), topics.join(", ")));
    }

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&truncate(&line, cols));
    out.push_str(Theme::reset());
    row + 1
}
