//! Composable UI component renderers.
//!
//! Each component appends ANSI-styled text for one part of the interface to
//! the frame buffer, starting at a given row, and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar, category tabs, stats strip
//! - [`search`]: Search input box
//! - [`list`]: Article list
//! - [`detail`]: Article page
//! - [`empty`]: Loading, error and empty placeholders
//! - [`toasts`]: Notification toasts and the newsletter bar
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Category tabs]
//! [Stats]            (list page without a query)
//! [Border]
//! [Search Bar - 3 lines]
//! [Body]             (fills the remaining space)
//! [Toasts]           (one line each)
//! [Newsletter]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod search;
mod toasts;

use crate::ui::helpers::position_cursor;
use crate::ui::icons::GlyphSet;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Rows below the body: newsletter, border, footer.
const BOTTOM_CHROME: usize = 3;

/// Appends a horizontal border at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Lays out the whole pane for `vm`.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, glyphs: GlyphSet, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = header::render_header(out, current_row, &vm.header, theme, cols);
    current_row = header::render_category_tabs(out, current_row, &vm.categories, theme, cols);
    if let Some(stats) = &vm.stats {
        current_row = header::render_stats(out, current_row, stats, theme, glyphs, cols);
    }
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = search::render_search_bar(out, current_row, &vm.search_bar, theme, glyphs, cols);

    let footer_row = rows.max(current_row + BOTTOM_CHROME);
    let newsletter_row = footer_row - 2;
    let toast_count = vm.toasts.len().min(newsletter_row.saturating_sub(current_row));
    let toast_row = newsletter_row - toast_count;
    let body_height = toast_row.saturating_sub(current_row);

    match &vm.body {
        Body::Loading(message) => empty::render_loading(out, current_row, body_height, message, theme, cols),
        Body::Error(state) => {
            empty::render_empty_state(out, current_row, body_height, state, &theme.colors.error_fg, theme, cols);
        }
        Body::Empty(state) => {
            empty::render_empty_state(out, current_row, body_height, state, &theme.colors.empty_state_fg, theme, cols);
        }
        Body::List(list) => list::render_list(out, current_row, body_height, list, theme, glyphs, cols),
        Body::Detail(detail) => detail::render_detail(out, current_row, body_height, detail, theme, glyphs, cols),
    }

    let newest = &vm.toasts[vm.toasts.len() - toast_count..];
    toasts::render_toasts(out, toast_row, newest, theme, glyphs, cols);
    toasts::render_newsletter(out, newsletter_row, &vm.newsletter, theme, glyphs, cols);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    footer::render_footer(out, footer_row, &vm.footer, theme, cols);
}
