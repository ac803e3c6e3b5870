//! Notification toasts and the newsletter bar.

use crate::domain::NotificationKind;
use crate::ui::helpers::{pad, position_cursor, truncate, width};
use crate::ui::icons::{Glyph, GlyphSet};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NewsletterInfo, ToastInfo};

const fn kind_glyph(kind: NotificationKind) -> Glyph {
    match kind {
        NotificationKind::Success => Glyph::Success,
        NotificationKind::Error => Glyph::Error,
        NotificationKind::Info => Glyph::Info,
    }
}

/// Renders toasts right-aligned, one per row from `row` down.
pub fn render_toasts(
    out: &mut String,
    row: usize,
    toasts: &[ToastInfo],
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for toast in toasts {
        let text = truncate(
            &format!(" {} {} ", glyphs.resolve(kind_glyph(toast.kind)), toast.message),
            cols,
        );
        position_cursor(out, current_row, 1);
        pad(out, cols.saturating_sub(width(&text)));
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(theme.notification_color(toast.kind)));
        out.push_str(&text);
        out.push_str(Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders the one-line newsletter bar.
///
/// Shows, in order of precedence: the focused email input, the in-flight
/// state, the flash message, the active subscription, or a call to action.
pub fn render_newsletter(
    out: &mut String,
    row: usize,
    newsletter: &NewsletterInfo,
    theme: &Theme,
    glyphs: GlyphSet,
    cols: usize,
) -> usize {
    let mail = glyphs.resolve(Glyph::Mail);

    let (color, text) = if newsletter.loading {
        (theme.colors.text_dim.as_str(), format!(" {mail} Subscribing... {}", glyphs.resolve(Glyph::Loading)))
    } else if newsletter.focused {
        let mut text = format!(" {mail} Email: {}_", newsletter.input);
        if let Some(flash) = &newsletter.flash {
            text.push_str(&format!("  {} {}", glyphs.resolve(kind_glyph(flash.kind)), flash.message));
        }
        (theme.colors.text_normal.as_str(), text)
    } else if let Some(flash) = &newsletter.flash {
        (
            theme.notification_color(flash.kind),
            format!(" {} {}", glyphs.resolve(kind_glyph(flash.kind)), flash.message),
        )
    } else if let Some(email) = &newsletter.subscribed {
        (theme.colors.success_fg.as_str(), format!(" {mail} Subscribed as {email}"))
    } else {
        (
            theme.colors.text_dim.as_str(),
            format!(" {mail} Stay updated: press n to subscribe to the newsletter"),
        )
    };

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&truncate(&text, cols));
    out.push_str(Theme::reset());
    row + 1
}
