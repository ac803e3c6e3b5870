//! Typed glyph lookup.
//!
//! Every glyph the renderer draws is a [`Glyph`] variant, and each [`GlyphSet`]
//! maps variants to strings in a `const` table. A set that has no asset for a
//! glyph resolves to its [`Glyph::Alert`] asset instead, so looking up a glyph
//! cannot fail at render time.

use std::str::FromStr;

/// A glyph drawn somewhere in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Like,
    Bookmarked,
    NotBookmarked,
    Search,
    Category,
    Author,
    Calendar,
    Clock,
    Trending,
    Article,
    Mail,
    Loading,
    Success,
    Error,
    Info,
    Back,
    Pointer,
    /// Fallback for any glyph a set does not provide.
    Alert,
}

impl Glyph {
    /// Every glyph, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Like,
        Self::Bookmarked,
        Self::NotBookmarked,
        Self::Search,
        Self::Category,
        Self::Author,
        Self::Calendar,
        Self::Clock,
        Self::Trending,
        Self::Article,
        Self::Mail,
        Self::Loading,
        Self::Success,
        Self::Error,
        Self::Info,
        Self::Back,
        Self::Pointer,
        Self::Alert,
    ];
}

/// A family of glyph assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphSet {
    #[default]
    Unicode,
    /// Plain ASCII for terminals without good Unicode coverage.
    Ascii,
}

impl GlyphSet {
    /// The asset this set defines for `glyph`, if any.
    #[must_use]
    pub const fn asset(self, glyph: Glyph) -> Option<&'static str> {
        match self {
            Self::Unicode => Some(match glyph {
                Glyph::Like => "♥",
                Glyph::Bookmarked => "★",
                Glyph::NotBookmarked => "☆",
                Glyph::Search => "⌕",
                Glyph::Category => "▣",
                Glyph::Author => "✎",
                Glyph::Calendar => "◷",
                Glyph::Clock => "⏱",
                Glyph::Trending => "↗",
                Glyph::Article => "☰",
                Glyph::Mail => "✉",
                Glyph::Loading => "…",
                Glyph::Success => "✔",
                Glyph::Error => "✘",
                Glyph::Info => "ℹ",
                Glyph::Back => "←",
                Glyph::Pointer => "›",
                Glyph::Alert => "⚠",
            }),
            Self::Ascii => match glyph {
                Glyph::Like => Some("<3"),
                Glyph::Bookmarked => Some("[*]"),
                Glyph::NotBookmarked => Some("[ ]"),
                Glyph::Search => Some("?"),
                Glyph::Category => Some("#"),
                Glyph::Author => Some("@"),
                Glyph::Calendar => Some("d:"),
                Glyph::Clock => Some("t:"),
                Glyph::Article => Some("="),
                Glyph::Mail => Some("m:"),
                Glyph::Loading => Some("..."),
                Glyph::Success => Some("+"),
                Glyph::Error => Some("x"),
                Glyph::Info => Some("i"),
                Glyph::Back => Some("<-"),
                Glyph::Pointer => Some(">"),
                Glyph::Alert => Some("!"),
                Glyph::Trending => None,
            },
        }
    }

    /// Resolves `glyph`, falling back to this set's alert glyph.
    ///
    /// ```
    /// use inkpane::ui::icons::{Glyph, GlyphSet};
    ///
    /// assert_eq!(GlyphSet::Ascii.resolve(Glyph::Like), "<3");
    /// assert_eq!(GlyphSet::Ascii.resolve(Glyph::Trending), "!");
    /// ```
    #[must_use]
    pub const fn resolve(self, glyph: Glyph) -> &'static str {
        match self.asset(glyph) {
            Some(asset) => asset,
            None => match self.asset(Glyph::Alert) {
                Some(alert) => alert,
                None => "!",
            },
        }
    }
}

impl FromStr for GlyphSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!("unknown glyph set: {other}")),
        }
    }
}
