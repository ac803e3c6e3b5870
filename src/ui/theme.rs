//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents, either built in (Catppuccin Mocha and Latte, the
//! dark and light variants) or loaded from a user file. Colors are hex strings
//! turned into 24-bit ANSI escapes at render time.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! likes_fg = "#f38ba8"
//! bookmark_fg = "#f9e2af"
//! success_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! info_fg = "#89dceb"
//!
//! [colors.categories]
//! blue = "#89b4fa"
//! ```

use crate::domain::error::{InkpaneError, Result};
use crate::domain::NotificationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the built-in dark theme.
pub const DARK: &str = "catppuccin-mocha";

/// Name of the built-in light theme.
pub const LIGHT: &str = "catppuccin-latte";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Theme identifier, e.g. `catppuccin-mocha`.
    pub name: String,

    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title foreground.
    pub header_fg: String,

    /// Optional header background; transparent if `None`.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Foreground of the selected list row.
    pub selection_fg: String,

    /// Background of the selected list row.
    pub selection_bg: String,

    /// Primary text color.
    pub text_normal: String,

    /// Secondary text: meta lines, hints, subtitles.
    pub text_dim: String,

    /// Horizontal separators.
    pub border: String,

    /// Search box outline.
    pub search_bar_border: String,

    /// Query match highlight in titles.
    pub match_highlight_fg: String,

    /// Background behind highlighted matches.
    pub match_highlight_bg: String,

    /// Placeholder messages (no results, not found).
    pub empty_state_fg: String,

    /// Like counter.
    pub likes_fg: String,

    /// Bookmark marker.
    pub bookmark_fg: String,

    /// Success toasts and flashes.
    pub success_fg: String,

    /// Error toasts, flashes and fetch errors.
    pub error_fg: String,

    /// Informational toasts.
    pub info_fg: String,

    /// Category color tag (`blue`, `purple`, ...) to hex.
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// ```rust
    /// use inkpane::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            DARK => include_str!("../../themes/catppuccin-mocha.toml"),
            LIGHT => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`InkpaneError::Io`] if the file cannot be read and
    /// [`InkpaneError::Theme`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`InkpaneError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| InkpaneError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// The built-in theme of the opposite brightness.
    ///
    /// Custom themes toggle to the light built-in.
    #[must_use]
    pub fn toggled(&self) -> Self {
        let target = if self.name == LIGHT { DARK } else { LIGHT };
        Self::from_name(target).unwrap_or_default()
    }

    /// Hex color for a category color tag, falling back to normal text.
    #[must_use]
    pub fn category_color(&self, tag: &str) -> &str {
        self.colors
            .categories
            .get(tag)
            .map_or(self.colors.text_normal.as_str(), String::as_str)
    }

    /// Hex color for a notification kind.
    #[must_use]
    pub fn notification_color(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::Success => &self.colors.success_fg,
            NotificationKind::Error => &self.colors.error_fg,
            NotificationKind::Info => &self.colors.info_fg,
        }
    }

    /// Converts a hex color to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the theme tests rule out.
    fn default() -> Self {
        Self::from_name(DARK).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        for name in [DARK, LIGHT] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.colors.categories.len(), 4, "{name}");
        }
    }

    #[test]
    fn toggling_flips_brightness() {
        let dark = Theme::default();
        let light = dark.toggled();
        assert_eq!(light.name, LIGHT);
        assert_eq!(light.toggled().name, DARK);
    }

    #[test]
    fn unknown_category_tag_uses_text_color() {
        let theme = Theme::default();
        assert_eq!(theme.category_color("teal"), theme.colors.text_normal);
        assert_eq!(theme.category_color("blue"), "#89b4fa");
    }

    #[test]
    fn bad_hex_renders_white() {
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{001b}[48;2;0;0;0m");
    }

    #[test]
    fn theme_file_errors_are_typed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, InkpaneError::Theme(_)));

        let missing = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(missing, InkpaneError::Io(_)));
    }
}
