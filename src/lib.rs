//! Inkpane: a blog reader for the Zellij terminal workspace.
//!
//! Inkpane is a terminal multiplexer plugin that provides:
//! - A searchable, category-filtered catalog of blog posts
//! - Article pages with related posts
//! - Likes, bookmarks and newsletter signup against a simulated API
//! - Transient notification toasts
//! - Dark and light themes with typed glyph sets
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Request sequencing and virtual-clock timers      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Seed data   │   │ - Simulated   │
//! │ - Theming     │   │ - Backend API │   │   blog API    │
//! │ - Glyphs      │   │ - Insights    │   │ - IPC format  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Errors, posts, filters, notifications (domain/)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a JSON lines file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/inkpane.wasm" {
//!         theme "catppuccin-latte"
//!         glyphs "ascii"
//!         search_debounce_ms "300"
//!         notification_ttl_ms "3000"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use inkpane::app::{Event, HeadlessRuntime, Settings};
//!
//! let mut runtime = HeadlessRuntime::seeded(Settings::default());
//! runtime.dispatch(Event::Start)?;
//! runtime.settle()?;
//!
//! runtime.dispatch(Event::SearchFor("design".to_string()))?;
//! assert_eq!(runtime.state().visible, vec![2, 4]);
//! # Ok::<(), inkpane::InkpaneError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, HeadlessRuntime, InputMode, Page, Settings};
pub use domain::{InkpaneError, Post, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use ui::icons::GlyphSet;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    pub glyphs: GlyphSet,

    /// Default: 300
    pub search_debounce_ms: u64,

    /// `0` keeps notifications until dismissed. Default: 3000
    pub notification_ttl_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            glyphs: GlyphSet::default(),
            search_debounce_ms: settings.search_debounce_ms,
            notification_ttl_ms: settings.notification_ttl_ms,
        }
    }
}

/// Parses a millisecond option.
fn parse_ms(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| InkpaneError::Config(format!("{key}: {e}")))
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Every key is optional; invalid values fall back to the default for that
    /// key and are logged at debug level.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use inkpane::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("search_debounce_ms".to_string(), "150".to_string());
    /// map.insert("notification_ttl_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.search_debounce_ms, 150);
    /// assert_eq!(config.notification_ttl_ms, 3000);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let ms = |key: &str, fallback: u64| {
            config.get(key).map_or(fallback, |value| {
                parse_ms(key, value).unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "invalid option, using default");
                    fallback
                })
            })
        };

        let glyphs = config.get("glyphs").map_or(defaults.glyphs, |value| {
            value.parse().unwrap_or_else(|e: String| {
                tracing::debug!(error = %e, "invalid glyph set, using default");
                defaults.glyphs
            })
        });

        let non_empty = |key: &str| config.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()).map(String::from);

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            glyphs,
            search_debounce_ms: ms("search_debounce_ms", defaults.search_debounce_ms),
            notification_ttl_ms: ms("notification_ttl_ms", defaults.notification_ttl_ms),
        }
    }

    /// Timing settings for the application state.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            search_debounce_ms: self.search_debounce_ms,
            notification_ttl_ms: self.notification_ttl_ms,
        }
    }

    /// Resolves the configured theme: file first, then name, then the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the application state for `config`.
///
/// The post store starts empty; the first `Event::Start` fetches the catalog.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing inkpane plugin");
    AppState::new(config.theme(), config.glyphs, config.settings())
}
