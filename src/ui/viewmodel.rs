//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel` and consumed by the renderer. They contain no
//! business logic, only display-ready data: resolved colors, wrapped article
//! lines, highlight ranges and the selection.

use crate::domain::NotificationKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Catalog numbers and trending topics. Hidden while a query is active.
    pub stats: Option<StatsInfo>,

    /// Category quick-filter tabs.
    pub categories: Vec<CategoryTab>,

    pub search_bar: SearchBarInfo,

    /// Main area: list, article, or a placeholder state.
    pub body: Body,

    pub newsletter: NewsletterInfo,

    /// Newest last.
    pub toasts: Vec<ToastInfo>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,

    /// Result count and active category, e.g. `2 articles in Design`.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsInfo {
    pub posts: usize,
    pub authors: usize,
    pub categories: usize,

    /// Topic names with their counts, most frequent first.
    pub trending: Vec<(String, usize)>,
}

/// One category quick-filter tab.
#[derive(Debug, Clone)]
pub struct CategoryTab {
    /// Number key selecting this tab.
    pub shortcut: usize,
    pub name: String,
    /// Hex color.
    pub color: String,
    pub active: bool,
}

/// Search input display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Live input text.
    pub input: String,

    /// Whether keystrokes currently go to the input.
    pub focused: bool,

    /// Input differs from the applied query (debounce pending).
    pub pending: bool,
}

/// What fills the main area.
#[derive(Debug, Clone)]
pub enum Body {
    /// A request is in flight and there is nothing to show yet.
    Loading(String),

    /// A fetch failed; the message carries a retry hint.
    Error(EmptyState),

    /// No posts match, or the post does not exist.
    Empty(EmptyState),

    List(ListInfo),

    Detail(DetailInfo),
}

#[derive(Debug, Clone)]
pub struct ListInfo {
    pub items: Vec<DisplayItem>,
    pub selected_index: usize,
}

/// Display information for one post row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub title: String,

    /// `author · date · read time`.
    pub meta: String,

    pub category: String,
    /// Hex color of the category.
    pub category_color: String,

    pub likes: u32,
    pub bookmarked: bool,
    pub is_selected: bool,

    /// Character ranges of query matches in `title`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// An article line, already wrapped to the pane width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleLine {
    Heading(String),
    Text(String),
    Blank,
}

/// Article page display information.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,
    pub meta: String,
    pub category: String,
    pub category_color: String,
    pub likes: u32,
    pub bookmarked: bool,

    /// Like request in flight.
    pub liking: bool,

    pub lines: Vec<ArticleLine>,

    /// First line shown, clamped to the article length.
    pub scroll: usize,

    /// Titles of related posts, selected with `1`, `2`, ...
    pub related: Vec<String>,
}

/// Placeholder message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No articles found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Newsletter bar display information.
#[derive(Debug, Clone)]
pub struct NewsletterInfo {
    /// Email being typed.
    pub input: String,
    pub focused: bool,

    /// Address of the active subscription.
    pub subscribed: Option<String>,

    pub loading: bool,
    pub flash: Option<ToastInfo>,
}

/// A notification as shown on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub kind: NotificationKind,
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode and page.
    pub keybindings: String,
}
