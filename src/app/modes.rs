//! Input mode and page state types.
//!
//! These enums decide which keybindings are active and what the body of the
//! pane shows.
//!
//! # State Machine
//!
//! - **Normal**: navigation and commands
//! - **Search**: keystrokes edit the live search input
//! - **Subscribe**: keystrokes edit the newsletter email input
//!
//! Pages:
//! - **List**: the filtered article list
//! - **Detail**: one article, by id

use crate::domain::PostId;

/// Current input handling mode.
///
/// Controls which keybindings are active and how characters are routed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// j/k navigate, Enter opens, l likes, b bookmarks, / searches, n subscribes.
    #[default]
    Normal,

    /// Characters go to the search input; Enter applies it immediately.
    Search,

    /// Characters go to the newsletter email input; Enter submits.
    Subscribe,
}

/// The page shown in the body of the pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    List,

    /// Article detail for the given post id.
    Detail(PostId),
}
