//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, clock
//! ticks and worker responses, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `OpenRelated`, `Back`
//! - **Input**: `Char`, `Backspace`, `Submit`, `Cancel`
//! - **Filtering**: `SearchFor`, `NextTrending`, `SelectCategory`, `CategoryShortcut`
//! - **Posts**: `LikeSelected`, `ToggleBookmarkSelected`, `Refresh`, `ClearError`
//! - **System**: `Start`, `Tick`
//! - **Worker**: `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use inkpane::app::{handle_event, AppState, Event, Settings};
//! use inkpane::ui::{icons::GlyphSet, theme::Theme};
//!
//! let mut state = AppState::new(Theme::default(), GlyphSet::default(), Settings::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(actions.is_empty());
//! assert!(state.posts_loading());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{InputMode, Page};
use crate::app::{Action, AppState};
use crate::catalog::{related_posts, trending_topics};
use crate::domain::error::Result;
use crate::domain::{NotificationId, PostId};
use crate::worker::WorkerResponse;

/// How many related posts the detail page offers.
pub const RELATED_LIMIT: usize = 2;

/// Events triggered by user input, the clock, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Plugin loaded. Fetches the catalog if nothing is loaded yet.
    Start,

    /// The runtime clock reached `now_ms`; fires due timers.
    Tick { now_ms: u64 },

    /// Moves the cursor down (wraps), or scrolls the article down.
    KeyDown,
    /// Moves the cursor up (wraps), or scrolls the article up.
    KeyUp,

    /// Opens the highlighted post.
    OpenSelected,
    /// Opens a post by id.
    OpenPost(PostId),
    /// Opens the n-th related post of the open article.
    OpenRelated(usize),
    /// Returns to the list.
    Back,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the search input.
    SearchMode,
    /// Focuses the newsletter email input.
    SubscribeMode,
    /// Types into the focused input.
    Char(char),
    /// Deletes from the focused input.
    Backspace,
    /// Applies the search input or submits the email.
    Submit,
    /// Leaves the focused input.
    Cancel,

    ClearSearch,
    /// Searches for a term across all categories.
    SearchFor(String),
    /// Searches for the next trending topic.
    NextTrending,
    /// Sets or clears the category filter by slug.
    SelectCategory(Option<String>),
    /// `0` clears the category; `n` selects the n-th catalog category.
    CategoryShortcut(usize),

    LikeSelected,
    ToggleBookmarkSelected,
    /// Re-issues the failed or current fetch.
    Refresh,
    ClearError,

    Unsubscribe,
    ResetSubscription,

    DismissLatest,
    DismissNotification(NotificationId),
    ClearNotifications,

    ToggleTheme,

    /// Wraps a response from the worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean tells the runtime whether to re-render.
///
/// # Errors
///
/// Validation failures from newsletter submission are reported inline through
/// the flash slot and are not returned; the `Result` carries the handler's
/// remaining failure modes to the runtime.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            if state.store.is_empty() && !state.posts_loading() {
                tracing::debug!("catalog empty, fetching posts");
                state.fetch_all();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Tick { now_ms } => {
            state.sync_clock(*now_ms);
            Ok(state.on_tick())
        }
        Event::KeyDown => {
            match state.page {
                Page::List => state.move_selection_down(),
                Page::Detail(_) => state.detail_scroll = state.detail_scroll.saturating_add(1),
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            match state.page {
                Page::List => state.move_selection_up(),
                Page::Detail(_) => state.detail_scroll = state.detail_scroll.saturating_sub(1),
            }
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(id) = state.selected_post().map(|p| p.id) else {
                tracing::debug!("no post selected");
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;
            state.open_post(id);
            Ok((true, vec![]))
        }
        Event::OpenPost(id) => {
            state.open_post(*id);
            Ok((true, vec![]))
        }
        Event::OpenRelated(index) => {
            let target = state.detail_post().and_then(|post| {
                related_posts(state.store.posts(), post, RELATED_LIMIT)
                    .get(*index)
                    .map(|p| p.id)
            });
            let Some(id) = target else {
                return Ok((false, vec![]));
            };
            tracing::debug!(post_id = id, "opening related post");
            state.open_post(id);
            Ok((true, vec![]))
        }
        Event::Back => {
            if state.page == Page::List {
                return Ok((false, vec![]));
            }
            state.back();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            state.input_mode = InputMode::Search;
            state.back();
            Ok((true, vec![]))
        }
        Event::SubscribeMode => {
            state.input_mode = InputMode::Subscribe;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Search => {
                state.edit_search(|input| input.push(*c));
                tracing::trace!(input = %state.search_input, "search input updated");
                Ok((true, vec![]))
            }
            InputMode::Subscribe => {
                state.email_input.push(*c);
                Ok((true, vec![]))
            }
        },
        Event::Backspace => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Search => {
                state.edit_search(|input| {
                    input.pop();
                });
                Ok((true, vec![]))
            }
            InputMode::Subscribe => {
                state.email_input.pop();
                Ok((true, vec![]))
            }
        },
        Event::Submit => match state.input_mode {
            InputMode::Normal => Ok((false, vec![])),
            InputMode::Search => {
                state.submit_search();
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Subscribe => {
                let email = state.email_input.clone();
                if let Err(e) = state.subscribe(&email) {
                    tracing::debug!(error = %e, "subscription rejected");
                } else {
                    state.input_mode = InputMode::Normal;
                }
                Ok((true, vec![]))
            }
        },
        Event::Cancel => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::SearchFor(term) => {
            state.back();
            state.search_for(term);
            Ok((true, vec![]))
        }
        Event::NextTrending => {
            let topics = trending_topics(state.store.posts());
            if topics.is_empty() {
                return Ok((false, vec![]));
            }
            let topic = topics[state.trending_cursor % topics.len()].name;
            state.trending_cursor = state.trending_cursor.wrapping_add(1);
            tracing::debug!(topic, "trending search");
            state.back();
            state.search_for(topic);
            Ok((true, vec![]))
        }
        Event::SelectCategory(slug) => {
            state.select_category(slug.as_deref());
            Ok((true, vec![]))
        }
        Event::CategoryShortcut(n) => {
            let slug = match n.checked_sub(1) {
                None => None,
                Some(i) => match state.store.categories().get(i) {
                    Some(category) => Some(category.slug.clone()),
                    None => return Ok((false, vec![])),
                },
            };
            state.back();
            state.select_category(slug.as_deref());
            Ok((true, vec![]))
        }
        Event::LikeSelected => {
            let Some(id) = state.focused_post_id() else {
                return Ok((false, vec![]));
            };
            state.like(id);
            Ok((true, vec![]))
        }
        Event::ToggleBookmarkSelected => {
            let Some(id) = state.focused_post_id() else {
                return Ok((false, vec![]));
            };
            Ok((state.toggle_bookmark(id).is_some(), vec![]))
        }
        Event::Refresh => {
            match state.page {
                Page::Detail(id) if state.detail_post().is_none() => state.fetch_one(id),
                _ => state.fetch_all(),
            }
            Ok((true, vec![]))
        }
        Event::ClearError => {
            state.clear_error();
            Ok((true, vec![]))
        }
        Event::Unsubscribe => {
            if !state.subscription.subscribed {
                return Ok((false, vec![]));
            }
            state.unsubscribe();
            Ok((true, vec![]))
        }
        Event::ResetSubscription => {
            state.reset_subscription();
            Ok((true, vec![]))
        }
        Event::DismissLatest => Ok((state.notifications.pop_latest().is_some(), vec![])),
        Event::DismissNotification(id) => Ok((state.notifications.remove(*id), vec![])),
        Event::ClearNotifications => {
            let had_any = !state.notifications.is_empty();
            state.notifications.clear();
            Ok((had_any, vec![]))
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => {
            let applied = state.apply_response(response);
            if !applied {
                tracing::debug!(key = ?response.ticket().key, "discarding stale response");
            }
            Ok((applied, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PostStore, Settings};
    use crate::catalog::seed;
    use crate::ui::{icons::GlyphSet, theme::Theme};
    use crate::worker::RequestKey;

    fn seeded() -> AppState {
        let store = PostStore::new(seed::posts(), seed::categories());
        AppState::with_store(store, Theme::default(), GlyphSet::default(), Settings::default())
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn start_skips_the_fetch_when_posts_are_loaded() {
        let mut state = seeded();
        let (render, _) = send(&mut state, Event::Start);
        assert!(!render);
        assert!(!state.posts_loading());
    }

    #[test]
    fn chars_are_ignored_in_normal_mode() {
        let mut state = seeded();
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn typing_routes_to_the_focused_input() {
        let mut state = seeded();
        send(&mut state, Event::SubscribeMode);
        for c in "me@x.io".chars() {
            send(&mut state, Event::Char(c));
        }
        send(&mut state, Event::Backspace);
        assert_eq!(state.email_input, "me@x.i");
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn category_shortcuts_follow_catalog_order() {
        let mut state = seeded();
        send(&mut state, Event::CategoryShortcut(2));
        assert_eq!(state.criteria.category.as_deref(), Some("design"));

        let (render, _) = send(&mut state, Event::CategoryShortcut(9));
        assert!(!render);
        assert_eq!(state.criteria.category.as_deref(), Some("design"));

        send(&mut state, Event::CategoryShortcut(0));
        assert_eq!(state.criteria.category, None);
    }

    #[test]
    fn trending_cycles_through_topics() {
        let mut state = seeded();
        send(&mut state, Event::NextTrending);
        assert_eq!(state.criteria.query, "Design");
        send(&mut state, Event::NextTrending);
        assert_eq!(state.criteria.query, "React");
    }

    #[test]
    fn arrow_keys_scroll_the_open_article() {
        let mut state = seeded();
        send(&mut state, Event::OpenSelected);
        assert_eq!(state.page, Page::Detail(1));
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::KeyUp);
        assert_eq!(state.detail_scroll, 1);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn related_posts_open_by_index() {
        let mut state = seeded();
        send(&mut state, Event::OpenPost(2));
        send(&mut state, Event::OpenRelated(0));
        assert_eq!(state.page, Page::Detail(4));
        let (render, _) = send(&mut state, Event::OpenRelated(1));
        assert!(!render);
    }

    #[test]
    fn open_post_missing_from_store_fetches_it() {
        let mut state = seeded();
        send(&mut state, Event::OpenPost(99));
        assert!(state.requests.is_pending(RequestKey::Post(99)));
    }

    #[test]
    fn bookmark_key_notifies() {
        let mut state = seeded();
        send(&mut state, Event::ToggleBookmarkSelected);
        assert_eq!(state.notifications.as_slice()[0].message, "Post bookmarked!");
        send(&mut state, Event::DismissLatest);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn unsubscribe_without_subscription_is_a_no_op() {
        let mut state = seeded();
        let (render, _) = send(&mut state, Event::Unsubscribe);
        assert!(!render);
        assert!(!state.newsletter_loading());
    }

    #[test]
    fn close_focus_hides_the_pane() {
        let mut state = seeded();
        assert_eq!(send(&mut state, Event::CloseFocus).1, vec![Action::CloseFocus]);
    }
}
