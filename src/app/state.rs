//! Application state and the operations that mutate it.
//!
//! [`AppState`] is the single, explicitly constructed owner of everything the
//! plugin knows: the post store, filter criteria, request phases, retained
//! errors, notifications, the newsletter subscription and pending timers. The
//! event handler translates events into calls on this type; the renderer reads
//! it through a view model.
//!
//! # Simulated requests
//!
//! An operation such as [`AppState::like`] does not contact the worker
//! directly. It issues a ticket, marks the request pending and schedules the
//! worker message on the timer queue at `now + latency`. When the deadline
//! passes, [`AppState::on_tick`] returns the message as an
//! [`Action::PostToWorker`], and the worker's answer comes back through
//! [`AppState::apply_response`].

use super::interaction::{RequestPhase, RequestTracker};
use super::modes::{InputMode, Page};
use super::notifications::{FlashSlot, NotificationQueue};
use super::store::PostStore;
use super::timers::{Debouncer, Timer, TimerQueue};
use super::Action;
use crate::domain::error::Result;
use crate::domain::{matches, validate_email, FilterCriteria, NotificationId, NotificationKind, Post, PostId, Subscription};
use crate::ui::icons::GlyphSet;
use crate::ui::theme::Theme;
use crate::worker::{RequestKey, WorkerMessage, WorkerResponse};

pub const LIKED: &str = "Post liked!";
pub const BOOKMARKED: &str = "Post bookmarked!";
pub const BOOKMARK_REMOVED: &str = "Bookmark removed";
pub const SUBSCRIBED: &str = "Successfully subscribed to newsletter!";
pub const UNSUBSCRIBED: &str = "Successfully unsubscribed from newsletter";
const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";
const FETCH_POST_FAILED: &str = "Failed to fetch post";
const SUBSCRIBE_FAILED: &str = "Failed to subscribe";
const LIKE_FAILED: &str = "Failed to like post";

/// Timing knobs taken from plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Quiet period before typed search input is applied.
    pub search_debounce_ms: u64,

    /// Lifetime of notifications and the newsletter flash. `0` keeps them
    /// until dismissed.
    pub notification_ttl_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            notification_ttl_ms: 3000,
        }
    }
}

/// What the detail page can show for the post it was opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStatus<'a> {
    Loading,
    Ready(&'a Post),
    NotFound,
    Failed(&'a str),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical client-side post collection.
    pub store: PostStore,

    /// Criteria currently applied to the list.
    pub criteria: FilterCriteria,

    /// Live search text. Applied to `criteria.query` after the debounce
    /// period or on submit.
    pub search_input: String,

    /// Newsletter email being typed.
    pub email_input: String,

    /// Ids of the posts passing `criteria`, in store order.
    pub visible: Vec<PostId>,

    /// Cursor position within `visible`.
    pub selected_index: usize,

    /// Where keystrokes go: navigation, search input or email input.
    pub input_mode: InputMode,

    /// List or the detail page of one post.
    pub page: Page,

    /// First content line shown on the detail page.
    pub detail_scroll: usize,

    /// Retained error of the last failed full fetch.
    pub posts_error: Option<String>,

    /// Result of the last single-post fetch, used when the store lacks the post.
    pub current_post: Option<Post>,

    /// Retained error of the last failed single-post fetch.
    pub detail_error: Option<String>,

    /// Newsletter subscription as last confirmed by the API.
    pub subscription: Subscription,

    /// Tickets and phases of the simulated requests.
    pub requests: RequestTracker,

    /// Toasts, oldest first.
    pub notifications: NotificationQueue,

    /// Newsletter status/error message slot.
    pub flash: FlashSlot,

    /// Index into the trending topics used by the next trending search.
    pub trending_cursor: usize,

    /// Active color theme.
    pub theme: Theme,

    /// Glyph set used by the renderer.
    pub glyphs: GlyphSet,

    pub settings: Settings,

    timers: TimerQueue,
    search_debounce: Debouncer,
    now_ms: u64,
}

impl AppState {
    /// Creates an empty state. Posts arrive through the first fetch.
    #[must_use]
    pub fn new(theme: Theme, glyphs: GlyphSet, settings: Settings) -> Self {
        Self {
            store: PostStore::default(),
            criteria: FilterCriteria::default(),
            search_input: String::new(),
            email_input: String::new(),
            visible: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            page: Page::List,
            detail_scroll: 0,
            posts_error: None,
            current_post: None,
            detail_error: None,
            subscription: Subscription::default(),
            requests: RequestTracker::default(),
            notifications: NotificationQueue::default(),
            flash: FlashSlot::default(),
            trending_cursor: 0,
            theme,
            glyphs,
            settings,
            timers: TimerQueue::default(),
            search_debounce: Debouncer::default(),
            now_ms: 0,
        }
    }

    /// Creates a state whose store already holds `store`.
    #[must_use]
    pub fn with_store(store: PostStore, theme: Theme, glyphs: GlyphSet, settings: Settings) -> Self {
        let mut state = Self::new(theme, glyphs, settings);
        state.store = store;
        state.apply_filter();
        state
    }

    // ---- clock -------------------------------------------------------------

    /// Advances the virtual clock. Time never moves backwards.
    pub fn sync_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Deadline of the next pending timer, for the runtime to wake up at.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn schedule_in(&mut self, delay_ms: u64, timer: Timer) {
        self.timers.schedule(self.now_ms.saturating_add(delay_ms), timer);
    }

    /// Fires every timer that is due.
    ///
    /// Returns whether the UI changed and the worker messages now ready to send.
    pub fn on_tick(&mut self) -> (bool, Vec<Action>) {
        let mut changed = false;
        let mut actions = Vec::new();

        for timer in self.timers.pop_due(self.now_ms) {
            match timer {
                Timer::Deliver(message) => actions.push(Action::PostToWorker(message)),
                Timer::ApplySearch { generation } => {
                    if self.search_debounce.is_current(generation) {
                        changed |= self.set_query(self.search_input.clone());
                    }
                }
                Timer::ExpireNotification(id) => changed |= self.notifications.remove(id),
                Timer::ExpireFlash { generation } => changed |= self.flash.expire(generation),
            }
        }

        (changed, actions)
    }

    // ---- filtering and selection ------------------------------------------

    /// Recomputes `visible` from the store and criteria, clamping the cursor.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_posts = self.store.posts().len(),
            query_len = self.criteria.query.len(),
            category = ?self.criteria.category
        )
        .entered();

        self.visible = self
            .store
            .posts()
            .iter()
            .filter(|p| matches(p, &self.criteria))
            .map(|p| p.id)
            .collect();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible = self.visible.len(), "filter applied");
    }

    /// Posts passing the current criteria, in store order.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post> {
        self.visible.iter().filter_map(|&id| self.store.get(id)).collect()
    }

    #[must_use]
    pub fn selected_post(&self) -> Option<&Post> {
        self.visible
            .get(self.selected_index)
            .and_then(|&id| self.store.get(id))
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn set_query(&mut self, query: String) -> bool {
        if self.criteria.query == query {
            return false;
        }
        self.criteria.query = query;
        self.apply_filter();
        true
    }

    /// Edits the live search input and restarts the debounce period.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.search_input);
        let generation = self.search_debounce.bump();
        self.schedule_in(self.settings.search_debounce_ms, Timer::ApplySearch { generation });
    }

    /// Applies the live search input immediately, cancelling a pending apply.
    pub fn submit_search(&mut self) {
        self.search_debounce.bump();
        self.set_query(self.search_input.clone());
    }

    /// Clears query, input and category together.
    pub fn clear_search(&mut self) {
        self.search_debounce.bump();
        self.search_input.clear();
        self.criteria.clear();
        self.apply_filter();
    }

    /// Searches for `term` across all categories.
    pub fn search_for(&mut self, term: &str) {
        self.search_debounce.bump();
        self.search_input = term.to_string();
        self.criteria.query = term.to_string();
        self.criteria.clear_category();
        self.selected_index = 0;
        self.apply_filter();
    }

    /// Sets or clears the category filter, keeping the query.
    pub fn select_category(&mut self, slug: Option<&str>) {
        self.criteria.category = slug.map(str::to_string);
        self.selected_index = 0;
        self.apply_filter();
    }

    // ---- requests ----------------------------------------------------------

    fn submit(&mut self, message: WorkerMessage) {
        let latency = message.latency_ms();
        tracing::debug!(key = ?message.ticket().key, latency_ms = latency, "request submitted");
        self.schedule_in(latency, Timer::Deliver(message));
    }

    /// Requests the full post collection.
    pub fn fetch_all(&mut self) {
        let ticket = self.requests.begin(RequestKey::Posts);
        self.submit(WorkerMessage::fetch_posts(ticket));
    }

    /// Requests one post for the detail page.
    pub fn fetch_one(&mut self, id: PostId) {
        self.detail_error = None;
        let ticket = self.requests.begin(RequestKey::Post(id));
        self.submit(WorkerMessage::fetch_post(ticket, id));
    }

    /// Likes a post. The new count is stored once the request resolves.
    pub fn like(&mut self, id: PostId) {
        let ticket = self.requests.begin(RequestKey::Like(id));
        self.submit(WorkerMessage::like_post(ticket, id));
        self.notify(NotificationKind::Success, LIKED);
    }

    /// Flips a post's bookmark flag. Returns the new value, or `None` for an
    /// unknown post.
    pub fn toggle_bookmark(&mut self, id: PostId) -> Option<bool> {
        let in_store = self.store.toggle_bookmark(id);
        let cached = self
            .current_post
            .as_mut()
            .filter(|p| p.id == id)
            .map(|post| {
                post.bookmarked = !post.bookmarked;
                post.bookmarked
            });

        let bookmarked = in_store.or(cached)?;
        let message = if bookmarked { BOOKMARKED } else { BOOKMARK_REMOVED };
        self.notify(NotificationKind::Success, message);
        Some(bookmarked)
    }

    /// Subscribes `email` to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns a validation error, and shows it in the flash slot, when the
    /// address has no `@`. No request is issued in that case.
    pub fn subscribe(&mut self, email: &str) -> Result<()> {
        if let Err(e) = validate_email(email) {
            self.set_flash(NotificationKind::Error, e.to_string());
            return Err(e);
        }

        self.flash.clear();
        let ticket = self.requests.begin(RequestKey::Subscription);
        self.submit(WorkerMessage::subscribe(ticket, email.trim().to_string()));
        Ok(())
    }

    /// Unsubscribes the current address.
    pub fn unsubscribe(&mut self) {
        self.flash.clear();
        let ticket = self.requests.begin(RequestKey::Subscription);
        self.submit(WorkerMessage::unsubscribe(ticket, self.subscription.email.clone()));
    }

    /// Forgets the subscription record without contacting the API.
    pub fn reset_subscription(&mut self) {
        self.subscription = Subscription::default();
    }

    /// Applies a worker response. Stale responses are dropped.
    ///
    /// Returns whether anything visible changed.
    pub fn apply_response(&mut self, response: &WorkerResponse) -> bool {
        let ticket = response.ticket();
        let succeeded = !matches!(response, WorkerResponse::Error { .. });
        if !self.requests.complete(ticket, succeeded) {
            return false;
        }

        match response {
            WorkerResponse::PostsLoaded { posts, categories, .. } => {
                self.store.replace_all(posts.clone());
                self.store.replace_categories(categories.clone());
                self.posts_error = None;
                self.apply_filter();
            }
            WorkerResponse::PostLoaded { post, .. } => {
                self.current_post.clone_from(post);
                self.detail_error = None;
            }
            WorkerResponse::PostLiked { id, likes, .. } => {
                self.store.set_likes(*id, *likes);
                if let Some(post) = self.current_post.as_mut().filter(|p| p.id == *id) {
                    post.likes = *likes;
                }
            }
            WorkerResponse::Subscribed { subscription, .. } => {
                self.subscription = subscription.clone();
                self.email_input.clear();
                self.set_flash(NotificationKind::Success, SUBSCRIBED);
            }
            WorkerResponse::Unsubscribed { subscription, .. } => {
                self.subscription = subscription.clone();
                self.set_flash(NotificationKind::Success, UNSUBSCRIBED);
            }
            WorkerResponse::Error { message, .. } => self.apply_error(ticket.key, message),
        }
        true
    }

    fn apply_error(&mut self, key: RequestKey, message: &str) {
        tracing::debug!(?key, error = %message, "request rejected");
        let or_default = |fallback: &str| {
            if message.is_empty() {
                fallback.to_string()
            } else {
                message.to_string()
            }
        };

        match key {
            RequestKey::Posts => self.posts_error = Some(or_default(FETCH_POSTS_FAILED)),
            RequestKey::Post(_) => self.detail_error = Some(or_default(FETCH_POST_FAILED)),
            RequestKey::Like(_) => {
                self.notify(NotificationKind::Error, or_default(LIKE_FAILED));
            }
            RequestKey::Subscription => {
                self.set_flash(NotificationKind::Error, or_default(SUBSCRIBE_FAILED));
            }
        }
    }

    /// Drops the retained fetch errors.
    pub fn clear_error(&mut self) {
        self.posts_error = None;
        self.detail_error = None;
    }

    #[must_use]
    pub fn posts_loading(&self) -> bool {
        self.requests.is_pending(RequestKey::Posts)
    }

    #[must_use]
    pub fn newsletter_loading(&self) -> bool {
        self.requests.is_pending(RequestKey::Subscription)
    }

    #[must_use]
    pub fn phase(&self, key: RequestKey) -> RequestPhase {
        self.requests.phase(key)
    }

    // ---- pages -------------------------------------------------------------

    /// Opens the detail page, fetching the post if the store lacks it.
    pub fn open_post(&mut self, id: PostId) {
        self.page = Page::Detail(id);
        self.detail_scroll = 0;
        self.detail_error = None;

        if self.store.get(id).is_none() && self.current_post.as_ref().map_or(true, |p| p.id != id) {
            self.fetch_one(id);
        }
    }

    /// Returns to the list.
    pub fn back(&mut self) {
        self.page = Page::List;
        self.detail_scroll = 0;
    }

    /// The post the detail page is showing, preferring the store's copy.
    #[must_use]
    pub fn detail_post(&self) -> Option<&Post> {
        let Page::Detail(id) = self.page else {
            return None;
        };
        self.store
            .get(id)
            .or_else(|| self.current_post.as_ref().filter(|p| p.id == id))
    }

    /// What the detail page should render, or `None` on the list page.
    #[must_use]
    pub fn detail_status(&self) -> Option<DetailStatus<'_>> {
        let Page::Detail(id) = self.page else {
            return None;
        };

        Some(if let Some(post) = self.detail_post() {
            DetailStatus::Ready(post)
        } else if self.requests.is_pending(RequestKey::Post(id)) {
            DetailStatus::Loading
        } else if let Some(error) = &self.detail_error {
            DetailStatus::Failed(error)
        } else {
            DetailStatus::NotFound
        })
    }

    /// The post that like/bookmark keys act on: the open article, or the
    /// selected list row.
    #[must_use]
    pub fn focused_post_id(&self) -> Option<PostId> {
        match self.page {
            Page::Detail(_) => self.detail_post().map(|p| p.id),
            Page::List => self.selected_post().map(|p| p.id),
        }
    }

    // ---- notifications -----------------------------------------------------

    /// Queues a notification and schedules its expiry.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = self.notifications.push(kind, message);
        if self.settings.notification_ttl_ms > 0 {
            self.schedule_in(self.settings.notification_ttl_ms, Timer::ExpireNotification(id));
        }
        id
    }

    /// Sets the newsletter flash and schedules its expiry.
    pub fn set_flash(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let generation = self.flash.set(kind, message);
        if self.settings.notification_ttl_ms > 0 {
            self.schedule_in(self.settings.notification_ttl_ms, Timer::ExpireFlash { generation });
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme.name, "theme toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn seeded() -> AppState {
        let store = PostStore::new(seed::posts(), seed::categories());
        AppState::with_store(store, Theme::default(), GlyphSet::default(), Settings::default())
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = seeded();
        state.move_selection_up();
        assert_eq!(state.selected_index, 5);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_clamps_when_the_list_shrinks() {
        let mut state = seeded();
        state.selected_index = 5;
        state.select_category(Some("design"));
        assert_eq!(state.visible, vec![2, 4]);
        assert_eq!(state.selected_index, 0);

        state.selected_index = 1;
        state.search_for("minimalist");
        assert_eq!(state.visible, vec![4]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn typing_waits_for_the_debounce_period() {
        let mut state = seeded();
        state.edit_search(|s| s.push_str("trav"));
        state.sync_clock(299);
        assert!(!state.on_tick().0);
        assert_eq!(state.visible.len(), 6);

        state.sync_clock(300);
        assert!(state.on_tick().0);
        assert_eq!(state.visible, vec![6]);
    }

    #[test]
    fn a_keystroke_restarts_the_debounce_period() {
        let mut state = seeded();
        state.edit_search(|s| s.push('d'));
        state.sync_clock(200);
        state.edit_search(|s| s.push_str("esign"));

        state.sync_clock(300);
        state.on_tick();
        assert!(state.criteria.query.is_empty());

        state.sync_clock(500);
        state.on_tick();
        assert_eq!(state.criteria.query, "design");
    }

    #[test]
    fn submit_applies_immediately_and_cancels_the_pending_apply() {
        let mut state = seeded();
        state.edit_search(|s| s.push_str("remote"));
        state.submit_search();
        assert_eq!(state.visible, vec![5]);

        state.search_input.clear();
        state.sync_clock(1000);
        state.on_tick();
        assert_eq!(state.criteria.query, "remote");
    }

    #[test]
    fn clear_search_resets_query_and_category() {
        let mut state = seeded();
        state.search_for("react");
        state.select_category(Some("technology"));
        state.clear_search();
        assert!(state.criteria.is_empty());
        assert!(state.search_input.is_empty());
        assert_eq!(state.visible.len(), 6);
    }

    #[test]
    fn search_for_drops_the_category() {
        let mut state = seeded();
        state.select_category(Some("travel"));
        state.search_for("design");
        assert_eq!(state.criteria.category, None);
    }

    #[test]
    fn requests_wait_for_their_latency() {
        let mut state = seeded();
        state.like(1);
        state.sync_clock(299);
        assert!(state.on_tick().1.is_empty());

        state.sync_clock(300);
        let (_, actions) = state.on_tick();
        assert!(matches!(actions.as_slice(), [Action::PostToWorker(WorkerMessage::LikePost { id: 1, .. })]));
    }

    #[test]
    fn invalid_email_sets_error_flash_without_request() {
        let mut state = seeded();
        assert!(state.subscribe("not-an-email").is_err());
        assert!(!state.subscription.subscribed);
        assert!(!state.newsletter_loading());
        assert_eq!(state.flash.get().map(|f| f.kind), Some(NotificationKind::Error));
    }

    #[test]
    fn zero_ttl_keeps_notifications() {
        let settings = Settings {
            notification_ttl_ms: 0,
            ..Settings::default()
        };
        let mut state = AppState::new(Theme::default(), GlyphSet::default(), settings);
        state.notify(NotificationKind::Info, "stays");
        assert_eq!(state.pending_timers(), 0);
        state.sync_clock(1_000_000);
        state.on_tick();
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn bookmark_on_unknown_post_is_ignored() {
        let mut state = seeded();
        assert_eq!(state.toggle_bookmark(42), None);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn fetched_categories_replace_the_store_list() {
        let mut state = AppState::new(Theme::default(), GlyphSet::default(), Settings::default());
        state.fetch_all();
        state.sync_clock(1000);
        let (_, actions) = state.on_tick();
        let [Action::PostToWorker(message)] = actions.as_slice() else {
            panic!("expected one delivery, got {actions:?}");
        };

        let applied = state.apply_response(&WorkerResponse::PostsLoaded {
            ticket: message.ticket(),
            posts: seed::posts(),
            categories: seed::categories(),
        });
        assert!(applied);
        assert_eq!(state.store.categories().len(), 4);
        assert_eq!(state.store.category("Design").map(|c| c.id.as_str()), Some("2"));
    }

    #[test]
    fn rejected_like_without_message_uses_fallback_text() {
        let mut state = seeded();
        state.like(1);
        state.sync_clock(300);
        let (_, actions) = state.on_tick();
        let [Action::PostToWorker(message)] = actions.as_slice() else {
            panic!("expected one delivery, got {actions:?}");
        };

        state.apply_response(&WorkerResponse::Error {
            ticket: message.ticket(),
            message: String::new(),
        });
        let last = state.notifications.as_slice().last().unwrap();
        assert_eq!(last.kind, NotificationKind::Error);
        assert_eq!(last.message, LIKE_FAILED);
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut state = seeded();
        state.sync_clock(500);
        state.sync_clock(100);
        assert_eq!(state.now_ms(), 500);
    }
}
