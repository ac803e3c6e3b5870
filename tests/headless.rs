//! End-to-end scenarios driving the headless runtime on the virtual clock.

use inkpane::app::state::{BOOKMARKED, BOOKMARK_REMOVED, LIKED, SUBSCRIBED};
use inkpane::app::{AppState, DetailStatus, Event, HeadlessRuntime, InputMode, Settings};
use inkpane::catalog::{seed, Catalog};
use inkpane::domain::{Category, InkpaneError, NotificationKind, Post, PostId, Result};
use inkpane::ui::helpers::strip_ansi;
use inkpane::ui::icons::GlyphSet;
use inkpane::ui::Theme;
use inkpane::worker::{BlogWorker, RequestKey};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Catalog that fails every read while `down` is set.
struct FlakyCatalog {
    down: Arc<AtomicBool>,
    posts: Vec<Post>,
}

impl FlakyCatalog {
    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            Err(InkpaneError::Catalog("service unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Catalog for FlakyCatalog {
    fn all_posts(&self) -> Result<Vec<Post>> {
        self.check()?;
        Ok(self.posts.clone())
    }

    fn post(&self, id: PostId) -> Result<Option<Post>> {
        self.check()?;
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    fn like(&mut self, id: PostId) -> Result<u32> {
        self.check()?;
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InkpaneError::Catalog(format!("no post {id}")))?;
        post.likes += 1;
        Ok(post.likes)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(seed::categories())
    }
}

fn flaky() -> (HeadlessRuntime, Arc<AtomicBool>) {
    let down = Arc::new(AtomicBool::new(true));
    let catalog = FlakyCatalog {
        down: Arc::clone(&down),
        posts: seed::posts(),
    };
    let state = AppState::new(Theme::default(), GlyphSet::default(), Settings::default());
    (HeadlessRuntime::new(state, BlogWorker::new(Box::new(catalog))), down)
}

fn loaded() -> HeadlessRuntime {
    let mut runtime = HeadlessRuntime::seeded(Settings::default());
    runtime.dispatch(Event::Start).unwrap();
    runtime.settle().unwrap();
    runtime
}

fn frame(runtime: &HeadlessRuntime) -> String {
    strip_ansi(&runtime.render(30, 120))
}

#[test]
fn start_loads_the_catalog_after_the_fetch_latency() {
    let mut runtime = HeadlessRuntime::seeded(Settings::default());
    runtime.dispatch(Event::Start).unwrap();
    assert!(runtime.state().posts_loading());
    assert!(frame(&runtime).contains("Loading articles..."));

    runtime.advance(999).unwrap();
    assert!(runtime.state().store.is_empty());

    runtime.advance(1).unwrap();
    assert_eq!(runtime.state().visible, vec![1, 2, 3, 4, 5, 6]);
    assert!(!runtime.state().posts_loading());
    assert!(frame(&runtime).contains("6 articles"));
}

#[test]
fn query_and_category_narrow_the_list() {
    let mut runtime = loaded();

    runtime.dispatch(Event::SearchFor("react".to_string())).unwrap();
    assert_eq!(runtime.state().visible, vec![3]);

    runtime.dispatch(Event::ClearSearch).unwrap();
    runtime.dispatch(Event::SelectCategory(Some("design".to_string()))).unwrap();
    assert_eq!(runtime.state().visible, vec![2, 4]);

    runtime.dispatch(Event::SearchFor("zzz".to_string())).unwrap();
    assert!(runtime.state().visible.is_empty());
    assert!(frame(&runtime).contains("No articles found"));
}

#[test]
fn category_shortcuts_work_after_a_cold_start() {
    let mut runtime = loaded();
    let slugs: Vec<_> = runtime.state().store.categories().iter().map(|c| c.slug.clone()).collect();
    assert_eq!(slugs, vec!["technology", "design", "lifestyle", "travel"]);

    let before = frame(&runtime);
    for tab in ["0 All", "1 Technology", "2 Design", "3 Lifestyle", "4 Travel"] {
        assert!(before.contains(tab), "missing tab {tab:?}");
    }

    assert!(runtime.dispatch(Event::CategoryShortcut(2)).unwrap());
    assert_eq!(runtime.state().criteria.category.as_deref(), Some("design"));
    assert_eq!(runtime.state().visible, vec![2, 4]);
    assert!(frame(&runtime).contains("2 articles in Design"));

    runtime.dispatch(Event::CategoryShortcut(0)).unwrap();
    assert_eq!(runtime.state().visible.len(), 6);
}

#[test]
fn typed_search_applies_after_the_debounce_period() {
    let mut runtime = loaded();
    runtime.dispatch(Event::SearchMode).unwrap();
    runtime.dispatch(Event::Char('c')).unwrap();
    runtime.dispatch(Event::Char('s')).unwrap();
    runtime.advance(200).unwrap();
    runtime.dispatch(Event::Char('s')).unwrap();

    runtime.advance(299).unwrap();
    assert_eq!(runtime.state().criteria.query, "");
    assert_eq!(runtime.state().visible.len(), 6);

    runtime.advance(1).unwrap();
    assert_eq!(runtime.state().criteria.query, "css");
    assert_eq!(runtime.state().visible, vec![2]);
}

#[test]
fn submit_applies_the_search_without_waiting() {
    let mut runtime = loaded();
    runtime.dispatch(Event::SearchMode).unwrap();
    for c in "trav".chars() {
        runtime.dispatch(Event::Char(c)).unwrap();
    }
    runtime.dispatch(Event::Submit).unwrap();
    assert_eq!(runtime.state().visible, vec![6]);

    // The superseded debounce timer must not re-apply anything.
    runtime.state_mut().search_input.clear();
    runtime.advance(1000).unwrap();
    assert_eq!(runtime.state().criteria.query, "trav");
}

#[test]
fn like_updates_the_count_once_the_request_resolves() {
    let mut runtime = loaded();
    runtime.dispatch(Event::LikeSelected).unwrap();

    let state = runtime.state();
    assert_eq!(state.notifications.as_slice()[0].message, LIKED);
    assert_eq!(state.store.get(1).unwrap().likes, 42);

    runtime.advance(299).unwrap();
    assert_eq!(runtime.state().store.get(1).unwrap().likes, 42);
    runtime.advance(1).unwrap();
    assert_eq!(runtime.state().store.get(1).unwrap().likes, 43);
}

#[test]
fn stale_responses_are_discarded() {
    let mut runtime = HeadlessRuntime::seeded(Settings::default());
    runtime.dispatch(Event::Refresh).unwrap();
    runtime.advance(500).unwrap();
    runtime.dispatch(Event::Refresh).unwrap();

    runtime.advance(500).unwrap();
    assert!(runtime.state().store.is_empty());
    assert!(runtime.state().posts_loading());

    runtime.advance(500).unwrap();
    assert_eq!(runtime.state().visible.len(), 6);
    assert!(!runtime.state().posts_loading());
}

#[test]
fn bookmarking_twice_restores_the_flag() {
    let mut runtime = loaded();
    runtime.dispatch(Event::ToggleBookmarkSelected).unwrap();
    assert!(runtime.state().store.get(1).unwrap().bookmarked);
    runtime.dispatch(Event::ToggleBookmarkSelected).unwrap();
    assert!(!runtime.state().store.get(1).unwrap().bookmarked);

    let messages: Vec<_> = runtime
        .state()
        .notifications
        .as_slice()
        .iter()
        .map(|n| n.message.as_str())
        .collect();
    assert_eq!(messages, vec![BOOKMARKED, BOOKMARK_REMOVED]);
}

#[test]
fn failed_fetch_is_retained_until_a_retry_succeeds() {
    let (mut runtime, down) = flaky();
    runtime.dispatch(Event::Start).unwrap();
    runtime.settle().unwrap();

    let error = runtime.state().posts_error.clone();
    assert_eq!(error.as_deref(), Some("Catalog error: service unavailable"));
    assert!(frame(&runtime).contains("service unavailable"));

    down.store(false, Ordering::SeqCst);
    runtime.dispatch(Event::Refresh).unwrap();
    assert!(runtime.state().posts_error.is_some());
    assert!(frame(&runtime).contains("Retrying..."));

    runtime.settle().unwrap();
    assert_eq!(runtime.state().posts_error, None);
    assert_eq!(runtime.state().visible.len(), 6);
}

#[test]
fn failed_like_raises_an_error_notification() {
    let (mut runtime, down) = flaky();
    down.store(false, Ordering::SeqCst);
    runtime.dispatch(Event::Start).unwrap();
    runtime.settle().unwrap();

    down.store(true, Ordering::SeqCst);
    runtime.dispatch(Event::LikeSelected).unwrap();
    runtime.settle().unwrap();

    let last = runtime.state().notifications.as_slice().last().unwrap();
    assert_eq!(last.kind, NotificationKind::Error);
    assert_eq!(runtime.state().store.get(1).unwrap().likes, 42);
}

#[test]
fn unknown_post_shows_not_found_without_an_error() {
    let mut runtime = loaded();
    runtime.dispatch(Event::OpenPost(99)).unwrap();
    assert!(matches!(runtime.state().detail_status(), Some(DetailStatus::Loading)));

    runtime.settle().unwrap();
    assert!(matches!(runtime.state().detail_status(), Some(DetailStatus::NotFound)));
    assert_eq!(runtime.state().detail_error, None);
    assert!(frame(&runtime).contains("Article not found"));

    runtime.dispatch(Event::Back).unwrap();
    assert!(runtime.state().detail_status().is_none());
}

#[test]
fn subscribing_records_the_address_and_flashes() {
    let mut runtime = loaded();
    runtime.dispatch(Event::SubscribeMode).unwrap();
    for c in "a@b.com".chars() {
        runtime.dispatch(Event::Char(c)).unwrap();
    }
    runtime.dispatch(Event::Submit).unwrap();
    assert!(runtime.state().newsletter_loading());

    runtime.advance(999).unwrap();
    assert!(!runtime.state().subscription.subscribed);
    runtime.advance(1).unwrap();

    let state = runtime.state();
    assert!(state.subscription.subscribed);
    assert!(state.subscription.subscribed_at.is_some());
    assert!(state.email_input.is_empty());
    assert_eq!(state.flash.get().unwrap().message, SUBSCRIBED);
    assert!(runtime.worker().is_subscribed("a@b.com"));

    runtime.dispatch(Event::Unsubscribe).unwrap();
    runtime.settle().unwrap();
    assert!(!runtime.state().subscription.subscribed);
    assert!(!runtime.worker().is_subscribed("a@b.com"));
}

#[test]
fn invalid_email_flashes_an_error_and_keeps_focus() {
    let mut runtime = loaded();
    runtime.dispatch(Event::SubscribeMode).unwrap();
    for c in "not-an-email".chars() {
        runtime.dispatch(Event::Char(c)).unwrap();
    }
    runtime.dispatch(Event::Submit).unwrap();

    let state = runtime.state();
    let flash = state.flash.get().unwrap();
    assert_eq!(flash.kind, NotificationKind::Error);
    assert_eq!(flash.message, "Invalid email address");
    assert_eq!(state.input_mode, InputMode::Subscribe);
    assert!(!state.requests.is_pending(RequestKey::Subscription));

    runtime.advance(3000).unwrap();
    assert!(runtime.state().flash.get().is_none());
}

#[test]
fn notifications_expire_after_their_ttl() {
    let mut runtime = loaded();
    runtime.dispatch(Event::ToggleBookmarkSelected).unwrap();
    runtime.advance(1000).unwrap();
    runtime.dispatch(Event::ToggleBookmarkSelected).unwrap();
    assert_eq!(runtime.state().notifications.len(), 2);

    runtime.advance(2000).unwrap();
    assert_eq!(runtime.state().notifications.len(), 1);
    runtime.advance(1000).unwrap();
    assert!(runtime.state().notifications.is_empty());
}

#[test]
fn zero_ttl_keeps_notifications_until_dismissed() {
    let mut runtime = HeadlessRuntime::seeded(Settings {
        notification_ttl_ms: 0,
        ..Settings::default()
    });
    runtime.dispatch(Event::Start).unwrap();
    runtime.settle().unwrap();

    runtime.dispatch(Event::ToggleBookmarkSelected).unwrap();
    runtime.advance(60_000).unwrap();
    let id = runtime.state().notifications.as_slice()[0].id;

    assert!(runtime.dispatch(Event::DismissNotification(id)).unwrap());
    assert!(runtime.state().notifications.is_empty());
}

#[test]
fn close_focus_closes_the_runtime() {
    let mut runtime = loaded();
    assert!(!runtime.is_closed());
    runtime.dispatch(Event::CloseFocus).unwrap();
    assert!(runtime.is_closed());
}
