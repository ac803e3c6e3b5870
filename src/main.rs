//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the inkpane library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, timers
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  InkpaneWorker   │   │  ← Simulated blog API
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Time
//!
//! The library runs on a virtual millisecond clock. The plugin measures time
//! since load, feeds it in with `Event::Tick`, and arms a Zellij timeout for
//! the next pending deadline after every update.
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move (list) or scroll (article)
//! - `Enter`: Open article
//! - `Esc`/`h`/`Left`: Back to the list, or clear filters on the list
//! - `/`: Search, `t`: next trending topic, `c`: clear filters
//! - `0`-`9`: Category filter (list) or related article (article)
//! - `l`: Like, `b`: Bookmark
//! - `n`: Newsletter signup, `u`: Unsubscribe
//! - `r`: Retry, `x`: Dismiss error
//! - `d`: Dismiss newest toast, `D`: Dismiss all toasts
//! - `T`: Toggle dark/light theme
//! - `q`: Close plugin
//!
//! Search and newsletter input:
//! - Characters edit the input, `Enter` submits, `Esc` leaves the input
//!
//! Off wasm the binary runs a short headless session against the seeded
//! catalog and prints the resulting frame.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use std::time::Instant;

    use serde::{Deserialize, Serialize};
    use zellij_tile::prelude::*;
    use zellij_tile::shim::{post_message_to, post_message_to_plugin};

    use inkpane::worker::{BlogWorker, WorkerMessage, WorkerResponse};
    use inkpane::{handle_event, Action, Config, Event, InputMode, Page};

    /// Name used for worker routing and custom messages.
    const WORKER_NAME: &str = "inkpane";

    /// Plugin state wrapper.
    ///
    /// Wraps the library's `AppState` with the Zellij clock and timer bookkeeping.
    pub struct State {
        app: inkpane::AppState,

        /// Origin of the virtual clock.
        started: Instant,

        /// Deadline a Zellij timeout is already armed for.
        armed_deadline: Option<u64>,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: inkpane::initialize(&Config::default()),
                started: Instant::now(),
                armed_deadline: None,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            inkpane::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            self.app = inkpane::initialize(&config);
            self.started = Instant::now();
            tracing::debug!(theme = %self.app.theme.name, glyphs = ?config.glyphs, "app state initialized");

            request_permission(&[
                PermissionType::ReadApplicationState,
                PermissionType::ChangeApplicationState,
            ]);
            subscribe(&[EventType::Key, EventType::CustomMessage, EventType::Timer]);

            self.dispatch(&Event::Start);
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let span = tracing::debug_span!("plugin_update_event", event_type = %Self::get_event_name(&event));
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                    match Self::map_custom_message_event(&message, &payload) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::Timer(_) => {
                    self.armed_deadline = None;
                    Event::Tick { now_ms: self.now_ms() }
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            inkpane::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn now_ms(&self) -> u64 {
            u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
        }

        /// Runs `event` through the library, executes its actions and re-arms
        /// the timer. Returns whether to render.
        fn dispatch(&mut self, event: &Event) -> bool {
            self.app.sync_clock(self.now_ms());

            let should_render = match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            };

            self.arm_timer();
            should_render
        }

        /// Arms a Zellij timeout for the next deadline unless an earlier one is
        /// already pending.
        fn arm_timer(&mut self) {
            let Some(deadline) = self.app.next_deadline() else {
                return;
            };
            if self.armed_deadline.is_some_and(|armed| armed <= deadline) {
                return;
            }

            let delay_ms = deadline.saturating_sub(self.now_ms());
            #[allow(clippy::cast_precision_loss)]
            set_timeout(delay_ms as f64 / 1000.0);
            self.armed_deadline = Some(deadline);
        }

        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                _ => "Other".to_string(),
            }
        }

        /// Maps keyboard events to application events.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyDown);
            }
            if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(Event::KeyUp);
            }

            if self.app.input_mode != InputMode::Normal {
                return Some(match key.bare_key {
                    BareKey::Enter => Event::Submit,
                    BareKey::Esc => Event::Cancel,
                    BareKey::Backspace => Event::Backspace,
                    BareKey::Down => Event::KeyDown,
                    BareKey::Up => Event::KeyUp,
                    BareKey::Char(c) => Event::Char(c),
                    _ => return None,
                });
            }

            let in_detail = matches!(self.app.page, Page::Detail(_));
            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter if !in_detail => Event::OpenSelected,
                BareKey::Esc | BareKey::Left | BareKey::Char('h') if in_detail => Event::Back,
                BareKey::Esc => Event::ClearSearch,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('n') => Event::SubscribeMode,
                BareKey::Char('u') => Event::Unsubscribe,
                BareKey::Char('l') => Event::LikeSelected,
                BareKey::Char('b') => Event::ToggleBookmarkSelected,
                BareKey::Char('r') => Event::Refresh,
                BareKey::Char('x') => Event::ClearError,
                BareKey::Char('c') => Event::ClearSearch,
                BareKey::Char('t') => Event::NextTrending,
                BareKey::Char('d') => Event::DismissLatest,
                BareKey::Char('D') => Event::ClearNotifications,
                BareKey::Char('T') => Event::ToggleTheme,
                BareKey::Char(c) if c.is_ascii_digit() => {
                    let n = c.to_digit(10).map_or(0, |d| d as usize);
                    if in_detail {
                        Event::OpenRelated(n.checked_sub(1)?)
                    } else {
                        Event::CategoryShortcut(n)
                    }
                }
                _ => return None,
            })
        }

        /// Maps worker replies to application events.
        fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
            if message != WORKER_NAME {
                tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
                return None;
            }

            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        }

        fn post_worker_message(message: &WorkerMessage) {
            match serde_json::to_string(message) {
                Ok(payload) => {
                    tracing::debug!(payload_len = payload.len(), "posting message to worker");
                    post_message_to(PluginMessage {
                        worker_name: Some(WORKER_NAME.to_string()),
                        name: WORKER_NAME.to_string(),
                        payload,
                    });
                }
                Err(e) => tracing::debug!(error = %e, "failed to serialize worker message"),
            }
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::PostToWorker(message) => Self::post_worker_message(message),
            }
        }
    }

    /// Zellij worker thread wrapping the simulated API.
    #[derive(Default, Serialize, Deserialize)]
    pub struct InkpaneWorker {
        #[serde(skip)]
        inner: BlogWorker,
    }

    impl ZellijWorker<'_> for InkpaneWorker {
        /// Deserializes a `WorkerMessage`, answers it, and posts the JSON
        /// response back under the same message name.
        fn on_message(&mut self, message: String, payload: String) {
            let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker message");
                    return;
                }
            };

            let response = self.inner.handle_message(worker_message);

            match serde_json::to_string(&response) {
                Ok(payload) => post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                }),
                Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
            }
        }
    }
}

#[cfg(target_family = "wasm")]
use plugin::{InkpaneWorker, State};
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(State);
#[cfg(target_family = "wasm")]
register_worker!(InkpaneWorker, inkpane_worker, INKPANE_WORKER);

/// Runs a scripted session against the seeded catalog and prints the frame.
#[cfg(not(target_family = "wasm"))]
fn main() -> inkpane::Result<()> {
    use inkpane::{Event, HeadlessRuntime, Settings};

    let mut runtime = HeadlessRuntime::seeded(Settings::default());
    runtime.dispatch(Event::Start)?;
    runtime.settle()?;

    for event in [
        Event::SelectCategory(Some("design".to_string())),
        Event::KeyDown,
        Event::LikeSelected,
        Event::ToggleBookmarkSelected,
        Event::OpenSelected,
    ] {
        runtime.dispatch(event)?;
    }
    runtime.settle()?;

    print!("\u{1b}[2J");
    print!("{}", runtime.render(32, 100));
    println!("\u{1b}[33;1H");
    Ok(())
}
