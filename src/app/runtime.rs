//! In-process runtime driving the application without Zellij.
//!
//! [`HeadlessRuntime`] owns an [`AppState`] and a [`BlogWorker`] and plays the
//! part of the plugin shim: it feeds events to [`handle_event`], executes the
//! returned actions, and delivers worker responses back as events. Time is
//! virtual and only moves through [`HeadlessRuntime::advance`].
//!
//! ```rust
//! use inkpane::app::{Event, HeadlessRuntime, Settings};
//!
//! let mut runtime = HeadlessRuntime::seeded(Settings::default());
//! runtime.dispatch(Event::Start)?;
//! runtime.settle()?;
//! assert_eq!(runtime.state().visible.len(), 6);
//! # Ok::<(), inkpane::domain::InkpaneError>(())
//! ```

use super::{handle_event, Action, AppState, Event, Settings};
use crate::domain::error::Result;
use crate::ui::icons::GlyphSet;
use crate::ui::theme::Theme;
use crate::worker::BlogWorker;
use std::collections::VecDeque;

/// Upper bound on timer firings per `settle` call.
const SETTLE_LIMIT: usize = 1024;

pub struct HeadlessRuntime {
    state: AppState,
    worker: BlogWorker,
    now_ms: u64,
    closed: bool,
}

impl HeadlessRuntime {
    #[must_use]
    pub const fn new(state: AppState, worker: BlogWorker) -> Self {
        Self {
            state,
            worker,
            now_ms: 0,
            closed: false,
        }
    }

    /// Empty state against the seeded catalog, default theme and glyphs.
    #[must_use]
    pub fn seeded(settings: Settings) -> Self {
        Self::new(
            AppState::new(Theme::default(), GlyphSet::default(), settings),
            BlogWorker::default(),
        )
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub const fn worker(&self) -> &BlogWorker {
        &self.worker
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Whether a `CloseFocus` action has been executed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handles `event` and everything it causes, returning whether any step
    /// asked for a render.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let mut queue = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = queue.pop_front() {
            let (render, actions) = handle_event(&mut self.state, &event)?;
            should_render |= render;

            for action in actions {
                match action {
                    Action::CloseFocus => self.closed = true,
                    Action::PostToWorker(message) => {
                        let response = self.worker.handle_message(message);
                        queue.push_back(Event::WorkerResponse(response));
                    }
                }
            }
        }

        Ok(should_render)
    }

    /// Moves the clock forward by `ms`, firing every timer due on the way in
    /// deadline order.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn advance(&mut self, ms: u64) -> Result<bool> {
        let target = self.now_ms.saturating_add(ms);
        let mut should_render = false;

        while let Some(deadline) = self.state.next_deadline().filter(|&d| d <= target) {
            self.now_ms = self.now_ms.max(deadline);
            should_render |= self.dispatch(Event::Tick { now_ms: self.now_ms })?;
        }

        self.now_ms = target;
        self.state.sync_clock(target);
        Ok(should_render)
    }

    /// Advances until no request is in flight.
    ///
    /// Notification and flash expiry timers are left pending.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn settle(&mut self) -> Result<()> {
        for _ in 0..SETTLE_LIMIT {
            if self.state.requests.in_flight() == 0 {
                return Ok(());
            }
            let Some(deadline) = self.state.next_deadline() else {
                return Ok(());
            };
            self.advance(deadline.saturating_sub(self.now_ms))?;
        }
        tracing::debug!("settle limit reached");
        Ok(())
    }

    /// Renders the current state into a frame string.
    #[must_use]
    pub fn render(&self, rows: usize, cols: usize) -> String {
        crate::ui::render_to_string(&self.state, rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_without_timers_only_moves_the_clock() {
        let mut runtime = HeadlessRuntime::seeded(Settings::default());
        assert!(!runtime.advance(250).unwrap());
        assert_eq!(runtime.now_ms(), 250);
        assert_eq!(runtime.state().now_ms(), 250);
    }

    #[test]
    fn settle_stops_once_requests_resolve() {
        let mut runtime = HeadlessRuntime::seeded(Settings::default());
        runtime.dispatch(Event::Start).unwrap();
        runtime.settle().unwrap();
        assert_eq!(runtime.now_ms(), 1000);
        assert_eq!(runtime.state().requests.in_flight(), 0);
    }
}
