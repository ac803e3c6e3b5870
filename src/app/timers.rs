//! Virtual-clock timers for simulated latency, debouncing and expiry.
//!
//! Nothing here reads a real clock. The runtime tells [`AppState`](super::AppState)
//! what time it is, timers are scheduled against that millisecond counter,
//! and due timers are drained on `Event::Tick`. This keeps every delayed
//! behavior deterministic under test.

use crate::domain::NotificationId;
use crate::worker::WorkerMessage;
use std::collections::BTreeMap;

/// Work deferred until a deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    /// Hand a simulated request to the worker once its latency has elapsed.
    Deliver(WorkerMessage),

    /// Apply the live search input to the filter, if no keystroke came since.
    ApplySearch { generation: u64 },

    /// Remove a notification from the queue.
    ExpireNotification(NotificationId),

    /// Clear the flash slot, unless it has been replaced in the meantime.
    ExpireFlash { generation: u64 },
}

/// Timers ordered by deadline, then by scheduling order.
///
/// Two timers with the same deadline fire in the order they were scheduled.
///
/// # Example
///
/// ```
/// use inkpane::app::timers::{Timer, TimerQueue};
///
/// let mut timers = TimerQueue::default();
/// timers.schedule(300, Timer::ExpireNotification(1));
/// timers.schedule(100, Timer::ExpireNotification(2));
///
/// assert_eq!(timers.next_deadline(), Some(100));
/// assert_eq!(timers.pop_due(100), vec![Timer::ExpireNotification(2)]);
/// assert_eq!(timers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    entries: BTreeMap<(u64, u64), Timer>,
    next_seq: u64,
}

impl TimerQueue {
    /// Schedules `timer` to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(due_ms, seq, ?timer, "timer scheduled");
        self.entries.insert((due_ms, seq), timer);
    }

    /// Removes and returns every timer due at or before `now_ms`, in firing order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<Timer> {
        let due = match now_ms.checked_add(1) {
            Some(bound) => {
                let pending = self.entries.split_off(&(bound, 0));
                std::mem::replace(&mut self.entries, pending)
            }
            None => std::mem::take(&mut self.entries),
        };
        due.into_values().collect()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.keys().next().map(|&(due, _)| due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generation counter for debounced work.
///
/// Each [`bump`](Self::bump) supersedes every earlier generation, so only the
/// timer scheduled last is still current when it fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    /// Starts a new generation and returns it.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Returns true when `generation` has not been superseded.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_deadline_keeps_scheduling_order() {
        let mut timers = TimerQueue::default();
        timers.schedule(50, Timer::ExpireNotification(1));
        timers.schedule(50, Timer::ExpireNotification(2));
        timers.schedule(50, Timer::ExpireFlash { generation: 3 });

        assert_eq!(
            timers.pop_due(50),
            vec![
                Timer::ExpireNotification(1),
                Timer::ExpireNotification(2),
                Timer::ExpireFlash { generation: 3 },
            ]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn nothing_fires_early() {
        let mut timers = TimerQueue::default();
        timers.schedule(1000, Timer::ApplySearch { generation: 1 });
        assert!(timers.pop_due(999).is_empty());
        assert_eq!(timers.pop_due(5000).len(), 1);
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn pop_due_at_max_time_drains_everything() {
        let mut timers = TimerQueue::default();
        timers.schedule(u64::MAX, Timer::ExpireNotification(1));
        assert_eq!(timers.pop_due(u64::MAX).len(), 1);
    }

    #[test]
    fn later_bump_supersedes_earlier() {
        let mut debounce = Debouncer::default();
        let first = debounce.bump();
        let second = debounce.bump();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }
}
