//! Notification queue and the single-slot newsletter flash.
//!
//! The queue is an ordered list of independent toasts. The flash slot holds at
//! most one message; setting a new one replaces the old one. Expiry is driven
//! from outside through timers, so neither type knows about time.

use crate::domain::{Notification, NotificationId, NotificationKind};

/// Ordered notification list with monotonically allocated ids.
///
/// # Example
///
/// ```
/// use inkpane::app::notifications::NotificationQueue;
/// use inkpane::domain::NotificationKind;
///
/// let mut queue = NotificationQueue::default();
/// let id = queue.push(NotificationKind::Success, "Post liked!");
/// assert_eq!(queue.len(), 1);
///
/// assert!(queue.remove(id));
/// assert!(!queue.remove(id));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationQueue {
    /// Appends a notification at the tail and returns its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.next_id += 1;
        let notification = Notification::new(self.next_id, kind, message);
        tracing::debug!(id = notification.id, ?kind, message = %notification.message, "notification pushed");
        self.items.push(notification);
        self.next_id
    }

    /// Removes the notification with `id`. Returns false if it was not queued.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    /// Removes the newest notification, if any.
    pub fn pop_latest(&mut self) -> Option<Notification> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Queued notifications, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The message currently held by a [`FlashSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: NotificationKind,
    pub message: String,
}

/// Single-message slot where each new flash supersedes the previous one.
#[derive(Debug, Clone, Default)]
pub struct FlashSlot {
    current: Option<Flash>,
    generation: u64,
}

impl FlashSlot {
    /// Replaces the current flash and returns the new generation.
    pub fn set(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(Flash {
            kind,
            message: message.into(),
        });
        self.generation
    }

    /// Clears the flash if it is still the one set at `generation`.
    ///
    /// Returns true when something was cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub const fn get(&self) -> Option<&Flash> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Info, "a");
        let b = queue.push(NotificationKind::Info, "b");
        queue.remove(a);
        let c = queue.push(NotificationKind::Info, "c");
        assert!(a < b && b < c);
    }

    #[test]
    fn push_then_remove_restores_prior_contents() {
        let mut queue = NotificationQueue::default();
        queue.push(NotificationKind::Success, "first");
        let before: Vec<String> = queue.as_slice().iter().map(|n| n.message.clone()).collect();

        let id = queue.push(NotificationKind::Error, "second");
        queue.remove(id);

        let after: Vec<String> = queue.as_slice().iter().map(|n| n.message.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut queue = NotificationQueue::default();
        queue.push(NotificationKind::Info, "kept");
        assert!(!queue.remove(999));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn newer_flash_survives_older_expiry() {
        let mut slot = FlashSlot::default();
        let first = slot.set(NotificationKind::Error, "Invalid email address");
        let second = slot.set(NotificationKind::Success, "Successfully subscribed to newsletter!");

        assert!(!slot.expire(first));
        assert_eq!(slot.get().map(|f| f.kind), Some(NotificationKind::Success));
        assert!(slot.expire(second));
        assert!(slot.get().is_none());
    }
}
