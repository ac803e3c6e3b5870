//! Transient user-facing status messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a notification within its queue.
///
/// Allocated from a monotonically increasing counter, so a later notification
/// always has a larger id than an earlier one.
pub type NotificationId = u64;

/// Severity of a notification, used to pick its glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Queue-unique id, used for dismissal and expiry.
    pub id: NotificationId,

    pub kind: NotificationKind,

    /// Text shown in the toast.
    pub message: String,

    /// Wall-clock creation time.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification stamped with the current wall-clock time.
    #[must_use]
    pub fn new(id: NotificationId, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
