//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! Zellij shim executes them against the host; the headless runtime executes
//! them in-process.
//!
//! # Example
//!
//! ```rust
//! use inkpane::app::Action;
//! use inkpane::worker::{RequestKey, RequestTicket, WorkerMessage};
//!
//! let ticket = RequestTicket { key: RequestKey::Posts, token: 1 };
//! let actions = vec![Action::PostToWorker(WorkerMessage::fetch_posts(ticket))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a request to the worker.
    ///
    /// Emitted only once the request's simulated latency has elapsed.
    PostToWorker(WorkerMessage),
}
