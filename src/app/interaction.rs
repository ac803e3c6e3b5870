//! Request lifecycle tracking for the simulated API.
//!
//! Every asynchronous operation moves through `Idle → Pending → Fulfilled |
//! Rejected`, tracked per [`RequestKey`]. Overlapping requests for one key are
//! allowed: the tracker only remembers the newest ticket, and a response is
//! accepted only if it answers that ticket. Whatever was submitted last wins,
//! regardless of the order responses arrive in.

use crate::worker::{RequestKey, RequestTicket};
use std::collections::HashMap;

/// Lifecycle phase of the latest request for a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Per-key request phases and ticket sequencing.
///
/// # Example
///
/// ```
/// use inkpane::app::interaction::{RequestPhase, RequestTracker};
/// use inkpane::worker::RequestKey;
///
/// let mut requests = RequestTracker::default();
/// let first = requests.begin(RequestKey::Posts);
/// let second = requests.begin(RequestKey::Posts);
///
/// assert!(!requests.complete(first, true)); // overtaken
/// assert_eq!(requests.phase(RequestKey::Posts), RequestPhase::Pending);
/// assert!(requests.complete(second, true));
/// assert_eq!(requests.phase(RequestKey::Posts), RequestPhase::Fulfilled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    next_token: u64,
    in_flight: HashMap<RequestKey, u64>,
    phases: HashMap<RequestKey, RequestPhase>,
}

impl RequestTracker {
    /// Issues a ticket for a new request and marks `key` pending.
    ///
    /// Any earlier request for the same key is superseded.
    pub fn begin(&mut self, key: RequestKey) -> RequestTicket {
        self.next_token += 1;
        let token = self.next_token;

        if let Some(previous) = self.in_flight.insert(key, token) {
            tracing::debug!(?key, previous, token, "request superseded");
        }
        self.phases.insert(key, RequestPhase::Pending);

        RequestTicket { key, token }
    }

    /// Settles the request behind `ticket`.
    ///
    /// Returns false, leaving all state untouched, when the ticket is stale:
    /// a newer request for the key was issued, or the key already settled.
    pub fn complete(&mut self, ticket: RequestTicket, succeeded: bool) -> bool {
        if self.in_flight.get(&ticket.key) != Some(&ticket.token) {
            tracing::debug!(key = ?ticket.key, token = ticket.token, "discarding stale response");
            return false;
        }

        self.in_flight.remove(&ticket.key);
        let phase = if succeeded {
            RequestPhase::Fulfilled
        } else {
            RequestPhase::Rejected
        };
        self.phases.insert(ticket.key, phase);
        true
    }

    #[must_use]
    pub fn phase(&self, key: RequestKey) -> RequestPhase {
        self.phases.get(&key).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_pending(&self, key: RequestKey) -> bool {
        self.in_flight.contains_key(&key)
    }

    /// Number of requests still awaiting a response.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_idle() {
        let requests = RequestTracker::default();
        assert_eq!(requests.phase(RequestKey::Like(1)), RequestPhase::Idle);
        assert!(!requests.is_pending(RequestKey::Like(1)));
    }

    #[test]
    fn keys_are_independent() {
        let mut requests = RequestTracker::default();
        let one = requests.begin(RequestKey::Like(1));
        let two = requests.begin(RequestKey::Like(2));

        assert!(requests.complete(two, true));
        assert!(requests.is_pending(RequestKey::Like(1)));
        assert!(requests.complete(one, false));
        assert_eq!(requests.phase(RequestKey::Like(1)), RequestPhase::Rejected);
        assert_eq!(requests.phase(RequestKey::Like(2)), RequestPhase::Fulfilled);
    }

    #[test]
    fn a_ticket_settles_once() {
        let mut requests = RequestTracker::default();
        let ticket = requests.begin(RequestKey::Subscription);
        assert!(requests.complete(ticket, true));
        assert!(!requests.complete(ticket, false));
        assert_eq!(requests.phase(RequestKey::Subscription), RequestPhase::Fulfilled);
    }

    #[test]
    fn tokens_increase_across_keys() {
        let mut requests = RequestTracker::default();
        let a = requests.begin(RequestKey::Posts);
        let b = requests.begin(RequestKey::Post(3));
        assert!(b.token > a.token);
        assert_eq!(requests.in_flight(), 2);
    }
}
