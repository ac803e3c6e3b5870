//! Worker implementation answering simulated API requests.
//!
//! The worker owns the catalog and the newsletter mailing list. It does not
//! sleep: latency is applied before a message reaches it, so every call here
//! answers immediately. The Zellij thread binding lives in the plugin binary;
//! this type is plain Rust and is also driven in-process by the headless
//! runtime.

use crate::catalog::{Catalog, MemoryCatalog};
use crate::domain::error::Result;
use crate::domain::newsletter::INVALID_EMAIL;
use crate::domain::{validate_email, PostId, Subscription};
use crate::worker::{RequestTicket, WorkerMessage, WorkerResponse};
use std::collections::BTreeSet;

/// Worker state for the simulated blog API.
pub struct BlogWorker {
    catalog: Box<dyn Catalog>,
    subscribers: BTreeSet<String>,
}

impl Default for BlogWorker {
    fn default() -> Self {
        Self::new(Box::new(MemoryCatalog::seeded()))
    }
}

impl BlogWorker {
    /// Creates a worker serving from `catalog`.
    #[must_use]
    pub fn new(catalog: Box<dyn Catalog>) -> Self {
        Self {
            catalog,
            subscribers: BTreeSet::new(),
        }
    }

    /// Returns true when `email` is on the mailing list.
    #[must_use]
    pub fn is_subscribed(&self, email: &str) -> bool {
        self.subscribers.contains(email.trim())
    }

    /// Helper for turning catalog results into responses with consistent logging.
    fn respond<T, F>(operation: &str, ticket: RequestTicket, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "request served");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "request failed");
                WorkerResponse::Error {
                    ticket,
                    message: e.to_string(),
                }
            }
        }
    }

    fn handle_fetch_posts(&self, ticket: RequestTicket) -> WorkerResponse {
        let result = self
            .catalog
            .all_posts()
            .and_then(|posts| self.catalog.categories().map(|categories| (posts, categories)));

        Self::respond("fetch posts", ticket, result, |(posts, categories)| {
            tracing::debug!(post_count = posts.len(), category_count = categories.len(), "posts fetched");
            WorkerResponse::PostsLoaded {
                ticket,
                posts,
                categories,
            }
        })
    }

    fn handle_fetch_post(&self, ticket: RequestTicket, id: PostId) -> WorkerResponse {
        Self::respond("fetch post", ticket, self.catalog.post(id), |post| {
            WorkerResponse::PostLoaded { ticket, id, post }
        })
    }

    fn handle_like_post(&mut self, ticket: RequestTicket, id: PostId) -> WorkerResponse {
        Self::respond("like post", ticket, self.catalog.like(id), |likes| {
            WorkerResponse::PostLiked { ticket, id, likes }
        })
    }

    fn handle_subscribe(&mut self, ticket: RequestTicket, email: String) -> WorkerResponse {
        if validate_email(&email).is_err() {
            tracing::debug!("subscription rejected");
            return WorkerResponse::Error {
                ticket,
                message: INVALID_EMAIL.to_string(),
            };
        }

        let email = email.trim().to_string();
        self.subscribers.insert(email.clone());
        tracing::debug!(subscriber_count = self.subscribers.len(), "address subscribed");

        WorkerResponse::Subscribed {
            ticket,
            subscription: Subscription::active(email),
        }
    }

    fn handle_unsubscribe(&mut self, ticket: RequestTicket, email: String) -> WorkerResponse {
        let email = email.trim().to_string();
        let removed = self.subscribers.remove(&email);
        tracing::debug!(removed, "address unsubscribed");

        WorkerResponse::Unsubscribed {
            ticket,
            subscription: Subscription::inactive(email),
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Spans created while the returned guard is alive are linked to the span
    /// that built the message on the plugin side.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a request and returns its response.
    ///
    /// Never panics and never drops a request: every message yields exactly one
    /// response carrying the message's ticket.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let ticket = message.ticket();
        let span = tracing::debug_span!("worker_handle_message", key = ?ticket.key, token = ticket.token);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchPosts { ticket, .. } => self.handle_fetch_posts(ticket),
            WorkerMessage::FetchPost { ticket, id, .. } => self.handle_fetch_post(ticket, id),
            WorkerMessage::LikePost { ticket, id, .. } => self.handle_like_post(ticket, id),
            WorkerMessage::Subscribe { ticket, email, .. } => self.handle_subscribe(ticket, email),
            WorkerMessage::Unsubscribe { ticket, email, .. } => self.handle_unsubscribe(ticket, email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::RequestKey;

    fn ticket(key: RequestKey) -> RequestTicket {
        RequestTicket { key, token: 1 }
    }

    #[test]
    fn fetch_posts_returns_seed() {
        let mut worker = BlogWorker::default();
        let response = worker.handle_message(WorkerMessage::fetch_posts(ticket(RequestKey::Posts)));
        match response {
            WorkerResponse::PostsLoaded { posts, categories, .. } => {
                assert_eq!(posts.len(), 6);
                let slugs: Vec<_> = categories.iter().map(|c| c.slug.as_str()).collect();
                assert_eq!(slugs, vec!["technology", "design", "lifestyle", "travel"]);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unknown_post_is_not_found() {
        let mut worker = BlogWorker::default();
        let t = ticket(RequestKey::Post(77));
        let response = worker.handle_message(WorkerMessage::fetch_post(t, 77));
        assert_eq!(
            response,
            WorkerResponse::PostLoaded {
                ticket: t,
                id: 77,
                post: None
            }
        );
    }

    #[test]
    fn like_increments_catalog_count() {
        let mut worker = BlogWorker::default();
        let t = ticket(RequestKey::Like(1));
        let response = worker.handle_message(WorkerMessage::like_post(t, 1));
        assert_eq!(response, WorkerResponse::PostLiked { ticket: t, id: 1, likes: 43 });
    }

    #[test]
    fn invalid_address_is_rejected_by_the_api() {
        let mut worker = BlogWorker::default();
        let t = ticket(RequestKey::Subscription);
        let response = worker.handle_message(WorkerMessage::subscribe(t, "nope".into()));
        assert_eq!(
            response,
            WorkerResponse::Error {
                ticket: t,
                message: INVALID_EMAIL.to_string()
            }
        );
    }

    #[test]
    fn subscribe_then_unsubscribe() {
        let mut worker = BlogWorker::default();
        let t = ticket(RequestKey::Subscription);

        let response = worker.handle_message(WorkerMessage::subscribe(t, " a@b.com ".into()));
        assert!(matches!(response, WorkerResponse::Subscribed { ref subscription, .. } if subscription.subscribed));
        assert!(worker.is_subscribed("a@b.com"));

        worker.handle_message(WorkerMessage::unsubscribe(t, "a@b.com".into()));
        assert!(!worker.is_subscribed("a@b.com"));
    }
}
