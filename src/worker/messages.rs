//! Worker message types for the simulated blog API.
//!
//! This module defines the request and response protocol between the plugin and
//! the background worker that plays the remote API. Every request carries a
//! [`RequestTicket`] that the response echoes back, so the plugin can discard
//! answers that were overtaken by a newer request for the same key. Messages
//! also carry tracing context across the thread boundary.

use crate::domain::{Category, Post, PostId, Subscription};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when no OpenTelemetry layer is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// The state domain a request belongs to.
///
/// Requests for the same key supersede each other; requests for different keys
/// are independent (liking post 1 never interferes with liking post 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequestKey {
    /// The full post collection.
    Posts,
    /// A single post for the detail page.
    Post(PostId),
    /// A like on one post.
    Like(PostId),
    /// The newsletter subscription (subscribe and unsubscribe share it).
    Subscription,
}

/// Identifies one issued request.
///
/// `token` is drawn from a single monotonically increasing counter, so a later
/// request always carries a larger token than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestTicket {
    /// What the request is about.
    pub key: RequestKey,

    /// Issue order across all keys.
    pub token: u64,
}

/// Simulated latency of each endpoint, in milliseconds.
pub mod latency {
    pub const FETCH_POSTS_MS: u64 = 1000;
    pub const FETCH_POST_MS: u64 = 500;
    pub const LIKE_POST_MS: u64 = 300;
    pub const SUBSCRIPTION_MS: u64 = 1000;
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    fetch_posts(FetchPosts { ticket: RequestTicket }),
    fetch_post(FetchPost { ticket: RequestTicket, id: PostId }),
    like_post(LikePost { ticket: RequestTicket, id: PostId }),
    subscribe(Subscribe { ticket: RequestTicket, email: String }),
    unsubscribe(Unsubscribe { ticket: RequestTicket, email: String }),
}

/// Requests sent from the plugin to the worker.
///
/// Each variant is one simulated API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the whole post collection.
    FetchPosts {
        ticket: RequestTicket,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fetch one post by id.
    FetchPost {
        ticket: RequestTicket,
        id: PostId,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Record a like on a post.
    LikePost {
        ticket: RequestTicket,
        id: PostId,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Subscribe an address to the newsletter.
    Subscribe {
        ticket: RequestTicket,
        email: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Remove an address from the newsletter.
    Unsubscribe {
        ticket: RequestTicket,
        email: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// The ticket this request was issued under.
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::FetchPosts { ticket, .. }
            | Self::FetchPost { ticket, .. }
            | Self::LikePost { ticket, .. }
            | Self::Subscribe { ticket, .. }
            | Self::Unsubscribe { ticket, .. } => *ticket,
        }
    }

    /// Trace context attached when the message was built, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchPosts { trace_context, .. }
            | Self::FetchPost { trace_context, .. }
            | Self::LikePost { trace_context, .. }
            | Self::Subscribe { trace_context, .. }
            | Self::Unsubscribe { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// How long the simulated API takes to answer this request.
    ///
    /// ```
    /// use inkpane::worker::{RequestKey, RequestTicket, WorkerMessage};
    ///
    /// let ticket = RequestTicket { key: RequestKey::Like(1), token: 1 };
    /// assert_eq!(WorkerMessage::like_post(ticket, 1).latency_ms(), 300);
    /// ```
    #[must_use]
    pub const fn latency_ms(&self) -> u64 {
        match self {
            Self::FetchPosts { .. } => latency::FETCH_POSTS_MS,
            Self::FetchPost { .. } => latency::FETCH_POST_MS,
            Self::LikePost { .. } => latency::LIKE_POST_MS,
            Self::Subscribe { .. } | Self::Unsubscribe { .. } => latency::SUBSCRIPTION_MS,
        }
    }
}

/// Responses sent from the worker back to the plugin.
///
/// Every variant echoes the ticket of the request it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The full post collection with the category list.
    PostsLoaded {
        ticket: RequestTicket,
        posts: Vec<Post>,
        categories: Vec<Category>,
    },

    /// Result of a single-post lookup. `post` is `None` when the id is unknown.
    PostLoaded {
        ticket: RequestTicket,
        id: PostId,
        post: Option<Post>,
    },

    /// A like was recorded; `likes` is the post's new count.
    PostLiked {
        ticket: RequestTicket,
        id: PostId,
        likes: u32,
    },

    /// The address is now subscribed.
    Subscribed {
        ticket: RequestTicket,
        subscription: Subscription,
    },

    /// The address is no longer subscribed.
    Unsubscribed {
        ticket: RequestTicket,
        subscription: Subscription,
    },

    /// The request was rejected.
    Error {
        ticket: RequestTicket,

        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    /// The ticket of the request this response answers.
    #[must_use]
    pub const fn ticket(&self) -> RequestTicket {
        match self {
            Self::PostsLoaded { ticket, .. }
            | Self::PostLoaded { ticket, .. }
            | Self::PostLiked { ticket, .. }
            | Self::Subscribed { ticket, .. }
            | Self::Unsubscribed { ticket, .. }
            | Self::Error { ticket, .. } => *ticket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latencies_follow_endpoint() {
        let ticket = RequestTicket { key: RequestKey::Posts, token: 1 };
        assert_eq!(WorkerMessage::fetch_posts(ticket).latency_ms(), 1000);
        assert_eq!(WorkerMessage::fetch_post(ticket, 1).latency_ms(), 500);
        assert_eq!(WorkerMessage::subscribe(ticket, "a@b.com".into()).latency_ms(), 1000);
        assert_eq!(WorkerMessage::unsubscribe(ticket, "a@b.com".into()).latency_ms(), 1000);
    }

    #[test]
    fn messages_survive_json_transport() {
        let ticket = RequestTicket { key: RequestKey::Post(4), token: 9 };
        let message = WorkerMessage::fetch_post(ticket, 4);
        let json = serde_json::to_string(&message).unwrap();
        assert!(!json.contains("trace_context"));

        let decoded: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.ticket(), ticket);
    }
}
