//! Background worker playing the remote blog API.
//!
//! The plugin never reads the catalog directly: every fetch, like and
//! subscription goes through this worker, on a Zellij worker thread inside the
//! plugin or in-process under the headless runtime.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with request tickets and trace context
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::BlogWorker;
pub use messages::{latency, RequestKey, RequestTicket, TraceContext, WorkerMessage, WorkerResponse};
