//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/catalog/worker layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!      Clock ticks ↗         ↑                                  ↓
//!                            └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Input mode and page types
//! - [`state`]: Central application state container
//! - [`store`]: Client-side post collection
//! - [`interaction`]: Request phases and stale-response detection
//! - [`notifications`]: Notification queue and newsletter flash slot
//! - [`timers`]: Virtual-clock timer queue and debouncing
//! - [`runtime`]: In-process runtime for tests and the native binary

pub mod actions;
pub mod handler;
pub mod interaction;
pub mod modes;
pub mod notifications;
pub mod runtime;
pub mod state;
pub mod store;
pub mod timers;
mod view;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use interaction::{RequestPhase, RequestTracker};
pub use modes::{InputMode, Page};
pub use runtime::HeadlessRuntime;
pub use state::{AppState, DetailStatus, Settings};
pub use store::PostStore;
