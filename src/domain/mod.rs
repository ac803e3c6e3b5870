//! Domain layer for the inkpane plugin.
//!
//! This module contains the core data types and pure rules of the blog reader,
//! independent of Zellij APIs, timers, or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`post`]: Post and category records
//! - [`filter`]: Search/category predicate over posts
//! - [`notification`]: Transient status messages
//! - [`newsletter`]: Subscription record and address validation

pub mod error;
pub mod filter;
pub mod newsletter;
pub mod notification;
pub mod post;

pub use error::{InkpaneError, Result};
pub use filter::{filter_posts, matches, FilterCriteria};
pub use newsletter::{validate_email, Subscription};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use post::{Category, Post, PostId};
