//! Catalog layer standing in for the remote blog API.
//!
//! The worker answers every simulated request from a [`Catalog`]. The plugin
//! uses [`MemoryCatalog`] over the fixed seed data; there is no persistence.
//!
//! # Modules
//!
//! - `backend`: Catalog trait abstraction
//! - `memory`: In-memory implementation
//! - `seed`: Fixed seed posts and categories
//! - `stats`: Derived aggregates (stats strip, trending topics, related posts)

pub mod backend;
pub mod memory;
pub mod seed;
pub mod stats;

pub use backend::Catalog;
pub use memory::MemoryCatalog;
pub use stats::{related_posts, trending_topics, CatalogStats, TopicCount};
