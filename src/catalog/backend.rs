//! Catalog backend abstraction.
//!
//! This module defines the [`Catalog`] trait the worker serves requests from.
//! It plays the role of the remote blog API, so every read can fail and every
//! failure is reported as an error rather than a panic.
//!
//! The trait is kept to the operations the worker actually needs: each method
//! maps to one simulated endpoint.

use crate::domain::error::Result;
use crate::domain::{Category, Post, PostId};

/// Source of posts and categories behind the simulated API.
///
/// # Implementations
///
/// - [`MemoryCatalog`](crate::catalog::MemoryCatalog): the seed data held in
///   memory (default)
///
/// # Examples
///
/// ```
/// use inkpane::catalog::{Catalog, MemoryCatalog};
///
/// let mut catalog = MemoryCatalog::seeded();
/// assert_eq!(catalog.all_posts()?.len(), 6);
/// assert!(catalog.post(99)?.is_none());
/// assert_eq!(catalog.like(1)?, 43);
/// # Ok::<(), inkpane::InkpaneError>(())
/// ```
pub trait Catalog: Send {
    /// Returns every post in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    fn all_posts(&self) -> Result<Vec<Post>>;

    /// Looks up a single post.
    ///
    /// Returns `Ok(None)` when no post has that id; a missing post is an
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    fn post(&self, id: PostId) -> Result<Option<Post>>;

    /// Records a like and returns the post's new like count.
    ///
    /// # Errors
    ///
    /// Returns an error if the post does not exist or the write fails.
    fn like(&mut self, id: PostId) -> Result<u32>;

    /// Returns every category.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    fn categories(&self) -> Result<Vec<Category>>;
}
