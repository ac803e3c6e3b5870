//! In-memory catalog backend.
//!
//! Holds the whole catalog in a `Vec` and serves every request from it. This is
//! the only backend the plugin ships; tests substitute their own [`Catalog`]
//! implementations to exercise failure paths.

use super::backend::Catalog;
use super::seed;
use crate::domain::error::{InkpaneError, Result};
use crate::domain::{Category, Post, PostId};

/// Catalog backed by an in-memory post list.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the single worker, which
/// matches the Zellij plugin architecture.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    posts: Vec<Post>,
    categories: Vec<Category>,
}

impl MemoryCatalog {
    /// Creates a catalog over the given posts and categories.
    #[must_use]
    pub const fn new(posts: Vec<Post>, categories: Vec<Category>) -> Self {
        Self { posts, categories }
    }

    /// Creates a catalog populated with the seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::posts(), seed::categories())
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog for MemoryCatalog {
    fn all_posts(&self) -> Result<Vec<Post>> {
        tracing::debug!(count = self.posts.len(), "serving all posts");
        Ok(self.posts.clone())
    }

    fn post(&self, id: PostId) -> Result<Option<Post>> {
        let found = self.posts.iter().find(|p| p.id == id).cloned();
        tracing::debug!(post_id = id, found = found.is_some(), "serving post");
        Ok(found)
    }

    fn like(&mut self, id: PostId) -> Result<u32> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| InkpaneError::Catalog(format!("post {id} not found")))?;

        post.likes = post.likes.saturating_add(1);
        tracing::debug!(post_id = id, likes = post.likes, "like recorded");
        Ok(post.likes)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }
}
