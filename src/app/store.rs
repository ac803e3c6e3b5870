//! Client-side copy of the catalog.
//!
//! [`PostStore`] is the canonical collection the UI reads from. It changes in
//! exactly three ways: wholesale replacement of posts and categories after a
//! successful fetch, a like count overwrite after a like resolves, and a
//! bookmark toggle.

use crate::domain::{Category, Post, PostId};

#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    categories: Vec<Category>,
}

impl PostStore {
    #[must_use]
    pub const fn new(posts: Vec<Post>, categories: Vec<Category>) -> Self {
        Self { posts, categories }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Looks up a category by slug, ignoring case.
    #[must_use]
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug.eq_ignore_ascii_case(slug))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        tracing::debug!(old = self.posts.len(), new = posts.len(), "post store replaced");
        self.posts = posts;
    }

    /// Replaces the category list.
    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Overwrites the like count of one post. Returns false if the post is unknown.
    pub fn set_likes(&mut self, id: PostId, likes: u32) -> bool {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .map(|post| post.likes = likes)
            .is_some()
    }

    /// Flips the bookmark flag of one post and returns the new value.
    pub fn toggle_bookmark(&mut self, id: PostId) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| p.id == id)?;
        post.bookmarked = !post.bookmarked;
        Some(post.bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn store() -> PostStore {
        PostStore::new(seed::posts(), seed::categories())
    }

    #[test]
    fn toggling_twice_restores_the_flag() {
        let mut store = store();
        assert_eq!(store.toggle_bookmark(2), Some(true));
        assert_eq!(store.toggle_bookmark(2), Some(false));
        assert!(!store.get(2).unwrap().bookmarked);
    }

    #[test]
    fn set_likes_touches_only_the_target() {
        let mut store = store();
        assert!(store.set_likes(1, 7));
        assert_eq!(store.get(1).unwrap().likes, 7);
        assert_eq!(store.get(2).unwrap().likes, 35);
        assert!(!store.set_likes(99, 1));
    }

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(store().category("TRAVEL").map(|c| c.id.as_str()), Some("4"));
    }
}
