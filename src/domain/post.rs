//! Post and category domain models.
//!
//! A [`Post`] is a single article record. Everything about a post is fixed at
//! seed time except its like count and bookmark flag, which change only through
//! the client-side post store.

use serde::{Deserialize, Serialize};

/// Stable post identifier.
pub type PostId = u32;

/// A single article in the catalog.
///
/// `content` holds the article body as an HTML fragment. `category` is the
/// category *name* (for example `"Design"`); filtering compares it against a
/// category slug case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier assigned by the catalog.
    pub id: PostId,

    /// Headline shown in the list and on the article page.
    pub title: String,

    /// One-paragraph summary.
    pub excerpt: String,

    /// Article body as an HTML fragment.
    pub content: String,

    /// Display name of the author.
    pub author: String,

    /// Publication date as displayed, e.g. `Dec 15, 2024`.
    pub date: String,

    /// Estimated reading time, e.g. `5 min read`.
    pub read_time: String,

    /// Category name, e.g. `Design`.
    pub category: String,

    /// Cover image URL. Carried through but not rendered in the terminal.
    pub image: String,

    /// Like count as last reported by the API.
    #[serde(default)]
    pub likes: u32,

    /// Client-side bookmark flag.
    #[serde(default)]
    pub bookmarked: bool,
}

impl Post {
    /// Returns true when this post belongs to the category with the given slug.
    ///
    /// ```
    /// # use inkpane::catalog::seed;
    /// let posts = seed::posts();
    /// assert!(posts[1].in_category("design"));
    /// assert!(posts[1].in_category("DESIGN"));
    /// ```
    #[must_use]
    pub fn in_category(&self, slug: &str) -> bool {
        self.category.to_lowercase() == slug.to_lowercase()
    }
}

/// A named grouping of posts.
///
/// `slug` is the unique filter key. `color` is a palette tag (`blue`,
/// `purple`, ...) resolved to a concrete color by the active theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog identifier.
    pub id: String,

    /// Display name, matching `Post::category`.
    pub name: String,

    /// Lowercase filter key.
    pub slug: String,

    /// Short blurb about the category.
    pub description: String,

    /// Palette tag resolved by the theme.
    pub color: String,
}
