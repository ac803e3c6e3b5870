//! Aggregates shown alongside the post list.
//!
//! Everything here is derived from a post slice on demand. Nothing is cached,
//! so the numbers always agree with the store they were computed from.

use crate::domain::Post;
use std::collections::BTreeSet;

/// Catalog-wide counts for the stats strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub posts: usize,
    pub authors: usize,
    pub categories: usize,
}

impl CatalogStats {
    /// Counts posts, distinct authors and distinct category names.
    ///
    /// ```
    /// use inkpane::catalog::{seed, CatalogStats};
    ///
    /// let stats = CatalogStats::from_posts(&seed::posts());
    /// assert_eq!((stats.posts, stats.authors, stats.categories), (6, 6, 4));
    /// ```
    #[must_use]
    pub fn from_posts(posts: &[Post]) -> Self {
        let authors: BTreeSet<&str> = posts.iter().map(|p| p.author.as_str()).collect();
        let categories: BTreeSet<String> =
            posts.iter().map(|p| p.category.to_lowercase()).collect();

        Self {
            posts: posts.len(),
            authors: authors.len(),
            categories: categories.len(),
        }
    }
}

/// A trending topic and the number of posts it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCount {
    pub name: &'static str,
    pub count: usize,
}

enum Rule {
    ContentContains(&'static str),
    InCategory(&'static str),
}

const TOPICS: &[(&str, Rule)] = &[
    ("React", Rule::ContentContains("react")),
    ("Design", Rule::InCategory("design")),
    ("JavaScript", Rule::ContentContains("javascript")),
    ("Remote Work", Rule::ContentContains("remote")),
];

impl Rule {
    fn applies(&self, post: &Post) -> bool {
        match self {
            Self::ContentContains(needle) => post.content.to_lowercase().contains(needle),
            Self::InCategory(slug) => post.in_category(slug),
        }
    }
}

/// Counts posts per trending topic, most popular first.
///
/// Topics with no posts are left out. Ties keep the fixed topic order.
///
/// ```
/// use inkpane::catalog::{seed, trending_topics};
///
/// let names: Vec<_> = trending_topics(&seed::posts()).iter().map(|t| t.name).collect();
/// assert_eq!(names, vec!["Design", "React", "Remote Work"]);
/// ```
#[must_use]
pub fn trending_topics(posts: &[Post]) -> Vec<TopicCount> {
    let mut topics: Vec<TopicCount> = TOPICS
        .iter()
        .map(|(name, rule)| TopicCount {
            name: *name,
            count: posts.iter().filter(|p| rule.applies(p)).count(),
        })
        .filter(|topic| topic.count > 0)
        .collect();

    // sort_by is stable
    topics.sort_by(|a, b| b.count.cmp(&a.count));
    topics
}

/// Returns up to `limit` other posts from the same category as `post`.
#[must_use]
pub fn related_posts<'a>(posts: &'a [Post], post: &Post, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.id != post.id && p.in_category(&post.category))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    #[test]
    fn trending_counts_match_seed() {
        let topics = trending_topics(&seed::posts());
        assert_eq!(
            topics,
            vec![
                TopicCount { name: "Design", count: 2 },
                TopicCount { name: "React", count: 1 },
                TopicCount { name: "Remote Work", count: 1 },
            ]
        );
    }

    #[test]
    fn trending_on_empty_catalog_is_empty() {
        assert!(trending_topics(&[]).is_empty());
    }

    #[test]
    fn related_posts_exclude_self_and_other_categories() {
        let posts = seed::posts();
        let related: Vec<u32> = related_posts(&posts, &posts[0], 2).iter().map(|p| p.id).collect();
        assert_eq!(related, vec![3]);

        let none = related_posts(&posts, &posts[5], 2);
        assert!(none.is_empty());
    }

    #[test]
    fn stats_on_empty_catalog_are_zero() {
        assert_eq!(CatalogStats::from_posts(&[]), CatalogStats::default());
    }
}
