//! Search and category filtering over the post collection.
//!
//! Filtering is a boolean predicate applied in collection order: no scoring, no
//! ranking, no indexing. The functions here never mutate their input and are
//! total over any query string, including the empty one.

use super::post::Post;
use serde::{Deserialize, Serialize};

/// The active search text and category selection.
///
/// Both parts are optional in effect: an empty `query` and a `None` category
/// each mean "do not filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively as a substring.
    pub query: String,

    /// Selected category slug.
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Creates criteria from a query and an optional category slug.
    #[must_use]
    pub fn new(query: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            query: query.into(),
            category: category.map(str::to_string),
        }
    }

    /// Returns true when neither the query nor the category is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category.is_none()
    }

    /// Clears the query, leaving the category selection in place.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Clears the category selection, leaving the query in place.
    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Clears both criteria.
    pub fn clear(&mut self) {
        self.clear_query();
        self.clear_category();
    }
}

/// Returns true when `post` satisfies every active criterion.
///
/// The query is matched against title, excerpt, author and content. The
/// category is compared against the post's category name.
#[must_use]
pub fn matches(post: &Post, criteria: &FilterCriteria) -> bool {
    let matches_query = criteria.query.is_empty() || {
        let needle = criteria.query.to_lowercase();
        [&post.title, &post.excerpt, &post.author, &post.content]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    };

    let matches_category = criteria
        .category
        .as_deref()
        .map_or(true, |slug| post.in_category(slug));

    matches_query && matches_category
}

/// Returns the posts matching `criteria`, preserving input order.
///
/// # Example
///
/// ```
/// use inkpane::catalog::seed;
/// use inkpane::domain::{filter_posts, FilterCriteria};
///
/// let posts = seed::posts();
/// let design = filter_posts(&posts, &FilterCriteria::new("", Some("design")));
/// assert_eq!(design.len(), 2);
///
/// let none = filter_posts(&posts, &FilterCriteria::new("zzz-no-match", None));
/// assert!(none.is_empty());
/// ```
#[must_use]
pub fn filter_posts(posts: &[Post], criteria: &FilterCriteria) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| matches(post, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;

    fn ids(posts: &[Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_criteria_keep_everything_in_order() {
        let posts = seed::posts();
        let result = filter_posts(&posts, &FilterCriteria::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn query_matches_any_text_field_case_insensitively() {
        let posts = seed::posts();
        let result = filter_posts(&posts, &FilterCriteria::new("REACT", None));
        assert_eq!(ids(&result), vec![3]);

        let by_author = filter_posts(&posts, &FilterCriteria::new("emma", None));
        assert_eq!(ids(&by_author), vec![4]);
    }

    #[test]
    fn category_matches_slug_case_insensitively() {
        let posts = seed::posts();
        let result = filter_posts(&posts, &FilterCriteria::new("", Some("Technology")));
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn both_criteria_intersect() {
        let posts = seed::posts();
        let query_only = filter_posts(&posts, &FilterCriteria::new("design", None));
        let category_only = filter_posts(&posts, &FilterCriteria::new("", Some("design")));
        let both = filter_posts(&posts, &FilterCriteria::new("design", Some("design")));

        let expected: Vec<u32> = query_only
            .iter()
            .filter(|p| category_only.iter().any(|c| c.id == p.id))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&both), expected);
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let posts = seed::posts();
        let result = filter_posts(&posts, &FilterCriteria::new("", Some("cooking")));
        assert!(result.is_empty());
    }

    #[test]
    fn filtering_does_not_touch_the_source() {
        let posts = seed::posts();
        let before = posts.clone();
        let _ = filter_posts(&posts, &FilterCriteria::new("travel", Some("travel")));
        assert_eq!(posts, before);
    }

    #[test]
    fn clearing_one_criterion_keeps_the_other() {
        let mut criteria = FilterCriteria::new("react", Some("technology"));
        criteria.clear_query();
        assert_eq!(criteria.category.as_deref(), Some("technology"));

        let mut criteria = FilterCriteria::new("react", Some("technology"));
        criteria.clear_category();
        assert_eq!(criteria.query, "react");
        criteria.clear();
        assert!(criteria.is_empty());
    }
}
