//! View model computation.
//!
//! Turns [`AppState`] into a [`UIViewModel`]: resolves theme colors, picks the
//! body state (loading, error, empty, list or article), wraps article text to
//! the pane width and builds the context-sensitive footer.

use super::handler::RELATED_LIMIT;
use super::modes::{InputMode, Page};
use super::state::{AppState, DetailStatus};
use crate::catalog::{related_posts, trending_topics, CatalogStats};
use crate::domain::Post;
use crate::ui::helpers::{html_to_blocks, match_ranges, wrap, Block};
use crate::ui::icons::Glyph;
use crate::ui::viewmodel::{
    ArticleLine, Body, CategoryTab, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListInfo,
    NewsletterInfo, SearchBarInfo, StatsInfo, ToastInfo, UIViewModel,
};
use crate::worker::RequestKey;

/// Columns kept free on each side of the article text.
const ARTICLE_MARGIN: usize = 2;

impl AppState {
    /// Computes the view model for a pane of `cols` columns.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: self.header_info(),
            stats: self.stats_info(),
            categories: self.category_tabs(),
            search_bar: SearchBarInfo {
                input: self.search_input.clone(),
                focused: self.input_mode == InputMode::Search,
                pending: self.search_input != self.criteria.query,
            },
            body: self.body(cols),
            newsletter: NewsletterInfo {
                input: self.email_input.clone(),
                focused: self.input_mode == InputMode::Subscribe,
                subscribed: self
                    .subscription
                    .subscribed
                    .then(|| self.subscription.email.clone()),
                loading: self.newsletter_loading(),
                flash: self.flash.get().map(|f| ToastInfo {
                    kind: f.kind,
                    message: f.message.clone(),
                }),
            },
            toasts: self
                .notifications
                .as_slice()
                .iter()
                .map(|n| ToastInfo {
                    kind: n.kind,
                    message: n.message.clone(),
                })
                .collect(),
            footer: FooterInfo {
                keybindings: self.keybindings(),
            },
        }
    }

    fn header_info(&self) -> HeaderInfo {
        let count = self.visible.len();
        let mut subtitle = format!("{count} {}", if count == 1 { "article" } else { "articles" });

        if let Some(slug) = &self.criteria.category {
            let name = self.store.category(slug).map_or(slug.as_str(), |c| c.name.as_str());
            subtitle.push_str(&format!(" in {name}"));
        }
        if !self.criteria.query.is_empty() {
            subtitle.push_str(&format!(" matching \"{}\"", self.criteria.query));
        }

        HeaderInfo {
            title: format!("{} Inkpane", self.glyphs.resolve(Glyph::Article)),
            subtitle,
        }
    }

    fn stats_info(&self) -> Option<StatsInfo> {
        if !self.criteria.query.is_empty() || self.store.is_empty() || self.page != Page::List {
            return None;
        }

        let stats = CatalogStats::from_posts(self.store.posts());
        Some(StatsInfo {
            posts: stats.posts,
            authors: stats.authors,
            categories: stats.categories,
            trending: trending_topics(self.store.posts())
                .into_iter()
                .map(|t| (t.name.to_string(), t.count))
                .collect(),
        })
    }

    fn category_tabs(&self) -> Vec<CategoryTab> {
        self.store
            .categories()
            .iter()
            .enumerate()
            .map(|(i, category)| CategoryTab {
                shortcut: i + 1,
                name: category.name.clone(),
                color: self.theme.category_color(&category.color).to_string(),
                active: self
                    .criteria
                    .category
                    .as_deref()
                    .is_some_and(|slug| slug.eq_ignore_ascii_case(&category.slug)),
            })
            .collect()
    }

    fn category_color_of(&self, post: &Post) -> String {
        let tag = self.store.category(&post.category).map_or("", |c| c.color.as_str());
        self.theme.category_color(tag).to_string()
    }

    fn body(&self, cols: usize) -> Body {
        match self.detail_status() {
            Some(DetailStatus::Ready(post)) => Body::Detail(self.detail_info(post, cols)),
            Some(DetailStatus::Loading) => Body::Loading("Loading article...".to_string()),
            Some(DetailStatus::NotFound) => Body::Empty(EmptyState {
                message: "Article not found".to_string(),
                subtitle: "The article you're looking for doesn't exist. Press esc to go back.".to_string(),
            }),
            Some(DetailStatus::Failed(error)) => Body::Error(EmptyState {
                message: error.to_string(),
                subtitle: "Press r to try again or esc to go back.".to_string(),
            }),
            None => self.list_body(),
        }
    }

    fn list_body(&self) -> Body {
        if let Some(error) = &self.posts_error {
            let subtitle = if self.posts_loading() {
                "Retrying...".to_string()
            } else {
                "Press r to try again or x to dismiss.".to_string()
            };
            return Body::Error(EmptyState {
                message: error.clone(),
                subtitle,
            });
        }

        if self.store.is_empty() && self.posts_loading() {
            return Body::Loading("Loading articles...".to_string());
        }

        if self.visible.is_empty() {
            return Body::Empty(EmptyState {
                message: "No articles found".to_string(),
                subtitle: "Try adjusting your search or category. Press c to clear filters.".to_string(),
            });
        }

        let items = self
            .visible_posts()
            .into_iter()
            .enumerate()
            .map(|(i, post)| DisplayItem {
                title: post.title.clone(),
                meta: meta_line(post),
                category: post.category.clone(),
                category_color: self.category_color_of(post),
                likes: post.likes,
                bookmarked: post.bookmarked,
                is_selected: i == self.selected_index,
                highlight_ranges: match_ranges(&post.title, &self.criteria.query),
            })
            .collect();

        Body::List(ListInfo {
            items,
            selected_index: self.selected_index,
        })
    }

    fn detail_info(&self, post: &Post, cols: usize) -> DetailInfo {
        let text_width = cols.saturating_sub(ARTICLE_MARGIN * 2).max(20);

        let mut lines = Vec::new();
        for block in html_to_blocks(&post.content) {
            if !lines.is_empty() {
                lines.push(ArticleLine::Blank);
            }
            match block {
                Block::Heading(text) => lines.extend(wrap(&text, text_width).into_iter().map(ArticleLine::Heading)),
                Block::Paragraph(text) => lines.extend(wrap(&text, text_width).into_iter().map(ArticleLine::Text)),
            }
        }

        DetailInfo {
            title: post.title.clone(),
            meta: meta_line(post),
            category: post.category.clone(),
            category_color: self.category_color_of(post),
            likes: post.likes,
            bookmarked: post.bookmarked,
            liking: self.requests.is_pending(RequestKey::Like(post.id)),
            scroll: self.detail_scroll.min(lines.len().saturating_sub(1)),
            lines,
            related: related_posts(self.store.posts(), post, RELATED_LIMIT)
                .into_iter()
                .map(|p| p.title.clone())
                .collect(),
        }
    }

    fn keybindings(&self) -> String {
        match self.input_mode {
            InputMode::Search => "type to search | enter: apply | esc: done".to_string(),
            InputMode::Subscribe => "type your email | enter: subscribe | esc: cancel".to_string(),
            InputMode::Normal => match self.page {
                Page::Detail(_) => {
                    "j/k: scroll | l: like | b: bookmark | 1-2: related | esc: back | q: close".to_string()
                }
                Page::List => {
                    let mut keys = String::from(
                        "j/k: move | enter: open | l: like | b: bookmark | /: search | 0-9: category | t: trending",
                    );
                    if self.posts_error.is_some() {
                        keys.push_str(" | r: retry");
                    }
                    if self.subscription.subscribed {
                        keys.push_str(" | u: unsubscribe");
                    } else {
                        keys.push_str(" | n: newsletter");
                    }
                    keys.push_str(" | T: theme | q: close");
                    keys
                }
            },
        }
    }
}

fn meta_line(post: &Post) -> String {
    format!("{} · {} · {}", post.author, post.date, post.read_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PostStore, Settings};
    use crate::catalog::seed;
    use crate::ui::icons::GlyphSet;
    use crate::ui::theme::Theme;

    fn seeded() -> AppState {
        let store = PostStore::new(seed::posts(), seed::categories());
        AppState::with_store(store, Theme::default(), GlyphSet::default(), Settings::default())
    }

    #[test]
    fn header_reports_count_and_category() {
        let mut state = seeded();
        state.select_category(Some("design"));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.subtitle, "2 articles in Design");
        assert!(vm.categories[1].active);
    }

    #[test]
    fn stats_hide_while_searching() {
        let mut state = seeded();
        let stats = state.compute_viewmodel(24, 80).stats.unwrap();
        assert_eq!((stats.posts, stats.authors, stats.categories), (6, 6, 4));
        assert_eq!(stats.trending[0], ("Design".to_string(), 2));

        state.search_for("css");
        assert!(state.compute_viewmodel(24, 80).stats.is_none());
    }

    #[test]
    fn list_rows_carry_title_highlights() {
        let mut state = seeded();
        state.search_for("css");
        let Body::List(list) = state.compute_viewmodel(24, 80).body else {
            panic!("expected list");
        };
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].highlight_ranges, vec![(17, 20)]);
    }

    #[test]
    fn no_results_shows_empty_state() {
        let mut state = seeded();
        state.search_for("zzz-no-match");
        assert!(matches!(state.compute_viewmodel(24, 80).body, Body::Empty(_)));
    }

    #[test]
    fn article_lines_fit_the_pane() {
        let mut state = seeded();
        state.open_post(1);
        let Body::Detail(detail) = state.compute_viewmodel(24, 40).body else {
            panic!("expected detail");
        };
        assert_eq!(detail.lines[0], ArticleLine::Heading("Introduction".to_string()));
        assert!(detail.lines.iter().all(|line| match line {
            ArticleLine::Heading(t) | ArticleLine::Text(t) => t.chars().count() <= 36,
            ArticleLine::Blank => true,
        }));
        assert_eq!(detail.related.len(), 1);
    }

    #[test]
    fn scroll_is_clamped_to_the_article() {
        let mut state = seeded();
        state.open_post(3);
        state.detail_scroll = 10_000;
        let Body::Detail(detail) = state.compute_viewmodel(24, 80).body else {
            panic!("expected detail");
        };
        assert_eq!(detail.scroll, detail.lines.len() - 1);
    }

    #[test]
    fn footer_offers_unsubscribe_once_subscribed() {
        let mut state = seeded();
        assert!(state.compute_viewmodel(24, 80).footer.keybindings.contains("n: newsletter"));
        state.subscription = crate::domain::Subscription::active("a@b.com");
        assert!(state.compute_viewmodel(24, 80).footer.keybindings.contains("u: unsubscribe"));
    }
}
