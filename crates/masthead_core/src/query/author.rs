//! Author-side queries.

use crate::model::article::Article;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::repo::registry::Registry;
use std::collections::HashSet;

impl AuthorId {
    /// Articles written by this author, in creation order.
    pub fn articles(self, registry: &Registry) -> Vec<ArticleId> {
        registry
            .articles()
            .iter()
            .filter(|article| article.author() == Some(self))
            .map(Article::id)
            .collect()
    }

    /// Distinct magazines this author wrote for, in first-seen order.
    pub fn magazines(self, registry: &Registry) -> Vec<MagazineId> {
        let mut seen = HashSet::new();
        registry
            .articles()
            .iter()
            .filter(|article| article.author() == Some(self))
            .filter_map(Article::magazine)
            .filter(|magazine| seen.insert(*magazine))
            .collect()
    }

    /// Creates an article by this author. See `Registry::add_article`.
    pub fn add_article(
        self,
        registry: &mut Registry,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ArticleId {
        registry.add_article(self, magazine, title)
    }

    /// Distinct categories of `magazines()`, in the same order.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(self, registry: &Registry) -> Option<Vec<&str>> {
        if self.articles(registry).is_empty() {
            return None;
        }

        let mut topics: Vec<&str> = Vec::new();
        for magazine in self.magazines(registry) {
            let Some(category) = registry.magazine(magazine).map(|m| m.category()) else {
                continue;
            };
            if !topics.contains(&category) {
                topics.push(category);
            }
        }
        Some(topics)
    }
}
