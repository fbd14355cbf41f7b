//! Magazine-side queries and registry-wide ranking.

use crate::model::article::Article;
use crate::model::id::{ArticleId, AuthorId, MagazineId};
use crate::repo::registry::Registry;
use std::collections::HashSet;

/// Authors need strictly more articles than this to count as contributing.
pub const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

impl MagazineId {
    /// Articles published in this magazine, in creation order.
    pub fn articles(self, registry: &Registry) -> Vec<ArticleId> {
        self.published(registry).map(Article::id).collect()
    }

    /// Distinct authors of this magazine's articles, in first-seen order.
    pub fn contributors(self, registry: &Registry) -> Vec<AuthorId> {
        let mut seen = HashSet::new();
        self.published(registry)
            .filter_map(Article::author)
            .filter(|author| seen.insert(*author))
            .collect()
    }

    /// Titles in creation order, `None` in a slot whose title is unset.
    ///
    /// Returns `None` when the magazine has no articles.
    pub fn article_titles(self, registry: &Registry) -> Option<Vec<Option<&str>>> {
        let titles: Vec<Option<&str>> = self.published(registry).map(Article::title).collect();
        if titles.is_empty() {
            return None;
        }
        Some(titles)
    }

    /// Authors with more than two articles here, in first-seen order.
    ///
    /// Returns `None` when the magazine has no articles or nobody qualifies.
    pub fn contributing_authors(self, registry: &Registry) -> Option<Vec<AuthorId>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        let mut any_article = false;
        for article in self.published(registry) {
            any_article = true;
            let Some(author) = article.author() else {
                continue;
            };
            match counts.iter_mut().find(|(seen, _)| *seen == author) {
                Some((_, count)) => *count += 1,
                None => counts.push((author, 1)),
            }
        }
        if !any_article {
            return None;
        }

        let prolific: Vec<AuthorId> = counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE)
            .map(|(author, _)| author)
            .collect();
        if prolific.is_empty() {
            return None;
        }
        Some(prolific)
    }

    fn published(self, registry: &Registry) -> impl Iterator<Item = &Article> + '_ {
        registry
            .articles()
            .iter()
            .filter(move |article| article.magazine() == Some(self))
    }
}

impl Registry {
    /// Magazine with the most articles.
    ///
    /// Ties keep the earliest magazine. Returns `None` when there are no
    /// articles, no magazines, or no magazine has any article.
    pub fn top_publisher(&self) -> Option<MagazineId> {
        if self.articles().is_empty() || self.magazines().is_empty() {
            return None;
        }

        let mut top = None;
        let mut max_count = 0;
        for magazine in self.magazines() {
            let count = magazine.id().published(self).count();
            if count > max_count {
                max_count = count;
                top = Some(magazine.id());
            }
        }
        top
    }
}
