//! Serializable point-in-time view of a registry.
//!
//! Handles are flattened to creation indices so the output is stable across
//! processes and free of registry UUIDs, except for the top-level `registry`.

use crate::model::id::RegistryId;
use crate::repo::registry::Registry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub registry: RegistryId,
    pub authors: Vec<AuthorRecord>,
    pub magazines: Vec<MagazineRecord>,
    pub articles: Vec<ArticleRecord>,
    /// Index of `Registry::top_publisher()`, when there is one.
    pub top_publisher: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub index: usize,
    pub name: Option<String>,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineRecord {
    pub index: usize,
    pub name: String,
    pub category: String,
    pub article_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub index: usize,
    pub author: Option<usize>,
    pub magazine: Option<usize>,
    pub title: Option<String>,
}

impl Registry {
    /// Captures every entity and its resolved links.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let authors = self
            .authors()
            .iter()
            .map(|author| AuthorRecord {
                index: author.id().index(),
                name: author.name().map(str::to_string),
                article_count: author.id().articles(self).len(),
            })
            .collect();

        let magazines = self
            .magazines()
            .iter()
            .map(|magazine| MagazineRecord {
                index: magazine.id().index(),
                name: magazine.name().to_string(),
                category: magazine.category().to_string(),
                article_count: magazine.id().articles(self).len(),
            })
            .collect();

        let articles = self
            .articles()
            .iter()
            .map(|article| ArticleRecord {
                index: article.id().index(),
                author: article.author().map(|id| id.index()),
                magazine: article.magazine().map(|id| id.index()),
                title: article.title().map(str::to_string),
            })
            .collect();

        RegistrySnapshot {
            registry: self.id(),
            authors,
            magazines,
            articles,
            top_publisher: self.top_publisher().map(|id| id.index()),
        }
    }
}
