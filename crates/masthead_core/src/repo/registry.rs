//! Registry arena and its error type.
//!
//! # Responsibility
//! - Construct and retain authors, magazines and articles.
//! - Resolve handles, rejecting those issued elsewhere or out of range.
//! - Emit metadata-only log events for registrations and rejections.
//!
//! # Invariants
//! - Construction never fails: invalid input leaves fields unset (or, for
//!   magazines, stored raw) and the entity is registered anyway.
//! - `try_add_magazine` is the only constructor that refuses to register.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::id::{ArticleId, AuthorId, EntityRef, MagazineId, RegistryId};
use crate::model::magazine::{self, Magazine};
use crate::model::validation::ValidationError;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for registry mutations addressed by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(EntityRef),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(entity) => write!(f, "entity not found in registry: {entity}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of every author, magazine and article.
///
/// Holds no locks. Share it across threads behind a caller-owned mutex.
///
/// A clone is a new registry: it gets a fresh identity and every stored
/// handle is rewritten to it, so handles never cross between the two.
#[derive(Debug)]
pub struct Registry {
    id: RegistryId,
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        let id = Uuid::new_v4();
        debug!(
            "event=registry_cloned module=registry status=ok source={} clone={}",
            self.id, id
        );
        Self {
            id,
            authors: self.authors.iter().map(|a| a.rehome(id)).collect(),
            magazines: self.magazines.iter().map(|m| m.rehome(id)).collect(),
            articles: self.articles.iter().map(|a| a.rehome(id)).collect(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            authors: Vec::new(),
            magazines: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Creates and registers an author.
    ///
    /// An empty `name` is rejected and the author stays nameless.
    pub fn add_author(&mut self, name: impl Into<String>) -> AuthorId {
        let id = AuthorId::new(self.id, self.authors.len());
        let mut author = Author::unnamed(id);
        if let Err(err) = author.set_name(name) {
            log_rejection(EntityRef::Author(id), &err);
        }
        self.authors.push(author);
        debug!("event=author_registered module=registry status=ok author={id}");
        id
    }

    /// Creates and registers a magazine.
    ///
    /// Out-of-range values are stored as given on this first assignment; use
    /// `try_add_magazine` to refuse them instead.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> MagazineId {
        let id = MagazineId::new(self.id, self.magazines.len());
        let magazine = Magazine::new(id, name.into(), category.into());
        if let Err(err) = magazine.validate() {
            log_rejection(EntityRef::Magazine(id), &err);
        }
        self.magazines.push(magazine);
        debug!("event=magazine_registered module=registry status=ok magazine={id}");
        id
    }

    /// Creates and registers a magazine only when both fields are valid.
    ///
    /// # Errors
    /// - `Length` for the first field that breaks its rule. Nothing is
    ///   registered in that case.
    pub fn try_add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        let name = name.into();
        let category = category.into();
        magazine::check_name(&name)?;
        magazine::check_category(&category)?;
        Ok(self.add_magazine(name, category))
    }

    /// Creates and registers an article.
    ///
    /// Each field that fails validation stays unset; the article is
    /// registered regardless. The title cannot be assigned afterwards.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ArticleId {
        let id = ArticleId::new(self.id, self.articles.len());
        let entity = EntityRef::Article(id);
        let mut article = Article::blank(id);

        if self.contains_author(author) {
            article.set_author(author);
        } else {
            log_rejection(entity, &ValidationError::UnknownAuthor(author));
        }
        if self.contains_magazine(magazine) {
            article.set_magazine(magazine);
        } else {
            log_rejection(entity, &ValidationError::UnknownMagazine(magazine));
        }
        if let Err(err) = article.set_title(title) {
            log_rejection(entity, &err);
        }
        article.seal_title();

        self.articles.push(article);
        debug!("event=article_registered module=registry status=ok article={id}");
        id
    }

    /// Points an existing article at another author.
    ///
    /// # Errors
    /// - `NotFound` when `article` does not resolve.
    /// - `Validation(UnknownAuthor)` when `author` does not resolve; the
    ///   article keeps its current author.
    pub fn assign_article_author(&mut self, article: ArticleId, author: AuthorId) -> RepoResult<()> {
        let resolved = self.contains_author(author);
        let entry = self
            .article_mut(article)
            .ok_or(RepoError::NotFound(EntityRef::Article(article)))?;
        if !resolved {
            let err = ValidationError::UnknownAuthor(author);
            log_rejection(EntityRef::Article(article), &err);
            return Err(err.into());
        }
        entry.set_author(author);
        Ok(())
    }

    /// Points an existing article at another magazine.
    ///
    /// # Errors
    /// - `NotFound` when `article` does not resolve.
    /// - `Validation(UnknownMagazine)` when `magazine` does not resolve; the
    ///   article keeps its current magazine.
    pub fn assign_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> RepoResult<()> {
        let resolved = self.contains_magazine(magazine);
        let entry = self
            .article_mut(article)
            .ok_or(RepoError::NotFound(EntityRef::Article(article)))?;
        if !resolved {
            let err = ValidationError::UnknownMagazine(magazine);
            log_rejection(EntityRef::Article(article), &err);
            return Err(err.into());
        }
        entry.set_magazine(magazine);
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.author_slot(id).map(|index| &self.authors[index])
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.author_slot(id).map(|index| &mut self.authors[index])
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazine_slot(id).map(|index| &self.magazines[index])
    }

    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazine_slot(id).map(|index| &mut self.magazines[index])
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.article_slot(id).map(|index| &self.articles[index])
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.article_slot(id).map(|index| &mut self.articles[index])
    }

    /// All authors in creation order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All magazines in creation order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// All articles in creation order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn contains_author(&self, id: AuthorId) -> bool {
        self.author_slot(id).is_some()
    }

    pub fn contains_magazine(&self, id: MagazineId) -> bool {
        self.magazine_slot(id).is_some()
    }

    fn author_slot(&self, id: AuthorId) -> Option<usize> {
        (id.registry() == self.id && id.index() < self.authors.len()).then_some(id.index())
    }

    fn magazine_slot(&self, id: MagazineId) -> Option<usize> {
        (id.registry() == self.id && id.index() < self.magazines.len()).then_some(id.index())
    }

    fn article_slot(&self, id: ArticleId) -> Option<usize> {
        (id.registry() == self.id && id.index() < self.articles.len()).then_some(id.index())
    }
}

fn log_rejection(entity: EntityRef, err: &ValidationError) {
    warn!(
        "event=field_rejected module=registry status=rejected entity={} field={} reason={} detail={}",
        entity,
        err.field(),
        err.reason(),
        err
    );
}
