//! Article entity, the link between one author and one magazine.
//!
//! # Invariants
//! - `author`/`magazine` only ever hold handles that resolved in the owning
//!   registry at assignment time. The registry enforces this.
//! - `title` is write-once and closes when construction ends: a title
//!   rejected by the constructor can never be set afterwards.

use crate::model::field::WriteOnce;
use crate::model::id::{ArticleId, AuthorId, MagazineId, RegistryId};
use crate::model::validation::{check_char_len, FieldName, ValidationError};

pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// One piece written by an author for a magazine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: Option<AuthorId>,
    magazine: Option<MagazineId>,
    title: WriteOnce<String>,
}

impl Article {
    pub(crate) fn blank(id: ArticleId) -> Self {
        Self {
            id,
            author: None,
            magazine: None,
            title: WriteOnce::unset(FieldName::ArticleTitle),
        }
    }

    pub(crate) fn rehome(&self, registry: RegistryId) -> Self {
        Self {
            id: self.id.rehome(registry),
            author: self.author.map(|id| id.rehome(registry)),
            magazine: self.magazine.map(|id| id.rehome(registry)),
            title: self.title.clone(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> Option<AuthorId> {
        self.author
    }

    pub fn magazine(&self) -> Option<MagazineId> {
        self.magazine
    }

    pub fn title(&self) -> Option<&str> {
        self.title.get().map(String::as_str)
    }

    /// Assigns the title; it must be 5..=50 chars.
    ///
    /// # Errors
    /// - `Locked` for any call on a registered article. Only construction
    ///   gets to assign the title.
    /// - `Length` when out of range.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        self.title.assign(title.into(), |value| {
            check_char_len(
                FieldName::ArticleTitle,
                value,
                TITLE_MIN_CHARS,
                Some(TITLE_MAX_CHARS),
            )
        })
    }

    pub(crate) fn seal_title(&mut self) {
        self.title.close();
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = Some(author);
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = Some(magazine);
    }

    /// Reports the first field that never received a valid value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.author.is_none() {
            return Err(ValidationError::Missing {
                field: FieldName::ArticleAuthor,
            });
        }
        if self.magazine.is_none() {
            return Err(ValidationError::Missing {
                field: FieldName::ArticleMagazine,
            });
        }
        if !self.title.is_set() {
            return Err(ValidationError::Missing {
                field: FieldName::ArticleTitle,
            });
        }
        Ok(())
    }
}
