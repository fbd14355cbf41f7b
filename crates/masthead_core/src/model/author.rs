//! Author entity.
//!
//! # Invariants
//! - `name` is write-once: the first valid value is kept forever.
//! - An author whose constructor name was rejected stays nameless until a
//!   valid name is assigned.

use crate::model::field::WriteOnce;
use crate::model::id::{AuthorId, RegistryId};
use crate::model::validation::{check_char_len, FieldName, ValidationError};

/// Minimum author name length in chars.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;

/// Writer of articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: WriteOnce<String>,
}

impl Author {
    pub(crate) fn unnamed(id: AuthorId) -> Self {
        Self {
            id,
            name: WriteOnce::unset(FieldName::AuthorName),
        }
    }

    pub(crate) fn rehome(&self, registry: RegistryId) -> Self {
        Self {
            id: self.id.rehome(registry),
            name: self.name.clone(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Returns `None` while no valid name has been assigned.
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Assigns the name once.
    ///
    /// # Errors
    /// - `Locked` when a valid name already exists, whatever `name` is.
    /// - `Length` when `name` is empty.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name.assign(name.into(), |value| {
            check_char_len(FieldName::AuthorName, value, AUTHOR_NAME_MIN_CHARS, None)
        })
    }
}
