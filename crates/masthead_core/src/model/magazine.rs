//! Magazine entity.
//!
//! # Invariants
//! - `name` and `category` are revalidated on every assignment after
//!   construction; rejected values never replace the current one.
//! - Construction stores the given values even when they break the rules, so
//!   neither field is ever missing. `validate()` reports such state.

use crate::model::id::{MagazineId, RegistryId};
use crate::model::validation::{check_char_len, FieldName, ValidationError};

pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
pub const CATEGORY_MIN_CHARS: usize = 1;

/// Publication that articles appear in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// First assignment of both fields; values are stored raw.
    pub(crate) fn new(id: MagazineId, name: String, category: String) -> Self {
        Self { id, name, category }
    }

    pub(crate) fn rehome(&self, registry: RegistryId) -> Self {
        Self {
            id: self.id.rehome(registry),
            name: self.name.clone(),
            category: self.category.clone(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it is 2..=16 chars long.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category when it is non-empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        check_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Checks the current field values against the setter rules.
    ///
    /// Only fails for a magazine constructed with out-of-range values that
    /// were never replaced.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_category(&self.category)
    }
}

pub(crate) fn check_name(value: &str) -> Result<(), ValidationError> {
    check_char_len(
        FieldName::MagazineName,
        value,
        MAGAZINE_NAME_MIN_CHARS,
        Some(MAGAZINE_NAME_MAX_CHARS),
    )
}

pub(crate) fn check_category(value: &str) -> Result<(), ValidationError> {
    check_char_len(FieldName::MagazineCategory, value, CATEGORY_MIN_CHARS, None)
}
