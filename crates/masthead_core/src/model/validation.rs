//! Field validation errors and shared length checks.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Error messages carry field names and lengths only, never field content.

use crate::model::id::{AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constrained field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    AuthorName,
    MagazineName,
    MagazineCategory,
    ArticleTitle,
    ArticleAuthor,
    ArticleMagazine,
}

impl FieldName {
    /// Stable dotted name used in errors and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthorName => "author.name",
            Self::MagazineName => "magazine.name",
            Self::MagazineCategory => "magazine.category",
            Self::ArticleTitle => "article.title",
            Self::ArticleAuthor => "article.author",
            Self::ArticleMagazine => "article.magazine",
        }
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection reported by a constrained setter.
///
/// The field keeps its prior state whenever this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Write-once field already holds a valid value.
    Locked { field: FieldName },
    /// Value length is outside the accepted range. `max = None` means unbounded.
    Length {
        field: FieldName,
        len: usize,
        min: usize,
        max: Option<usize>,
    },
    /// Field has never received a valid value.
    Missing { field: FieldName },
    /// Handle does not resolve to an author of this registry.
    UnknownAuthor(AuthorId),
    /// Handle does not resolve to a magazine of this registry.
    UnknownMagazine(MagazineId),
}

impl ValidationError {
    /// Field the rejection applies to.
    pub fn field(&self) -> FieldName {
        match self {
            Self::Locked { field } | Self::Length { field, .. } | Self::Missing { field } => {
                *field
            }
            Self::UnknownAuthor(_) => FieldName::ArticleAuthor,
            Self::UnknownMagazine(_) => FieldName::ArticleMagazine,
        }
    }

    /// Short machine-readable reason for log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Locked { .. } => "locked",
            Self::Length { .. } => "length",
            Self::Missing { .. } => "missing",
            Self::UnknownAuthor(_) => "unknown_author",
            Self::UnknownMagazine(_) => "unknown_magazine",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Locked { field } => write!(f, "{field} is write-once and already set"),
            Self::Length {
                field,
                len,
                min,
                max: Some(max),
            } => write!(f, "{field} must be {min}..={max} chars, got {len}"),
            Self::Length {
                field,
                len,
                min,
                max: None,
            } => write!(f, "{field} must be at least {min} chars, got {len}"),
            Self::Missing { field } => write!(f, "{field} is not set"),
            Self::UnknownAuthor(id) => write!(f, "author not found in registry: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found in registry: {id}"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn check_char_len(
    field: FieldName,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    let too_long = max.is_some_and(|max| len > max);
    if len < min || too_long {
        return Err(ValidationError::Length {
            field,
            len,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_char_len, FieldName, ValidationError};

    #[test]
    fn check_char_len_counts_chars_not_bytes() {
        // 5 chars, 10 bytes
        assert!(check_char_len(FieldName::ArticleTitle, "ééééé", 5, Some(5)).is_ok());
    }

    #[test]
    fn check_char_len_reports_bounds() {
        let err = check_char_len(FieldName::MagazineName, "V", 2, Some(16)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Length {
                field: FieldName::MagazineName,
                len: 1,
                min: 2,
                max: Some(16),
            }
        );
        assert_eq!(err.to_string(), "magazine.name must be 2..=16 chars, got 1");
        assert_eq!(err.reason(), "length");
    }

    #[test]
    fn unbounded_length_message_omits_max() {
        let err = check_char_len(FieldName::AuthorName, "", 1, None).unwrap_err();
        assert_eq!(err.to_string(), "author.name must be at least 1 chars, got 0");
    }
}
