//! Core domain logic for Masthead: authors, magazines and the articles that
//! link them, held in one in-memory `Registry`.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::article::{Article, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
pub use model::author::{Author, AUTHOR_NAME_MIN_CHARS};
pub use model::id::{ArticleId, AuthorId, EntityRef, MagazineId, RegistryId};
pub use model::magazine::{
    Magazine, CATEGORY_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
};
pub use model::validation::{FieldName, ValidationError};
pub use query::magazine::CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE;
pub use repo::registry::{Registry, RepoError, RepoResult};
pub use repo::snapshot::{ArticleRecord, AuthorRecord, MagazineRecord, RegistrySnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
