//! Typed entity handles.
//!
//! A handle pairs the owning registry's UUID with the entity's creation index,
//! so handles from one registry never resolve inside another. Handles are
//! only issued by a registry; they serialize but never deserialize.

use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identity of one `Registry` instance.
pub type RegistryId = Uuid;

/// Handle to an `Author` in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AuthorId {
    registry: RegistryId,
    index: usize,
}

/// Handle to a `Magazine` in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MagazineId {
    registry: RegistryId,
    index: usize,
}

/// Handle to an `Article` in a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ArticleId {
    registry: RegistryId,
    index: usize,
}

impl AuthorId {
    pub(crate) fn new(registry: RegistryId, index: usize) -> Self {
        Self { registry, index }
    }

    pub(crate) fn rehome(self, registry: RegistryId) -> Self {
        Self { registry, ..self }
    }

    /// Registry that issued this handle.
    pub fn registry(self) -> RegistryId {
        self.registry
    }

    /// Creation position inside the author list.
    pub fn index(self) -> usize {
        self.index
    }
}

impl MagazineId {
    pub(crate) fn new(registry: RegistryId, index: usize) -> Self {
        Self { registry, index }
    }

    pub(crate) fn rehome(self, registry: RegistryId) -> Self {
        Self { registry, ..self }
    }

    pub fn registry(self) -> RegistryId {
        self.registry
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl ArticleId {
    pub(crate) fn new(registry: RegistryId, index: usize) -> Self {
        Self { registry, index }
    }

    pub(crate) fn rehome(self, registry: RegistryId) -> Self {
        Self { registry, ..self }
    }

    pub fn registry(self) -> RegistryId {
        self.registry
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "author#{}", self.index)
    }
}

impl Display for MagazineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "magazine#{}", self.index)
    }
}

impl Display for ArticleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "article#{}", self.index)
    }
}

/// Kind-tagged handle, used where an error may point at any entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Author(AuthorId),
    Magazine(MagazineId),
    Article(ArticleId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(id) => write!(f, "{id}"),
            Self::Magazine(id) => write!(f, "{id}"),
            Self::Article(id) => write!(f, "{id}"),
        }
    }
}
