//! In-memory storage for every constructed entity.
//!
//! # Responsibility
//! - Own the author, magazine and article lists and issue handles into them.
//! - Route cross-entity assignments through handle resolution.
//!
//! # Invariants
//! - Lists are append-only and keep creation order.
//! - A handle resolves only inside the registry that issued it.

pub mod registry;
pub mod snapshot;
