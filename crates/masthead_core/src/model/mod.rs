//! Domain model for authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define the three entity records and their field validation rules.
//! - Define typed handles used for identity comparison.
//!
//! # Invariants
//! - Every entity is addressed by a handle that never changes or gets reused.
//! - Field setters never panic; rejected input leaves prior state intact.
//! - Entities are never removed once created.

pub mod article;
pub mod author;
pub mod field;
pub mod id;
pub mod magazine;
pub mod validation;
