//! Relationship traversal over a registry.
//!
//! # Responsibility
//! - Answer author-side and magazine-side questions by scanning articles.
//!
//! # Invariants
//! - Results follow article creation order; deduplicated results keep the
//!   first occurrence.
//! - Articles with an unset link are skipped by queries that follow it.
//! - Handles from another registry match nothing.

pub mod author;
pub mod magazine;
