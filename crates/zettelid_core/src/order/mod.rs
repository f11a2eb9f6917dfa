//! Identifier ordering entry points.
//!
//! # Responsibility
//! - Expose pairwise comparison and stable collection sorting over raw
//!   identifier strings.
//!
//! # See also
//! - docs/architecture/identifier-model.md

pub mod compare;
pub mod sort;
