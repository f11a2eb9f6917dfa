//! Domain model for hierarchical note identifiers.
//!
//! # Responsibility
//! - Define the canonical atom representation shared by ordering and
//!   generation logic.
//! - Keep one total parse path from raw strings to typed atom sequences.
//!
//! # Invariants
//! - Atoms are immutable values derived purely from their source string.
//!
//! # See also
//! - docs/architecture/identifier-model.md

pub mod atom;
