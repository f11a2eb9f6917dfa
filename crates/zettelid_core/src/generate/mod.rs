//! Identifier generation entry points.
//!
//! # Responsibility
//! - Suggest the next direct-child identifier under a parent, consistent
//!   with the local numbering or lettering convention.
//!
//! # See also
//! - docs/architecture/identifier-model.md

pub mod next_id;
