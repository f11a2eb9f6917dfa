//! Identifier atom domain model.
//!
//! # Responsibility
//! - Define the typed token produced from one chunk of a note identifier.
//! - Provide total parsing from raw identifier strings to atom sequences.
//!
//! # Invariants
//! - Parsing never fails: every input string yields at least one atom.
//! - `Number` always orders before `Label`, regardless of contained values.
//! - `Label` comparison is ordinal (code-point), never locale-sensitive.
//!
//! # See also
//! - docs/architecture/identifier-model.md

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Typed value of one delimiter-separated chunk of a note identifier.
///
/// A chunk that parses as a base-10 integer becomes `Number`; everything
/// else (including the empty chunk) is kept verbatim as `Label`. Serialized
/// untagged so the wire shape is a plain JSON number or string, matching
/// what client surfaces already exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Atom {
    /// Chunk that parsed as a base-10 integer, compared by value.
    Number(i64),
    /// Any other chunk, stored as written (case preserved).
    Label(String),
}

impl Atom {
    /// Classifies a single identifier chunk.
    ///
    /// Numeric parse failures (non-digits, empty chunk, `i64` overflow)
    /// all fall back to `Label` with the chunk text unchanged.
    pub fn from_chunk(chunk: &str) -> Self {
        match chunk.parse::<i64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Label(chunk.to_string()),
        }
    }

    /// Returns whether this atom is the numeric variant.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Atom {
    /// Domain ordering for same-position atoms.
    ///
    /// - `Number` vs `Number`: by integer value (`2` before `10`).
    /// - `Label` vs `Label`: ordinal string comparison, so results are
    ///   identical across platforms.
    /// - Mixed variants: `Number` first, independent of contained values.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Label(a), Self::Label(b)) => a.cmp(b),
            (Self::Number(_), Self::Label(_)) => Ordering::Less,
            (Self::Label(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Parses a raw note identifier into its ordered atom sequence.
///
/// Splits on `/`, then each resulting chunk on `.`, and flattens both
/// splits in left-to-right order. Which delimiter produced a boundary is
/// not retained; only chunk position matters for ordering.
///
/// # Invariants
/// - Total: any input (empty, malformed, consecutive delimiters) produces
///   a sequence of length >= 1 and never errors.
/// - An empty chunk parses to `Label("")`.
pub fn parse_id(identifier: &str) -> Vec<Atom> {
    identifier
        .split('/')
        .flat_map(|part| part.split('.'))
        .map(Atom::from_chunk)
        .collect()
}
