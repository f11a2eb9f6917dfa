//! Pairwise identifier comparison.
//!
//! # Responsibility
//! - Order two raw identifier strings by their parsed atom sequences.
//!
//! # Invariants
//! - The comparison is a strict weak ordering: irreflexive, antisymmetric
//!   and transitive, so repeated application during a sort is consistent.
//! - A strict prefix sorts before any identifier that extends it.

use crate::model::atom::parse_id;
use std::cmp::Ordering;

/// Compares two raw note identifiers.
///
/// Both strings are parsed into atom sequences which are then compared
/// position by position using `Atom`'s domain ordering; the first unequal
/// position decides. When one sequence is a strict prefix of the other,
/// the shorter sorts first. Total and side-effect-free; there is no error
/// path for malformed input.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    let a_atoms = parse_id(a);
    let b_atoms = parse_id(b);

    for (a_atom, b_atom) in a_atoms.iter().zip(b_atoms.iter()) {
        match a_atom.cmp(b_atom) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a_atoms.len().cmp(&b_atoms.len())
}

#[cfg(test)]
mod tests {
    use super::compare_ids;
    use std::cmp::Ordering;

    #[test]
    fn numeric_chunks_compare_by_value() {
        assert_eq!(compare_ids("2/A.3/B", "10/A.2/B"), Ordering::Less);
    }

    #[test]
    fn number_leading_identifier_sorts_before_label_leading() {
        assert_eq!(compare_ids("A2/A.1", "3/A.6/A"), Ordering::Greater);
        assert_eq!(compare_ids("3/A.6/A", "A2/A.1"), Ordering::Less);
    }

    #[test]
    fn strict_prefix_sorts_first() {
        assert_eq!(compare_ids("1/A", "1/A.1"), Ordering::Less);
        assert_eq!(compare_ids("1/A.1", "1/A"), Ordering::Greater);
    }

    #[test]
    fn comparison_is_reflexively_equal() {
        assert_eq!(compare_ids("3/B.1/C", "3/B.1/C"), Ordering::Equal);
    }

    #[test]
    fn delimiter_identity_does_not_affect_order() {
        // "1/A" and "1.A" flatten to the same atom sequence.
        assert_eq!(compare_ids("1/A", "1.A"), Ordering::Equal);
    }

    #[test]
    fn labels_compare_ordinally() {
        assert_eq!(compare_ids("A1/A.10", "A2/A.1"), Ordering::Less);
        assert_eq!(compare_ids("B10/B.5", "A2/A.1"), Ordering::Greater);
    }
}
