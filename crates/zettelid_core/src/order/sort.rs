//! Stable sorting of identifier collections.
//!
//! # Responsibility
//! - Apply the pairwise comparison to whole collections of raw identifiers.
//!
//! # Invariants
//! - The sort is stable: identifiers comparing equal keep their original
//!   relative order.
//! - Input strings are returned verbatim; duplicates are retained.

use crate::order::compare::compare_ids;
use log::debug;

/// Sorts raw note identifiers ascending by domain order.
///
/// Produces a new vector with the same strings, stably ordered via
/// [`compare_ids`]. No deduplication or normalization is performed.
pub fn sort_ids(ids: &[String]) -> Vec<String> {
    let mut sorted = ids.to_vec();
    // Vec::sort_by is stable, which the equal-identifier contract relies on.
    sorted.sort_by(|a, b| compare_ids(a, b));
    debug!("event=ids_sorted module=order count={}", sorted.len());
    sorted
}

#[cfg(test)]
mod tests {
    use super::sort_ids;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn sort_orders_ascending_and_keeps_duplicates() {
        let sorted = sort_ids(&ids(&["10", "2", "10", "1"]));
        assert_eq!(sorted, ids(&["1", "2", "10", "10"]));
    }

    #[test]
    fn sort_is_stable_for_equal_identifiers() {
        // "1/A" and "1.A" compare equal; stability keeps input order.
        let sorted = sort_ids(&ids(&["1.A", "1/A", "0"]));
        assert_eq!(sorted, ids(&["0", "1.A", "1/A"]));
    }

    #[test]
    fn sort_of_empty_input_is_empty() {
        assert!(sort_ids(&[]).is_empty());
    }
}
