//! FFI use-case API for client-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level identifier functions to UI surfaces
//!   via FRB.
//! - Keep return shapes simple: plain values for the total operations,
//!   error strings only for logging setup.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.

use std::cmp::Ordering;
use zettelid_core::{
    compare_ids, core_version as core_version_inner, init_logging as init_logging_inner,
    next_child_id, parse_id, ping as ping_inner, sort_ids, Atom,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One parsed identifier chunk in FFI-friendly shape.
///
/// Exactly one of `number`/`label` is set, discriminated by `is_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteIdAtom {
    /// Whether this chunk parsed as an integer.
    pub is_number: bool,
    /// Integer value when `is_number` is true.
    pub number: Option<i64>,
    /// Verbatim chunk text when `is_number` is false.
    pub label: Option<String>,
}

/// Parses a raw note identifier into typed chunks.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Total: never throws, any input yields at least one chunk.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_note_id(identifier: String) -> Vec<NoteIdAtom> {
    parse_id(identifier.as_str())
        .into_iter()
        .map(to_note_id_atom)
        .collect()
}

/// Compares two raw note identifiers by domain order.
///
/// Returns `-1`, `0` or `1` for less/equal/greater, matching the comparator
/// conventions of the client platforms.
///
/// # FFI contract
/// - Sync call, pure computation; never throws.
/// - Deterministic across platforms (ordinal label comparison).
#[flutter_rust_bridge::frb(sync)]
pub fn compare_note_ids(a: String, b: String) -> i32 {
    match compare_ids(a.as_str(), b.as_str()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Stably sorts note identifiers ascending by domain order.
///
/// # FFI contract
/// - Sync call, pure computation; never throws.
/// - Duplicates are retained; equal identifiers keep input order.
#[flutter_rust_bridge::frb(sync)]
pub fn sort_note_ids(ids: Vec<String>) -> Vec<String> {
    sort_ids(&ids)
}

/// Suggests the next direct-child identifier under `parent`.
///
/// The caller remains responsible for final uniqueness verification before
/// persisting the suggestion.
///
/// # FFI contract
/// - Sync call, pure computation; never throws.
/// - Children not actually under `parent` are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn next_child_note_id(parent: String, existing_children: Vec<String>) -> String {
    next_child_id(parent.as_str(), &existing_children)
}

fn to_note_id_atom(atom: Atom) -> NoteIdAtom {
    match atom {
        Atom::Number(value) => NoteIdAtom {
            is_number: true,
            number: Some(value),
            label: None,
        },
        Atom::Label(text) => NoteIdAtom {
            is_number: false,
            number: None,
            label: Some(text),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compare_note_ids, core_version, init_logging, next_child_note_id, parse_note_id, ping,
        sort_note_ids,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/zettelid-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn parse_note_id_marks_numbers_and_labels() {
        let atoms = parse_note_id("10/A".to_string());
        assert_eq!(atoms.len(), 2);
        assert!(atoms[0].is_number);
        assert_eq!(atoms[0].number, Some(10));
        assert!(!atoms[1].is_number);
        assert_eq!(atoms[1].label.as_deref(), Some("A"));
    }

    #[test]
    fn compare_note_ids_uses_signed_convention() {
        assert_eq!(compare_note_ids("2".to_string(), "10".to_string()), -1);
        assert_eq!(compare_note_ids("1/A".to_string(), "1.A".to_string()), 0);
        assert_eq!(compare_note_ids("A2".to_string(), "3".to_string()), 1);
    }

    #[test]
    fn sort_note_ids_orders_ascending() {
        let sorted = sort_note_ids(vec![
            "10".to_string(),
            "2/A.3/B".to_string(),
            "2".to_string(),
        ]);
        assert_eq!(sorted, vec!["2", "2/A.3/B", "10"]);
    }

    #[test]
    fn next_child_note_id_follows_existing_convention() {
        let suggestion = next_child_note_id(
            "5/B".to_string(),
            vec!["5/B/A".to_string(), "5/B/B".to_string()],
        );
        assert_eq!(suggestion, "5/B/C");
    }
}
