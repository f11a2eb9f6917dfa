//! Next child identifier suggestion.
//!
//! # Responsibility
//! - Compute the next unused direct-child identifier under a parent,
//!   following whatever numbering or lettering convention the existing
//!   children already use.
//!
//! # Invariants
//! - The result is a suggestion only; uniqueness against the full note
//!   corpus stays with the caller.
//! - Children that do not extend `parent + delimiter` are skipped instead
//!   of producing garbage substrings.
//! - Alphabetic increment uses a single-level carry (`Z` -> `AA`); full
//!   base-26 propagation is intentionally not performed.

use crate::order::compare::compare_ids;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PATTERN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid numeric pattern regex"));
static ALPHA_PATTERN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid alpha pattern regex"));

/// Immediate child pattern extracted from one child identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChildPattern<'a> {
    /// Delimiter separating the pattern from the parent (`/` or `.`).
    delimiter: char,
    /// First chunk after `parent + delimiter`, up to the next delimiter.
    chunk: &'a str,
}

/// Suggests an identifier for a new direct child of `parent`.
///
/// With no usable children the convention alternates domains by level: a
/// numeric trailing chunk descends into letters (`"12"` -> `"12/A"`), any
/// other trailing chunk descends into numbers (`"12/A"` -> `"12/A.1"`).
/// Otherwise the greatest existing child (by domain order) supplies the
/// immediate child pattern and its delimiter, and the suggestion increments
/// that pattern in place: numeric patterns add one, alphabetic patterns bump
/// the final letter with a single-level `Z` carry.
///
/// Entries in `existing_children` that do not actually extend
/// `parent + delimiter` with a non-empty chunk are ignored. Patterns that
/// are neither purely numeric nor purely alphabetic (for example `A1`), and
/// numeric patterns that would overflow `i64`, also fall back to the
/// no-children convention. There is no error path.
pub fn next_child_id(parent: &str, existing_children: &[String]) -> String {
    let greatest = existing_children
        .iter()
        .filter(|child| child_pattern(parent, child.as_str()).is_some())
        .max_by(|a, b| compare_ids(a.as_str(), b.as_str()));

    let suggestion = greatest
        .and_then(|child| child_pattern(parent, child.as_str()))
        .and_then(|pattern| increment_pattern(parent, &pattern))
        .unwrap_or_else(|| first_child_id(parent));

    debug!(
        "event=next_child_id module=generate children={} skipped={}",
        existing_children.len(),
        existing_children
            .iter()
            .filter(|child| child_pattern(parent, child.as_str()).is_none())
            .count()
    );
    suggestion
}

/// First child suggestion when no usable children exist.
///
/// Inspects the trailing chunk of `parent` (after its final delimiter, or
/// the whole string without one) and switches domains: numeric chunks get a
/// letter child, anything else gets a numeric sibling-level child.
fn first_child_id(parent: &str) -> String {
    let trailing = parent.rsplit(['/', '.']).next().unwrap_or(parent);
    if NUMERIC_PATTERN_RE.is_match(trailing) {
        format!("{parent}/A")
    } else {
        format!("{parent}.1")
    }
}

/// Extracts the immediate child pattern of `child` under `parent`.
///
/// Returns `None` when `child` does not start with `parent` followed by a
/// delimiter and a non-empty chunk. That covers the malformed-caller-input
/// defect class: such entries are rejected here rather than propagated.
fn child_pattern<'a>(parent: &str, child: &'a str) -> Option<ChildPattern<'a>> {
    let rest = child.strip_prefix(parent)?;
    let mut chars = rest.chars();
    let delimiter = chars.next()?;
    if delimiter != '/' && delimiter != '.' {
        return None;
    }
    let tail = chars.as_str();
    let chunk = tail
        .split(['/', '.'])
        .next()
        .filter(|chunk| !chunk.is_empty())?;
    Some(ChildPattern { delimiter, chunk })
}

/// Increments the immediate child pattern, keeping its delimiter.
///
/// Returns `None` for patterns outside the two supported conventions so the
/// caller can fall back to the no-children rule.
fn increment_pattern(parent: &str, pattern: &ChildPattern<'_>) -> Option<String> {
    let ChildPattern { delimiter, chunk } = pattern;
    if NUMERIC_PATTERN_RE.is_match(chunk) {
        let value = chunk.parse::<i64>().ok()?;
        let next = value.checked_add(1)?;
        return Some(format!("{parent}{delimiter}{next}"));
    }
    if ALPHA_PATTERN_RE.is_match(chunk) {
        return Some(format!("{parent}{delimiter}{}", increment_alpha(chunk)));
    }
    None
}

/// Increments a letters-only pattern as a whole.
///
/// - A trailing `Z` (or `z`) is replaced with `A` (`a`) and one more of the
///   same letter is appended: `"Z"` -> `"AA"`, `"BZ"` -> `"BAA"`. The carry
///   never propagates further left.
/// - Any other final letter is replaced with its successor, preceding
///   characters unchanged: `"A"` -> `"B"`, `"AC"` -> `"AD"`.
fn increment_alpha(chunk: &str) -> String {
    let mut chars: Vec<char> = chunk.chars().collect();
    match chars.pop() {
        Some('Z') => {
            chars.push('A');
            chars.push('A');
        }
        Some('z') => {
            chars.push('a');
            chars.push('a');
        }
        Some(last) => {
            // ASCII-alphabetic guaranteed by the caller's regex check.
            chars.push((last as u8 + 1) as char);
        }
        None => {}
    }
    chars.into_iter().collect()
}
