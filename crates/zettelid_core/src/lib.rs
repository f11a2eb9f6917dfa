//! Shared hierarchical note-identifier logic for zettelkasten clients.
//! This crate is the single source of truth for identifier ordering and
//! generation, replacing the per-client copies it consolidates.

pub mod generate;
pub mod logging;
pub mod model;
pub mod order;

pub use generate::next_id::next_child_id;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::atom::{parse_id, Atom};
pub use order::compare::compare_ids;
pub use order::sort::sort_ids;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
