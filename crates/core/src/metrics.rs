//! Prometheus metrics for parsing and admission decisions.
//!
//! The crate only increments these; hosts register them via [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

// =============================================================================
// Parser Metrics
// =============================================================================

/// Title parse attempts by outcome.
pub static PARSE_ATTEMPTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "releasegate_parse_attempts_total",
            "Total release title parse attempts",
        ),
        &["result"], // "parsed", "unparseable"
    )
    .unwrap()
});

// =============================================================================
// Decision Metrics
// =============================================================================

/// Decisions by result and rejection reason.
pub static DECISIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("releasegate_decisions_total", "Total admission decisions"),
        &["result", "reason"], // result: "accepted", "rejected"; reason empty when accepted
    )
    .unwrap()
});

/// Free-space lookups by outcome.
pub static FREE_SPACE_LOOKUPS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "releasegate_free_space_lookups_total",
            "Total free space lookups against the disk provider",
        ),
        &["result"], // "known", "unknown", "error", "cached"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PARSE_ATTEMPTS.clone()),
        Box::new(DECISIONS_TOTAL.clone()),
        Box::new(FREE_SPACE_LOOKUPS.clone()),
    ]
}
