//! Parse run metrics.
//!
//! Stage timings for one [`IntentParser::run_with_metrics`] call. The plain
//! `run` path skips the clock reads entirely.
//!
//! [`IntentParser::run_with_metrics`]: super::IntentParser::run_with_metrics

use crate::SearchIntent;
use std::time::Duration;

/// Elapsed time per parser stage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Lowercasing and cleanup.
    pub normalize: Duration,
    /// Dictionary scan.
    pub scan: Duration,
    /// Time + location resolution.
    pub resolve: Duration,
    /// Categories, intent type, fallback keywords and score.
    pub classify: Duration,
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub struct ParseRun {
    pub intent: SearchIntent,
    /// Normalized text the stages ran on.
    pub normalized: String,
    pub metrics: ParseMetrics,
}
