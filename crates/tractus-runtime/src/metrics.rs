//! Run metrics — counters that make skip-and-continue behaviour
//! observable.
//!
//! Degenerate edge pairs never abort a run; they drop a candidate or an
//! eligible neighbour for that round only. These counters (plus debug
//! logging in the driver) keep that data loss visible instead of
//! silent.

use serde::Serialize;

/// Counters accumulated over one cascade run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeMetrics {
    /// Rounds executed, including the terminal stalled round.
    pub rounds: usize,
    /// Nodes activated.
    pub activations: usize,
    /// Nodes moved from the frontier to the removed set.
    pub removals: usize,
    /// Pivot neighbours dropped from candidacy for missing or
    /// degenerate weights.
    pub skipped_candidates: usize,
    /// Active neighbours dropped from eligibility for missing or
    /// degenerate weights.
    pub skipped_eligibility: usize,
}

impl CascadeMetrics {
    /// Total candidates and eligible neighbours lost to degenerate
    /// edge pairs.
    pub fn total_skipped(&self) -> usize {
        self.skipped_candidates + self.skipped_eligibility
    }
}
