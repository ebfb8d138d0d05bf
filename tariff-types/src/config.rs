//! Configuration types for reconciliation.

use serde::{Deserialize, Serialize};

/// Where a merged record starts when a new interval continues an old run
/// with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeAnchor {
    /// Start at the old run's working begin, discarding the new interval's own
    /// begin even if it is earlier.
    #[default]
    Continuation,
    /// Start at the earlier of the old run's working begin and the new
    /// interval's begin.
    Earliest,
}

/// Ordering of the reconciled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputOrder {
    /// Disjoint old, disjoint new, residual segments, then overlapping new intervals.
    #[default]
    Emission,
    /// Stable sort by key then begin.
    Chronological,
}

/// Configuration for a reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Start anchoring for same-value merges.
    pub merge_anchor: MergeAnchor,
    /// Ordering of the returned intervals.
    pub output_order: OutputOrder,
}
