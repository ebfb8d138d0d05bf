//! Report envelopes produced by reconcilers.

use serde::{Deserialize, Serialize};

use crate::PricedInterval;

/// Counters describing how a reconciliation run treated its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileStats {
    /// Old intervals carried through unchanged.
    pub disjoint_old: usize,
    /// New intervals with no old counterpart, carried through unchanged.
    pub disjoint_new: usize,
    /// Residual segments cut from overlapped old intervals.
    pub residuals: usize,
    /// New intervals that absorbed an old interval's identity and start.
    pub merged: usize,
}

/// Reconciled timeline plus the counters of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Reconciled intervals.
    pub intervals: Vec<PricedInterval>,
    /// Run counters.
    pub stats: ReconcileStats,
}

