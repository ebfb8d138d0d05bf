use tariff_types::{
    OutputOrder, PricedInterval, ReconcileConfig, ReconcileReport, ReconcileStats,
};

use super::disjoint::split_disjoint;
use super::partition::sort_timeline;
use super::resolve::resolve_overlaps;

/// Reconcile an old and a new price timeline with the default configuration.
///
/// Returns disjoint old intervals, disjoint new intervals, residual segments
/// of overlapped old intervals, and finally the overlapping new intervals
/// (carrying the old identity where they continue an old run).
///
/// Inputs are not validated: each side is expected to be a non-overlapping
/// timeline per key with `begin < end` on every record. Malformed input yields
/// a deterministic but unspecified result.
#[must_use]
pub fn reconcile(old: Vec<PricedInterval>, new: Vec<PricedInterval>) -> Vec<PricedInterval> {
    reconcile_with(old, new, &ReconcileConfig::default()).intervals
}

/// Reconcile two timelines under `cfg` and report what happened to the inputs.
#[must_use]
pub fn reconcile_with(
    old: Vec<PricedInterval>,
    new: Vec<PricedInterval>,
    cfg: &ReconcileConfig,
) -> ReconcileReport {
    let parts = split_disjoint(sort_timeline(old), sort_timeline(new));
    let resolution = resolve_overlaps(&parts.old, parts.new, cfg.merge_anchor);

    let stats = ReconcileStats {
        disjoint_old: parts.disjoint_old.len(),
        disjoint_new: parts.disjoint_new.len(),
        residuals: resolution.residuals.len(),
        merged: resolution.merged,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        disjoint_old = stats.disjoint_old,
        disjoint_new = stats.disjoint_new,
        overlapping_old = parts.old.len(),
        overlapping_new = resolution.new.len(),
        residuals = stats.residuals,
        merged = stats.merged,
        "reconciled price timelines"
    );

    let mut intervals = parts.disjoint_old;
    intervals.extend(parts.disjoint_new);
    intervals.extend(resolution.residuals);
    intervals.extend(resolution.new);

    if cfg.output_order == OutputOrder::Chronological {
        intervals = sort_timeline(intervals);
    }

    ReconcileReport { intervals, stats }
}
