//! The reconciler seam consumed by the `tariff` facade.

use tariff_types::{PricedInterval, ReconcileConfig, ReconcileReport};

use crate::timeline::reconcile_with;

/// Turns an old and a new price timeline into one reconciled timeline.
///
/// Implementations must be deterministic and must not fail; input validation
/// is the caller's responsibility.
pub trait PriceReconciler: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Reconcile `old` against `new`.
    fn reconcile(&self, old: Vec<PricedInterval>, new: Vec<PricedInterval>) -> ReconcileReport;
}

/// Default reconciler backed by [`reconcile_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineReconciler {
    cfg: ReconcileConfig,
}

impl TimelineReconciler {
    /// Reconciler using `cfg`.
    #[must_use]
    pub const fn new(cfg: ReconcileConfig) -> Self {
        Self { cfg }
    }

    /// The configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &ReconcileConfig {
        &self.cfg
    }
}

impl PriceReconciler for TimelineReconciler {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn reconcile(&self, old: Vec<PricedInterval>, new: Vec<PricedInterval>) -> ReconcileReport {
        reconcile_with(old, new, &self.cfg)
    }
}
