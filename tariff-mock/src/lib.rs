//! Deterministic fixtures and test doubles for the tariff workspace.
//!
//! - [`fixtures`]: named reconciliation scenarios with exact expected output.
//! - [`CannedReconciler`]: a [`PriceReconciler`] that returns a preset report
//!   and records every call, for exercising code that routes to a reconciler.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tariff_core::{PriceReconciler, PricedInterval, ReconcileReport};

pub mod fixtures;

/// Inputs of one recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Old timeline as received.
    pub old: Vec<PricedInterval>,
    /// New timeline as received.
    pub new: Vec<PricedInterval>,
}

/// Reconciler returning the same report for every call.
pub struct CannedReconciler {
    report: ReconcileReport,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl CannedReconciler {
    /// Reconciler that always answers with `report`.
    #[must_use]
    pub const fn new(report: ReconcileReport) -> Self {
        Self {
            report,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Reconciler whose answer is the expected output of a fixture scenario.
    #[must_use]
    pub fn from_scenario(s: &fixtures::Scenario) -> Self {
        Self::new(ReconcileReport {
            intervals: s.expected.clone(),
            stats: tariff_core::ReconcileStats::default(),
        })
    }

    /// Number of calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Inputs of every call so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.recorded
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

impl PriceReconciler for CannedReconciler {
    fn name(&self) -> &'static str {
        "tariff-mock"
    }

    fn reconcile(&self, old: Vec<PricedInterval>, new: Vec<PricedInterval>) -> ReconcileReport {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.recorded.lock() {
            g.push(RecordedCall { old, new });
        }
        self.report.clone()
    }
}
