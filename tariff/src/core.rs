use std::path::Path;
use std::sync::Arc;

use tariff_core::{
    MergeAnchor, OutputOrder, PriceReconciler, PricedInterval, ReconcileConfig, ReconcileReport,
    TariffError, TimelineReconciler, sort_timeline,
};

/// Entry point that reconciles price timelines through a configured reconciler.
pub struct Tariff {
    pub(crate) reconciler: Arc<dyn PriceReconciler>,
    pub(crate) cfg: ReconcileConfig,
    // Custom reconcilers do not see `cfg`, so ordering is applied here.
    pub(crate) sort_output: bool,
}

/// Builder for constructing a `Tariff` with custom configuration.
pub struct TariffBuilder {
    reconciler: Option<Arc<dyn PriceReconciler>>,
    cfg: ReconcileConfig,
}

impl Default for TariffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TariffBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults reproduce the established behavior: same-value merges snap to
    /// the old run's begin and output comes in emission order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reconciler: None,
            cfg: ReconcileConfig::default(),
        }
    }

    /// Select where a merged record starts when a new interval continues an
    /// old run with the same value.
    ///
    /// - `Continuation` drops the part of the new interval that precedes the
    ///   old run.
    /// - `Earliest` keeps it, so every instant the new data declares stays covered.
    #[must_use]
    pub const fn merge_anchor(mut self, anchor: MergeAnchor) -> Self {
        self.cfg.merge_anchor = anchor;
        self
    }

    /// Select the ordering of reconciled output.
    #[must_use]
    pub const fn output_order(mut self, order: OutputOrder) -> Self {
        self.cfg.output_order = order;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: ReconcileConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Load the configuration from a JSON document.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `TariffError::Config` if the document is not a valid configuration.
    pub fn config_json(mut self, json: &str) -> Result<Self, TariffError> {
        self.cfg = serde_json::from_str(json)?;
        Ok(self)
    }

    /// Load the configuration from a JSON file.
    ///
    /// # Errors
    /// Returns `TariffError::Config` if the file cannot be read or parsed.
    pub fn config_file(self, path: impl AsRef<Path>) -> Result<Self, TariffError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| TariffError::config(format!("{}: {e}", path.display())))?;
        self.config_json(&json)
    }

    /// Route reconciliation through a custom reconciler instead of the
    /// built-in timeline reconciler.
    ///
    /// The merge anchor is then up to the custom reconciler; output ordering
    /// is still applied by `Tariff`.
    #[must_use]
    pub fn with_reconciler(mut self, r: Arc<dyn PriceReconciler>) -> Self {
        self.reconciler = Some(r);
        self
    }

    /// Build the `Tariff`.
    #[must_use]
    pub fn build(self) -> Tariff {
        let custom = self.reconciler.is_some();
        let reconciler: Arc<dyn PriceReconciler> = match self.reconciler {
            Some(r) => r,
            None => Arc::new(TimelineReconciler::new(self.cfg)),
        };
        Tariff {
            reconciler,
            cfg: self.cfg,
            sort_output: custom && self.cfg.output_order == OutputOrder::Chronological,
        }
    }
}

impl Tariff {
    /// Start building a new `Tariff`.
    ///
    /// ```rust,ignore
    /// use tariff::{MergeAnchor, Tariff};
    ///
    /// let tariff = Tariff::builder()
    ///     .merge_anchor(MergeAnchor::Earliest)
    ///     .build();
    /// let merged = tariff.reconcile(old_prices, new_prices);
    /// ```
    #[must_use]
    pub fn builder() -> TariffBuilder {
        TariffBuilder::new()
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &ReconcileConfig {
        &self.cfg
    }

    /// Name of the reconciler requests are routed to.
    #[must_use]
    pub fn reconciler_name(&self) -> &'static str {
        self.reconciler.name()
    }

    /// Reconcile `old` against `new` and return the reconciled timeline.
    ///
    /// Inputs are not validated; see [`tariff_core::reconcile`] for the
    /// preconditions.
    #[must_use]
    pub fn reconcile(
        &self,
        old: Vec<PricedInterval>,
        new: Vec<PricedInterval>,
    ) -> Vec<PricedInterval> {
        self.reconcile_report(old, new).intervals
    }

    /// Reconcile `old` against `new` and return the timeline with run counters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tariff::reconcile",
            skip(self, old, new),
            fields(
                reconciler = self.reconciler.name(),
                old = old.len(),
                new = new.len(),
            ),
        )
    )]
    #[must_use]
    pub fn reconcile_report(
        &self,
        old: Vec<PricedInterval>,
        new: Vec<PricedInterval>,
    ) -> ReconcileReport {
        let mut report = self.reconciler.reconcile(old, new);
        if self.sort_output {
            report.intervals = sort_timeline(report.intervals);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            output = report.intervals.len(),
            residuals = report.stats.residuals,
            merged = report.stats.merged,
            "reconciliation finished"
        );

        report
    }
}
