//! Tariff reconciles price timelines.
//!
//! Overview
//! - An existing ("old") and an incoming ("new") set of priced intervals for
//!   the same products are combined into one timeline.
//! - New data wins for the span it declares; old history the new data does
//!   not cover survives as residual segments under its original identity.
//! - A new interval that continues an old run with the same price takes over
//!   the old run's identity and start.
//!
//! Key behaviors and trade-offs
//! - Merge anchor:
//!   - `Continuation` (default): merged records start where the old run
//!     started; a same-valued new interval that begins earlier loses that
//!     leading part.
//!   - `Earliest`: merged records start at the earlier of both begins; every
//!     instant the new data declares stays covered.
//! - Output order:
//!   - `Emission` (default): disjoint old, disjoint new, residual segments,
//!     then the overlapping new intervals.
//!   - `Chronological`: sorted by key and begin, convenient for display.
//! - No validation: inputs must be non-overlapping per key with `begin < end`;
//!   malformed input yields deterministic but unspecified output.
//!
//! Examples
//! ```rust,ignore
//! use tariff::{OutputOrder, Tariff};
//!
//! let tariff = Tariff::builder()
//!     .config_json(r#"{"merge_anchor":"earliest"}"#)?
//!     .output_order(OutputOrder::Chronological)
//!     .build();
//!
//! let report = tariff.reconcile_report(stored_prices, incoming_prices);
//! println!("{} residual segments", report.stats.residuals);
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{Tariff, TariffBuilder};

pub use tariff_core::{PriceReconciler, TimelineReconciler};
pub use tariff_types::{
    IntervalId, MergeAnchor, OutputOrder, PriceKey, PricedInterval, ReconcileConfig,
    ReconcileReport, ReconcileStats, Span, TariffError,
};
