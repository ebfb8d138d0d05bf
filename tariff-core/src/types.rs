//! Re-export of the data model from `tariff-types`.
// Consolidated re-exports so downstream crates can depend on `tariff-core` only
pub use tariff_types::{
    IntervalId, MergeAnchor, OutputOrder, PriceKey, PricedInterval, ReconcileConfig,
    ReconcileReport, ReconcileStats, Span, TariffError,
};
