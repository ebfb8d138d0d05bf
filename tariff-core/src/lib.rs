//! tariff-core
//!
//! Reconciliation of price timelines: an existing ("old") set of priced
//! intervals is combined with an incoming ("new") set into one timeline that
//! reflects the new data and keeps the history the new data does not cover.
//!
//! - `types`: the data model re-exported from `tariff-types`.
//! - `timeline`: key partitioning, disjoint extraction, overlap resolution.
//! - `reconciler`: the `PriceReconciler` trait and its default implementation.
//!
//! Everything here is synchronous and free of I/O and global state.
//! Reconciliations over disjoint key sets are independent of each other.
#![warn(missing_docs)]

/// The `PriceReconciler` trait and the default timeline reconciler.
pub mod reconciler;
/// Timeline reconciliation steps.
pub mod timeline;
pub mod types;

pub use reconciler::{PriceReconciler, TimelineReconciler};
pub use timeline::{reconcile, reconcile_with, sort_timeline, split_disjoint};
pub use types::*;
