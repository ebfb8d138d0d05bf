//! Tariff data model, configuration primitives, and report envelopes.
//!
//! These types are shared by the reconciliation core (`tariff-core`), the
//! fixtures crate (`tariff-mock`), and the `tariff` facade.
#![warn(missing_docs)]

mod config;
mod error;
mod interval;
mod reports;

pub use config::{MergeAnchor, OutputOrder, ReconcileConfig};
pub use error::TariffError;
pub use interval::{IntervalId, PriceKey, PricedInterval, Span};
pub use reports::{ReconcileReport, ReconcileStats};
