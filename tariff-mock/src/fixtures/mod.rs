//! Named reconciliation scenarios with their expected output.
//!
//! Expected outputs follow the default configuration (continuation anchoring,
//! emission order).

use chrono::{DateTime, NaiveDate, Utc};
use tariff_core::{PriceKey, PricedInterval, TariffError};

mod scenarios;

/// One reconciliation case: inputs and the exact expected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Unique scenario name.
    pub name: &'static str,
    /// Existing timeline.
    pub old: Vec<PricedInterval>,
    /// Incoming timeline.
    pub new: Vec<PricedInterval>,
    /// Reconciled timeline in emission order.
    pub expected: Vec<PricedInterval>,
}

/// Every scenario, in a stable order.
#[must_use]
pub fn all() -> Vec<Scenario> {
    scenarios::NAMES
        .iter()
        .filter_map(|n| scenarios::build(n))
        .collect()
}

/// Look a scenario up by name.
///
/// # Errors
/// Returns `TariffError::NotFound` for unknown names.
pub fn by_name(name: &str) -> Result<Scenario, TariffError> {
    scenarios::build(name).ok_or_else(|| TariffError::not_found(format!("scenario {name}")))
}

/// Names of every scenario.
#[must_use]
pub const fn names() -> &'static [&'static str] {
    scenarios::NAMES
}

/// Midnight UTC of the given calendar day.
///
/// # Panics
/// Panics on an invalid date.
#[must_use]
pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Key used by most scenarios.
#[must_use]
pub fn product1() -> PriceKey {
    PriceKey::new("product1", 1, 1)
}

/// Shorthand for an interval over calendar days.
#[must_use]
pub fn price(
    id: u64,
    key: &PriceKey,
    begin: (i32, u32, u32),
    end: (i32, u32, u32),
    value: i64,
) -> PricedInterval {
    PricedInterval::new(
        id,
        key.clone(),
        day(begin.0, begin.1, begin.2),
        day(end.0, end.1, end.2),
        value,
    )
}
