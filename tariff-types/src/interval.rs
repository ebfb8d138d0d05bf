//! Priced interval data model.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::TariffError;

/// Opaque identity of a contiguous price run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalId(pub u64);

impl IntervalId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for IntervalId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Logical key of a priced entity: what is priced and where.
///
/// Ordering is lexicographic over `(product_code, number, depart)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PriceKey {
    /// Product code.
    pub product_code: String,
    /// Package number of the product.
    pub number: i32,
    /// Department (store location) the price applies to.
    pub depart: i32,
}

impl PriceKey {
    /// Build a key from its parts.
    pub fn new(product_code: impl Into<String>, number: i32, depart: i32) -> Self {
        Self {
            product_code: product_code.into(),
            number,
            depart,
        }
    }
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.product_code, self.number, self.depart)
    }
}

/// A half-open time range `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start.
    pub begin: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl Span {
    /// Build a span without checking `begin < end`.
    #[must_use]
    pub const fn new(begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { begin, end }
    }

    /// True when the two ranges share at least one instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end > other.begin && other.end > self.begin
    }

    /// True when `ts` falls inside `[begin, end)`.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.begin <= ts && ts < self.end
    }

    /// Length of the range; negative for inverted spans.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.begin
    }

    /// True when `begin >= end`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }
}

/// A price `value` valid over `[begin, end)` for one keyed entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricedInterval {
    /// Identity of the price run this record belongs to.
    pub id: IntervalId,
    /// Logical key; never recomputed.
    pub key: PriceKey,
    /// Inclusive start.
    pub begin: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
    /// Integral price amount.
    pub value: i64,
}

impl PricedInterval {
    /// Build an interval without validating its bounds.
    ///
    /// Reconciliation does not validate either; callers that need the
    /// `begin < end` guarantee should use [`PricedInterval::try_new`].
    pub fn new(
        id: u64,
        key: PriceKey,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        value: i64,
    ) -> Self {
        Self {
            id: IntervalId(id),
            key,
            begin,
            end,
            value,
        }
    }

    /// Build an interval, rejecting empty or inverted ranges.
    ///
    /// # Errors
    /// Returns `TariffError::InvalidArg` when `begin >= end`.
    pub fn try_new(
        id: u64,
        key: PriceKey,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        value: i64,
    ) -> Result<Self, TariffError> {
        if begin >= end {
            return Err(TariffError::InvalidArg(format!(
                "interval for {key} must satisfy begin < end (begin={begin}, end={end})"
            )));
        }
        Ok(Self::new(id, key, begin, end, value))
    }

    /// The `[begin, end)` range of this record.
    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.begin, self.end)
    }

    /// Pairwise match test: same key and overlapping ranges.
    ///
    /// This is not an equivalence relation (it is not transitive) and must not
    /// be used for deduplication.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.key == other.key && self.span().overlaps(&other.span())
    }

    /// Copy of this record restricted to `[begin, end)`, keeping id, key and value.
    #[must_use]
    pub fn with_bounds(&self, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            key: self.key.clone(),
            begin,
            end,
            value: self.value,
        }
    }

    /// Timeline ordering: key first, then `begin`.
    #[must_use]
    pub fn timeline_cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.begin.cmp(&other.begin))
    }
}
