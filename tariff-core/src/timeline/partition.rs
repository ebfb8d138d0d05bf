//! Key partitioning: timeline ordering and per-key lookup over sorted records.

use std::ops::Range;

use tariff_types::{PriceKey, PricedInterval};

/// Sort intervals by `(product_code, number, depart, begin)` ascending.
///
/// The sort is stable, so records with identical key and begin keep their
/// input order. Overlap resolution walks both sides left to right and relies
/// on this ordering.
#[must_use]
pub fn sort_timeline(mut intervals: Vec<PricedInterval>) -> Vec<PricedInterval> {
    intervals.sort_by(PricedInterval::timeline_cmp);
    intervals
}

/// Index range of the records carrying `key` inside a slice sorted by
/// [`sort_timeline`]. Empty when the key is absent.
#[must_use]
pub fn key_range(sorted: &[PricedInterval], key: &PriceKey) -> Range<usize> {
    let start = sorted.partition_point(|p| p.key < *key);
    let end = start + sorted[start..].partition_point(|p| p.key == *key);
    start..end
}

/// Split a sorted slice into runs of records sharing one key, in key order.
pub fn key_runs(sorted: &[PricedInterval]) -> impl Iterator<Item = &[PricedInterval]> {
    sorted.chunk_by(|a, b| a.key == b.key)
}

/// Indices (into `sorted`) of the records matching `probe`: same key and
/// overlapping `[begin, end)`, in ascending begin order.
pub fn matching<'a>(
    sorted: &'a [PricedInterval],
    probe: &'a PricedInterval,
) -> impl Iterator<Item = usize> + 'a {
    let span = probe.span();
    key_range(sorted, &probe.key).filter(move |&i| sorted[i].span().overlaps(&span))
}
