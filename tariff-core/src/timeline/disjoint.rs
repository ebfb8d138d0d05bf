//! Disjoint extraction: records with no counterpart on the other side.

use tariff_types::PricedInterval;

use super::partition::matching;

/// Old and new records split into pass-through and overlapping sets.
///
/// All four vectors keep the timeline order of their sorted inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    /// Old records no new record matches; carried through unchanged.
    pub disjoint_old: Vec<PricedInterval>,
    /// New records no old record matches; carried through unchanged.
    pub disjoint_new: Vec<PricedInterval>,
    /// Old records overlapped by at least one new record.
    pub old: Vec<PricedInterval>,
    /// New records overlapping at least one old record.
    pub new: Vec<PricedInterval>,
}

/// Separate the records of two timeline-sorted sequences that have no
/// matching counterpart on the other side.
///
/// If either side is empty, every record of the other side is disjoint.
#[must_use]
pub fn split_disjoint(old: Vec<PricedInterval>, new: Vec<PricedInterval>) -> Partitioned {
    let old_hit: Vec<bool> = old
        .iter()
        .map(|o| matching(&new, o).next().is_some())
        .collect();
    let new_hit: Vec<bool> = new
        .iter()
        .map(|n| matching(&old, n).next().is_some())
        .collect();

    let (old, disjoint_old) = split_by(old, &old_hit);
    let (new, disjoint_new) = split_by(new, &new_hit);

    Partitioned {
        disjoint_old,
        disjoint_new,
        old,
        new,
    }
}

fn split_by(
    intervals: Vec<PricedInterval>,
    hit: &[bool],
) -> (Vec<PricedInterval>, Vec<PricedInterval>) {
    let mut overlapping = Vec::new();
    let mut disjoint = Vec::new();
    for (p, &h) in intervals.into_iter().zip(hit) {
        if h {
            overlapping.push(p);
        } else {
            disjoint.push(p);
        }
    }
    (overlapping, disjoint)
}
