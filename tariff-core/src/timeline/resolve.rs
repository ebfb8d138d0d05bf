//! Overlap resolution: chop old intervals around the new ones that overlap them.
//!
//! Each old interval is folded against its matching new intervals (ascending
//! `begin`) with a working window `[cursor, end)`:
//!
//! - same value: the new interval continues the old run and is claimed by it
//!   (old id, run start); the window end moves forward to the new end.
//! - different value: the part of the window before the new interval is
//!   emitted as a residual segment.
//! - if the window extends past the new interval, the cursor jumps to the new
//!   end; whatever is left after the last match is emitted as the suffix.
//!
//! Folds never touch shared state. Claims are returned and applied to the new
//! intervals once every old interval has been resolved; the earliest old
//! interval to claim a new one wins.

use chrono::{DateTime, Utc};
use tariff_types::{IntervalId, MergeAnchor, PricedInterval};

use super::partition::matching;

/// Output of the overlap resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Residual segments, grouped per old interval in ascending order.
    pub residuals: Vec<PricedInterval>,
    /// The new intervals with claims applied, in input order.
    pub new: Vec<PricedInterval>,
    /// Number of new intervals that absorbed an old identity.
    pub merged: usize,
}

/// Identity and start a new interval takes over from the old run it continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claim {
    id: IntervalId,
    begin: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Chop {
    residuals: Vec<PricedInterval>,
    claims: Vec<(usize, Claim)>,
}

/// Resolve timeline-sorted old intervals against timeline-sorted new intervals.
///
/// Both sequences are expected to hold only records that overlap something on
/// the other side (see [`split_disjoint`](super::split_disjoint)); records that
/// match nothing pass through without producing residuals or claims.
#[must_use]
pub fn resolve_overlaps(
    old: &[PricedInterval],
    new: Vec<PricedInterval>,
    anchor: MergeAnchor,
) -> Resolution {
    let mut residuals = Vec::new();
    let mut claims: Vec<Option<Claim>> = vec![None; new.len()];

    for o in old {
        let chop = chop(o, &new, anchor);
        residuals.extend(chop.residuals);
        for (idx, claim) in chop.claims {
            let slot = &mut claims[idx];
            if slot.is_none() {
                *slot = Some(claim);
            }
        }
    }

    let merged = claims.iter().flatten().count();
    let new = new
        .into_iter()
        .zip(claims)
        .map(|(mut n, claim)| {
            if let Some(c) = claim {
                n.id = c.id;
                n.begin = c.begin;
            }
            n
        })
        .collect();

    Resolution {
        residuals,
        new,
        merged,
    }
}

fn chop(old: &PricedInterval, new: &[PricedInterval], anchor: MergeAnchor) -> Chop {
    let mut out = Chop::default();
    let mut cursor = old.begin;
    let mut end = old.end;
    let mut tail_open = false;

    for idx in matching(new, old) {
        let n = &new[idx];
        if n.value == old.value {
            let begin = match anchor {
                MergeAnchor::Continuation => cursor,
                MergeAnchor::Earliest => cursor.min(n.begin),
            };
            out.claims.push((idx, Claim { id: old.id, begin }));
            end = end.max(n.end);
        } else if cursor < n.begin {
            out.residuals.push(old.with_bounds(cursor, n.begin));
        }

        tail_open = end > n.end;
        if tail_open {
            cursor = n.end;
        }
    }

    if tail_open {
        out.residuals.push(old.with_bounds(cursor, end));
    }
    out
}
