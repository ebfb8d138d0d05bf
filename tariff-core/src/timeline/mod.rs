//! Price timeline reconciliation.
//!
//! Modules:
//! - `partition`: timeline ordering and per-key lookup
//! - `disjoint`: pass-through of records with no counterpart on the other side
//! - `resolve`: splitting and merging of overlapping old/new records
//! - `pipeline`: the three steps wired together
/// Disjoint extraction.
pub mod disjoint;
/// Key partitioning helpers.
pub mod partition;
mod pipeline;
/// Overlap resolution.
pub mod resolve;

pub use disjoint::{Partitioned, split_disjoint};
pub use partition::{key_range, key_runs, sort_timeline};
pub use pipeline::{reconcile, reconcile_with};
pub use resolve::{Resolution, resolve_overlaps};
