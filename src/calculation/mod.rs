//! Calculation logic for the employee pair engine.
//!
//! This module contains the overlap rule for two date ranges, the
//! aggregation of overlaps into per-pair totals, and the selection of the
//! pair that worked together longest.

mod aggregation;
mod overlap;
mod selection;

pub use aggregation::aggregate_pairs;
pub use overlap::overlap_days;
pub use selection::{rank_pairs, select_longest_pair};
