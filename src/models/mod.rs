//! Core data models for the employee pair engine.
//!
//! This module contains the records read from input and the pair
//! accumulators produced from them.

mod ledger;
mod pair;
mod record;

pub use ledger::PairLedger;
pub use pair::{PairAccumulator, PairKey, ProjectOverlap, compare_employee_ids};
pub use record::{DateRange, Record};
