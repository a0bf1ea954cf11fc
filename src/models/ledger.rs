//! The collection of pair accumulators built during aggregation.

use std::collections::HashMap;

use super::{PairAccumulator, PairKey};

/// Pair accumulators indexed by their canonical key.
///
/// Lookups go through a hash index while iteration follows the order in
/// which pairs were first recorded, so every pass over the ledger is
/// deterministic.
///
/// # Examples
///
/// ```
/// use employee_pairs::models::PairLedger;
///
/// let mut ledger = PairLedger::new();
/// ledger.record("10", "3", "P1", 5);
/// ledger.record("3", "10", "P2", 4);
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.get("3", "10").unwrap().total_overlap_days(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairLedger {
    entries: Vec<PairAccumulator>,
    index: HashMap<PairKey, usize>,
}

impl PairLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `days` for the pair on `project_id`, creating the accumulator if needed.
    pub fn record(&mut self, employee_a: &str, employee_b: &str, project_id: &str, days: i64) {
        let key = PairKey::new(employee_a, employee_b);
        match self.index.get(&key) {
            Some(&position) => self.entries[position].add(project_id, days),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(PairAccumulator::new(key, project_id, days));
            }
        }
    }

    /// Looks up the accumulator for two employees, in either order.
    pub fn get(&self, employee_a: &str, employee_b: &str) -> Option<&PairAccumulator> {
        let key = PairKey::new(employee_a, employee_b);
        self.index.get(&key).map(|&position| &self.entries[position])
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates accumulators in first-recorded order.
    pub fn iter(&self) -> std::slice::Iter<'_, PairAccumulator> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PairLedger {
    type Item = &'a PairAccumulator;
    type IntoIter = std::slice::Iter<'a, PairAccumulator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
