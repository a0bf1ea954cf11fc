//! Selection of the longest-working pair.
//!
//! This module scans a [`PairLedger`] for the pair with the greatest total
//! overlap and ranks every pair for full listings.

use tracing::{debug, info};

use crate::models::{PairAccumulator, PairLedger};

/// Finds the pair with the greatest total overlap.
///
/// A later pair only replaces the current best when its total is strictly
/// greater, so on ties the pair recorded first in the ledger wins.
///
/// # Arguments
///
/// * `ledger` - The aggregated pairs
///
/// # Returns
///
/// The winning [`PairAccumulator`], or `None` when the ledger is empty and
/// no pair ever overlapped.
///
/// # Examples
///
/// ```
/// use employee_pairs::calculation::select_longest_pair;
/// use employee_pairs::models::PairLedger;
///
/// let mut ledger = PairLedger::new();
/// ledger.record("1", "2", "P1", 5);
/// ledger.record("3", "4", "P1", 9);
/// ledger.record("5", "6", "P1", 9);
///
/// let winner = select_longest_pair(&ledger).unwrap();
/// assert_eq!(winner.key().to_string(), "3,4");
///
/// assert!(select_longest_pair(&PairLedger::new()).is_none());
/// ```
pub fn select_longest_pair(ledger: &PairLedger) -> Option<&PairAccumulator> {
    let mut best: Option<&PairAccumulator> = None;

    for candidate in ledger {
        match best {
            Some(current) if candidate.total_overlap_days() <= current.total_overlap_days() => {}
            _ => best = Some(candidate),
        }
    }

    match best {
        Some(winner) => info!(
            pair = %winner.key(),
            days = winner.total_overlap_days(),
            "selected longest-working pair"
        ),
        None => debug!("no overlapping pair found"),
    }

    best
}

/// Returns every pair ordered by descending total overlap.
///
/// The sort is stable, so pairs with equal totals keep their ledger order
/// and the first entry always matches [`select_longest_pair`].
pub fn rank_pairs(ledger: &PairLedger) -> Vec<&PairAccumulator> {
    let mut ranked: Vec<&PairAccumulator> = ledger.iter().collect();
    ranked.sort_by(|a, b| b.total_overlap_days().cmp(&a.total_overlap_days()));
    ranked
}
