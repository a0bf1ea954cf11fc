//! Pair aggregation across shared projects.
//!
//! This module turns a flat list of records into a [`PairLedger`] holding,
//! for every pair of employees who overlapped on at least one project, the
//! total number of overlapping days.

use tracing::{debug, info};

use crate::models::{PairLedger, Record};

use super::overlap::overlap_days;

/// Aggregates overlap days for every pair of employees sharing a project.
///
/// Records are sorted by project and then employee identifier, and the
/// sorted list is split into one group per project. Within a group every
/// two records belonging to different employees are compared with
/// [`overlap_days`]; each overlap (including zero-day overlaps) is added to
/// the pair's accumulator. Disjoint ranges contribute nothing.
///
/// Pairs are recorded in the same order a full pairwise scan of the sorted
/// records would encounter them, which fixes the ledger's iteration order.
///
/// Comparison within a group is quadratic in the group size.
///
/// # Arguments
///
/// * `records` - Every loaded record, in any order
///
/// # Returns
///
/// A [`PairLedger`] keyed by canonical pair. Empty when no two employees
/// overlapped on any project.
///
/// # Examples
///
/// ```
/// use employee_pairs::calculation::aggregate_pairs;
/// use employee_pairs::models::Record;
/// use chrono::NaiveDate;
///
/// let date = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
/// let records = vec![
///     Record::new("10", "P1", date("2020-01-01"), date("2020-01-10")),
///     Record::new("3", "P1", date("2020-01-05"), date("2020-01-20")),
/// ];
///
/// let ledger = aggregate_pairs(&records);
/// let pair = ledger.get("3", "10").unwrap();
/// assert_eq!(pair.employee_a(), "3");
/// assert_eq!(pair.total_overlap_days(), 5);
/// ```
pub fn aggregate_pairs(records: &[Record]) -> PairLedger {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| {
        a.project_id
            .cmp(&b.project_id)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    let mut ledger = PairLedger::new();
    let mut projects = 0usize;

    for group in sorted.chunk_by(|a, b| a.project_id == b.project_id) {
        projects += 1;
        for (i, first) in group.iter().enumerate() {
            for second in &group[i + 1..] {
                if !first.shares_project_with(second) {
                    continue;
                }

                let Some(days) = overlap_days(first.range(), second.range()) else {
                    continue;
                };

                debug!(
                    project = %first.project_id,
                    first = %first.employee_id,
                    second = %second.employee_id,
                    days,
                    "overlap found"
                );
                ledger.record(
                    &first.employee_id,
                    &second.employee_id,
                    &first.project_id,
                    days,
                );
            }
        }
    }

    info!(
        records = records.len(),
        projects,
        pairs = ledger.len(),
        "aggregated employee pairs"
    );

    ledger
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(employee: &str, project: &str, start: &str, end: &str) -> Record {
        Record::new(employee, project, make_date(start), make_date(end))
    }

    #[test]
    fn test_empty_records_produce_empty_ledger() {
        let ledger = aggregate_pairs(&[]);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_single_overlap_on_one_project() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-01-10"),
            record("2", "P1", "2020-01-05", "2020-01-20"),
        ];

        let ledger = aggregate_pairs(&records);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("1", "2").unwrap().total_overlap_days(), 5);
    }

    #[test]
    fn test_disjoint_ranges_create_no_accumulator() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-01-05"),
            record("2", "P1", "2020-02-01", "2020-02-05"),
        ];

        let ledger = aggregate_pairs(&records);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_different_projects_are_never_compared() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-12-31"),
            record("2", "P2", "2020-01-01", "2020-12-31"),
        ];

        let ledger = aggregate_pairs(&records);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_same_employee_twice_on_project_is_skipped() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-06-30"),
            record("1", "P1", "2020-03-01", "2020-12-31"),
        ];

        let ledger = aggregate_pairs(&records);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_overlaps_sum_across_projects() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-01-10"),
            record("2", "P1", "2020-01-05", "2020-01-20"),
            record("2", "P2", "2021-03-01", "2021-03-31"),
            record("1", "P2", "2021-03-11", "2021-04-30"),
        ];

        let ledger = aggregate_pairs(&records);
        assert_eq!(ledger.len(), 1);

        let pair = ledger.get("1", "2").unwrap();
        assert_eq!(pair.total_overlap_days(), 5 + 20);
        assert_eq!(pair.projects().len(), 2);
        assert_eq!(pair.projects()[0].project_id, "P1");
        assert_eq!(pair.projects()[1].project_id, "P2");
    }

    #[test]
    fn test_repeat_stints_on_same_project_all_count() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-01-31"),
            record("2", "P1", "2020-01-21", "2020-02-10"),
            record("2", "P1", "2020-01-01", "2020-01-06"),
        ];

        let ledger = aggregate_pairs(&records);
        // 10 days from the first stint, 5 from the second
        assert_eq!(ledger.get("1", "2").unwrap().total_overlap_days(), 15);
    }

    #[test]
    fn test_pair_key_uses_numeric_order() {
        let records = vec![
            record("3", "P1", "2020-01-01", "2020-01-10"),
            record("10", "P1", "2020-01-05", "2020-01-20"),
        ];

        let ledger = aggregate_pairs(&records);
        let pair = ledger.iter().next().unwrap();
        assert_eq!(pair.employee_a(), "3");
        assert_eq!(pair.employee_b(), "10");
    }

    #[test]
    fn test_three_employees_on_one_project() {
        let records = vec![
            record("1", "P1", "2020-01-01", "2020-01-31"),
            record("2", "P1", "2020-01-11", "2020-02-29"),
            record("3", "P1", "2020-02-01", "2020-02-15"),
        ];

        let ledger = aggregate_pairs(&records);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("1", "2").unwrap().total_overlap_days(), 20);
        assert_eq!(ledger.get("2", "3").unwrap().total_overlap_days(), 14);
        assert!(ledger.get("1", "3").is_none());
    }

    #[test]
    fn test_ledger_order_follows_sorted_projects() {
        let records = vec![
            record("5", "B", "2020-01-01", "2020-01-10"),
            record("6", "B", "2020-01-01", "2020-01-10"),
            record("1", "A", "2020-01-01", "2020-01-10"),
            record("2", "A", "2020-01-01", "2020-01-10"),
        ];

        let ledger = aggregate_pairs(&records);
        let keys: Vec<String> = ledger.iter().map(|p| p.key().to_string()).collect();
        assert_eq!(keys, vec!["1,2", "5,6"]);
    }

    #[test]
    fn test_input_order_does_not_change_totals() {
        let mut records = vec![
            record("1", "P1", "2020-01-01", "2020-01-31"),
            record("2", "P1", "2020-01-11", "2020-02-29"),
            record("3", "P2", "2020-01-01", "2020-03-31"),
            record("2", "P2", "2020-03-01", "2020-04-30"),
        ];
        let forward = aggregate_pairs(&records);
        records.reverse();
        let backward = aggregate_pairs(&records);

        assert_eq!(forward.len(), backward.len());
        for pair in &forward {
            let other = backward.get(pair.employee_a(), pair.employee_b()).unwrap();
            assert_eq!(pair.total_overlap_days(), other.total_overlap_days());
        }
    }
}
