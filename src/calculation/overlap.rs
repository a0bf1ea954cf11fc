//! Date range overlap calculation.
//!
//! This module provides the single rule used to measure how long two
//! employees' ranges on the same project intersect.

use crate::models::DateRange;

/// Calculates the overlap between two closed date ranges.
///
/// Two ranges `[s1, e1]` and `[s2, e2]` overlap unless `e1 < s2` or
/// `e2 < s1`. When they overlap, the length is the number of days between
/// the later start and the earlier end. This is a day difference, not an
/// inclusive count: two identical single-day ranges overlap by 0 days.
///
/// # Arguments
///
/// * `first` - One employee's range
/// * `second` - The other employee's range
///
/// # Returns
///
/// `None` when the ranges are disjoint, otherwise `Some(days)` with
/// `days >= 0`. The result does not depend on argument order.
///
/// # Examples
///
/// ```
/// use employee_pairs::calculation::overlap_days;
/// use employee_pairs::models::DateRange;
/// use chrono::NaiveDate;
///
/// let date = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap();
///
/// let first = DateRange::new(date("2020-01-01"), date("2020-01-10"));
/// let second = DateRange::new(date("2020-01-05"), date("2020-01-20"));
/// assert_eq!(overlap_days(first, second), Some(5));
///
/// let later = DateRange::new(date("2020-02-01"), date("2020-02-05"));
/// assert_eq!(overlap_days(first, later), None);
/// ```
pub fn overlap_days(first: DateRange, second: DateRange) -> Option<i64> {
    if first.end < second.start || second.end < first.start {
        return None;
    }

    let latest_start = first.start.max(second.start);
    let earliest_end = first.end.min(second.end);
    Some((earliest_end - latest_start).num_days())
}
