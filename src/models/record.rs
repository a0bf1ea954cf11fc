//! Employment record model.
//!
//! This module defines the [`Record`] struct, one parsed line of input, and
//! the [`DateRange`] it spans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed calendar date range `[start, end]`.
///
/// `start <= end` is assumed and not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range.
    pub start: NaiveDate,
    /// The last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range from its two bounds.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// An employee's tenure on a single project.
///
/// Records are immutable once loaded. An open-ended assignment has already
/// had its end date replaced with the load date by the time a `Record`
/// exists.
///
/// # Examples
///
/// ```
/// use employee_pairs::models::Record;
/// use chrono::NaiveDate;
///
/// let record = Record::new(
///     "143",
///     "12",
///     NaiveDate::from_ymd_opt(2013, 11, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 1, 5).unwrap(),
/// );
/// assert_eq!(record.employee_id, "143");
/// assert_eq!(record.range().start, NaiveDate::from_ymd_opt(2013, 11, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the employee.
    pub employee_id: String,
    /// Identifier of the project.
    pub project_id: String,
    /// First day on the project.
    pub start: NaiveDate,
    /// Last day on the project.
    pub end: NaiveDate,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            project_id: project_id.into(),
            start,
            end,
        }
    }

    /// Returns the date range this record covers.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// Returns true if both records belong to the same project but different employees.
    pub fn shares_project_with(&self, other: &Record) -> bool {
        self.project_id == other.project_id && self.employee_id != other.employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_range_matches_record_bounds() {
        let record = Record::new("1", "P1", make_date("2020-01-01"), make_date("2020-01-10"));
        assert_eq!(
            record.range(),
            DateRange::new(make_date("2020-01-01"), make_date("2020-01-10"))
        );
    }

    #[test]
    fn test_shares_project_with_same_project_other_employee() {
        let a = Record::new("1", "P1", make_date("2020-01-01"), make_date("2020-01-10"));
        let b = Record::new("2", "P1", make_date("2020-01-05"), make_date("2020-01-20"));
        assert!(a.shares_project_with(&b));
        assert!(b.shares_project_with(&a));
    }

    #[test]
    fn test_shares_project_with_same_employee_is_false() {
        let a = Record::new("1", "P1", make_date("2020-01-01"), make_date("2020-01-10"));
        let b = Record::new("1", "P1", make_date("2020-03-01"), make_date("2020-03-10"));
        assert!(!a.shares_project_with(&b));
    }

    #[test]
    fn test_shares_project_with_other_project_is_false() {
        let a = Record::new("1", "P1", make_date("2020-01-01"), make_date("2020-01-10"));
        let b = Record::new("2", "P2", make_date("2020-01-01"), make_date("2020-01-10"));
        assert!(!a.shares_project_with(&b));
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new("143", "12", make_date("2013-11-01"), make_date("2014-01-05"));

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "employee_id": "218",
            "project_id": "10",
            "start": "2012-05-16",
            "end": "2014-03-02"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "218");
        assert_eq!(record.project_id, "10");
        assert_eq!(record.end, make_date("2014-03-02"));
    }
}
