//! Employee pair models.
//!
//! This module defines the canonical [`PairKey`] for an unordered pair of
//! employees and the [`PairAccumulator`] that totals their shared days.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Compares two employee identifiers for canonical pair ordering.
///
/// Identifiers that both parse as integers are compared numerically, so
/// `"3"` sorts before `"10"`. Anything else falls back to lexical order.
/// Numerically equal identifiers with different text (`"03"` and `"3"`)
/// are tie-broken lexically so distinct identifiers never compare equal.
///
/// This only orders the two members of one pair. It is not a total order
/// when numeric and non-numeric identifiers are mixed (`"9" < "10"`,
/// `"10" < "1a"`, `"1a" < "9"`), so do not use it to sort lists of IDs.
///
/// # Examples
///
/// ```
/// use employee_pairs::models::compare_employee_ids;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_employee_ids("3", "10"), Ordering::Less);
/// assert_eq!(compare_employee_ids("abc", "abd"), Ordering::Less);
/// ```
pub fn compare_employee_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// The canonical key for an unordered pair of employees.
///
/// The lower identifier (per [`compare_employee_ids`]) is always stored
/// first, whatever order the identifiers are given in.
///
/// # Examples
///
/// ```
/// use employee_pairs::models::PairKey;
///
/// let key = PairKey::new("10", "3");
/// assert_eq!(key.first(), "3");
/// assert_eq!(key.second(), "10");
/// assert_eq!(key, PairKey::new("3", "10"));
/// assert_eq!(key.to_string(), "3,10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Creates the canonical key for two employee identifiers.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if compare_employee_ids(&a, &b) == Ordering::Greater {
            Self {
                first: b,
                second: a,
            }
        } else {
            Self {
                first: a,
                second: b,
            }
        }
    }

    /// The lower of the two identifiers.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The higher of the two identifiers.
    pub fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

/// Overlap days contributed by one pair of records on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOverlap {
    /// The project both employees worked on.
    pub project_id: String,
    /// Days between the later start and the earlier end.
    pub days: i64,
}

/// Running total of overlap days for one unordered pair of employees.
///
/// Created on the first overlapping contribution and summed on every later
/// one. The per-project contributions are kept in the order they were added
/// and always sum to [`total_overlap_days`](Self::total_overlap_days).
///
/// # Examples
///
/// ```
/// use employee_pairs::models::{PairAccumulator, PairKey};
///
/// let mut acc = PairAccumulator::new(PairKey::new("10", "3"), "P1", 5);
/// acc.add("P2", 7);
///
/// assert_eq!(acc.employee_a(), "3");
/// assert_eq!(acc.employee_b(), "10");
/// assert_eq!(acc.total_overlap_days(), 12);
/// assert_eq!(acc.projects().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairAccumulator {
    employee_a: String,
    employee_b: String,
    total_overlap_days: i64,
    projects: Vec<ProjectOverlap>,
}

impl PairAccumulator {
    /// Creates an accumulator holding its first contribution.
    pub fn new(key: PairKey, project_id: impl Into<String>, days: i64) -> Self {
        Self {
            employee_a: key.first,
            employee_b: key.second,
            total_overlap_days: days,
            projects: vec![ProjectOverlap {
                project_id: project_id.into(),
                days,
            }],
        }
    }

    /// Adds another contribution to the running total.
    pub fn add(&mut self, project_id: impl Into<String>, days: i64) {
        self.total_overlap_days += days;
        self.projects.push(ProjectOverlap {
            project_id: project_id.into(),
            days,
        });
    }

    /// The lower employee identifier.
    pub fn employee_a(&self) -> &str {
        &self.employee_a
    }

    /// The higher employee identifier.
    pub fn employee_b(&self) -> &str {
        &self.employee_b
    }

    /// Total overlap days across every shared project.
    pub fn total_overlap_days(&self) -> i64 {
        self.total_overlap_days
    }

    /// Contributions in the order they were accumulated.
    pub fn projects(&self) -> &[ProjectOverlap] {
        &self.projects
    }

    /// Rebuilds the canonical key of this pair.
    pub fn key(&self) -> PairKey {
        PairKey {
            first: self.employee_a.clone(),
            second: self.employee_b.clone(),
        }
    }
}
