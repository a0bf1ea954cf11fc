//! Parsing of raw input lines into [`Record`]s.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::InputSettings;
use crate::error::{PairError, PairResult};
use crate::models::Record;

/// Number of fields every record line must hold.
pub const FIELDS_PER_RECORD: usize = 4;

/// Reads employment records from text.
///
/// Every line holds `employee,project,start,end`. Whitespace
/// around a field is ignored. An end date equal to the open-end marker is
/// replaced with the loader's "today". The first malformed line stops the
/// load.
///
/// # Example
///
/// ```
/// use employee_pairs::config::InputSettings;
/// use employee_pairs::loader::RecordLoader;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let loader = RecordLoader::new(InputSettings::default()).with_today(today);
///
/// let records = loader.load_str("143,12,2013-11-01,2014-01-05\n218,10,2012-05-16,NULL\n")?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].end, today);
/// # Ok::<(), employee_pairs::error::PairError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordLoader {
    settings: InputSettings,
    today: NaiveDate,
}

impl RecordLoader {
    /// Creates a loader using the local calendar date as "today".
    pub fn new(settings: InputSettings) -> Self {
        Self {
            settings,
            today: Local::now().date_naive(),
        }
    }

    /// Overrides the date substituted for open-ended assignments.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// The date substituted for open-ended assignments.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Loads records from a file.
    ///
    /// Returns `InputUnavailable` if the file cannot be opened or read.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> PairResult<Vec<Record>> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| PairError::InputUnavailable {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let records = self.load_reader(BufReader::new(file), &path_str)?;
        info!(path = %path_str, records = records.len(), "loaded records");
        Ok(records)
    }

    /// Loads records from any buffered reader.
    ///
    /// `source` names the reader in `InputUnavailable` errors.
    pub fn load_reader<R: BufRead>(&self, reader: R, source: &str) -> PairResult<Vec<Record>> {
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| PairError::InputUnavailable {
                path: source.to_string(),
                message: e.to_string(),
            })?;

            records.push(self.parse_line(index + 1, &line)?);
        }

        Ok(records)
    }

    /// Loads records from in-memory text.
    pub fn load_str(&self, text: &str) -> PairResult<Vec<Record>> {
        text.lines()
            .enumerate()
            .map(|(index, line)| self.parse_line(index + 1, line))
            .collect()
    }

    /// Parses a single line.
    ///
    /// A blank line is a single empty field and fails like any other line
    /// with the wrong field count. `line_number` is 1-based and only used in
    /// errors.
    pub fn parse_line(&self, line_number: usize, line: &str) -> PairResult<Record> {
        let fields: Vec<&str> = line.split(self.settings.delimiter).map(str::trim).collect();
        let [employee_id, project_id, start, end] = fields[..] else {
            return Err(PairError::MalformedRecord {
                line: line_number,
                message: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    fields.len()
                ),
            });
        };

        if employee_id.is_empty() {
            return Err(PairError::MalformedRecord {
                line: line_number,
                message: "employee id is empty".to_string(),
            });
        }
        if project_id.is_empty() {
            return Err(PairError::MalformedRecord {
                line: line_number,
                message: "project id is empty".to_string(),
            });
        }

        let start = self.parse_date(line_number, "start date", start)?;
        let end = if end == self.settings.open_end_marker {
            debug!(
                line = line_number,
                employee = employee_id,
                today = %self.today,
                "open-ended assignment"
            );
            self.today
        } else {
            self.parse_date(line_number, "end date", end)?
        };

        Ok(Record::new(employee_id, project_id, start, end))
    }

    fn parse_date(&self, line_number: usize, field: &str, value: &str) -> PairResult<NaiveDate> {
        NaiveDate::parse_from_str(value, &self.settings.date_format).map_err(|_| {
            PairError::InvalidDate {
                line: line_number,
                field: field.to_string(),
                value: value.to_string(),
            }
        })
    }
}

impl Default for RecordLoader {
    fn default() -> Self {
        Self::new(InputSettings::default())
    }
}
