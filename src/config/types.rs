//! Configuration types for the record input format.

use serde::{Deserialize, Serialize};

/// Marker used in the end date column for an assignment that is still running.
pub const DEFAULT_OPEN_END_MARKER: &str = "NULL";

/// Date format of the start and end columns.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the four fields of a record.
pub const DEFAULT_DELIMITER: char = ',';

/// Settings describing how input lines are laid out.
///
/// Every field has a default, so a YAML file only needs to name the values
/// it changes.
///
/// # Example
///
/// ```
/// use employee_pairs::config::InputSettings;
///
/// let settings: InputSettings = serde_yaml::from_str("open_end_marker: TODAY").unwrap();
/// assert_eq!(settings.open_end_marker, "TODAY");
/// assert_eq!(settings.date_format, "%Y-%m-%d");
/// assert_eq!(settings.delimiter, ',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Token in the end date column meaning "still assigned".
    pub open_end_marker: String,
    /// `chrono` format string for both date columns.
    pub date_format: String,
    /// Field separator.
    pub delimiter: char,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            open_end_marker: DEFAULT_OPEN_END_MARKER.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_format() {
        let settings = InputSettings::default();
        assert_eq!(settings.open_end_marker, "NULL");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.delimiter, ',');
    }

    #[test]
    fn test_empty_yaml_mapping_uses_defaults() {
        let settings: InputSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, InputSettings::default());
    }

    #[test]
    fn test_full_yaml_overrides_every_field() {
        let yaml = r#"
open_end_marker: "ONGOING"
date_format: "%d/%m/%Y"
delimiter: ";"
"#;
        let settings: InputSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.open_end_marker, "ONGOING");
        assert_eq!(settings.date_format, "%d/%m/%Y");
        assert_eq!(settings.delimiter, ';');
    }
}
