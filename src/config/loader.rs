//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading input
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PairError, PairResult};

use super::types::InputSettings;

/// Loads and validates input settings.
///
/// # Example
///
/// ```no_run
/// use employee_pairs::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/settings.yaml")?;
/// println!("open end marker: {}", loader.settings().open_end_marker);
/// # Ok::<(), employee_pairs::error::PairError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: InputSettings,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid YAML or holds unusable values
    /// (an empty marker, an empty date format, or a whitespace delimiter).
    pub fn load<P: AsRef<Path>>(path: P) -> PairResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PairError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, ?settings, "loaded input settings");

        Ok(Self { settings })
    }

    /// Parses and validates settings from YAML text.
    fn parse(content: &str, path_str: &str) -> PairResult<InputSettings> {
        let settings: InputSettings =
            serde_yaml::from_str(content).map_err(|e| PairError::ConfigParseError {
                path: path_str.to_string(),
                message: e.to_string(),
            })?;

        let invalid = |message: &str| PairError::ConfigParseError {
            path: path_str.to_string(),
            message: message.to_string(),
        };

        if settings.open_end_marker.trim().is_empty() {
            return Err(invalid("open_end_marker must not be empty"));
        }
        if settings.date_format.trim().is_empty() {
            return Err(invalid("date_format must not be empty"));
        }
        if settings.delimiter.is_whitespace() {
            return Err(invalid("delimiter must not be whitespace"));
        }

        Ok(settings)
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> InputSettings {
        self.settings
    }
}
