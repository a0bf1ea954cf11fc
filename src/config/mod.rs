//! Configuration for the employee pair engine.
//!
//! Input settings are optional; without a file the reference layout
//! (`employee,project,YYYY-MM-DD,YYYY-MM-DD|NULL`) is used.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER, DEFAULT_OPEN_END_MARKER, InputSettings};
