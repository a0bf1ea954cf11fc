//! Record loading for the employee pair engine.
//!
//! Turns newline-delimited text into [`Record`](crate::models::Record)s,
//! failing on the first malformed line.

mod record_loader;

pub use record_loader::{FIELDS_PER_RECORD, RecordLoader};
