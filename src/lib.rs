//! Employee pair engine
//!
//! This crate reads employment records (employee, project, start date, end
//! date) and finds the pair of employees who worked together on shared
//! projects for the greatest total number of overlapping days.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
