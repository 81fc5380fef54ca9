//! Configuration module for the expense tracker
//!
//! The only setting is where the CSV store lives.

pub mod paths;

pub use paths::{ExpensePaths, DEFAULT_DATA_FILE};
