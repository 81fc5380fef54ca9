//! Expense Tracker - terminal-based personal expense record-keeper
//!
//! Appends dated spending entries to a CSV file and reports totals per
//! category through an interactive numbered menu.
//!
//! # Architecture
//!
//! - `config`: Location of the CSV store
//! - `error`: Custom error types
//! - `models`: Stored rows, validated entries and the `Money` type
//! - `storage`: Append-only CSV store
//! - `reports`: Expense listing and summary by category
//! - `cli`: Interactive menu and add-expense flow
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::reports::CategorySummary;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new(ExpensePaths::new(None)?);
//! let summary = CategorySummary::generate(&store)?;
//! print!("{}", summary.format_terminal());
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
