//! Storage layer for the expense tracker
//!
//! A single append-only CSV file holds every expense. See [`ExpenseStore`].

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStore, FIELDNAMES};
