//! Core data models for the expense tracker
//!
//! An expense is either a stored row (`ExpenseRecord`, raw text) or a
//! validated entry waiting to be written (`NewExpense`).

pub mod expense;
pub mod money;

pub use expense::{ExpenseRecord, NewExpense, DATE_FORMAT};
pub use money::Money;
