//! Custom error types for the expense tracker
//!
//! `ExpenseError` covers storage failures, which are fatal and bubble up to
//! `main`. `ValidationError` rejects a single entry: the add-expense flow prints
//! it and returns to the main menu.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Reasons a new expense entry is rejected
///
/// The `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Description cannot be empty.")]
    EmptyDescription,

    #[error("Category cannot be empty.")]
    EmptyCategory,

    #[error("Invalid amount. Please enter a number (e.g., 12.50).")]
    InvalidAmount(String),

    #[error("Amount must be positive.")]
    NonPositiveAmount,

    #[error("Amount is too large. The maximum is 999999999.99.")]
    AmountTooLarge,
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
