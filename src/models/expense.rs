//! Expense model
//!
//! `ExpenseRecord` is a row exactly as it sits in the CSV store, with every
//! field kept as text. `NewExpense` is a validated entry that has not been
//! written yet.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::Money;
use crate::error::ValidationError;

/// Date format used for input and storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount accepted for a single entry
///
/// Keeps the sum of any realistic store far inside the `i64` cent range.
pub const MAX_ENTRY_AMOUNT: Money = Money::from_cents(99_999_999_999);

/// A stored expense row
///
/// No type coercion happens on read, so legacy rows with a malformed amount
/// still load and can be listed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl ExpenseRecord {
    /// Reparse the stored amount, or `None` if the row is malformed
    pub fn parsed_amount(&self) -> Option<Money> {
        Money::parse(&self.amount).ok()
    }
}

/// A validated expense ready to be appended to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Money,
}

impl NewExpense {
    /// The row written to disk
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            date: self.date.format(DATE_FORMAT).to_string(),
            description: self.description.clone(),
            category: self.category.clone(),
            amount: self.amount.to_string(),
        }
    }
}

/// Parse an entry date; blank input means `today`
pub fn validate_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Trimmed, non-empty description
pub fn validate_description(input: &str) -> Result<String, ValidationError> {
    non_empty(input).ok_or(ValidationError::EmptyDescription)
}

/// Trimmed, non-empty category
pub fn validate_category(input: &str) -> Result<String, ValidationError> {
    non_empty(input).ok_or(ValidationError::EmptyCategory)
}

/// A decimal amount that is still positive once rounded to cents, capped at
/// [`MAX_ENTRY_AMOUNT`]
pub fn validate_amount(input: &str) -> Result<Money, ValidationError> {
    let input = input.trim();
    let amount =
        Money::parse(input).map_err(|_| ValidationError::InvalidAmount(input.to_string()))?;

    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }
    if amount > MAX_ENTRY_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }

    Ok(amount)
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
