//! Add-expense flow
//!
//! Prompts for date, description, category and amount in that order. Each
//! answer is validated before the next question; the first bad answer ends the
//! attempt without saving anything.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{ExpenseResult, ValidationError};
use crate::models::expense::{
    validate_amount, validate_category, validate_date, validate_description,
};
use crate::models::{NewExpense, DATE_FORMAT};
use crate::storage::ExpenseStore;

use super::console::Console;

/// How an add-expense attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Saved(NewExpense),
    Rejected(ValidationError),
    /// Input ran out mid-entry
    EndOfInput,
}

/// Collect one expense interactively and append it to the store
pub fn prompt_for_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ExpenseStore,
    today: NaiveDate,
) -> ExpenseResult<AddOutcome> {
    console.say("")?;
    console.say("=== Add a New Expense ===")?;

    let today_str = today.format(DATE_FORMAT).to_string();
    let Some(raw) = console.prompt(&format!("Date (YYYY-MM-DD) [default {}]: ", today_str))? else {
        return Ok(AddOutcome::EndOfInput);
    };
    let date = match validate_date(&raw, today) {
        Ok(date) => date,
        Err(err) => return reject(console, err),
    };

    let Some(raw) = console.prompt("Description: ")? else {
        return Ok(AddOutcome::EndOfInput);
    };
    let description = match validate_description(&raw) {
        Ok(description) => description,
        Err(err) => return reject(console, err),
    };

    let Some(raw) = console.prompt("Category (e.g., food, transport, rent): ")? else {
        return Ok(AddOutcome::EndOfInput);
    };
    let category = match validate_category(&raw) {
        Ok(category) => category,
        Err(err) => return reject(console, err),
    };

    let Some(raw) = console.prompt("Amount: ")? else {
        return Ok(AddOutcome::EndOfInput);
    };
    let amount = match validate_amount(&raw) {
        Ok(amount) => amount,
        Err(err) => return reject(console, err),
    };

    let expense = NewExpense {
        date,
        description,
        category,
        amount,
    };
    store.append(&expense)?;
    console.say("Expense saved successfully!")?;

    Ok(AddOutcome::Saved(expense))
}

fn reject<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: ValidationError,
) -> ExpenseResult<AddOutcome> {
    console.say(&err.to_string())?;
    Ok(AddOutcome::Rejected(err))
}
