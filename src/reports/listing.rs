//! Expense listing
//!
//! Renders every stored row as a fixed-width table. Values are shown exactly as
//! stored, malformed amounts included.

use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;
use crate::storage::ExpenseStore;

use super::NO_EXPENSES;

/// Width of the separator under the table header
const TABLE_WIDTH: usize = 65;

/// All expenses in insertion order
#[derive(Debug, Clone)]
pub struct ExpenseListing {
    pub records: Vec<ExpenseRecord>,
}

impl ExpenseListing {
    /// Load every record from the store
    pub fn generate(store: &ExpenseStore) -> ExpenseResult<Self> {
        Ok(Self::from_records(store.load_all()?))
    }

    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Format the listing for terminal display
    ///
    /// Description and category are cut to their column width.
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("{}\n", NO_EXPENSES);
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<12} {:<25} {:<15} {:>10}\n",
            "Date", "Description", "Category", "Amount"
        ));
        output.push_str(&"-".repeat(TABLE_WIDTH));
        output.push('\n');

        for record in &self.records {
            output.push_str(&format!(
                "{:<12} {:<25.25} {:<15.15} {:>10}\n",
                record.date, record.description, record.category, record.amount
            ));
        }

        output
    }
}
