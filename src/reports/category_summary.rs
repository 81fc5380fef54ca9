//! Summary by category
//!
//! Totals spending per category. Rows whose stored amount no longer parses
//! are left out of every total and counted in `skipped_rows`.

use std::collections::HashMap;

use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, Money};
use crate::storage::ExpenseStore;

use super::NO_EXPENSES;

/// Width of the separator under the summary header
const TABLE_WIDTH: usize = 35;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label exactly as stored
    pub category: String,
    pub total: Money,
    /// Number of rows that contributed to `total`
    pub expense_count: usize,
}

/// Per-category totals over the whole store
#[derive(Debug, Clone, Default)]
pub struct CategorySummary {
    /// Sorted by case-insensitive category name
    pub totals: Vec<CategoryTotal>,
    /// Total number of stored rows, malformed ones included
    pub total_records: usize,
    /// Rows whose amount could not be parsed
    pub skipped_rows: usize,
}

impl CategorySummary {
    /// Generate the summary from the store
    pub fn generate(store: &ExpenseStore) -> ExpenseResult<Self> {
        Ok(Self::from_records(&store.load_all()?))
    }

    /// Group records by exact category string and sum their amounts
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut skipped_rows = 0;

        for record in records {
            let Some(amount) = record.parsed_amount() else {
                log::debug!(
                    "Skipping malformed amount {:?} in category {:?}",
                    record.amount,
                    record.category
                );
                skipped_rows += 1;
                continue;
            };

            let index = *positions.entry(record.category.as_str()).or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: record.category.clone(),
                    total: Money::zero(),
                    expense_count: 0,
                });
                totals.len() - 1
            });

            // Legacy rows may hold amounts no entry would accept; clamp rather than wrap
            totals[index].total = totals[index].total.saturating_add(amount);
            totals[index].expense_count += 1;
        }

        // Stable sort: categories differing only in case keep first-seen order
        totals.sort_by_cached_key(|t| t.category.to_lowercase());

        Self {
            totals,
            total_records: records.len(),
            skipped_rows,
        }
    }

    /// Whether the store held no rows at all
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }

    /// Look up the total for an exact category label
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.totals
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.total)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("{}\n", NO_EXPENSES);
        }

        let mut output = String::new();
        output.push_str(&format!("{:<20} {:>12}\n", "Category", "Total Spent"));
        output.push_str(&"-".repeat(TABLE_WIDTH));
        output.push('\n');

        for total in &self.totals {
            output.push_str(&format!("{:<20} {:>12}\n", total.category, total.total));
        }

        output
    }
}
