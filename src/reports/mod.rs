//! Reports over the expense store
//!
//! Both reports are read-only and start from a fresh load of the store.

pub mod category_summary;
pub mod listing;

pub use category_summary::{CategorySummary, CategoryTotal};
pub use listing::ExpenseListing;

/// Shown by every report when the store holds no rows
pub const NO_EXPENSES: &str = "No expenses recorded yet.";
