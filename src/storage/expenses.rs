//! Expense store backed by a single CSV file
//!
//! The file is created lazily with the header row on first access and is only
//! ever appended to afterwards.

use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::config::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{ExpenseRecord, NewExpense};

use super::file_io::{append_row, create_with_header, read_rows};

/// Header row of the store, in column order
pub const FIELDNAMES: [&str; 4] = ["date", "description", "category", "amount"];

/// Append-only store of expense rows
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    paths: ExpensePaths,
}

impl ExpenseStore {
    /// Create a store over the configured data file; nothing touches disk yet
    pub fn new(paths: ExpensePaths) -> Self {
        Self { paths }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        self.paths.data_file()
    }

    /// Create the file with its header row if it does not exist yet
    ///
    /// Safe to call before every access. An existing file is left untouched and
    /// its header is not checked.
    pub fn ensure_initialized(&self) -> Result<(), ExpenseError> {
        if self.path().exists() {
            return Ok(());
        }

        self.paths.ensure_parent_dir()?;
        if create_with_header(self.path(), &FIELDNAMES)? {
            log::info!("Created expense store at {}", self.path().display());
        }

        Ok(())
    }

    /// Read every stored row in file order
    pub fn load_all(&self) -> Result<Vec<ExpenseRecord>, ExpenseError> {
        self.ensure_initialized()?;

        let (header, rows) = read_rows(self.path())?;
        let columns = ColumnIndex::from_header(&header);
        let records: Vec<ExpenseRecord> = rows.iter().map(|row| columns.record(row)).collect();

        log::debug!(
            "Loaded {} expense(s) from {}",
            records.len(),
            self.path().display()
        );
        Ok(records)
    }

    /// Append one validated expense as a new row
    pub fn append(&self, expense: &NewExpense) -> Result<(), ExpenseError> {
        self.ensure_initialized()?;

        let record = expense.to_record();
        append_row(self.path(), &record)?;

        log::debug!(
            "Appended expense {} / {} / {}",
            record.date,
            record.category,
            record.amount
        );
        Ok(())
    }
}

/// Where each field sits in a row
///
/// Columns are found by header name; a name missing from the header falls back
/// to its position in [`FIELDNAMES`].
struct ColumnIndex([usize; 4]);

impl ColumnIndex {
    fn from_header(header: &StringRecord) -> Self {
        let mut index = [0; 4];
        for (canonical, name) in FIELDNAMES.iter().enumerate() {
            index[canonical] = header
                .iter()
                .position(|h| h.trim() == *name)
                .unwrap_or(canonical);
        }
        Self(index)
    }

    fn record(&self, row: &StringRecord) -> ExpenseRecord {
        let field = |i: usize| row.get(self.0[i]).unwrap_or_default().to_string();
        ExpenseRecord {
            date: field(0),
            description: field(1),
            category: field(2),
            amount: field(3),
        }
    }
}

impl From<PathBuf> for ExpenseStore {
    fn from(path: PathBuf) -> Self {
        Self::new(ExpensePaths::with_data_file(path))
    }
}
