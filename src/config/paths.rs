//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--file` command-line argument
//! 2. `EXPENSES_FILE` environment variable (resolved by clap in `main`)
//! 3. `expenses.csv` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// File name used when no location is configured
pub const DEFAULT_DATA_FILE: &str = "expenses.csv";

/// Locates the CSV store
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional override, falling back to
    /// [`DEFAULT_DATA_FILE`]
    ///
    /// # Errors
    ///
    /// Returns an error if the override is empty or names a directory.
    pub fn new(data_file: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let data_file = data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        if data_file.as_os_str().is_empty() {
            return Err(ExpenseError::Config("Data file path cannot be empty".into()));
        }
        if data_file.is_dir() {
            return Err(ExpenseError::Config(format!(
                "Data file path is a directory: {}",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    /// Use a specific data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the CSV store
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Create the directory holding the data file, if it has one
    pub fn ensure_parent_dir(&self) -> Result<(), ExpenseError> {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
                .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = ExpensePaths::new(None).unwrap();
        assert_eq!(paths.data_file(), Path::new("expenses.csv"));
        // a bare file name has no parent to create
        assert!(paths.ensure_parent_dir().is_ok());
    }

    #[test]
    fn test_override() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mine.csv");

        let paths = ExpensePaths::new(Some(file.clone())).unwrap();
        assert_eq!(paths.data_file(), file);
    }

    #[test]
    fn test_rejects_directory_and_empty() {
        let temp_dir = TempDir::new().unwrap();

        let err = ExpensePaths::new(Some(temp_dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(ExpensePaths::new(Some(PathBuf::new())).is_err());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_data_file(temp_dir.path().join("nested/dir/expenses.csv"));

        paths.ensure_parent_dir().unwrap();
        assert!(temp_dir.path().join("nested/dir").is_dir());
    }
}
