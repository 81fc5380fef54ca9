//! CSV file I/O helpers
//!
//! Every helper opens and closes its own handle; nothing keeps the store open
//! between calls.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use crate::error::ExpenseError;

/// Create `path` holding only `header`, unless the file already exists
///
/// Returns `true` when the file was created by this call.
pub fn create_with_header<P: AsRef<Path>>(path: P, header: &[&str]) -> Result<bool, ExpenseError> {
    let path = path.as_ref();

    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(ExpenseError::Io(format!(
                "Failed to create {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(header)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(true)
}

/// Append one serialized row to an existing CSV file
pub fn append_row<T, P>(path: P, row: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    // The header was written when the file was created
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(row)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Read the header and every data row of a CSV file
///
/// Rows may have fewer or more fields than the header.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<(StringRecord, Vec<StringRecord>), ExpenseError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let header = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    Ok((header, rows))
}
