//! # Structured Upload Readers
//!
//! Collaborators that turn well-formed tabular files into the shape the
//! core contract expects: rectangular, ordered columns, ordered rows,
//! string-typed cells prior to normalization. A malformed file is reported
//! here as an error before the core is ever invoked; the core itself
//! never sees a malformed table.
mod csv;
mod excel;

use crate::error::ResultMessage;
use crate::error::TidySheetError;
use crate::table::Table;
use std::ffi::OsStr;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading an uploaded file into a table.
#[derive(Error, Debug, PartialEq)]
pub enum ReaderError {
    /// Unsupported or unrecognized file format
    #[error("Cannot detect file format for '{name}'")]
    UnsupportedFormat { name: String },

    /// The file parsed but contained no header row
    #[error("Empty sheet or missing header row")]
    EmptySheet,

    /// A record wider than the header row; accepting it would drop fields
    #[error("Record {index} has {actual} fields but the header has {expected}")]
    RecordTooWide {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Reads a tabular upload into a [`Table`], dispatching on the file
/// extension.
///
/// Supported formats:
/// - `.csv`, `.txt` - delimited text (UTF-8, Windows-1252 fallback)
/// - `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods` - spreadsheet workbooks
pub fn read_table<P>(path: P) -> Result<Table, TidySheetError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let table = match path.extension().and_then(OsStr::to_str) {
        Some("csv") | Some("txt") => csv::read(path),
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => {
            excel::read(path)
        }
        _ => Err(ReaderError::UnsupportedFormat {
            name: path.to_string_lossy().to_string(),
        }
        .into()),
    };
    table.with_prefix(&format!("Failed to read '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let error = read_table("staff.parquet").unwrap_err();
        assert!(error.to_string().contains("Cannot detect file format"));
    }

    #[test]
    fn missing_file_is_an_error_not_a_panic() {
        assert!(read_table("no-such-file.csv").is_err());
    }
}
