//! # Table Exporters
//!
//! Serialize a cleaned table into one of the four supported output
//! formats. All exporters are thin wrappers over the table: column order
//! and row order are emitted verbatim, and the missing value renders as
//! an empty field/cell (JSON: null) - never as a literal "None", "NaN" or
//! "null" string.
mod csv;
mod json;
mod pdf;
mod xlsx;

use crate::error::TidySheetError;
use crate::table::Table;
use thiserror::Error;
use tracing::debug;

/// Errors raised when resolving an export format.
#[derive(Error, Debug, PartialEq)]
pub enum ExportError {
    /// Unknown or unsupported output format name
    #[error("Unknown export format '{0}'")]
    UnknownFormat(String),
}

/// Output formats supported by the export layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExportFormat {
    /// Comma-separated text
    Csv,
    /// JSON array-of-records
    Json,
    /// Excel workbook (Office Open XML)
    Xlsx,
    /// Simple tabular PDF report
    Pdf,
}

impl ExportFormat {
    /// Parses an export format from its string representation.
    /// Supports case-insensitive aliases ("excel" for xlsx).
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name.to_ascii_uppercase().as_str() {
            "CSV" => Ok(Self::Csv),
            "JSON" => Ok(Self::Json),
            "EXCEL" | "XLSX" => Ok(Self::Xlsx),
            "PDF" => Ok(Self::Pdf),
            _ => Err(ExportError::UnknownFormat(name.to_string())),
        }
    }

    /// File extension conventionally used for this format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}

/// Serializes a table into the requested format.
pub fn export(table: &Table, format: ExportFormat) -> Result<Vec<u8>, TidySheetError> {
    debug!(
        "Exporting {} rows x {} columns as {}",
        table.row_count(),
        table.column_count(),
        format.extension()
    );
    match format {
        ExportFormat::Csv => csv::write(table),
        ExportFormat::Json => json::write(table),
        ExportFormat::Xlsx => xlsx::write(table),
        ExportFormat::Pdf => pdf::write(table),
    }
}
