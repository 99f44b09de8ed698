use thiserror::Error;

/// Main error type for the tidysheet crate.
/// Aggregates errors from the standard library, dependencies, and internal
/// modules. The core transforms (`infer`, `normalize`) never surface these
/// to callers; only the I/O-facing reader and export modules do.
#[derive(Error, Debug)]
pub enum TidySheetError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Third-party library errors
    #[error("{0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("{0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("{0}")]
    PdfError(#[from] lopdf::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    // Module errors
    #[error("{0}")]
    TableError(#[from] crate::table::TableError),

    #[error("{0}")]
    InferError(#[from] crate::infer::InferError),

    #[error("{0}")]
    ReaderError(#[from] crate::reader::ReaderError),

    #[error("{0}")]
    ExportError(#[from] crate::export::ExportError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, TidySheetError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| TidySheetError::WithContextError(format!("{}: {}", message, e)))
    }
}
