//! # Table Inference Engine
//!
//! Best-effort reconstruction of tabular structure from unstructured text.
//! Semicolons separate rows; commas and whitespace runs separate cells.
//! The widest observed row decides the column count and shorter rows are
//! padded on the right with empty-string cells, so no original data is
//! ever truncated. This is a heuristic splitter, not a CSV parser: quoted
//! fields and escaped separators are out of scope (structured uploads go
//! through `crate::reader` instead).
use crate::table::Table;
use crate::table::Value;
use thiserror::Error;
use tracing::warn;

/// Errors raised when no table can be inferred from the input.
#[derive(Error, Debug, PartialEq)]
pub enum InferError {
    /// Input tokenized to zero cells (empty text or separators only)
    #[error("No cells found in input text")]
    NoCells,
}

/// Infers a table from raw text; never fails.
///
/// On any failure the diagnostic is reported through the `tracing` side
/// channel and the explicitly-empty table is returned, so callers can
/// prompt for new input instead of handling an error. Use [`try_infer`]
/// to receive the diagnostic as data.
pub fn infer(raw_text: &str) -> Table {
    match try_infer(raw_text) {
        Ok(table) => table,
        Err(error) => {
            warn!("Inference produced an empty table: {error}");
            Table::empty()
        }
    }
}

/// Infers a table from raw text, surfacing the failure as an error value.
pub fn try_infer(raw_text: &str) -> Result<Table, InferError> {
    // Semicolons split rows; commas become cell separators like whitespace
    let rows: Vec<Vec<String>> = raw_text
        .split(';')
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .collect();

    // The widest surviving row decides the column count
    let width = rows
        .iter()
        .map(|tokens| tokens.len())
        .max()
        .ok_or(InferError::NoCells)?;

    let columns = (1..=width).map(|index| format!("Column {index}")).collect();
    let rows = rows
        .into_iter()
        .map(|tokens| {
            let mut cells: Vec<Value> = tokens.into_iter().map(Value::Text).collect();
            cells.resize(width, Value::Text(String::new()));
            cells
        })
        .collect();
    Ok(Table::from_parts(columns, rows))
}

/// Splits one candidate row into cell tokens, dropping empty ones.
fn tokenize(row: &str) -> Vec<String> {
    row.replace(',', " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
