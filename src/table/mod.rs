//! # Table Data Model
//!
//! Ordered columns plus ordered rectangular rows of tagged cell values.
//! The rectangularity invariant (every row has exactly as many cells as
//! there are columns) is enforced at construction and preserved by every
//! edit operation. Edits are pure transforms: each returns a new `Table`
//! and leaves the receiver untouched, so session state can replace its
//! current table instead of mutating shared state.
mod value;

pub use value::Value;

use thiserror::Error;

/// Errors raised by table construction and edit operations.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    /// A row does not match the table's column count
    #[error("Row {index} has {actual} cells but the table has {expected} columns")]
    RaggedRow {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A row index beyond the current row count
    #[error("Row index {index} is out of bounds for {count} rows")]
    RowOutOfBounds { index: usize, count: usize },

    /// A column index beyond the current column count
    #[error("Column index {index} is out of bounds for {count} columns")]
    ColumnOutOfBounds { index: usize, count: usize },
}

/// An ordered, rectangular table of cell values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Column names, treated as unique keys by convention
    columns: Vec<String>,
    /// Rows of cells, positionally aligned with `columns`
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates the explicitly-empty table: zero columns, zero rows.
    pub fn empty() -> Table {
        Table::default()
    }

    /// Creates a table, rejecting ragged rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Table, TableError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    index,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Table { columns, rows })
    }

    /// Creates a table from parts already known to be rectangular.
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Table {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Table { columns, rows }
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ordered rows; every row has exactly `column_count()` cells.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no columns and no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Gets a cell by position, or None when out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns a copy with one cell replaced.
    pub fn with_cell(&self, row: usize, column: usize, value: Value) -> Result<Table, TableError> {
        self.check_row(row)?;
        self.check_column(column)?;
        let mut table = self.clone();
        table.rows[row][column] = value;
        Ok(table)
    }

    /// Returns a copy with one column renamed.
    pub fn with_column_name(&self, column: usize, name: &str) -> Result<Table, TableError> {
        self.check_column(column)?;
        let mut table = self.clone();
        table.columns[column] = name.to_owned();
        Ok(table)
    }

    /// Returns a copy with a row appended.
    pub fn push_row(&self, cells: Vec<Value>) -> Result<Table, TableError> {
        self.insert_row(self.rows.len(), cells)
    }

    /// Returns a copy with a row inserted at `index` (may equal `row_count()`).
    pub fn insert_row(&self, index: usize, cells: Vec<Value>) -> Result<Table, TableError> {
        if index > self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                index,
                count: self.rows.len(),
            });
        }
        if cells.len() != self.columns.len() {
            return Err(TableError::RaggedRow {
                index,
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        let mut table = self.clone();
        table.rows.insert(index, cells);
        Ok(table)
    }

    /// Returns a copy with one row removed.
    pub fn remove_row(&self, index: usize) -> Result<Table, TableError> {
        self.check_row(index)?;
        let mut table = self.clone();
        table.rows.remove(index);
        Ok(table)
    }

    /// Returns a copy with a column appended; `cells` must cover every row.
    pub fn push_column(&self, name: &str, cells: Vec<Value>) -> Result<Table, TableError> {
        self.insert_column(self.columns.len(), name, cells)
    }

    /// Returns a copy with a column inserted at `index` (may equal `column_count()`).
    pub fn insert_column(
        &self,
        index: usize,
        name: &str,
        cells: Vec<Value>,
    ) -> Result<Table, TableError> {
        if index > self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                index,
                count: self.columns.len(),
            });
        }
        if cells.len() != self.rows.len() {
            return Err(TableError::RaggedRow {
                index,
                expected: self.rows.len(),
                actual: cells.len(),
            });
        }
        let mut table = self.clone();
        table.columns.insert(index, name.to_owned());
        for (row, cell) in table.rows.iter_mut().zip(cells) {
            row.insert(index, cell);
        }
        Ok(table)
    }

    /// Returns a copy with one column removed from every row.
    pub fn remove_column(&self, index: usize) -> Result<Table, TableError> {
        self.check_column(index)?;
        let mut table = self.clone();
        table.columns.remove(index);
        for row in table.rows.iter_mut() {
            row.remove(index);
        }
        Ok(table)
    }

    fn check_row(&self, index: usize) -> Result<(), TableError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(TableError::RowOutOfBounds {
                index,
                count: self.rows.len(),
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<(), TableError> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfBounds {
                index,
                count: self.columns.len(),
            })
        }
    }
}
