use crate::error::TidySheetError;
use crate::reader::ReaderError;
use crate::table::Table;
use crate::table::Value;
use calamine::open_workbook_auto;
use calamine::Data;
use calamine::Reader;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use std::path::Path;
use tracing::debug;

/// Reads the first sheet of a workbook into a rectangular string-celled
/// table. The first row is the header row; every cell is stringified so
/// the normalizer decides types by column, not the spreadsheet's styling.
pub(super) fn read(path: &Path) -> Result<Table, TidySheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ReaderError::EmptySheet)?;
    debug!("Reading sheet '{sheet}'");

    let range = workbook.worksheet_range(&sheet)?;
    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .ok_or(ReaderError::EmptySheet)?
        .iter()
        .map(stringify)
        .collect();
    let rows = rows
        .map(|row| row.iter().map(|cell| Value::Text(stringify(cell))).collect())
        .collect();
    Ok(Table::from_parts(columns, rows))
}

/// Converts a workbook cell to its textual form. Dates render ISO so the
/// normalizer's format ladder picks them up; error cells render empty.
fn stringify(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.to_owned(),
        Data::Bool(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(format_datetime)
            .unwrap_or_default(),
        Data::DateTimeIso(value) => value.to_owned(),
        Data::DurationIso(value) => value.to_owned(),
    }
}

fn format_datetime(datetime: NaiveDateTime) -> String {
    if datetime.time() == NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
