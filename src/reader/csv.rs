use crate::error::TidySheetError;
use crate::reader::ReaderError;
use crate::table::Table;
use crate::table::Value;
use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a delimited text file into a rectangular string-celled table.
pub(super) fn read(path: &Path) -> Result<Table, TidySheetError> {
    let bytes = fs::read(path)?;
    read_content(&decode(&bytes))
}

/// Decodes file bytes as UTF-8, falling back to Windows-1252 for the
/// legacy exports that still use it.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(content) => content.to_owned(),
        Err(_) => {
            debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (content, _, _) = WINDOWS_1252.decode(bytes);
            content.into_owned()
        }
    }
}

/// Parses CSV text: first record is the header row, short records are
/// padded with empty strings so the produced table stays rectangular.
/// A record wider than the header row is an error, never a truncation.
pub(super) fn read_content(content: &str) -> Result<Table, TidySheetError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    if columns.is_empty() {
        Err(ReaderError::EmptySheet)?
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > columns.len() {
            Err(ReaderError::RecordTooWide {
                index,
                expected: columns.len(),
                actual: record.len(),
            })?
        }
        let row = (0..columns.len())
            .map(|column| Value::Text(record.get(column).unwrap_or("").to_owned()))
            .collect();
        rows.push(row);
    }
    Ok(Table::from_parts(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn header_row_becomes_columns() {
        let table = read_content("Name,Age\nalice,30\nbob,25\n").unwrap();
        assert_eq!(table.columns(), &["Name", "Age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, 0), Some(&Value::from("bob")));
    }

    #[test]
    fn short_records_are_padded() {
        let table = read_content("A,B,C\n1,2\n").unwrap();
        assert_eq!(table.cell(0, 2), Some(&Value::from("")));
        assert!(table.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn long_records_are_an_error_not_a_truncation() {
        let error = read_content("A,B\n1,2,3\n").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Record 0 has 3 fields but the header has 2"
        );
    }

    #[test]
    fn empty_input_is_an_empty_sheet_error() {
        let error = read_content("").unwrap_err();
        assert!(error.to_string().contains("Empty sheet"));
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let table = read_content("Name,Dept\n\"doe, john\",hr\n").unwrap();
        assert_eq!(table.cell(0, 0), Some(&Value::from("doe, john")));
    }

    #[test]
    fn windows_1252_bytes_are_decoded() {
        // 0xE9 is "é" in Windows-1252 and invalid UTF-8 on its own
        assert_eq!(decode(b"caf\xe9"), "caf\u{e9}");
        assert_eq!(decode("café".as_bytes()), "café");
    }

    #[test]
    fn reads_from_a_real_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "Name,Age\nalice,30\n").unwrap();
        let table = crate::reader::read_table(file.path()).unwrap();
        assert_eq!(table.columns(), &["Name", "Age"]);
        assert_eq!(table.row_count(), 1);
    }
}
