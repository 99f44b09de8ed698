use crate::error::TidySheetError;
use crate::table::Table;
use crate::table::Value;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

/// One exported row: column names paired positionally with cell values.
/// Serialized by hand so record keys keep the table's column order.
struct Record<'a> {
    columns: &'a [String],
    cells: &'a [Value],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Writes the table as a pretty-printed JSON array of records. Missing
/// values become JSON null, never the string "null".
pub(super) fn write(table: &Table) -> Result<Vec<u8>, TidySheetError> {
    let records: Vec<Record> = table
        .rows()
        .iter()
        .map(|row| Record {
            columns: table.columns(),
            cells: row,
        })
        .collect();
    let mut bytes = serde_json::to_vec_pretty(&records)?;
    bytes.push(b'\n');
    Ok(bytes)
}
