use crate::error::TidySheetError;
use crate::table::Table;
use csv::Writer;

/// Writes the table as comma-separated text: one header record, then one
/// record per row. Missing values become empty fields.
pub(super) fn write(table: &Table) -> Result<Vec<u8>, TidySheetError> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.render()))?;
    }
    writer
        .into_inner()
        .map_err(|error| error.into_error().into())
}
