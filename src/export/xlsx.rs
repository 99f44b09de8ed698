use crate::error::TidySheetError;
use crate::table::Table;
use crate::table::Value;
use quick_xml::events::BytesDecl;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Writer;
use std::io::Cursor;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const XMLNS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const XMLNS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

// Static package parts; only the worksheet carries dynamic content.
const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);
const ROOT_RELATIONSHIPS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);
const WORKBOOK_RELATIONSHIPS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#,
);

/// Writes the table as a minimal single-sheet xlsx workbook.
///
/// Text and date cells are stored as inline strings, numeric cells as
/// plain values; missing cells are omitted entirely so they come back
/// blank, never as placeholder text.
pub(super) fn write(table: &Table) -> Result<Vec<u8>, TidySheetError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;
    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELATIONSHIPS.as_bytes())?;
    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(&workbook_xml()?)?;
    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(WORKBOOK_RELATIONSHIPS.as_bytes())?;
    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(&worksheet_xml(table)?)?;

    Ok(zip.finish()?.into_inner())
}

fn workbook_xml() -> Result<Vec<u8>, TidySheetError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut workbook = BytesStart::new("workbook");
    workbook.push_attribute(("xmlns", XMLNS_MAIN));
    workbook.push_attribute(("xmlns:r", XMLNS_RELATIONSHIPS));
    writer.write_event(Event::Start(workbook))?;
    writer.write_event(Event::Start(BytesStart::new("sheets")))?;

    let mut sheet = BytesStart::new("sheet");
    sheet.push_attribute(("name", "Sheet1"));
    sheet.push_attribute(("sheetId", "1"));
    sheet.push_attribute(("r:id", "rId1"));
    writer.write_event(Event::Empty(sheet))?;

    writer.write_event(Event::End(BytesEnd::new("sheets")))?;
    writer.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(writer.into_inner())
}

fn worksheet_xml(table: &Table) -> Result<Vec<u8>, TidySheetError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute(("xmlns", XMLNS_MAIN));
    writer.write_event(Event::Start(worksheet))?;
    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;

    if !table.is_empty() {
        let headers: Vec<Value> = table
            .columns()
            .iter()
            .map(|name| Value::Text(name.to_owned()))
            .collect();
        write_row(&mut writer, 0, &headers)?;
        for (index, row) in table.rows().iter().enumerate() {
            write_row(&mut writer, index + 1, row)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;
    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(writer.into_inner())
}

fn write_row<W: Write>(
    writer: &mut Writer<W>,
    row: usize,
    cells: &[Value],
) -> Result<(), TidySheetError> {
    let mut element = BytesStart::new("row");
    let number = (row + 1).to_string();
    element.push_attribute(("r", number.as_str()));
    writer.write_event(Event::Start(element))?;
    for (column, cell) in cells.iter().enumerate() {
        write_cell(writer, row, column, cell)?;
    }
    writer.write_event(Event::End(BytesEnd::new("row")))?;
    Ok(())
}

fn write_cell<W: Write>(
    writer: &mut Writer<W>,
    row: usize,
    column: usize,
    cell: &Value,
) -> Result<(), TidySheetError> {
    if cell.is_missing() {
        return Ok(());
    }
    let reference = cell_reference(row, column);
    let text = cell.render();
    let mut element = BytesStart::new("c");
    element.push_attribute(("r", reference.as_str()));
    match cell {
        Value::Integer(_) | Value::Number(_) => {
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Start(BytesStart::new("v")))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new("v")))?;
        }
        _ => {
            element.push_attribute(("t", "inlineStr"));
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Start(BytesStart::new("is")))?;
            writer.write_event(Event::Start(BytesStart::new("t")))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new("t")))?;
            writer.write_event(Event::End(BytesEnd::new("is")))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

/// Converts 0-based row and column indexes to an A1-style cell reference.
fn cell_reference(row: usize, column: usize) -> String {
    let mut column = column as u32 + 1;
    let mut reference = String::new();
    while column > 0 {
        column -= 1;
        let letter = char::from_u32(65 + column % 26).expect("Hardcode letters");
        reference.insert(0, letter);
        column /= 26;
    }
    reference.push_str(&(row + 1).to_string());
    reference
}
