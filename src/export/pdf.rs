use crate::error::TidySheetError;
use crate::table::Table;
use crate::table::Value;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;
use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;

// US letter, point units
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 50.0;
const ROW_HEIGHT: f32 = 16.0;
const FONT_SIZE: f32 = 9.0;

/// Data rows per page, leaving room for the repeated header line.
const ROWS_PER_PAGE: usize = ((PAGE_HEIGHT - 2.0 * MARGIN) / ROW_HEIGHT) as usize - 1;

/// Writes the table as a simple paginated PDF report: a bold header line
/// followed by one text line per row, columns spaced evenly across the
/// page. Missing cells render as blank space, never as placeholder text.
pub(super) fn write(table: &Table) -> Result<Vec<u8>, TidySheetError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => regular_id, "F2" => bold_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for rows in page_chunks(table) {
        let content = Content {
            operations: page_operations(table, rows),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Splits rows into page-sized chunks; a table without rows still gets
/// one page carrying the header line.
fn page_chunks(table: &Table) -> Vec<&[Vec<Value>]> {
    if table.rows().is_empty() {
        vec![&[]]
    } else {
        table.rows().chunks(ROWS_PER_PAGE).collect()
    }
}

fn page_operations(table: &Table, rows: &[Vec<Value>]) -> Vec<Operation> {
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / table.column_count().max(1) as f32;
    let mut operations = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    text_line(&mut operations, "F2", column_width, y, table.columns());
    for row in rows {
        y -= ROW_HEIGHT;
        let cells: Vec<String> = row.iter().map(|cell| cell.render()).collect();
        text_line(&mut operations, "F1", column_width, y, &cells);
    }
    operations
}

fn text_line(
    operations: &mut Vec<Operation>,
    font: &str,
    column_width: f32,
    y: f32,
    cells: &[String],
) {
    for (index, text) in cells.iter().enumerate() {
        if text.is_empty() {
            continue;
        }
        let x = MARGIN + index as f32 * column_width;
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec![font.into(), FONT_SIZE.into()]));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(text.as_str())]));
        operations.push(Operation::new("ET", vec![]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["Name".to_owned(), "Age".to_owned()],
            vec![
                vec![Value::from("John Doe"), Value::Integer(30)],
                vec![Value::from("Bob"), Value::Missing],
            ],
        )
        .unwrap()
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn output_is_a_pdf_document() {
        let bytes = write(&sample()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn cell_text_appears_in_the_content_stream() {
        let bytes = write(&sample()).unwrap();
        assert!(contains(&bytes, "(John Doe)"));
        assert!(contains(&bytes, "(Name)"));
        assert!(contains(&bytes, "(30)"));
    }

    #[test]
    fn missing_cells_leave_no_placeholder_text() {
        let bytes = write(&sample()).unwrap();
        assert!(!contains(&bytes, "(None)"));
        assert!(!contains(&bytes, "(NaN)"));
        assert!(!contains(&bytes, "(null)"));
    }

    #[test]
    fn long_tables_paginate() {
        let rows = (0..100)
            .map(|index| vec![Value::Integer(index)])
            .collect();
        let table = Table::new(vec!["Id".to_owned()], rows).unwrap();
        let bytes = write(&table).unwrap();
        assert!(contains(&bytes, "/Count 3"));
    }

    #[test]
    fn empty_table_still_produces_one_page() {
        let bytes = write(&Table::empty()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(contains(&bytes, "/Count 1"));
    }
}
