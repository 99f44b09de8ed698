//! # Field Normalizer
//!
//! Rewrites recognized columns into canonical typed values: names and
//! departments are title-cased text, ages are integers, salaries are
//! decimals stripped of currency decoration, join dates are ISO calendar
//! dates. A cell that cannot be converted becomes `Missing` rather than an
//! error, so one bad cell never costs the user a whole row. The transform
//! is pure and stateless: no cell's result depends on any other cell.
mod date;
mod field;

pub use field::normalize_header;
pub use field::Field;

use crate::table::Table;
use crate::table::Value;
use regex::Regex;

/// Normalizes headers and recognized columns, returning a new table with
/// the same column count and row count as the input.
///
/// Header normalization (trim + title-case) applies to every column name.
/// Cell rewriting applies only to columns whose normalized name matches a
/// recognized [`Field`]; all other cell values pass through untouched.
/// Idempotent: normalizing an already-normalized table changes nothing.
pub fn normalize(table: &Table) -> Table {
    let columns: Vec<String> = table
        .columns()
        .iter()
        .map(|name| normalize_header(name))
        .collect();
    let fields: Vec<Option<Field>> = columns.iter().map(|name| Field::parse(name)).collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .zip(&fields)
                .map(|(cell, field)| match field {
                    Some(field) => normalize_cell(*field, cell),
                    None => cell.clone(),
                })
                .collect()
        })
        .collect();
    Table::from_parts(columns, rows)
}

/// Applies one field's rule to one cell.
///
/// Rules consume the cell's textual rendering, so cells that already carry
/// their canonical type re-normalize to themselves.
fn normalize_cell(field: Field, cell: &Value) -> Value {
    if cell.is_missing() {
        return Value::Missing;
    }
    let text = cell.render();
    match field {
        Field::Name | Field::Dept => clean_text(&text),
        Field::Age => clean_age(&text),
        Field::Salary => clean_salary(&text),
        Field::JoinDate => date::parse_date(text.trim())
            .map(Value::Date)
            .unwrap_or(Value::Missing),
    }
}

/// Empty or whitespace-only text becomes missing; anything else is
/// trimmed and title-cased.
fn clean_text(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Value::Missing
    } else {
        Value::Text(field::title_case(trimmed))
    }
}

/// Parses an age as an integer. A fractionless float also counts; a float
/// with a fractional part does not get silently truncated. No range
/// validation: negative or absurd ages pass through unchanged.
fn clean_age(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Value::Integer(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Value::Integer(value as i64),
        _ => Value::Missing,
    }
}

/// Strips everything that is not an ASCII digit or a decimal point
/// (currency symbols, thousands separators, whitespace), then parses the
/// remainder as a decimal number.
fn clean_salary(text: &str) -> Value {
    let pattern = Regex::new(r"[^0-9.]").expect("Hardcode regex pattern");
    let stripped = pattern.replace_all(text, "");
    stripped
        .parse::<f64>()
        .map(Value::Number)
        .unwrap_or(Value::Missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|cell| Value::from(*cell)).collect()
    }

    fn date(year: i32, month: u32, day: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(year, month, day).expect("NaiveDate literal"))
    }

    fn staff_table() -> Table {
        Table::new(
            names(&["  name ", "AGE", "dept", "salary", "join date", "Notes"]),
            vec![
                row(&["john doe", "30", "hr", "$1,234.50", "01/02/23", "keep AS-IS"]),
                row(&["", "abc", "  ", "abc", "not-a-date", ""]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn headers_are_trimmed_and_title_cased() {
        let table = normalize(&staff_table());
        assert_eq!(
            table.columns(),
            &["Name", "Age", "Dept", "Salary", "Join Date", "Notes"]
        );
    }

    #[test]
    fn recognized_cells_gain_canonical_types() {
        let table = normalize(&staff_table());
        assert_eq!(table.cell(0, 0), Some(&Value::from("John Doe")));
        assert_eq!(table.cell(0, 1), Some(&Value::Integer(30)));
        assert_eq!(table.cell(0, 2), Some(&Value::from("Hr")));
        assert_eq!(table.cell(0, 3), Some(&Value::Number(1234.50)));
        assert_eq!(table.cell(0, 4), Some(&date(2023, 2, 1)));
    }

    #[test]
    fn unconvertible_cells_become_missing_without_losing_the_row() {
        let table = normalize(&staff_table());
        for column in 0..5 {
            assert_eq!(table.cell(1, column), Some(&Value::Missing));
        }
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn unrecognized_columns_pass_through_unmodified() {
        let table = normalize(&staff_table());
        assert_eq!(table.cell(0, 5), Some(&Value::from("keep AS-IS")));
        assert_eq!(table.cell(1, 5), Some(&Value::from("")));
    }

    #[test]
    fn shape_is_preserved() {
        let input = staff_table();
        let table = normalize(&input);
        assert_eq!(table.column_count(), input.column_count());
        assert_eq!(table.row_count(), input.row_count());
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(&staff_table());
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn age_accepts_fractionless_floats_only() {
        assert_eq!(clean_age("25"), Value::Integer(25));
        assert_eq!(clean_age("25.0"), Value::Integer(25));
        assert_eq!(clean_age("25.5"), Value::Missing);
        assert_eq!(clean_age("-3"), Value::Integer(-3));
        assert_eq!(clean_age(""), Value::Missing);
    }

    #[test]
    fn salary_strips_currency_decoration() {
        assert_eq!(clean_salary("$1,234.50"), Value::Number(1234.50));
        assert_eq!(clean_salary("  EUR 99 000 "), Value::Number(99000.0));
        assert_eq!(clean_salary("abc"), Value::Missing);
        assert_eq!(clean_salary("1.2.3"), Value::Missing);
        assert_eq!(clean_salary(""), Value::Missing);
    }

    #[test]
    fn join_date_first_match_wins() {
        let table = Table::new(
            names(&["Join Date"]),
            vec![row(&["01/02/23"]), row(&["2023-02-01"]), row(&["nope"])],
        )
        .unwrap();
        let table = normalize(&table);
        assert_eq!(table.cell(0, 0), Some(&date(2023, 2, 1)));
        assert_eq!(table.cell(1, 0), Some(&date(2023, 2, 1)));
        assert_eq!(table.cell(2, 0), Some(&Value::Missing));
    }

    #[test]
    fn missing_cells_stay_missing() {
        let table = Table::new(
            names(&["Age"]),
            vec![vec![Value::Missing]],
        )
        .unwrap();
        assert_eq!(normalize(&table).cell(0, 0), Some(&Value::Missing));
    }
}
