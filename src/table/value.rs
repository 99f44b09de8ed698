use chrono::NaiveDate;
use serde::Serialize;
use serde::Serializer;
use std::fmt::Display;

/// A single cell value with its canonical type.
///
/// Cells start life as text and only gain a richer type when the normalizer
/// recognizes their column. `Missing` is a first-class absence marker,
/// distinct from the empty string: it renders blank in every export format
/// and never becomes a literal "None"/"NaN"/"null" string.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// First-class missing value
    #[default]
    Missing,
    /// Free-form text
    Text(String),
    /// 64-bit signed integer
    Integer(i64),
    /// Double-precision number
    Number(f64),
    /// Calendar date without a time component
    Date(NaiveDate),
}

impl Value {
    /// Returns true if this cell holds the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Renders the cell as user-facing text; `Missing` renders empty.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Text(text) => write!(f, "{text}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Number(value) => write!(f, "{value}"),
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl Serialize for Value {
    /// `Missing` serializes as null; dates as ISO `YYYY-MM-DD` strings.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Missing => serializer.serialize_none(),
            Value::Text(text) => serializer.serialize_str(text),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Number(value) => serializer.serialize_f64(*value),
            Value::Date(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_renders_empty() {
        assert_eq!(Value::Missing.render(), "");
    }

    #[test]
    fn date_renders_iso() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).expect("NaiveDate literal");
        assert_eq!(Value::Date(date).render(), "2023-02-01");
    }

    #[test]
    fn number_renders_without_padding() {
        assert_eq!(Value::Number(1234.5).render(), "1234.5");
        assert_eq!(Value::Integer(-3).render(), "-3");
    }

    #[test]
    fn missing_serializes_as_null() {
        let json = serde_json::to_string(&Value::Missing).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn date_serializes_as_iso_string() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).expect("NaiveDate literal");
        let json = serde_json::to_string(&Value::Date(date)).unwrap();
        assert_eq!(json, "\"2023-02-01\"");
    }
}
