use chrono::NaiveDate;

/// Candidate date formats, tried in order; the first that parses wins.
///
/// The ordering is a committed policy, not an accident: `"01/02/03"` is
/// ambiguous across locales and resolves as day/month/2-digit-year here,
/// so it reads as 2003-02-01. chrono's `%y` pivot maps 00-68 to 2000-2068.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%y", "%Y-%m-%d", "%d-%m-%Y", "%Y/%m/%d"];

/// Parses a trimmed date string against the fixed candidate formats.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("NaiveDate literal")
    }

    #[test]
    fn slash_two_digit_year_is_day_first() {
        assert_eq!(parse_date("01/02/23"), Some(date(2023, 2, 1)));
    }

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(parse_date("2023-02-01"), Some(date(2023, 2, 1)));
    }

    #[test]
    fn dash_four_digit_year_is_day_first() {
        assert_eq!(parse_date("01-02-2003"), Some(date(2003, 2, 1)));
    }

    #[test]
    fn slash_four_digit_year_is_year_first() {
        assert_eq!(parse_date("2023/02/01"), Some(date(2023, 2, 1)));
    }

    #[test]
    fn unparsable_input_is_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("31/02/23"), None);
        assert_eq!(parse_date(""), None);
    }
}
