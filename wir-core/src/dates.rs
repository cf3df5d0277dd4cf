//! Date helpers for the `YYYY-MM-DD` event date.

use chrono::NaiveDate;

/// Format used by the browser date input and the `event_date` query parameter.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_event_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, EVENT_DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_event_date("2024-03-15").unwrap(), date);
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(parse_event_date("15/03/2024").is_err());
        assert!(parse_event_date("20240315").is_err());
        assert!(parse_event_date("2024-02-30").is_err());
    }
}
