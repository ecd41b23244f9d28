//! Date and time helpers for the booking views.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Value for `<input type="date" min=...>`: "2025-10-15"
pub fn input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of a date input; empty or malformed input gives `None`
pub fn parse_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format a booking date: "15 Oct 2025"
pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%-d %b %Y").to_string()
}

/// Format a booking time: "10:30 AM"
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at(2025, 10, 15, 10, 30)), "15 Oct 2025");
        assert_eq!(format_date(&at(2025, 1, 5, 0, 0)), "5 Jan 2025");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&at(2025, 10, 15, 10, 30)), "10:30 AM");
        assert_eq!(format_time(&at(2025, 10, 15, 14, 0)), "2:00 PM");
        assert_eq!(format_time(&at(2025, 10, 15, 0, 15)), "12:15 AM");
    }

    #[test]
    fn test_input_value_and_parse() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(input_value(date), "2025-03-07");
        assert_eq!(parse_input(" 2025-03-07 "), Some(date));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("07.03.2025"), None);
    }
}
