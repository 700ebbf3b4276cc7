use chrono::{DateTime, NaiveDate, Utc};

/// Countdown as MM:SS, e.g. `02:00` for 120 seconds.
pub fn format_countdown(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Short date for tables: `Jun 4, 2022`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long date for confirmations: `Saturday, June 4, 2022`.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Parse the value of an `<input type="date">`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Up to two initials for avatar circles, e.g. "Sarah Safari" -> "SS".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|word| !word.ends_with('.'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_renders_minutes_and_seconds() {
        assert_eq!(format_countdown(120), "02:00");
        assert_eq!(format_countdown(119), "01:59");
        assert_eq!(format_countdown(45), "00:45");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn dates_format_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2022, 6, 4).unwrap();
        assert_eq!(format_date(date), "Jun 4, 2022");
        assert_eq!(format_date_long(date), "Saturday, June 4, 2022");
    }

    #[test]
    fn date_inputs_parse_iso_values() {
        assert_eq!(parse_date("2022-06-04"), NaiveDate::from_ymd_opt(2022, 6, 4));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn initials_skip_honorifics() {
        assert_eq!(initials("Dr. Sarah Safari"), "SS");
        assert_eq!(initials("Phoenix Baker"), "PB");
        assert_eq!(initials("Cher"), "C");
    }
}
