use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_ONLY_FORMATS: [&str; 3] = [DATE_FORMAT, "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

/// Parses the date shapes clients send for a join date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = DATE_ONLY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
    {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Parsed date, or `today` when the input is empty or unparseable.
pub fn normalize_date(input: &str, today: NaiveDate) -> NaiveDate {
    parse_date(input).unwrap_or(today)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The server's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
