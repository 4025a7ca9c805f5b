use chrono::{NaiveDate, NaiveDateTime};

/// Day-first formats, then ISO. Tried in order.
///
/// `%y` goes first: `%Y` would also accept `24` and yield the year 0024.
const DATE_FORMATS: [&str; 6] = ["%d/%m/%y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d"];

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"
];

/// Only reached when no day-first reading is a valid date, e.g. `12/31/2024`.
const MONTH_FIRST_FORMAT: &str = "%m/%d/%Y";

/// Parses a statement date, preferring day-before-month when ambiguous.
///
/// Time-of-day parts are accepted and dropped.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();

    if value.is_empty() {
        return None;
    }

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
        .or_else(|| NaiveDate::parse_from_str(value, MONTH_FIRST_FORMAT).ok())
}
