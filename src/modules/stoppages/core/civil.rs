// Parsing of civil date and time strings, and duration between civil instants.
//
// Boundaries
// - Pure functions, no clock access. The caller supplies the offset.

use crate::shared::core::primitives::{
    CIVIL_DATE_FORMAT, CIVIL_TIME_FORMAT, civil_instant, truncate_to_minute,
};
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime};

/// Earliest and latest calendar years a stoppage may be dated in.
pub const MIN_CIVIL_YEAR: i32 = 1900;
pub const MAX_CIVIL_YEAR: i32 = 2199;

/// `YYYY-MM-DD` within [`MIN_CIVIL_YEAR`]..=[`MAX_CIVIL_YEAR`].
pub fn parse_civil_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CIVIL_DATE_FORMAT)
        .ok()
        .filter(|date| (MIN_CIVIL_YEAR..=MAX_CIVIL_YEAR).contains(&date.year()))
}

/// Strict `HH:MM`, as entered by operators.
pub fn parse_civil_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CIVIL_TIME_FORMAT).ok()
}

/// `HH:MM` or `HH:MM:SS`, truncated to the minute. Older rows carry seconds.
pub fn parse_stored_time(value: &str) -> Option<NaiveTime> {
    parse_civil_time(value)
        .or_else(|| NaiveTime::parse_from_str(value.trim(), "%H:%M:%S").ok())
        .map(truncate_to_minute)
}

pub fn format_civil_date(date: NaiveDate) -> String {
    date.format(CIVIL_DATE_FORMAT).to_string()
}

pub fn format_civil_time(time: NaiveTime) -> String {
    time.format(CIVIL_TIME_FORMAT).to_string()
}

/// Signed milliseconds from the start civil instant to the end civil instant.
pub fn duration_ms(
    start: (NaiveDate, NaiveTime),
    end: (NaiveDate, NaiveTime),
    offset: &FixedOffset,
) -> Option<i64> {
    let start = civil_instant(start.0, start.1, offset)?;
    let end = civil_instant(end.0, end.1, offset)?;
    Some((end - start).num_milliseconds())
}
