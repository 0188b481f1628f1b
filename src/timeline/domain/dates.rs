//! Lenient parsing of tracker dates and timestamps.
//!
//! Trackers emit a mix of bare dates, RFC 3339 timestamps with `Z` suffixes
//! and naive ISO date-times. A value that cannot be parsed is treated as
//! absent; none of these helpers report errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses a calendar date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date is taken in UTC) and
/// naive ISO date-times. Returns `None` for blank or malformed input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use linear_gantt::timeline::domain::parse_calendar_date;
///
/// assert_eq!(
///     parse_calendar_date("2024-06-30"),
///     NaiveDate::from_ymd_opt(2024, 6, 30)
/// );
/// assert_eq!(parse_calendar_date("not a date"), None);
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .or_else(|| parse_rfc3339(value).map(|timestamp| timestamp.date_naive()))
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|naive| naive.date()))
}

/// Parses a timestamp, normalising it to UTC.
///
/// Accepts RFC 3339 (including the `Z` suffix), naive ISO date-times, which
/// are assumed to be UTC, and bare dates, which become midnight UTC. Returns
/// `None` for blank or malformed input.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    parse_rfc3339(value)
        .or_else(|| {
            value
                .parse::<NaiveDateTime>()
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            value
                .parse::<NaiveDate>()
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}
