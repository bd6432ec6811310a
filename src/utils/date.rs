//! Timestamp helpers shared by the models, the filter and the bucketizer.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};

/// Current UTC time, millisecond precision, `Z` designator
/// (e.g. `2024-03-01T10:15:30.123Z`).
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a full RFC 3339 timestamp. An explicit offset (`Z` or `±hh:mm`)
/// is mandatory, so bare dates and naive date-times are rejected.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim()).ok()
}

/// Render a timestamp with second precision, keeping its own offset.
/// A zero offset is written as `Z`.
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    if dt.offset().local_minus_utc() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }
}

/// `YYYY-MM-DD` form used for day-granular comparisons in SQL.
pub fn day_str(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
