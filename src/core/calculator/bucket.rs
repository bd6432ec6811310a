use crate::errors::{AppError, AppResult};
use crate::models::granularity::Granularity;
use crate::utils::date::{format_timestamp, parse_timestamp};
use chrono::{DateTime, FixedOffset, Timelike};

/// Map a timestamp to its bucket key for the given granularity.
///
/// - `Day`: time of day set to `00:00:00`
/// - `Hour`: minutes, seconds and sub-seconds set to zero
/// - `Minute`: the input string, unchanged
///
/// The offset written in the input is kept; no zone conversion happens.
pub fn bucket_key(granularity: Granularity, timestamp: &str) -> AppResult<String> {
    if granularity == Granularity::Minute {
        return Ok(timestamp.to_string());
    }

    let ts = parse_timestamp(timestamp)
        .ok_or_else(|| AppError::InvalidDate(timestamp.to_string()))?;

    let truncated = truncate(granularity, &ts)
        .ok_or_else(|| AppError::InvalidDate(timestamp.to_string()))?;

    Ok(format_timestamp(&truncated))
}

fn truncate(
    granularity: Granularity,
    ts: &DateTime<FixedOffset>,
) -> Option<DateTime<FixedOffset>> {
    let hour_start = ts.with_nanosecond(0)?.with_second(0)?.with_minute(0)?;

    match granularity {
        Granularity::Day => hour_start.with_hour(0),
        Granularity::Hour => Some(hour_start),
        Granularity::Minute => Some(*ts),
    }
}
