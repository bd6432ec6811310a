//! Date range filter: turns the raw `from` / `to` query values into a
//! day-granular [`DateRange`].

use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::utils::date::parse_timestamp;
use chrono::NaiveDate;

/// Parse optional `from` / `to` bounds.
///
/// Each present bound must be a full RFC 3339 timestamp with an offset;
/// bare dates (`1985-10-26`) are rejected. Only the calendar day written
/// before the `T` is kept, so `1985-10-26T00:00:00Z` and
/// `1985-10-26T23:00:00Z` are the same bound. Empty strings count as absent.
pub fn parse_range(from_raw: Option<&str>, to_raw: Option<&str>) -> AppResult<DateRange> {
    Ok(DateRange {
        from: parse_bound(from_raw)?,
        to: parse_bound(to_raw)?,
    })
}

fn parse_bound(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(|ts| Some(ts.date_naive()))
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// True when the raw value carries an actual bound.
pub(crate) fn is_present(raw: Option<&str>) -> bool {
    raw.is_some_and(|s| !s.trim().is_empty())
}
