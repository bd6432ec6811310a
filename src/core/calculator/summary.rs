use super::bucket::bucket_key;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::granularity::Granularity;
use crate::models::summary_row::{SummaryOrder, SummaryRow};
use crate::utils::date::parse_timestamp;
use indexmap::IndexMap;

/// Fold events into one row per bucket key.
///
/// Rows are created on the first event of their bucket, so the output is
/// sparse: a bucket without events never appears.
pub fn summarize(
    events: &[Event],
    granularity: Granularity,
    order: SummaryOrder,
) -> AppResult<Vec<SummaryRow>> {
    let mut buckets: IndexMap<String, SummaryRow> = IndexMap::new();

    for ev in events {
        let key = bucket_key(granularity, &ev.date)?;
        buckets
            .entry(key)
            .or_insert_with_key(|k| SummaryRow::empty(k.clone()))
            .record(ev.kind);
    }

    let mut rows: Vec<SummaryRow> = buckets.into_values().collect();

    if order == SummaryOrder::Chronological {
        // keys come from stored events, so they always parse
        rows.sort_by_key(|r| parse_timestamp(&r.date));
    }

    Ok(rows)
}
