//! Query façade shared by the HTTP handlers and the CLI commands.

use crate::core::calculator::summary::summarize;
use crate::core::filter::{is_present, parse_range};
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::models::granularity::Granularity;
use crate::models::summary_row::{SummaryOrder, SummaryRow};

pub struct EventQuery;

impl EventQuery {
    /// Events in the (optional) range, ascending by instant.
    ///
    /// Ordering compares parsed timestamps, not strings, so mixed offsets
    /// sort correctly. Equal instants keep storage order.
    pub fn list_events<S: EventStore + ?Sized>(
        store: &S,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<Vec<Event>> {
        let range = parse_range(from, to)?;
        let mut events = store.query_by_range(&range)?;

        events.sort_by_cached_key(|e| e.timestamp().ok());

        tracing::debug!(?range, count = events.len(), "Listed events");
        Ok(events)
    }

    /// Per-bucket counters for the range. Both bounds are mandatory.
    pub fn summary_events<S: EventStore + ?Sized>(
        store: &S,
        from: Option<&str>,
        to: Option<&str>,
        granularity: Granularity,
        order: SummaryOrder,
    ) -> AppResult<Vec<SummaryRow>> {
        if !is_present(from) || !is_present(to) {
            return Err(AppError::MissingRange);
        }

        let range = parse_range(from, to)?;
        let events = store.query_by_range(&range)?;
        let rows = summarize(&events, granularity, order)?;

        tracing::debug!(
            ?range,
            by = granularity.as_str(),
            events = events.len(),
            rows = rows.len(),
            "Summarized events"
        );
        Ok(rows)
    }

    /// Validate every payload, then store the whole batch.
    ///
    /// One invalid payload rejects the batch before anything is written.
    /// An empty batch is a no-op.
    pub fn insert_events<S: EventStore + ?Sized>(
        store: &mut S,
        payloads: Vec<NewEvent>,
    ) -> AppResult<usize> {
        if payloads.is_empty() {
            tracing::debug!("Empty insert batch");
            return Ok(0);
        }

        let events = payloads
            .into_iter()
            .map(NewEvent::validate)
            .collect::<AppResult<Vec<Event>>>()?;

        let n = store.insert_many(&events)?;
        tracing::info!(count = n, "Inserted events");
        Ok(n)
    }

    pub fn clear_events<S: EventStore + ?Sized>(store: &mut S) -> AppResult<usize> {
        let n = store.clear()?;
        tracing::info!(removed = n, "Cleared events");
        Ok(n)
    }
}
