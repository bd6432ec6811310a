//! Event store contract and its SQLite implementation.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{count_events, delete_all_events, insert_event, load_events_in_range};
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::models::event::Event;

/// Append-only event log queried by day range.
pub trait EventStore {
    /// Persist a batch. Either every row is written or none is.
    fn insert_many(&mut self, events: &[Event]) -> AppResult<usize>;

    /// Events whose day lies in `range`. No ordering guarantee.
    fn query_by_range(&self, range: &DateRange) -> AppResult<Vec<Event>>;

    /// Delete every event. Returns how many rows were removed.
    fn clear(&mut self) -> AppResult<usize>;

    fn count(&self) -> AppResult<u64>;
}

impl EventStore for DbPool {
    fn insert_many(&mut self, events: &[Event]) -> AppResult<usize> {
        let tx = self.conn.transaction()?;

        for ev in events {
            let id = insert_event(&tx, ev)?;
            tracing::trace!(id, kind = ev.kind.et_as_str(), "Event stored");
        }

        ttlog_quiet(
            &tx,
            "insert",
            "events",
            &format!("Inserted {} event(s)", events.len()),
        );

        tx.commit()?;
        Ok(events.len())
    }

    fn query_by_range(&self, range: &DateRange) -> AppResult<Vec<Event>> {
        load_events_in_range(&self.conn, range)
    }

    fn clear(&mut self) -> AppResult<usize> {
        let removed = delete_all_events(&self.conn)?;
        ttlog_quiet(
            &self.conn,
            "clear",
            "events",
            &format!("Deleted {removed} event(s)"),
        );
        Ok(removed)
    }

    fn count(&self) -> AppResult<u64> {
        count_events(&self.conn)
    }
}
