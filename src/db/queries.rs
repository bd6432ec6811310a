use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::utils::date::day_str;
use rusqlite::types::ToSql;
use rusqlite::{Connection, Result, Row, params};

const EVENT_COLUMNS: &str = "id, type, user, other_user, message, date, created_at";

pub fn map_row(row: &Row) -> Result<Event> {
    let kind_str: String = row.get("type")?;
    let kind = EventType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(kind_str.clone())),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        kind,
        user: row.get("user")?,
        other_user: row.get("other_user")?,
        message: row.get("message")?,
        date: row.get("date")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert one event and return the id assigned by SQLite.
pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (type, user, other_user, message, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![
        ev.kind.to_db_str(),
        ev.user,
        ev.other_user,
        ev.message,
        ev.date,
        ev.created_at,
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Load the events whose calendar day falls inside `range`.
///
/// The day is the `YYYY-MM-DD` prefix of the stored timestamp, i.e. the day
/// in the event's own offset. Rows come back in storage order.
pub fn load_events_in_range(conn: &Connection, range: &DateRange) -> AppResult<Vec<Event>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(from) = &range.from {
        clauses.push("substr(date, 1, 10) >= ?");
        values.push(day_str(from));
    }
    if let Some(to) = &range.to {
        clauses.push("substr(date, 1, 10) <= ?");
        values.push(day_str(to));
    }

    let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY id ASC");

    let params: Vec<&dyn ToSql> = values.iter().map(|s| s as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_all_events(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events", [])?;
    Ok(n)
}

pub fn count_events(conn: &Connection) -> AppResult<u64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    Ok(n.max(0) as u64)
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log_entries(conn: &Connection) -> Result<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
