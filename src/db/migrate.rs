use crate::models::event_type::EventType;
use crate::utils::date::parse_timestamp;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `events` table has the given column.
fn events_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `events` table with the modern schema.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            type        TEXT NOT NULL CHECK(type IN ('enter','leave','comment','highfive')),
            user        TEXT NOT NULL,
            other_user  TEXT,
            message     TEXT,
            date        TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        "#,
    )?;
    Ok(())
}

/// Rebuild an `events` table written by the first (schemaless) server
/// version: `otherUser` column, no `created_at`, no type constraint.
///
/// Rows go through the same checks as a new insert: a known type, a
/// non-blank user and an RFC 3339 date with offset. The others are dropped
/// and their count is recorded in `log`.
fn migrate_legacy_events_table(conn: &Connection) -> Result<()> {
    if !events_has_column(conn, "otherUser")? {
        return Ok(());
    }

    tracing::warn!("Legacy events table detected, rebuilding with the modern schema");

    let tx = conn.unchecked_transaction()?;

    tx.execute_batch("ALTER TABLE events RENAME TO events_old;")?;
    create_events_table(&tx)?;

    let legacy = {
        let mut stmt = tx.prepare(
            "SELECT CAST(type AS TEXT), CAST(user AS TEXT), CAST(otherUser AS TEXT),
                    CAST(message AS TEXT), CAST(date AS TEXT)
             FROM events_old
             ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
            ))
        })?;
        rows.collect::<Result<Vec<_>>>()?
    };

    let total = legacy.len();
    let mut kept = 0usize;
    {
        let mut insert = tx.prepare(
            "INSERT INTO events (type, user, other_user, message, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        )?;

        for (kind, user, other_user, message, date) in legacy {
            let kind = kind.as_deref().and_then(EventType::et_from_str);
            let user = user.filter(|u| !u.trim().is_empty());
            let date = date.filter(|d| parse_timestamp(d).is_some());

            let (Some(kind), Some(user), Some(date)) = (kind, user, date) else {
                continue;
            };

            insert.execute(params![
                kind.to_db_str(),
                user,
                other_user,
                message,
                date.trim()
            ])?;
            kept += 1;
        }
    }

    let dropped = total - kept;
    // indexes moved with the renamed table; recreate them on the new one
    tx.execute_batch(
        "DROP TABLE events_old;
         CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);",
    )?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', 'legacy_events', ?1)",
        [format!(
            "Rebuilt legacy events table: kept {kept}, dropped {dropped} invalid row(s)"
        )],
    )?;
    tx.commit()?;

    if dropped > 0 {
        tracing::warn!(kept, dropped, "Legacy events migrated, invalid rows dropped");
    } else {
        tracing::info!(kept, "Legacy events migrated");
    }
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Index on the calendar-day prefix of `date`, matching the expression used
/// by range queries.
fn migrate_add_day_index(conn: &Connection) -> Result<()> {
    let version = "20260301_0001_add_events_day_index";

    // 1) Already applied?
    if migration_applied(conn, version)? {
        return Ok(());
    }

    // 2) Run the migration
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_events_day ON events(substr(date, 1, 10));",
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1,
                 'Added day index to events')",
        [version],
    )?;

    tracing::info!(version, "Migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the events table
    if !events_table_exists(conn)? {
        create_events_table(conn)?;
        tracing::debug!("Created events table");
    } else {
        migrate_legacy_events_table(conn)?;
    }

    // 3) Versioned migrations
    migrate_add_day_index(conn)?;

    Ok(())
}
