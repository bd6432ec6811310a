use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Configure the connection and bring the schema up to date.
///
/// Schema creation and upgrades live in [`run_pending_migrations`]; this
/// only sets the per-connection pragmas first.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    // a CLI `add` may race a running server on the same file
    conn.busy_timeout(Duration::from_secs(5))?;

    run_pending_migrations(conn)?;
    Ok(())
}
