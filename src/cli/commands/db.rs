use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{failure, info, success};

/// Maintenance on the configured database file.
///
/// Flags can be combined; they run in the order migrate, check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // Opened without migrating, so --check sees the file as it is on disk
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running pending migrations…");
        run_pending_migrations(&pool.conn)?;
        success("Schema is up to date.");
    }

    if *check {
        info("Running integrity check…");
        let verdict: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        match verdict.as_str() {
            "ok" => success("Integrity check passed."),
            _ => failure(format!("Integrity check failed: {verdict}")),
        }
    }

    if *vacuum {
        info("Compacting database (VACUUM)…");
        pool.conn.execute_batch("VACUUM;")?;
        ttlog_quiet(&pool.conn, "vacuum", "database", "VACUUM completed");
        success("Vacuum completed.");
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    Ok(())
}
