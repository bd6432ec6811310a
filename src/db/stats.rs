use crate::db::pool::DbPool;
use crate::models::event_type::EventType;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL EVENTS (and per type)
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    for kind in EventType::ALL {
        let n: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM events WHERE type = ?1",
            [kind.to_db_str()],
            |row| row.get(0),
        )?;
        println!("    {:<9} {}", kind.et_as_str(), n);
    }

    //
    // 3) DATE RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT MIN(substr(date, 1, 10)) FROM events",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let last_day: Option<String> = pool
        .conn
        .query_row(
            "SELECT MAX(substr(date, 1, 10)) FROM events",
            [],
            |row| row.get(0),
        )
        .optional()?
        .flatten();

    let fmt_first = first_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE EVENTS/DAY
    //
    let first = first_day.as_deref().and_then(parse_date);
    let last = last_day.as_deref().and_then(parse_date);
    if let (Some(d1), Some(d2)) = (first, last) {
        let days = (d2 - d1).num_days() + 1;

        let avg = count as f64 / days as f64;
        println!("{}• Average events/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
