use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::EventQuery;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::granularity::Granularity;
use crate::models::summary_row::SummaryRow;
use crate::server::response::EventsResponse;
use crate::utils::colors::{CYAN, RESET, colorize_count};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { from, to, by, json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let granularity = Granularity::from_param(by.as_deref());

        let rows = EventQuery::summary_events(
            &pool,
            from.as_deref(),
            to.as_deref(),
            granularity,
            cfg.summary_order,
        )?;

        if *json {
            let out = serde_json::to_string_pretty(&EventsResponse { events: rows })
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        if rows.is_empty() {
            println!("No events recorded in this range.");
            return Ok(());
        }

        print_rows(&rows, granularity);
    }
    Ok(())
}

fn print_rows(rows: &[SummaryRow], granularity: Granularity) {
    let mut table = Table::new(vec![
        Column::new(&format!("BUCKET ({})", granularity.as_str()), 30),
        Column::new("ENTERS", 7),
        Column::new("LEAVES", 7),
        Column::new("COMMENTS", 9),
        Column::new("HIGHFIVES", 0),
    ]);

    for row in rows {
        table.add_row(vec![
            row.date.clone(),
            colorize_count(row.enters),
            colorize_count(row.leaves),
            colorize_count(row.comments),
            colorize_count(row.highfives),
        ]);
    }

    let total: u64 = rows.iter().map(SummaryRow::total).sum();

    print!("{}", table.render());
    println!("{}{} bucket(s), {} event(s){}", CYAN, rows.len(), total, RESET);
}
