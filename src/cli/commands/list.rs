use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::EventQuery;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::server::response::EventsResponse;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { from, to, json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let events = EventQuery::list_events(&pool, from.as_deref(), to.as_deref())?;

        if *json {
            let out = serde_json::to_string_pretty(&EventsResponse { events })
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        if events.is_empty() {
            println!("No events recorded in this range.");
            return Ok(());
        }

        print_events(&events);
    }
    Ok(())
}

fn kind_color(kind: EventType) -> &'static str {
    match kind {
        EventType::Enter => GREEN,
        EventType::Leave => RED,
        EventType::Comment => BLUE,
        EventType::Highfive => MAGENTA,
    }
}

fn print_events(events: &[Event]) {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("DATE", 30),
        Column::new("TYPE", 9),
        Column::new("USER", 14),
        Column::new("OTHER", 14),
        Column::new("MESSAGE", 0),
    ]);

    for ev in events {
        let kind = ev.kind.et_as_str();
        table.add_row(vec![
            ev.id.to_string(),
            ev.date.clone(),
            format!("{}{}{}", kind_color(ev.kind), kind, RESET),
            ev.user.clone(),
            colorize_optional(ev.other_user.as_deref().unwrap_or("--")),
            colorize_optional(ev.message.as_deref().unwrap_or("--")),
        ]);
    }

    print!("{}", table.render());
    println!("{}{} event(s){}", CYAN, events.len(), RESET);
}
