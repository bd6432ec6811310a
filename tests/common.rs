#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chatlog::db::pool::DbPool;
use chatlog::db::store::EventStore;
use chatlog::models::event::Event;
use chatlog::models::event_type::EventType;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cli() -> Command {
    cargo_bin_cmd!("chatlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chatlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB through the CLI (`--test init` leaves the config file alone)
pub fn init_db(db_path: &str) {
    cli()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn ev(kind: EventType, user: &str, date: &str) -> Event {
    Event::new(kind, user, None, None, date)
}

/// In-memory store preloaded with `events`, in the given order.
pub fn memory_store(events: &[Event]) -> DbPool {
    let mut pool = DbPool::in_memory().expect("in-memory db");
    if !events.is_empty() {
        pool.insert_many(events).expect("seed events");
    }
    pool
}

/// The fixture used by the HTTP scenarios: two users around 1985-10-26.
pub fn scenario_events() -> Vec<Event> {
    vec![
        ev(EventType::Enter, "Doc", "1985-10-26T09:00:00Z"),
        ev(EventType::Enter, "Marty", "1985-10-26T09:01:00Z"),
        Event::new(
            EventType::Comment,
            "Doc",
            None,
            Some("Great Scott!".into()),
            "1985-10-26T09:02:00Z",
        ),
        Event::new(
            EventType::Highfive,
            "Marty",
            Some("Doc".into()),
            None,
            "1985-10-26T09:03:00Z",
        ),
        ev(EventType::Leave, "Doc", "1985-10-26T10:00:00Z"),
        ev(EventType::Leave, "Marty", "1985-10-27T09:00:00Z"),
    ]
}
