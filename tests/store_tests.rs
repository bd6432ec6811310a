mod common;

use chatlog::core::query::EventQuery;
use chatlog::db::initialize::init_db;
use chatlog::db::pool::DbPool;
use chatlog::db::queries::load_log_entries;
use chatlog::db::store::EventStore;
use chatlog::models::date_range::DateRange;
use chatlog::models::event::Event;
use chatlog::models::event_type::EventType;
use chatlog::models::granularity::Granularity;
use chatlog::models::summary_row::SummaryOrder;
use common::{memory_store, scenario_events, setup_test_db};
use rusqlite::Connection;

#[test]
fn test_round_trip_keeps_optional_fields() {
    let pool = memory_store(&scenario_events());
    let events = pool.query_by_range(&DateRange::unbounded()).unwrap();

    let highfive = events
        .iter()
        .find(|e| e.kind == EventType::Highfive)
        .unwrap();
    assert_eq!(highfive.other_user.as_deref(), Some("Doc"));
    assert_eq!(highfive.message, None);

    let comment = events.iter().find(|e| e.kind == EventType::Comment).unwrap();
    assert_eq!(comment.message.as_deref(), Some("Great Scott!"));
    assert_eq!(comment.date, "1985-10-26T09:02:00Z");
}

#[test]
fn test_range_uses_the_day_written_in_the_timestamp() {
    // 23:30 on the 26th in +02:00 is the 26th, even though it is 21:30 UTC
    let pool = memory_store(&[Event::new(
        EventType::Enter,
        "Doc",
        None,
        None,
        "1985-10-26T23:30:00+02:00",
    )]);

    let day = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    let hit = DateRange {
        from: day("1985-10-26"),
        to: day("1985-10-26"),
    };
    let miss = DateRange {
        from: day("1985-10-27"),
        to: None,
    };

    assert_eq!(pool.query_by_range(&hit).unwrap().len(), 1);
    assert!(pool.query_by_range(&miss).unwrap().is_empty());
}

#[test]
fn test_inserts_and_clears_are_logged() {
    let mut pool = memory_store(&scenario_events());
    pool.clear().unwrap();

    let ops: Vec<String> = load_log_entries(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|l| l.operation)
        .collect();

    assert!(ops.contains(&"insert".to_string()));
    assert!(ops.contains(&"clear".to_string()));
}

#[test]
fn test_migrations_are_idempotent() {
    let db_path = setup_test_db("migrations_idempotent");

    let pool = DbPool::open(&db_path).unwrap();
    init_db(&pool.conn).unwrap();
    drop(pool);

    let pool = DbPool::open(&db_path).unwrap();
    let applied = load_log_entries(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|l| l.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn test_legacy_table_is_rebuilt() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT,
            user TEXT,
            otherUser TEXT,
            message TEXT,
            date TEXT
        );
        INSERT INTO events (type, user, otherUser, message, date) VALUES
            ('enter', 'Doc', NULL, NULL, '1985-10-26T09:00:00Z'),
            ('highfive', 'Marty', 'Doc', NULL, '1985-10-26T09:03:00Z'),
            ('teleport', 'Biff', NULL, NULL, '1985-10-26T09:04:00Z'),
            ('leave', NULL, NULL, NULL, '1985-10-26T09:05:00Z'),
            ('comment', 'Doc', NULL, 'Roads?', '1985-10-26'),
            ('ENTER', 'Biff', NULL, NULL, 'yesterday');
        "#,
    )
    .unwrap();

    init_db(&conn).unwrap();
    let pool = DbPool { conn };

    assert_eq!(pool.count().unwrap(), 2);
    let events = pool.query_by_range(&DateRange::unbounded()).unwrap();
    assert_eq!(events[1].other_user.as_deref(), Some("Doc"));

    let legacy_log = load_log_entries(&pool.conn)
        .unwrap()
        .into_iter()
        .find(|l| l.target == "legacy_events")
        .unwrap();
    assert!(legacy_log.message.contains("kept 2, dropped 4"));
}

#[test]
fn test_legacy_rows_with_bare_dates_do_not_break_queries() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT,
            user TEXT,
            otherUser TEXT,
            message TEXT,
            date TEXT
        );
        INSERT INTO events (type, user, otherUser, message, date) VALUES
            ('enter', 'Doc', NULL, NULL, '1985-10-26T09:00:00Z'),
            ('comment', 'Doc', NULL, 'Roads?', '1985-10-26');
        "#,
    )
    .unwrap();
    init_db(&conn).unwrap();
    let pool = DbPool { conn };

    let dates: Vec<String> = EventQuery::list_events(&pool, None, None)
        .unwrap()
        .into_iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(dates, vec!["1985-10-26T09:00:00Z"]);

    let rows = EventQuery::summary_events(
        &pool,
        Some("1985-10-01T00:00:00Z"),
        Some("1985-10-30T00:00:00Z"),
        Granularity::Day,
        SummaryOrder::Chronological,
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].enters, 1);
}
