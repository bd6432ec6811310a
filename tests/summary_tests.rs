mod common;

use chatlog::core::calculator::summary::summarize;
use chatlog::models::event_type::EventType;
use chatlog::models::granularity::Granularity;
use chatlog::models::summary_row::{SummaryOrder, SummaryRow};
use common::{ev, scenario_events};

fn row(date: &str, counts: [u64; 4]) -> SummaryRow {
    SummaryRow {
        date: date.to_string(),
        enters: counts[0],
        leaves: counts[1],
        comments: counts[2],
        highfives: counts[3],
    }
}

#[test]
fn test_empty_input_gives_no_rows() {
    let rows = summarize(&[], Granularity::Day, SummaryOrder::Chronological).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_day_buckets_count_each_type() {
    let rows = summarize(
        &scenario_events(),
        Granularity::Day,
        SummaryOrder::Chronological,
    )
    .unwrap();

    assert_eq!(
        rows,
        vec![
            row("1985-10-26T00:00:00Z", [2, 1, 1, 1]),
            row("1985-10-27T00:00:00Z", [0, 1, 0, 0]),
        ]
    );
}

#[test]
fn test_hour_buckets_are_sparse() {
    let rows = summarize(
        &scenario_events(),
        Granularity::Hour,
        SummaryOrder::Chronological,
    )
    .unwrap();

    let keys: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "1985-10-26T09:00:00Z",
            "1985-10-26T10:00:00Z",
            "1985-10-27T09:00:00Z",
        ]
    );
    assert_eq!(rows[0].total(), 4);
}

#[test]
fn test_minute_buckets_one_row_per_distinct_timestamp() {
    let rows = summarize(
        &scenario_events(),
        Granularity::Minute,
        SummaryOrder::Chronological,
    )
    .unwrap();

    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.total() == 1));
}

#[test]
fn test_counts_add_up_to_event_count() {
    let events = scenario_events();
    for g in [Granularity::Minute, Granularity::Hour, Granularity::Day] {
        let rows = summarize(&events, g, SummaryOrder::Chronological).unwrap();
        let total: u64 = rows.iter().map(SummaryRow::total).sum();
        assert_eq!(total, events.len() as u64, "granularity {}", g.as_str());
    }
}

#[test]
fn test_order_chronological_vs_first_seen() {
    let events = vec![
        ev(EventType::Enter, "b", "1985-10-27T08:00:00Z"),
        ev(EventType::Enter, "a", "1985-10-26T08:00:00Z"),
        ev(EventType::Leave, "b", "1985-10-27T18:00:00Z"),
    ];

    let ordered = summarize(&events, Granularity::Day, SummaryOrder::Chronological).unwrap();
    assert_eq!(ordered[0].date, "1985-10-26T00:00:00Z");
    assert_eq!(ordered[1].date, "1985-10-27T00:00:00Z");
    assert_eq!(ordered[1].leaves, 1);

    let legacy = summarize(&events, Granularity::Day, SummaryOrder::FirstSeen).unwrap();
    assert_eq!(legacy[0].date, "1985-10-27T00:00:00Z");
    assert_eq!(legacy[1].date, "1985-10-26T00:00:00Z");
}

#[test]
fn test_no_row_is_all_zero() {
    for g in [Granularity::Minute, Granularity::Hour, Granularity::Day] {
        let rows = summarize(&scenario_events(), g, SummaryOrder::FirstSeen).unwrap();
        assert!(rows.iter().all(|r| r.total() > 0));
    }
}
