use chatlog::core::calculator::bucket::bucket_key;
use chatlog::errors::AppError;
use chatlog::models::granularity::Granularity;
use chatlog::utils::date::parse_timestamp;

#[test]
fn test_minute_keeps_the_input_verbatim() {
    let raw = "1985-10-26T09:02:17.250+02:00";
    assert_eq!(bucket_key(Granularity::Minute, raw).unwrap(), raw);
}

#[test]
fn test_hour_truncates_minutes_and_seconds() {
    assert_eq!(
        bucket_key(Granularity::Hour, "1985-10-26T09:42:17.123Z").unwrap(),
        "1985-10-26T09:00:00Z"
    );
}

#[test]
fn test_day_truncates_to_midnight() {
    assert_eq!(
        bucket_key(Granularity::Day, "1985-10-26T21:00:00Z").unwrap(),
        "1985-10-26T00:00:00Z"
    );
}

#[test]
fn test_offset_is_kept_not_converted() {
    assert_eq!(
        bucket_key(Granularity::Day, "1985-10-26T23:30:00+02:00").unwrap(),
        "1985-10-26T00:00:00+02:00"
    );
    assert_eq!(
        bucket_key(Granularity::Hour, "1985-10-26T23:30:00-05:00").unwrap(),
        "1985-10-26T23:00:00-05:00"
    );
}

#[test]
fn test_unparseable_timestamp_is_an_error_when_truncating() {
    let err = bucket_key(Granularity::Hour, "yesterday").unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_granularity_param_falls_back_to_minute() {
    assert_eq!(Granularity::from_param(None), Granularity::Minute);
    assert_eq!(Granularity::from_param(Some("week")), Granularity::Minute);
    assert_eq!(Granularity::from_param(Some("HOUR")), Granularity::Hour);
    assert_eq!(Granularity::from_param(Some("day")), Granularity::Day);
}

#[test]
fn test_truncation_is_idempotent() {
    for raw in [
        "1955-11-05T09:01:00Z",
        "1985-10-26T23:59:59.999+02:00",
        "2015-10-21T16:29:00-07:00",
    ] {
        for g in [Granularity::Hour, Granularity::Day] {
            let once = bucket_key(g, raw).unwrap();
            let twice = bucket_key(g, &once).unwrap();
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_truncation_is_monotonic() {
    for offset in ["Z", "+02:00", "-07:00"] {
        let mut stamps: Vec<String> = [
            "1955-11-05T09:01:00",
            "1955-11-05T09:59:59.999",
            "1955-11-05T10:00:00",
            "1985-10-26T00:00:00",
            "1985-10-26T01:21:00",
            "1985-10-26T23:59:59",
            "2015-10-21T16:29:00",
        ]
        .iter()
        .map(|t| format!("{t}{offset}"))
        .collect();
        stamps.sort_by_key(|s| parse_timestamp(s));

        for g in [Granularity::Hour, Granularity::Day] {
            let keys: Vec<_> = stamps
                .iter()
                .map(|s| parse_timestamp(&bucket_key(g, s).unwrap()).unwrap())
                .collect();
            assert!(
                keys.windows(2).all(|w| w[0] <= w[1]),
                "{} keys out of order for offset {offset}",
                g.as_str()
            );
        }
    }
}
