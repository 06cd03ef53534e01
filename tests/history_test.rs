/// Session history behavior through the public API
use chrono::{Local, TimeZone};
use unit_converter::history::DEFAULT_RECENT_LIMIT;
use unit_converter::{ConversionRecord, Session, SessionStore};

fn run_conversions(session: &mut Session, n: usize) {
    for i in 0..n {
        session.convert_and_record(i as f64, "Minutes", "Seconds", "Time").unwrap();
    }
}

#[test]
fn test_recent_history_returns_min_of_n_and_five() {
    for n in 0..=9 {
        let mut session = Session::new();
        run_conversions(&mut session, n);

        let recent = session.recent_history(DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), n.min(5), "after {} conversions", n);

        // Chronological order matching the last calls
        let expected: Vec<f64> = (n.saturating_sub(5)..n).map(|i| i as f64).collect();
        let values: Vec<f64> = recent.iter().map(|r| r.value).collect();
        assert_eq!(values, expected);
        for record in recent {
            assert_eq!(record.result, record.value * 60.0);
        }
    }
}

#[test]
fn test_recent_history_timestamps_are_ordered() {
    let mut session = Session::new();
    for hour in [8, 9, 10] {
        let ts = Local.with_ymd_and_hms(2024, 3, 1, hour, 30, 0).unwrap();
        session.convert_and_record_at(ts, 1.0, "Hours", "Minutes", "Time").unwrap();
    }

    let lines: Vec<String> = session.recent_history(5).iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "08:30:00 - 1.0 Hours -> 60.000000 Minutes",
            "09:30:00 - 1.0 Hours -> 60.000000 Minutes",
            "10:30:00 - 1.0 Hours -> 60.000000 Minutes",
        ]
    );
}

#[test]
fn test_failed_conversions_are_not_recorded() {
    let mut session = Session::new();
    run_conversions(&mut session, 2);

    assert!(session.convert_and_record(1.0, "Parsecs", "Meters", "Length").is_err());
    assert!(session.convert_and_record(-1.0, "Meters", "Feet", "Length").is_err());
    assert!(session.convert_and_record(1.0, "Meters", "Feet", "Distance").is_err());

    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_sessions_in_store_are_isolated() {
    let mut store = SessionStore::new();
    let first = store.create();
    let second = store.create();
    assert_ne!(first, second);

    run_conversions(store.get_mut(&first).unwrap(), 3);
    run_conversions(store.get_mut(&second).unwrap(), 1);

    assert_eq!(store.get(&first).unwrap().history().len(), 3);
    assert_eq!(store.get(&second).unwrap().history().len(), 1);

    store.remove(&first);
    assert!(store.get(&first).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_export_round_trips_records() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("export.json");

    let mut session = Session::new();
    session.convert_and_record(2.0, "Kilograms", "Pounds", "Mass").unwrap();
    session.export_json(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["session_id"], session.id().to_string());

    let entries: Vec<ConversionRecord> =
        serde_json::from_value(json["entries"].clone()).unwrap();
    let recorded = session.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].timestamp, recorded[0].timestamp);
    assert_eq!(entries[0].from_unit, "Kilograms");
    assert_eq!(entries[0].to_unit, "Pounds");
    assert!((entries[0].result - recorded[0].result).abs() < 1e-12);
}
