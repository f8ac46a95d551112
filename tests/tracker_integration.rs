//! End-to-end tests against a file-backed store

use energy_tracker_lib::core::{Config, Error};
use energy_tracker_lib::pricing::compute_single;
use energy_tracker_lib::tracker::Tracker;
use std::path::Path;

fn config_for(path: &Path) -> Config {
    let mut config = Config::default();
    config.storage.database_path = Some(path.to_path_buf());
    config
}

#[test]
fn test_seed_happens_once_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("energy.db"));

    let first = Tracker::open(&config).unwrap().index().unwrap();
    let second = Tracker::open(&config).unwrap().index().unwrap();

    assert_eq!(first.len(), 8);
    assert_eq!(first, second);
}

#[test]
fn test_usage_persists_and_matches_single_calculation() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("energy.db"));
    let requests = [("3", "10"), ("6", "2.5"), ("8", "0.75")];

    {
        let tracker = Tracker::open(&config).unwrap();
        for (id, hours) in requests {
            tracker.calculate(id, hours).unwrap();
        }
        assert!(tracker.calculate("0", "1").is_err());
    }

    let tracker = Tracker::open(&config).unwrap();
    let appliances = tracker.index().unwrap();
    let dashboard = tracker.dashboard().unwrap();

    assert_eq!(dashboard.rows.len(), requests.len());
    for (row, (id, hours)) in dashboard.rows.iter().zip(requests) {
        let appliance = appliances
            .iter()
            .find(|a| a.id.to_string() == id)
            .unwrap();
        let expected = compute_single(appliance, hours.parse().unwrap());

        assert_eq!(row.appliance_name, appliance.name);
        assert!((row.energy_kwh - expected.energy_kwh).abs() < 1e-9);
        assert!((row.cost - expected.cost).abs() < 1e-9);
    }
}

#[test]
fn test_dashboard_skips_removed_appliances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("energy.db");
    let config = config_for(&path);

    {
        let tracker = Tracker::open(&config).unwrap();
        tracker.calculate("1", "2").unwrap();
        tracker.calculate("6", "1").unwrap();
        tracker.calculate("6", "3").unwrap();
        tracker.calculate("2", "5").unwrap();
    }

    // Remove the Air Conditioner behind the tracker's back
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute("DELETE FROM appliances WHERE id = 6", []).unwrap();
    drop(conn);

    let tracker = Tracker::open(&config).unwrap();
    let dashboard = tracker.dashboard().unwrap();

    assert_eq!(dashboard.rows.len(), 2);
    assert_eq!(dashboard.warning_count(), 2);
    assert!(dashboard.warnings.iter().all(|w| w.appliance_id == 6));
    assert!(matches!(tracker.calculate("6", "1"), Err(Error::ApplianceNotFound(6))));
}

#[test]
fn test_dashboard_view_serializes_for_presentation() {
    let tracker = Tracker::in_memory().unwrap();
    tracker.calculate("4", "3").unwrap();

    let json = serde_json::to_value(tracker.dashboard().unwrap().view()).unwrap();

    assert_eq!(json["labels"], serde_json::json!(["Television"]));
    assert_eq!(json["values"], serde_json::json!([0.36]));
    assert_eq!(json["usage_data"][0]["appliance"], "Television");
    assert_eq!(json["usage_data"][0]["hours"], 3.0);
}
