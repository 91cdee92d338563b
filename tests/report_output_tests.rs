//! Tests for the serializable run report

use elevator_car_simulator::{
    Passenger, SimulationConfig, SimulationOrchestrator, SimulationStatistics,
};
use std::fs;

/// The run report round-trips through a JSON file on disk
#[test]
fn test_report_roundtrips_through_file() {
    let config = SimulationConfig { seed: Some(17), ..Default::default() };
    let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
    orchestrator.set_passengers(vec![Passenger::new(1, 4), Passenger::new(3, 5)]);
    orchestrator.run(150);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run-report.json");

    let json = serde_json::to_string_pretty(orchestrator.statistics()).unwrap();
    fs::write(&path, &json).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let report: SimulationStatistics = serde_json::from_str(&content).unwrap();

    assert_eq!(report.ticks_run, 150);
    assert_eq!(report.passengers_total, 2);
    assert_eq!(report.passengers_delivered, orchestrator.statistics().passengers_delivered);
    assert_eq!(report.floors_traveled, orchestrator.statistics().floors_traveled);
}

/// The report serializes the fields a downstream consumer keys on
#[test]
fn test_report_field_names_are_stable() {
    let stats = SimulationStatistics::new(3);
    let json = serde_json::to_string(&stats).unwrap();

    for field in [
        "started_at",
        "ticks_run",
        "floors_traveled",
        "stops",
        "door_openings",
        "door_closings",
        "forced_door_closes",
        "constraint_violations",
        "calls_registered",
        "destinations_registered",
        "boardings",
        "missed_boardings",
        "passengers_total",
        "passengers_delivered",
    ] {
        assert!(json.contains(field), "missing report field: {}", field);
    }
}
