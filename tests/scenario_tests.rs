//! Scenario tests recreating end-to-end journeys and the documented
//! dispatch quirks

use elevator_car_simulator::{
    Car, Direction, Passenger, SimulationConfig, SimulationOrchestrator,
};

fn seeded_config(seed: u64) -> SimulationConfig {
    SimulationConfig { seed: Some(seed), ..Default::default() }
}

/// Execution trace: one passenger rides up while another waits to ride down
#[test]
fn test_execution_trace_scenario() {
    let mut orchestrator = SimulationOrchestrator::new(seeded_config(1)).unwrap();
    let up_rider = Passenger::new(1, 3);
    let down_rider = Passenger::new(4, 0);
    orchestrator.set_passengers(vec![up_rider, down_rider]);

    assert!(orchestrator.run_until_all_arrived(400));

    let passengers = orchestrator.passengers();
    assert_eq!(passengers[0].current_floor(), 3);
    assert_eq!(passengers[0].travel_distance(), 2);
    assert_eq!(passengers[1].current_floor(), 0);
    assert_eq!(passengers[1].travel_distance(), 4);
}

/// Two passengers on the same floor with opposite directions: the second
/// defers their call while the first's is pending, and both still board
#[test]
fn test_two_passengers_same_floor_opposite_directions() {
    let mut orchestrator = SimulationOrchestrator::new(seeded_config(2)).unwrap();
    let mut car_probe = Car::new(0, 5);
    let first = Passenger::new(2, 4);
    let second = Passenger::new(2, 0);

    // The deferral rule, observed directly on a car.
    car_probe.add_call(2, first.direction());
    assert!(second.should_wait_for_opposite_call(&car_probe));

    orchestrator.set_passengers(vec![first, second]);
    assert!(orchestrator.run_until_all_arrived(400));
    assert_eq!(orchestrator.statistics().passengers_delivered, 2);
}

/// Calls in both directions on the car's own floor park it direction-less;
/// this mirrors the original scheduler's observed behavior
#[test]
fn test_calls_in_both_directions_on_current_floor_park_the_car() {
    let mut car = Car::new(0, 5);
    car.set_current_floor(2);
    car.add_call(2, Direction::Up);
    car.add_call(2, Direction::Down);
    car.add_destination(5);

    // The current-floor rule wins over all pending work elsewhere.
    assert_eq!(car.choose_direction(), Direction::None);
    assert_eq!(car.choose_direction(), Direction::None);
    assert!(car.has_destination(5));
}

/// The car stops at each called floor in sequence on the way up
#[test]
fn test_multiple_floors_sequence() {
    let mut car = Car::new(0, 5);
    car.add_call(1, Direction::Up);
    car.add_call(2, Direction::Up);
    car.add_call(3, Direction::Up);
    car.set_direction(Direction::Up);

    car.move_one();
    assert!(car.is_stopped());
    assert_eq!(car.current_floor(), 1);

    // The door at the floor closes before the car continues.
    car.door_closed(1);
    car.choose_direction();
    car.move_one();
    assert!(car.is_stopped());
    assert_eq!(car.current_floor(), 2);

    car.door_closed(2);
    car.choose_direction();
    car.move_one();
    assert!(car.is_stopped());
    assert_eq!(car.current_floor(), 3);
}

/// Full building traversal: bottom to top, then back down
#[test]
fn test_full_building_traversal() {
    let mut car = Car::new(0, 5);
    car.add_destination(5);
    car.set_direction(Direction::Up);

    for expected in 1..=5 {
        car.move_one();
        assert_eq!(car.current_floor(), expected);
    }
    assert!(car.is_stopped());

    car.door_closed(5);
    car.add_destination(0);
    car.choose_direction();
    assert_eq!(car.direction(), Direction::Down);

    for expected in (0..=4).rev() {
        car.move_one();
        assert_eq!(car.current_floor(), expected);
    }
    assert!(car.has_reached_floor(0));
}

/// A distracted passenger misses the first opening but is delivered on a
/// later one
#[test]
fn test_distracted_passenger_eventually_delivered() {
    let mut orchestrator = SimulationOrchestrator::new(seeded_config(4)).unwrap();
    let mut passenger = Passenger::new(2, 5);
    passenger.set_distracted(true);
    orchestrator.set_passengers(vec![passenger]);

    assert!(orchestrator.run_until_all_arrived(400));
    let stats = orchestrator.statistics();
    assert_eq!(stats.passengers_delivered, 1);
    assert_eq!(stats.missed_boardings, 1);
    assert_eq!(stats.boardings, 1);
}

/// Seeded runs replay exactly: same roster, same journey, same counters
#[test]
fn test_seeded_scenario_replays_exactly() {
    let run = || {
        let mut orchestrator = SimulationOrchestrator::new(seeded_config(21)).unwrap();
        orchestrator.generate_passengers();
        orchestrator.run(250);
        let stats = orchestrator.statistics();
        (
            stats.floors_traveled,
            stats.stops,
            stats.door_openings,
            stats.boardings,
            stats.passengers_delivered,
        )
    };

    assert_eq!(run(), run());
}
