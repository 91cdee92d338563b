//! Tests for the door open/close protocol and its synchronization with the
//! car

use elevator_car_simulator::{Car, Direction, Door, DoorTick, PassengerId};

const OPEN_TICKS: u32 = 3;
const GRACE_TICKS: u32 = 1;

fn door_at(floor: i32) -> Door {
    Door::new(floor, OPEN_TICKS, GRACE_TICKS)
}

/// The door opens when the car is stopped at its floor
#[test]
fn test_door_opens_when_elevator_arrives() {
    let mut door = door_at(3);
    let mut car = Car::new(0, 5);
    car.set_current_floor(3);

    assert!(!door.is_open());
    door.check_elevator_arrival(&car);
    assert!(door.is_open());
}

/// The door stays shut while the car is elsewhere
#[test]
fn test_door_remains_closed_when_elevator_elsewhere() {
    let mut door = door_at(3);
    let car = Car::new(0, 5);

    door.check_elevator_arrival(&car);
    assert!(!door.is_open());
}

/// The auto-close fires once the countdown elapses
#[test]
fn test_door_closes_after_countdown() {
    let mut door = door_at(2);
    door.open();

    for _ in 0..OPEN_TICKS - 1 {
        assert_eq!(door.tick(), DoorTick::Counting);
        assert!(door.is_open());
    }
    assert_eq!(door.tick(), DoorTick::Closed);
    assert!(!door.is_open());
}

/// A closing door's notification raises the car's restart gate at that floor
#[test]
fn test_door_close_signal_restarts_elevator() {
    let mut door = door_at(2);
    let mut car = Car::new(0, 5);

    // Stop the car at floor 2 so the gate is down.
    car.add_destination(2);
    car.set_direction(Direction::Up);
    car.move_one();
    car.move_one();
    assert!(car.has_reached_floor(2));
    assert!(!car.can_restart());

    door.check_elevator_arrival(&car);
    assert!(door.is_open());

    // The controller forwards the close notification on a true close().
    assert!(door.close());
    car.door_closed(door.floor());
    assert!(car.can_restart());
}

/// A passenger mid-transit keeps extending the countdown until they finish
#[test]
fn test_entering_passenger_holds_door_open() {
    let mut door = door_at(1);
    let passenger = PassengerId::new();

    door.open();
    door.mark_entering(passenger);

    // The full default countdown elapses without closing.
    for _ in 0..OPEN_TICKS {
        assert_eq!(door.tick(), DoorTick::Counting);
    }
    assert!(door.is_open());

    // Each grace period re-extends while the transit continues.
    for _ in 0..GRACE_TICKS {
        assert_eq!(door.tick(), DoorTick::Counting);
    }
    assert!(door.is_open());

    // Transit done: the next expiry closes the door.
    door.mark_entered(passenger);
    for _ in 0..GRACE_TICKS - 1 {
        assert_eq!(door.tick(), DoorTick::Counting);
    }
    assert_eq!(door.tick(), DoorTick::Closed);
    assert!(!door.is_open());
}

/// Open on an open door and close on a closed door change nothing
#[test]
fn test_open_and_close_are_idempotent() {
    let mut door = door_at(0);

    door.open();
    door.tick();
    let remaining = door.countdown_remaining();
    door.open();
    assert_eq!(door.countdown_remaining(), remaining, "re-open must not reset the countdown");

    assert!(door.close());
    assert!(!door.close());
    assert_eq!(door.countdown_remaining(), None);
}

/// The door survives many open/close cycles
#[test]
fn test_door_handles_multiple_cycles() {
    let mut door = door_at(4);

    for _ in 0..5 {
        door.open();
        assert!(door.is_open());
        while door.tick() != DoorTick::Closed {}
        assert!(!door.is_open());
    }
}

/// A force-close cancels the countdown and sends no notification
#[test]
fn test_force_close_skips_notification() {
    let mut door = door_at(2);
    let mut car = Car::new(0, 5);
    car.add_destination(2);
    car.set_direction(Direction::Up);
    car.move_one();
    car.move_one();
    assert!(!car.can_restart());

    door.open();
    door.force_close();
    assert!(!door.is_open());
    assert_eq!(door.countdown_remaining(), None);

    // No notification flowed to the car: the gate is still down.
    assert!(!car.can_restart());
}

/// Door and car stay synchronized over a full stop/open/close/move cycle
#[test]
fn test_door_synchronizes_with_elevator() {
    let mut car = Car::new(0, 5);
    let mut door = door_at(3);

    car.add_destination(3);
    car.set_direction(Direction::Up);
    while !car.has_reached_floor(3) {
        car.move_one();
    }
    assert!(!car.can_restart());

    door.check_elevator_arrival(&car);
    assert!(door.is_open());

    // Run the countdown to completion and forward the notification.
    loop {
        match door.tick() {
            DoorTick::Closed => {
                car.door_closed(door.floor());
                break;
            }
            DoorTick::Counting => {}
            DoorTick::Idle => panic!("countdown must be running while the door is open"),
        }
    }

    assert!(car.can_restart());
    car.add_destination(5);
    car.choose_direction();
    car.move_one();
    assert_eq!(car.current_floor(), 4);
}
