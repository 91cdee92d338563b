//! A passenger in the building
//!
//! Manages one passenger's journey: calling the car, boarding through a
//! door, riding, and exiting at the destination. All interaction with the
//! dispatch core goes through the car's and doors' public operations.

use crate::car::Car;
use crate::types::{Direction, PassengerId};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where a passenger is in their journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PassengerState {
    /// On a floor, waiting for the car
    Waiting,
    /// Mid-transit through an open door
    Entering {
        /// Ticks left until the transit completes
        remaining_ticks: u32,
    },
    /// Inside the car
    Riding,
    /// Journey complete
    Arrived,
}

/// A passenger traveling between two floors
#[derive(Debug, Clone, Serialize)]
pub struct Passenger {
    /// Unique passenger identifier, used for door transit bookkeeping
    pub id: PassengerId,
    start_floor: i32,
    current_floor: i32,
    destination: i32,
    direction: Direction,
    /// A distracted passenger misses their first door opening
    distracted: bool,
    has_called: bool,
    state: PassengerState,
    travel_distance: i32,
}

impl Passenger {
    /// Create a passenger at a floor heading for a destination
    pub fn new(start_floor: i32, destination: i32) -> Self {
        let direction = match destination.cmp(&start_floor) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::None,
        };
        // Already where they want to be: no journey to run.
        let state = if destination == start_floor {
            PassengerState::Arrived
        } else {
            PassengerState::Waiting
        };
        Self {
            id: PassengerId::new(),
            start_floor,
            current_floor: start_floor,
            destination,
            direction,
            distracted: false,
            has_called: false,
            state,
            travel_distance: 0,
        }
    }

    /// The floor the passenger is currently on
    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    /// The passenger's destination floor
    pub fn destination(&self) -> i32 {
        self.destination
    }

    /// The passenger's travel direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Where the passenger is in their journey
    pub fn state(&self) -> PassengerState {
        self.state
    }

    /// Whether the passenger is inside the car
    pub fn is_riding(&self) -> bool {
        self.state == PassengerState::Riding
    }

    /// Whether the passenger has completed their journey
    pub fn has_arrived(&self) -> bool {
        self.state == PassengerState::Arrived
    }

    /// Whether the passenger has an outstanding hall call
    pub fn has_called(&self) -> bool {
        self.has_called
    }

    /// Whether the passenger is distracted
    pub fn is_distracted(&self) -> bool {
        self.distracted
    }

    /// Mark the passenger as distracted
    pub fn set_distracted(&mut self, distracted: bool) {
        self.distracted = distracted;
    }

    /// Floors traveled once the journey is complete
    pub fn travel_distance(&self) -> i32 {
        self.travel_distance
    }

    /// Register the hall call for this passenger's floor and direction
    ///
    /// Deferred while an opposite-direction call is already pending on the
    /// same floor; called again on a later tick once it clears.
    pub fn call_elevator(&mut self, car: &mut Car) -> bool {
        if self.has_called || self.should_wait_for_opposite_call(car) {
            return false;
        }
        car.add_call(self.current_floor, self.direction);
        self.has_called = true;
        debug!(
            passenger = %self.id,
            floor = self.current_floor,
            direction = %self.direction,
            "passenger called the elevator"
        );
        true
    }

    /// Whether an opposite-direction call is pending on this passenger's
    /// floor
    pub fn should_wait_for_opposite_call(&self, car: &Car) -> bool {
        let opposite = self.direction.opposite();
        if opposite == Direction::None {
            return false;
        }
        car.has_call_at_floor(self.current_floor, opposite)
    }

    /// Begin boarding through an open door; transit takes `boarding_ticks`
    pub fn start_boarding(&mut self, boarding_ticks: u32) {
        self.state = PassengerState::Entering { remaining_ticks: boarding_ticks };
        debug!(passenger = %self.id, ticks = boarding_ticks, "passenger entering");
    }

    /// Advance an in-progress boarding by one tick
    ///
    /// Returns true when the transit completes on this tick.
    pub fn advance_boarding(&mut self) -> bool {
        if let PassengerState::Entering { remaining_ticks } = self.state {
            let remaining = remaining_ticks.saturating_sub(1);
            if remaining == 0 {
                return true;
            }
            self.state = PassengerState::Entering { remaining_ticks: remaining };
        }
        false
    }

    /// Complete boarding: step inside and press the destination button
    pub fn board(&mut self, car: &mut Car) {
        self.state = PassengerState::Riding;
        car.add_destination(self.destination);
        debug!(
            passenger = %self.id,
            destination = self.destination,
            "passenger boarded and entered destination"
        );
    }

    /// Abandon a boarding attempt and go back to waiting
    ///
    /// The hall call is re-armed so it can be registered again on a later
    /// tick; the distraction is cleared so only the first opening is missed.
    pub fn abort_boarding(&mut self) {
        self.state = PassengerState::Waiting;
        self.has_called = false;
        self.distracted = false;
        debug!(passenger = %self.id, floor = self.current_floor, "passenger did not board");
    }

    /// Exit the car at the destination floor
    pub fn exit(&mut self) {
        self.state = PassengerState::Arrived;
        self.current_floor = self.destination;
        self.travel_distance = (self.destination - self.start_floor).abs();
        debug!(
            passenger = %self.id,
            floor = self.current_floor,
            distance = self.travel_distance,
            "passenger exited"
        );
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger[floor={}, destination={}, direction={}, state={:?}]",
            self.current_floor, self.destination, self.direction, self.state
        )
    }
}
