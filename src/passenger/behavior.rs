//! Per-tick passenger behavior engine
//!
//! Drives every passenger's journey one tick at a time through the
//! controller's passenger hook: registering hall calls, boarding through
//! open doors (with a randomized transit time), and exiting at destinations.

use crate::car::Car;
use crate::door::Door;
use crate::passenger::{Passenger, PassengerState};
use crate::types::SimulationConfig;
use rand::Rng;

/// Tunable knobs for passenger behavior
#[derive(Debug, Clone)]
pub struct BehaviorParams {
    /// Upper bound on the randomized boarding transit time, in ticks
    pub max_boarding_ticks: u32,
}

impl From<&SimulationConfig> for BehaviorParams {
    fn from(config: &SimulationConfig) -> Self {
        Self { max_boarding_ticks: config.max_boarding_ticks }
    }
}

/// What the passenger engine did during one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorReport {
    /// Hall calls registered this tick
    pub calls_registered: u64,
    /// Boardings completed this tick (each presses a destination button)
    pub boardings: u64,
    /// Boardings abandoned at the door this tick
    pub missed_boardings: u64,
    /// Passengers that exited this tick
    pub exits: u64,
}

/// Advances every passenger's journey by one tick
#[derive(Debug, Clone)]
pub struct PassengerEngine {
    params: BehaviorParams,
}

impl PassengerEngine {
    /// Create an engine with the given behavior knobs
    pub fn new(params: BehaviorParams) -> Self {
        Self { params }
    }

    /// Process one tick of passenger activity
    ///
    /// Runs inside the controller's passenger hook: the car is stopped or
    /// mid-travel, and the door at its floor (if any) has already had its
    /// chance to open this tick. `doors` must be ordered by floor, as the
    /// controller builds them.
    pub fn process_tick<R: Rng>(
        &self,
        passengers: &mut [Passenger],
        car: &mut Car,
        doors: &mut [Door],
        rng: &mut R,
    ) -> BehaviorReport {
        let mut report = BehaviorReport::default();

        for passenger in passengers.iter_mut() {
            match passenger.state() {
                PassengerState::Arrived => {}
                PassengerState::Waiting => {
                    self.process_waiting(passenger, car, doors, rng, &mut report);
                }
                PassengerState::Entering { .. } => {
                    Self::process_entering(passenger, car, doors, &mut report);
                }
                PassengerState::Riding => {
                    Self::process_riding(passenger, car, doors, &mut report);
                }
            }
        }

        report
    }

    fn process_waiting<R: Rng>(
        &self,
        passenger: &mut Passenger,
        car: &mut Car,
        doors: &mut [Door],
        rng: &mut R,
        report: &mut BehaviorReport,
    ) {
        let floor = passenger.current_floor();
        let boarding_open = car.is_stopped()
            && car.current_floor() == floor
            && door_for_floor(doors, floor).map(|door| door.is_open()).unwrap_or(false);

        if boarding_open {
            // The car is already here with the door open: walk in instead of
            // pressing the hall button (a call raised now would land on the
            // car's current floor and pin it there).
            if let Some(door) = door_for_floor(doors, floor) {
                let boarding_ticks = rng.gen_range(1..=self.params.max_boarding_ticks.max(1));
                door.mark_entering(passenger.id);
                passenger.start_boarding(boarding_ticks);
            }
        } else if passenger.call_elevator(car) {
            report.calls_registered += 1;
        }
    }

    fn process_entering(
        passenger: &mut Passenger,
        car: &mut Car,
        doors: &mut [Door],
        report: &mut BehaviorReport,
    ) {
        if !passenger.advance_boarding() {
            return;
        }

        let floor = passenger.current_floor();
        match door_for_floor(doors, floor) {
            Some(door) => {
                let can_board = door.is_open()
                    && car.is_stopped()
                    && car.current_floor() == floor
                    && !passenger.is_distracted();
                door.mark_entered(passenger.id);
                if can_board {
                    passenger.board(car);
                    report.boardings += 1;
                } else {
                    passenger.abort_boarding();
                    report.missed_boardings += 1;
                }
            }
            None => {
                passenger.abort_boarding();
                report.missed_boardings += 1;
            }
        }
    }

    fn process_riding(
        passenger: &mut Passenger,
        car: &Car,
        doors: &mut [Door],
        report: &mut BehaviorReport,
    ) {
        if !car.is_stopped() || car.current_floor() != passenger.destination() {
            return;
        }
        let exit_open = door_for_floor(doors, passenger.destination())
            .map(|door| door.is_open())
            .unwrap_or(false);
        if exit_open {
            passenger.exit();
            report.exits += 1;
        }
    }
}

/// The door serving a floor, assuming `doors` is ordered by floor
fn door_for_floor(doors: &mut [Door], floor: i32) -> Option<&mut Door> {
    let first = doors.first()?.floor();
    let idx = floor.checked_sub(first)?;
    if idx < 0 {
        return None;
    }
    doors.get_mut(idx as usize)
}
