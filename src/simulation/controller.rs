//! The elevator controller
//!
//! Coordinates the car and the per-floor doors, advancing the whole system by
//! one discrete tick at a time. The controller is the only component that
//! wires doors to the car: door-close notifications flow through it, and it
//! enforces the system-wide single-open-door invariant.

use crate::car::Car;
use crate::door::{Door, DoorTick};
use crate::types::{Direction, SimulationConfig};
use tracing::{debug, info, warn};

/// What happened during one controller tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// The car changed floor this tick
    pub moved: bool,
    /// The car came to a stop this tick
    pub stopped: bool,
    /// The door at the car's floor opened this tick
    pub door_opened: bool,
    /// Doors whose auto-close fired this tick
    pub doors_closed: usize,
    /// Doors force-closed by the invariant repair
    pub forced_closes: usize,
    /// Human-readable descriptions of repaired violations; empty when healthy
    pub violations: Vec<String>,
}

/// Coordinates the car and the doors through the fixed tick order
#[derive(Debug)]
pub struct ElevatorController {
    car: Car,
    doors: Vec<Door>,
    current_step: u64,
}

impl ElevatorController {
    /// Create a controller with a car and one door per floor
    pub fn new(config: &SimulationConfig) -> Self {
        let car = Car::new(config.lowest_floor, config.highest_floor);
        let doors = (config.lowest_floor..=config.highest_floor)
            .map(|floor| Door::new(floor, config.door_open_ticks, config.door_grace_ticks))
            .collect::<Vec<_>>();

        info!(
            lowest = config.lowest_floor,
            highest = config.highest_floor,
            doors = doors.len(),
            "elevator controller initialized"
        );

        Self { car, doors, current_step: 0 }
    }

    /// The car
    pub fn car(&self) -> &Car {
        &self.car
    }

    /// Mutable access to the car, for call/destination registration
    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    /// All doors, ordered by floor
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// The door at a floor, if the floor is in range
    pub fn door_at_floor(&self, floor: i32) -> Option<&Door> {
        match self.door_index(floor) {
            Some(idx) => Some(&self.doors[idx]),
            None => None,
        }
    }

    /// Mutable access to the door at a floor, for transit bookkeeping
    pub fn door_at_floor_mut(&mut self, floor: i32) -> Option<&mut Door> {
        match self.door_index(floor) {
            Some(idx) => Some(&mut self.doors[idx]),
            None => None,
        }
    }

    /// Whether any door is currently open
    pub fn any_door_open(&self) -> bool {
        self.doors.iter().any(Door::is_open)
    }

    /// Ticks executed so far
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// Close the door at a floor and forward the notification to the car
    ///
    /// Returns true when the door closed on this call.
    pub fn close_door_at(&mut self, floor: i32) -> bool {
        let Some(idx) = self.door_index(floor) else {
            return false;
        };
        if self.doors[idx].close() {
            self.car.door_closed(floor);
            true
        } else {
            false
        }
    }

    /// Advance the system by one tick with no passenger activity
    pub fn step(&mut self) -> TickOutcome {
        self.step_with(|_, _| {})
    }

    /// Advance the system by one tick
    ///
    /// Fixed phase order: direction decision, movement, door opening, the
    /// passenger hook, door countdowns, and single-open-door enforcement.
    /// The hook receives mutable access to the car and the doors so
    /// passenger-behavior collaborators can register calls/destinations and
    /// mark door transits; it must not be used to move the car.
    pub fn step_with<F>(&mut self, mut passenger_hook: F) -> TickOutcome
    where
        F: FnMut(&mut Car, &mut [Door]),
    {
        self.current_step += 1;
        let mut outcome = TickOutcome::default();
        debug!(step = self.current_step, car = %self.car, "tick");

        // 1. A stopped car with the restart gate up re-evaluates its
        //    direction.
        if self.car.is_stopped() && self.car.can_restart() {
            self.car.choose_direction();
        }

        // 2. Movement, gated on the restart flag and on every door being
        //    shut.
        if self.car.direction() != Direction::None
            && self.car.can_restart()
            && !self.any_door_open()
        {
            let floor_before = self.car.current_floor();
            self.car.move_one();
            outcome.moved = self.car.current_floor() != floor_before;
            outcome.stopped = self.car.is_stopped();
        }

        // 3. A stopped car opens the door at its floor.
        if self.car.is_stopped() {
            if let Some(idx) = self.door_index(self.car.current_floor()) {
                let door = &mut self.doors[idx];
                if !door.is_open() {
                    door.check_elevator_arrival(&self.car);
                    outcome.door_opened = door.is_open();
                }
            }
        }

        // 4. Passenger behavior (external collaborator).
        passenger_hook(&mut self.car, &mut self.doors);

        // 5. Door countdowns; auto-closes are forwarded to the car.
        for door in &mut self.doors {
            if door.tick() == DoorTick::Closed {
                self.car.door_closed(door.floor());
                outcome.doors_closed += 1;
            }
        }

        // 6. Single-open-door enforcement: close everything except the door
        //    at the car's floor. A corrective close sends no restart signal.
        let open_count = self.doors.iter().filter(|door| door.is_open()).count();
        if open_count > 1 {
            let car_floor = self.car.current_floor();
            for door in &mut self.doors {
                if door.is_open() && door.floor() != car_floor {
                    door.force_close();
                    outcome.forced_closes += 1;
                    let message = format!(
                        "Door at floor {} forcibly closed to keep a single door open",
                        door.floor()
                    );
                    warn!(floor = door.floor(), "{}", message);
                    outcome.violations.push(message);
                }
            }
            let message = format!("{} doors were open simultaneously", open_count);
            warn!("{}", message);
            outcome.violations.push(message);
        }

        outcome
    }

    /// Check the system-wide invariants
    ///
    /// Returns human-readable violation descriptions; empty when healthy.
    /// Violations are diagnostic, never fatal: `step_with` repairs the
    /// multi-open-door case within the same tick.
    pub fn validate_constraints(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if !self.car.is_stopped() {
            for door in &self.doors {
                if door.is_open() {
                    violations.push(format!(
                        "Door at floor {} is open while the car is moving",
                        door.floor()
                    ));
                }
            }
        }

        let open_count = self.doors.iter().filter(|door| door.is_open()).count();
        if open_count > 1 {
            violations.push(format!("Multiple doors are open simultaneously: {}", open_count));
        }

        violations
    }

    fn door_index(&self, floor: i32) -> Option<usize> {
        let lowest = self.car.lowest_floor();
        if floor >= lowest && floor <= self.car.highest_floor() {
            Some((floor - lowest) as usize)
        } else {
            None
        }
    }
}
