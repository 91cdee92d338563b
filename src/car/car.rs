//! The elevator car
//!
//! Manages movement, hall calls, cab destinations, and direction selection.
//! The car is a passive state machine: the simulation controller decides when
//! `choose_direction` and `move_one` run, and forwards door-close
//! notifications through `door_closed`.

use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Pending hall-call directions registered at a single floor
///
/// Each floor can hold at most one Up and one Down call, so the board is a
/// pair of flags rather than a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSet {
    /// An upward hall call is pending at this floor
    pub up: bool,
    /// A downward hall call is pending at this floor
    pub down: bool,
}

impl CallSet {
    /// Whether the set holds a call in the given direction
    ///
    /// `Direction::None` is never a member.
    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::None => false,
        }
    }

    /// Register a call in the given direction; `None` is ignored
    pub fn insert(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::None => {}
        }
    }

    /// Clear the call in the given direction; `None` is ignored
    pub fn remove(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = false,
            Direction::Down => self.down = false,
            Direction::None => {}
        }
    }

    /// Whether no call is pending at this floor
    pub fn is_empty(&self) -> bool {
        !self.up && !self.down
    }
}

/// The elevator car
///
/// Owns the current floor, travel direction, the stopped flag, the restart
/// gate, and the per-floor call/destination boards. Floors are bounded by the
/// `[lowest_floor, highest_floor]` range fixed at construction; both boards
/// are fixed-size arrays indexed by floor, so lookups are O(1) and the key
/// space is closed.
#[derive(Debug, Clone)]
pub struct Car {
    floor: i32,
    direction: Direction,
    stopped: bool,
    /// False while waiting for the door at the current floor to close
    can_restart: bool,
    lowest_floor: i32,
    highest_floor: i32,
    calls: Vec<CallSet>,
    destinations: Vec<bool>,
}

impl Car {
    /// Create a car serving the inclusive floor range, parked at the lowest
    /// floor
    pub fn new(lowest_floor: i32, highest_floor: i32) -> Self {
        let floor_count = (highest_floor - lowest_floor + 1).max(1) as usize;
        Self {
            floor: lowest_floor,
            direction: Direction::None,
            stopped: true,
            can_restart: true,
            lowest_floor,
            highest_floor,
            calls: vec![CallSet::default(); floor_count],
            destinations: vec![false; floor_count],
        }
    }

    /// The floor the car is currently at
    pub fn current_floor(&self) -> i32 {
        self.floor
    }

    /// The car's current travel intent
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the car is stopped
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Whether the car may move again (the door at its floor has closed)
    pub fn can_restart(&self) -> bool {
        self.can_restart
    }

    /// Lowest floor served by the car
    pub fn lowest_floor(&self) -> i32 {
        self.lowest_floor
    }

    /// Highest floor served by the car
    pub fn highest_floor(&self) -> i32 {
        self.highest_floor
    }

    /// Place the car at a floor directly
    ///
    /// Out-of-range floors are ignored. Used primarily by tests and scenario
    /// setup.
    pub fn set_current_floor(&mut self, floor: i32) {
        if floor >= self.lowest_floor && floor <= self.highest_floor {
            self.floor = floor;
        }
    }

    /// Set the travel direction directly
    ///
    /// Used primarily by tests and scenario setup; normal operation goes
    /// through `choose_direction`.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Register a hall call at a floor in a direction
    ///
    /// Idempotent; silently ignored for out-of-range floors and for
    /// `Direction::None`.
    pub fn add_call(&mut self, floor: i32, direction: Direction) {
        if direction == Direction::None {
            return;
        }
        if let Some(idx) = self.index_of(floor) {
            if !self.calls[idx].contains(direction) {
                self.calls[idx].insert(direction);
                debug!(floor, %direction, "call added");
            }
        }
    }

    /// Register a cab destination
    ///
    /// Idempotent; silently ignored for out-of-range floors and for the
    /// current floor (already satisfied).
    pub fn add_destination(&mut self, floor: i32) {
        if floor == self.floor {
            return;
        }
        if let Some(idx) = self.index_of(floor) {
            if !self.destinations[idx] {
                self.destinations[idx] = true;
                debug!(floor, "destination added");
            }
        }
    }

    /// Whether a hall call is pending at a floor in a direction
    pub fn has_call_at_floor(&self, floor: i32, direction: Direction) -> bool {
        self.index_of(floor).is_some_and(|idx| self.calls[idx].contains(direction))
    }

    /// Whether a cab destination is pending for a floor
    pub fn has_destination(&self, floor: i32) -> bool {
        self.index_of(floor).is_some_and(|idx| self.destinations[idx])
    }

    /// Whether any call or destination is pending anywhere
    pub fn has_pending_requests(&self) -> bool {
        !self.calls_empty() || !self.destinations_empty()
    }

    /// Whether the car is stopped at the given floor
    pub fn has_reached_floor(&self, floor: i32) -> bool {
        self.floor == floor && self.stopped
    }

    /// Choose the travel direction from the pending calls and destinations
    ///
    /// Priority order:
    /// 1. any call at the current floor parks the car (`None`) so boarding
    ///    can resolve it before the car re-commits;
    /// 2. nothing pending anywhere parks the car;
    /// 3. work strictly ahead in the current direction keeps it, except at
    ///    the boundary floor, where the car turns around if the opposite
    ///    side has work;
    /// 4. otherwise the car reverses toward pending work when the boundary
    ///    allows;
    /// 5. otherwise a default scan prefers Up, then Down, then parks.
    pub fn choose_direction(&mut self) -> Direction {
        // A call on the current floor is handled in place before committing
        // to a direction.
        if self.has_any_call_at(self.floor) {
            self.direction = Direction::None;
            debug!(floor = self.floor, "call on current floor, direction set to NONE");
            return self.direction;
        }

        if self.calls_empty() && self.destinations_empty() {
            self.direction = Direction::None;
            debug!("no calls or destinations, direction set to NONE");
            return self.direction;
        }

        // Keep serving the current direction while work remains ahead.
        if self.direction != Direction::None && self.has_work_toward(self.direction) {
            let at_boundary = (self.direction == Direction::Up && self.floor == self.highest_floor)
                || (self.direction == Direction::Down && self.floor == self.lowest_floor);
            if at_boundary {
                let opposite = self.direction.opposite();
                if self.has_work_toward(opposite) {
                    self.direction = opposite;
                    debug!(%opposite, "at boundary, switching direction");
                } else {
                    self.direction = Direction::None;
                    debug!("at boundary, no work in opposite direction, set to NONE");
                }
            } else {
                debug!(direction = %self.direction, "maintaining direction");
            }
            return self.direction;
        }

        // Nothing ahead: reverse toward pending work if the boundary allows.
        if self.direction != Direction::None {
            let opposite = self.direction.opposite();
            let opposite_reachable = (opposite == Direction::Up && self.floor < self.highest_floor)
                || (opposite == Direction::Down && self.floor > self.lowest_floor);
            if opposite_reachable && self.has_work_toward(opposite) {
                self.direction = opposite;
                debug!(direction = %self.direction, "no work ahead, switching direction");
                return self.direction;
            }
        }

        // Default scan: look upwards first.
        if self.floor < self.highest_floor && self.has_work_toward(Direction::Up) {
            self.direction = Direction::Up;
            debug!("default scan: choosing UP");
        } else if self.floor > self.lowest_floor && self.has_work_toward(Direction::Down) {
            self.direction = Direction::Down;
            debug!("default scan: choosing DOWN");
        } else {
            self.direction = Direction::None;
            debug!("no valid direction found, set to NONE");
        }

        self.direction
    }

    /// Advance one floor in the current direction
    ///
    /// No-op while the restart gate is down. At a boundary floor the car
    /// reverses direction instead of moving that tick. After the move (or
    /// reversal) the stop condition is evaluated; stopping clears the
    /// serviced destination and the current direction's call at the floor,
    /// and lowers the restart gate until the door closes again.
    pub fn move_one(&mut self) {
        if !self.can_restart {
            return;
        }

        self.stopped = false;

        match self.direction {
            Direction::Up => {
                if self.floor < self.highest_floor {
                    self.floor += 1;
                    debug!(floor = self.floor, "car moving UP");
                } else {
                    self.direction = Direction::Down;
                    debug!("car at highest floor, reversing to DOWN");
                }
            }
            Direction::Down => {
                if self.floor > self.lowest_floor {
                    self.floor -= 1;
                    debug!(floor = self.floor, "car moving DOWN");
                } else {
                    self.direction = Direction::Up;
                    debug!("car at lowest floor, reversing to UP");
                }
            }
            Direction::None => {}
        }

        if self.should_stop_at_current_floor() {
            self.stop();
            self.clear_serviced_floor();
            self.can_restart = false;
        }
    }

    /// Drive the car to a target floor, stop by stop
    ///
    /// Used primarily by tests and scenario setup. Stops early if a serviced
    /// floor lowers the restart gate on the way.
    pub fn move_to_floor(&mut self, target_floor: i32) {
        while self.floor != target_floor && self.can_restart {
            self.direction =
                if target_floor > self.floor { Direction::Up } else { Direction::Down };
            self.move_one();
        }
        self.stop();
    }

    /// Door-close notification
    ///
    /// Raises the restart gate only when the closed door is at the car's
    /// current floor.
    pub fn door_closed(&mut self, floor: i32) {
        if floor == self.floor {
            self.can_restart = true;
            debug!(floor, "door closed, car can restart");
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
        debug!(floor = self.floor, "car stopped");
    }

    fn should_stop_at_current_floor(&self) -> bool {
        if self.has_destination(self.floor) {
            return true;
        }
        match self.index_of(self.floor) {
            Some(idx) if !self.calls[idx].is_empty() => {
                self.calls[idx].contains(self.direction) || self.direction == Direction::None
            }
            _ => false,
        }
    }

    /// Clear the serviced destination and the current direction's call bit.
    /// A call in the other direction survives for a later pass.
    fn clear_serviced_floor(&mut self) {
        if let Some(idx) = self.index_of(self.floor) {
            self.destinations[idx] = false;
            if self.direction != Direction::None {
                self.calls[idx].remove(self.direction);
            }
        }
        debug!(floor = self.floor, "cleared serviced calls and destinations");
    }

    /// Whether any call or destination lies strictly beyond the current
    /// floor in the given direction. Entries at the current floor never
    /// count; they are handled by the current-floor rule.
    fn has_work_toward(&self, direction: Direction) -> bool {
        let beyond = |floor: i32| match direction {
            Direction::Up => floor > self.floor,
            Direction::Down => floor < self.floor,
            Direction::None => false,
        };
        self.floors().any(|floor| {
            beyond(floor)
                && (self.has_destination(floor) || self.has_any_call_at(floor))
        })
    }

    fn has_any_call_at(&self, floor: i32) -> bool {
        self.index_of(floor).is_some_and(|idx| !self.calls[idx].is_empty())
    }

    fn calls_empty(&self) -> bool {
        self.calls.iter().all(CallSet::is_empty)
    }

    fn destinations_empty(&self) -> bool {
        self.destinations.iter().all(|pending| !pending)
    }

    fn index_of(&self, floor: i32) -> Option<usize> {
        if floor >= self.lowest_floor && floor <= self.highest_floor {
            Some((floor - self.lowest_floor) as usize)
        } else {
            None
        }
    }

    fn floors(&self) -> impl Iterator<Item = i32> + '_ {
        self.lowest_floor..=self.highest_floor
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let call_floors = self.calls.iter().filter(|set| !set.is_empty()).count();
        let destination_floors = self.destinations.iter().filter(|pending| **pending).count();
        write!(
            f,
            "Car[floor={}, direction={}, stopped={}, destinations={}, calls={}]",
            self.floor, self.direction, self.stopped, destination_floors, call_floors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_is_parked_at_lowest_floor() {
        let car = Car::new(0, 5);
        assert_eq!(car.current_floor(), 0);
        assert_eq!(car.direction(), Direction::None);
        assert!(car.is_stopped());
        assert!(car.can_restart());
        assert!(!car.has_pending_requests());
    }

    #[test]
    fn test_call_above_chooses_up() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(2);
        car.add_call(4, Direction::Up);
        assert_eq!(car.choose_direction(), Direction::Up);
    }

    #[test]
    fn test_no_pending_work_chooses_none() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(3);
        assert_eq!(car.choose_direction(), Direction::None);
    }

    #[test]
    fn test_call_on_current_floor_forces_none() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(2);
        car.set_direction(Direction::Up);
        car.add_call(2, Direction::Down);
        car.add_call(4, Direction::Up);
        assert_eq!(car.choose_direction(), Direction::None);
    }

    #[test]
    fn test_maintains_direction_with_work_ahead() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(2);
        car.set_direction(Direction::Up);
        car.add_destination(5);
        car.add_destination(1);
        assert_eq!(car.choose_direction(), Direction::Up);
    }

    #[test]
    fn test_switches_to_opposite_when_nothing_ahead() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(3);
        car.set_direction(Direction::Up);
        car.add_destination(1);
        assert_eq!(car.choose_direction(), Direction::Down);
    }

    #[test]
    fn test_default_scan_prefers_up() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(2);
        car.add_call(4, Direction::Down);
        car.add_call(1, Direction::Up);
        assert_eq!(car.choose_direction(), Direction::Up);
    }

    #[test]
    fn test_boundary_reversal_keeps_floor() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(5);
        car.set_direction(Direction::Up);
        car.move_one();
        assert_eq!(car.direction(), Direction::Down);
        assert_eq!(car.current_floor(), 5);
    }

    #[test]
    fn test_boundary_reversal_at_lowest_floor() {
        let mut car = Car::new(0, 5);
        car.set_direction(Direction::Down);
        car.move_one();
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(car.current_floor(), 0);
    }

    #[test]
    fn test_move_stops_at_destination_and_clears_it() {
        let mut car = Car::new(0, 5);
        car.add_destination(1);
        car.set_direction(Direction::Up);
        car.move_one();
        assert_eq!(car.current_floor(), 1);
        assert!(car.is_stopped());
        assert!(!car.has_destination(1));
        assert!(!car.can_restart());
    }

    #[test]
    fn test_move_passes_call_in_other_direction() {
        let mut car = Car::new(0, 5);
        car.add_call(1, Direction::Down);
        car.set_direction(Direction::Up);
        car.move_one();
        assert_eq!(car.current_floor(), 1);
        // The Down call does not stop an Up-bound car.
        assert!(!car.is_stopped());
        assert!(car.has_call_at_floor(1, Direction::Down));
    }

    #[test]
    fn test_stop_clears_only_current_direction_call() {
        let mut car = Car::new(0, 5);
        car.add_call(1, Direction::Up);
        car.add_call(1, Direction::Down);
        car.set_direction(Direction::Up);
        car.move_one();
        assert!(car.is_stopped());
        assert!(!car.has_call_at_floor(1, Direction::Up));
        assert!(car.has_call_at_floor(1, Direction::Down));
    }

    #[test]
    fn test_move_is_noop_while_gate_down() {
        let mut car = Car::new(0, 5);
        car.add_destination(2);
        car.set_direction(Direction::Up);
        car.move_one();
        car.move_one();
        assert_eq!(car.current_floor(), 2);
        assert!(car.is_stopped());

        // Gate is down until the door-close notification arrives.
        car.add_destination(4);
        car.move_one();
        assert_eq!(car.current_floor(), 2);

        car.door_closed(2);
        assert!(car.can_restart());
        car.move_one();
        assert_eq!(car.current_floor(), 3);
    }

    #[test]
    fn test_door_closed_ignores_other_floors() {
        let mut car = Car::new(0, 5);
        car.add_destination(1);
        car.set_direction(Direction::Up);
        car.move_one();
        assert!(!car.can_restart());
        car.door_closed(3);
        assert!(!car.can_restart());
        car.door_closed(1);
        assert!(car.can_restart());
    }

    #[test]
    fn test_add_call_is_idempotent_and_bounded() {
        let mut car = Car::new(0, 5);
        car.add_call(2, Direction::Up);
        car.add_call(2, Direction::Up);
        assert!(car.has_call_at_floor(2, Direction::Up));
        car.add_call(9, Direction::Up);
        assert!(!car.has_call_at_floor(9, Direction::Up));
        car.add_call(3, Direction::None);
        assert!(!car.has_call_at_floor(3, Direction::None));
    }

    #[test]
    fn test_add_destination_ignores_current_floor() {
        let mut car = Car::new(0, 5);
        car.add_destination(0);
        assert!(!car.has_destination(0));
        car.add_destination(-3);
        car.add_destination(6);
        assert!(!car.has_pending_requests());
    }

    #[test]
    fn test_move_to_floor() {
        let mut car = Car::new(0, 5);
        car.move_to_floor(4);
        assert!(car.has_reached_floor(4));
        car.move_to_floor(1);
        assert!(car.has_reached_floor(1));
    }

    #[test]
    fn test_stop_with_none_direction_keeps_call() {
        let mut car = Car::new(0, 5);
        car.set_current_floor(2);
        car.add_call(3, Direction::Up);
        car.set_direction(Direction::None);
        // With direction None the car does not change floor, and a call at
        // the (unchanged) current floor is the only thing that can stop it.
        car.move_one();
        assert_eq!(car.current_floor(), 2);
        assert!(car.has_call_at_floor(3, Direction::Up));
    }

    #[test]
    fn test_negative_floor_range() {
        let mut car = Car::new(-2, 3);
        assert_eq!(car.current_floor(), -2);
        car.add_call(-1, Direction::Up);
        assert_eq!(car.choose_direction(), Direction::Up);
        car.move_one();
        assert!(car.has_reached_floor(-1));
    }

    #[test]
    fn test_display_summarizes_boards() {
        let mut car = Car::new(0, 5);
        car.add_call(2, Direction::Up);
        car.add_destination(4);
        let text = car.to_string();
        assert!(text.contains("floor=0"));
        assert!(text.contains("destinations=1"));
        assert!(text.contains("calls=1"));
    }
}
