//! A door at a specific floor
//!
//! Handles opening, the auto-close countdown, and passenger transit
//! bookkeeping. The countdown is a tick counter decremented once per
//! simulation step, never a wall-clock timer, so runs are deterministic and
//! replayable.

use crate::car::Car;
use crate::types::PassengerId;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Outcome of a door's per-tick countdown update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorTick {
    /// No countdown is running (door closed, or already force-closed)
    Idle,
    /// The door is open and the countdown is still running, possibly after a
    /// grace extension
    Counting,
    /// The auto-close fired on this tick; the caller must forward the close
    /// notification to the car
    Closed,
}

/// A door at a specific floor
#[derive(Debug, Clone)]
pub struct Door {
    floor: i32,
    open: bool,
    /// Passengers currently mid-transit through this door; non-empty blocks
    /// the auto-close
    entering: HashSet<PassengerId>,
    /// Remaining ticks before the auto-close fires; `None` while closed
    close_countdown: Option<u32>,
    open_ticks: u32,
    grace_ticks: u32,
}

impl Door {
    /// Create a closed door at a floor with the given countdown durations
    pub fn new(floor: i32, open_ticks: u32, grace_ticks: u32) -> Self {
        Self {
            floor,
            open: false,
            entering: HashSet::new(),
            close_countdown: None,
            open_ticks,
            grace_ticks,
        }
    }

    /// The floor this door serves
    pub fn floor(&self) -> i32 {
        self.floor
    }

    /// Whether the door is currently open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Ticks left on the auto-close countdown, if one is running
    pub fn countdown_remaining(&self) -> Option<u32> {
        self.close_countdown
    }

    /// Open the door if the car is stopped at this floor
    pub fn check_elevator_arrival(&mut self, car: &Car) {
        if car.current_floor() == self.floor && car.is_stopped() {
            self.open();
        }
    }

    /// Open the door and start the auto-close countdown
    ///
    /// No-op when already open; the running countdown is not reset.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.close_countdown = Some(self.open_ticks);
            debug!(floor = self.floor, "door opening");
        }
    }

    /// Close the door and cancel any pending countdown
    ///
    /// Returns true when the door closed on this call so the controller can
    /// forward the close notification to the car; false when the door was
    /// already closed.
    #[must_use = "a true result carries the close notification for the car"]
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.close_countdown = None;
        debug!(floor = self.floor, "door closing");
        true
    }

    /// Advance the auto-close countdown by one tick
    ///
    /// When the countdown elapses with passengers still mid-transit it is
    /// extended by the grace duration instead of closing; otherwise the door
    /// closes and the caller must forward the notification to the car.
    pub fn tick(&mut self) -> DoorTick {
        let Some(remaining) = self.close_countdown else {
            return DoorTick::Idle;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining > 0 {
            self.close_countdown = Some(remaining);
            return DoorTick::Counting;
        }

        if !self.entering.is_empty() {
            self.close_countdown = Some(self.grace_ticks);
            debug!(
                floor = self.floor,
                entering = self.entering.len(),
                grace = self.grace_ticks,
                "passengers mid-transit, extending door countdown"
            );
            return DoorTick::Counting;
        }

        let _ = self.close();
        DoorTick::Closed
    }

    /// Whether any passenger is currently mid-transit through this door
    pub fn has_passenger_entering(&self) -> bool {
        !self.entering.is_empty()
    }

    /// Mark a passenger as mid-transit; idempotent
    pub fn mark_entering(&mut self, id: PassengerId) {
        self.entering.insert(id);
    }

    /// Mark a passenger's transit as finished; idempotent
    pub fn mark_entered(&mut self, id: PassengerId) {
        self.entering.remove(&id);
    }

    /// Close immediately without the countdown and without the restart
    /// notification
    ///
    /// Used only by the controller to repair a multi-open-door violation; a
    /// corrective close must not signal the car.
    pub fn force_close(&mut self) {
        self.open = false;
        self.close_countdown = None;
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door[floor={}, open={}]", self.floor, self.open)
    }
}
