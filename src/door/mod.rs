//! Floor doors and the auto-close protocol
//!
//! One [`Door`] exists per floor. Doors open when the car stops at their
//! floor and close on a tick-based countdown, extended while passengers are
//! mid-transit. Close notifications are returned to the caller rather than
//! pushed at the car, so the simulation controller stays the only component
//! wiring doors to the car.

mod door;

pub use door::{Door, DoorTick};
