//! Elevator car state and dispatch logic
//!
//! This module contains the [`Car`] struct, its per-floor call and destination
//! boards, the direction-selection algorithm, and the floor-by-floor movement
//! state machine.

mod car;

pub use car::{Car, CallSet};
