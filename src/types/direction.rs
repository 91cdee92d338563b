//! Travel direction type for the elevator simulator
//!
//! This module contains the three-valued direction enumeration shared by the
//! car, hall calls, and passengers, together with its opposite/is-opposite
//! operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of elevator or passenger travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Upward travel (toward higher floors)
    Up,
    /// Downward travel (toward lower floors)
    Down,
    /// No direction - the car is parked or undecided
    None,
}

impl Direction {
    /// Returns the opposite direction
    ///
    /// `Up` becomes `Down`, `Down` becomes `Up`, and `None` remains `None`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// Checks whether this direction is opposite to another
    ///
    /// True only for the Up/Down pair, in either order. `None` is never
    /// opposite to anything.
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down) | (Direction::Down, Direction::Up)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
            Direction::None => write!(f, "NONE"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "none" => Ok(Direction::None),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}
