//! Core types for the elevator simulator
//!
//! This module contains the direction enumeration, passenger identifiers, and
//! simulation configuration shared across the crate.

pub mod config;
pub mod direction;
pub mod identifiers;

pub use config::{CliArgs, ConfigError, ConfigValidationError, SimulationConfig};
pub use direction::Direction;
pub use identifiers::PassengerId;
