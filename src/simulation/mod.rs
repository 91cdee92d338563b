//! Simulation orchestration and control
//!
//! This module contains the tick controller for the dispatch core, the
//! orchestrator that drives it together with the passenger roster, and the
//! ambient concerns of a run: errors, logging, and statistics.

pub mod controller;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod statistics;

pub use controller::{ElevatorController, TickOutcome};
pub use error::{SimulationError, SimulationResult};
pub use logging::LoggingConfig;
pub use orchestrator::SimulationOrchestrator;
pub use statistics::SimulationStatistics;
