//! Elevator Car Simulator
//!
//! A deterministic, tick-based simulation of a single elevator car serving a
//! fixed range of floors: hall calls and cab destinations drive a SCAN-style
//! dispatch algorithm, and per-floor doors follow an auto-close protocol
//! that gates when the car may resume motion.
//!
//! # Overview
//!
//! The dispatch core is three cooperating pieces: the [`car::Car`] (call and
//! destination boards, direction selection, floor-by-floor movement with
//! boundary reversal), the [`door::Door`]s (tick-based auto-close countdown,
//! extended while passengers are mid-transit), and the
//! [`simulation::ElevatorController`] (the fixed tick order and the
//! single-open-door invariant). Passenger behavior sits outside the core and
//! reaches it only through the public operations.
//!
//! ## Key Features
//!
//! - **SCAN-style dispatch**: the car keeps its direction while work remains
//!   ahead, reverses at boundaries, and parks when idle
//! - **Door-gated movement**: the car never moves while any door is open,
//!   and waits for the close notification at its own floor before restarting
//! - **Deterministic time**: one `step` advances the whole world by one
//!   tick; door timers are tick counters, so seeded runs replay exactly
//! - **Self-healing invariants**: a multi-open-door violation is repaired
//!   within the tick and surfaced as a diagnostic, never a panic
//! - **Passenger modeling**: generated rosters call, board (with randomized
//!   transit times that hold doors open), ride, and exit
//!
//! ## Quick Start
//!
//! ```rust
//! use elevator_car_simulator::*;
//!
//! let config = SimulationConfig { seed: Some(7), ..Default::default() };
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! orchestrator.generate_passengers();
//! orchestrator.run(200);
//!
//! println!("{}", orchestrator.statistics().summary());
//! # Ok::<(), elevator_car_simulator::SimulationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: direction, passenger identifiers, and configuration
//! - [`car`]: the car's dispatch algorithm and movement state machine
//! - [`door`]: the per-floor door open/close protocol
//! - [`passenger`]: passenger state machines, roster generation, behavior
//! - [`simulation`]: controller, orchestrator, errors, logging, statistics
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod car;
pub mod door;
pub mod passenger;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs,
    ConfigError,
    ConfigValidationError,
    Direction,
    PassengerId,
    SimulationConfig,
};

// Dispatch core
pub use car::{CallSet, Car};
pub use door::{Door, DoorTick};

// Passenger modeling
pub use passenger::{
    BehaviorParams, BehaviorReport, Passenger, PassengerEngine, PassengerGenerator,
    PassengerState,
};

// Simulation orchestration
pub use simulation::{
    ElevatorController, LoggingConfig, SimulationError, SimulationOrchestrator,
    SimulationResult, SimulationStatistics, TickOutcome,
};
