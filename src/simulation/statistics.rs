//! Run statistics and reporting
//!
//! This module collects aggregate counters for a simulation run and renders
//! them as a text summary or a serializable JSON report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStatistics {
    /// When the run started (wall clock, for the report header only)
    pub started_at: DateTime<Utc>,
    /// Ticks executed so far
    pub ticks_run: u64,
    /// Floors the car traveled
    pub floors_traveled: u64,
    /// Times the car came to a stop
    pub stops: u64,
    /// Door openings
    pub door_openings: u64,
    /// Door closings (auto-close and explicit, not forced)
    pub door_closings: u64,
    /// Doors force-closed by the single-open-door repair
    pub forced_door_closes: u64,
    /// Constraint violations observed and repaired
    pub constraint_violations: u64,
    /// Hall calls registered by passengers
    pub calls_registered: u64,
    /// Cab destinations registered by passengers
    pub destinations_registered: u64,
    /// Completed boardings
    pub boardings: u64,
    /// Boardings abandoned at the door (distracted passengers)
    pub missed_boardings: u64,
    /// Passengers in the run
    pub passengers_total: usize,
    /// Passengers that reached their destination
    pub passengers_delivered: usize,
}

impl SimulationStatistics {
    /// Create statistics for a run with the given roster size
    pub fn new(passengers_total: usize) -> Self {
        Self {
            started_at: Utc::now(),
            ticks_run: 0,
            floors_traveled: 0,
            stops: 0,
            door_openings: 0,
            door_closings: 0,
            forced_door_closes: 0,
            constraint_violations: 0,
            calls_registered: 0,
            destinations_registered: 0,
            boardings: 0,
            missed_boardings: 0,
            passengers_total,
            passengers_delivered: 0,
        }
    }

    /// Record one executed tick
    pub fn record_tick(&mut self) {
        self.ticks_run += 1;
    }

    /// Record a one-floor movement
    pub fn record_floor_traveled(&mut self) {
        self.floors_traveled += 1;
    }

    /// Record the car coming to a stop
    pub fn record_stop(&mut self) {
        self.stops += 1;
    }

    /// Record a door opening
    pub fn record_door_opening(&mut self) {
        self.door_openings += 1;
    }

    /// Record door closings
    pub fn record_door_closings(&mut self, count: u64) {
        self.door_closings += count;
    }

    /// Record forced door closes from an invariant repair
    pub fn record_forced_closes(&mut self, count: u64) {
        self.forced_door_closes += count;
    }

    /// Record repaired constraint violations
    pub fn record_violations(&mut self, count: u64) {
        self.constraint_violations += count;
    }

    /// Record registered hall calls
    pub fn record_calls(&mut self, count: u64) {
        self.calls_registered += count;
    }

    /// Record registered cab destinations
    pub fn record_destinations(&mut self, count: u64) {
        self.destinations_registered += count;
    }

    /// Record completed boardings
    pub fn record_boardings(&mut self, count: u64) {
        self.boardings += count;
    }

    /// Record boardings abandoned at the door
    pub fn record_missed_boardings(&mut self, count: u64) {
        self.missed_boardings += count;
    }

    /// Update the delivered-passenger count
    pub fn set_passengers_delivered(&mut self, delivered: usize) {
        self.passengers_delivered = delivered;
    }

    /// Percentage of passengers delivered, 0.0 when the roster is empty
    pub fn delivery_percentage(&self) -> f64 {
        if self.passengers_total == 0 {
            0.0
        } else {
            (self.passengers_delivered as f64 / self.passengers_total as f64) * 100.0
        }
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} ticks, {} floors traveled, {} stops, {} door openings, {}/{} passengers delivered ({:.0}%), {} violations",
            self.ticks_run,
            self.floors_traveled,
            self.stops,
            self.door_openings,
            self.passengers_delivered,
            self.passengers_total,
            self.delivery_percentage(),
            self.constraint_violations
        )
    }

    /// Multi-line breakdown of the run
    pub fn detailed_breakdown(&self) -> String {
        format!(
            "Run started at: {}\n\
             Ticks run: {}\n\
             Floors traveled: {}\n\
             Stops: {}\n\
             Door openings: {}\n\
             Door closings: {}\n\
             Forced door closes: {}\n\
             Constraint violations: {}\n\
             Calls registered: {}\n\
             Destinations registered: {}\n\
             Boardings: {} ({} missed)\n\
             Passengers delivered: {}/{} ({:.1}%)",
            self.started_at,
            self.ticks_run,
            self.floors_traveled,
            self.stops,
            self.door_openings,
            self.door_closings,
            self.forced_door_closes,
            self.constraint_violations,
            self.calls_registered,
            self.destinations_registered,
            self.boardings,
            self.missed_boardings,
            self.passengers_delivered,
            self.passengers_total,
            self.delivery_percentage()
        )
    }
}
