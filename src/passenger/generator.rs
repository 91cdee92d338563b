//! Passenger roster generation
//!
//! Builds randomized passenger rosters from the simulation configuration.

use crate::passenger::Passenger;
use crate::types::SimulationConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

/// Generates randomized passenger rosters
#[derive(Debug, Default)]
pub struct PassengerGenerator;

impl PassengerGenerator {
    /// Create a new passenger generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a roster of passengers from the configuration
    ///
    /// Start floors are distinct and exclude the car's starting floor: a
    /// call raised on the floor the car is parked at pins it there
    /// (current-floor dispatch rule), and two opposite calls on a shared
    /// floor park it the same way. The roster size is capped by the number
    /// of usable floors.
    pub fn generate<R: Rng>(
        &mut self,
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Vec<Passenger> {
        let mut start_floors: Vec<i32> =
            ((config.lowest_floor + 1)..=config.highest_floor).collect();
        start_floors.shuffle(rng);

        let count = config.passenger_count.min(start_floors.len());
        if count < config.passenger_count {
            warn!(
                requested = config.passenger_count,
                generated = count,
                "passenger count capped by the number of usable start floors"
            );
        }

        let mut passengers = Vec::with_capacity(count);
        for &start_floor in start_floors.iter().take(count) {
            let destination = self.pick_destination(config, start_floor, rng);
            let mut passenger = Passenger::new(start_floor, destination);
            passenger.set_distracted(rng.gen_bool(config.distracted_percentage));
            passengers.push(passenger);
        }

        info!(
            passengers = passengers.len(),
            distracted = passengers.iter().filter(|p| p.is_distracted()).count(),
            "generated passenger roster"
        );

        passengers
    }

    fn pick_destination<R: Rng>(
        &self,
        config: &SimulationConfig,
        start_floor: i32,
        rng: &mut R,
    ) -> i32 {
        loop {
            let destination = rng.gen_range(config.lowest_floor..=config.highest_floor);
            if destination != start_floor {
                return destination;
            }
        }
    }
}
