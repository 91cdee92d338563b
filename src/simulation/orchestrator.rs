//! Main simulation orchestrator
//!
//! Owns the controller, the passenger roster, the seeded random number
//! generator, and the run statistics, and advances them together tick by
//! tick.

use crate::passenger::{
    BehaviorParams, BehaviorReport, Passenger, PassengerEngine, PassengerGenerator,
};
use crate::simulation::{
    ElevatorController, SimulationError, SimulationResult, SimulationStatistics,
};
use crate::types::SimulationConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Main simulation orchestrator that coordinates all components
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the simulation
    config: SimulationConfig,
    /// The dispatch core: car plus one door per floor
    controller: ElevatorController,
    /// Per-tick passenger behavior engine
    engine: PassengerEngine,
    /// All passengers in the simulation
    passengers: Vec<Passenger>,
    /// Random number generator with optional seed
    rng: StdRng,
    /// Aggregate run statistics
    statistics: SimulationStatistics,
}

impl SimulationOrchestrator {
    /// Create a new simulation orchestrator from a validated configuration
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config
            .validate()
            .map_err(|e| SimulationError::configuration_error(e.to_string()))?;

        let rng = if let Some(seed) = config.seed {
            info!(seed, "using deterministic seed");
            StdRng::seed_from_u64(seed)
        } else {
            debug!("using entropy-based random seed");
            StdRng::from_entropy()
        };

        let controller = ElevatorController::new(&config);
        let engine = PassengerEngine::new(BehaviorParams::from(&config));

        Ok(Self {
            controller,
            engine,
            passengers: Vec::new(),
            rng,
            statistics: SimulationStatistics::new(0),
            config,
        })
    }

    /// Generate a randomized passenger roster from the configuration
    pub fn generate_passengers(&mut self) {
        let roster = PassengerGenerator::new().generate(&self.config, &mut self.rng);
        self.set_passengers(roster);
    }

    /// Install a passenger roster
    pub fn set_passengers(&mut self, passengers: Vec<Passenger>) {
        self.statistics = SimulationStatistics::new(passengers.len());
        self.passengers = passengers;
        info!(passengers = self.passengers.len(), "passenger roster installed");
    }

    /// Add a single passenger to the roster
    pub fn add_passenger(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
        self.statistics.passengers_total = self.passengers.len();
    }

    /// Advance the whole system by one tick
    pub fn step(&mut self) {
        let Self { controller, engine, passengers, rng, statistics, .. } = self;

        let mut report = BehaviorReport::default();
        let outcome = controller.step_with(|car, doors| {
            report = engine.process_tick(passengers, car, doors, rng);
        });

        statistics.record_tick();
        if outcome.moved {
            statistics.record_floor_traveled();
        }
        if outcome.stopped {
            statistics.record_stop();
        }
        if outcome.door_opened {
            statistics.record_door_opening();
        }
        statistics.record_door_closings(outcome.doors_closed as u64);
        statistics.record_forced_closes(outcome.forced_closes as u64);
        statistics.record_violations(outcome.violations.len() as u64);

        statistics.record_calls(report.calls_registered);
        // Every completed boarding presses a destination button.
        statistics.record_destinations(report.boardings);
        statistics.record_boardings(report.boardings);
        statistics.record_missed_boardings(report.missed_boardings);

        let delivered = passengers.iter().filter(|p| p.has_arrived()).count();
        statistics.set_passengers_delivered(delivered);
    }

    /// Run the simulation for a fixed number of ticks
    pub fn run(&mut self, ticks: u64) {
        info!(ticks, "starting simulation run");
        for _ in 0..ticks {
            self.step();
        }
        info!(summary = %self.statistics.summary(), "simulation run completed");
    }

    /// Run until every passenger has arrived, up to a tick budget
    ///
    /// Returns true when the whole roster was delivered within the budget.
    pub fn run_until_all_arrived(&mut self, max_ticks: u64) -> bool {
        for tick in 0..max_ticks {
            self.step();
            if self.all_passengers_arrived() {
                info!(ticks = tick + 1, "all passengers reached their destinations");
                return true;
            }
        }
        info!(max_ticks, "tick budget exhausted before all passengers arrived");
        false
    }

    /// Whether every passenger has completed their journey
    pub fn all_passengers_arrived(&self) -> bool {
        self.passengers.iter().all(Passenger::has_arrived)
    }

    /// Check the system-wide invariants (see `ElevatorController`)
    pub fn validate_constraints(&self) -> Vec<String> {
        self.controller.validate_constraints()
    }

    /// The simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The dispatch core
    pub fn controller(&self) -> &ElevatorController {
        &self.controller
    }

    /// Mutable access to the dispatch core, for scenario setup
    pub fn controller_mut(&mut self) -> &mut ElevatorController {
        &mut self.controller
    }

    /// The passenger roster
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Aggregate statistics for the run so far
    pub fn statistics(&self) -> &SimulationStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> SimulationConfig {
        SimulationConfig { seed: Some(42), ..Default::default() }
    }

    #[test]
    fn test_orchestrator_creation() {
        let orchestrator = SimulationOrchestrator::new(seeded_config()).unwrap();
        assert_eq!(orchestrator.passengers().len(), 0);
        assert_eq!(orchestrator.statistics().ticks_run, 0);
        assert!(orchestrator.all_passengers_arrived());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimulationConfig { lowest_floor: 5, highest_floor: 5, ..Default::default() };
        let result = SimulationOrchestrator::new(config);
        assert!(matches!(result, Err(SimulationError::ConfigurationError(_))));
    }

    #[test]
    fn test_single_passenger_is_delivered() {
        let mut orchestrator = SimulationOrchestrator::new(seeded_config()).unwrap();
        orchestrator.set_passengers(vec![Passenger::new(1, 4)]);

        assert!(orchestrator.run_until_all_arrived(100));
        assert_eq!(orchestrator.statistics().passengers_delivered, 1);
        assert!(orchestrator.statistics().boardings >= 1);
        assert!(orchestrator.validate_constraints().is_empty());
    }

    #[test]
    fn test_run_updates_statistics() {
        let mut orchestrator = SimulationOrchestrator::new(seeded_config()).unwrap();
        orchestrator.set_passengers(vec![Passenger::new(2, 5)]);
        orchestrator.run(30);

        let stats = orchestrator.statistics();
        assert_eq!(stats.ticks_run, 30);
        assert!(stats.floors_traveled > 0);
        assert!(stats.door_openings > 0);
        assert!(stats.calls_registered >= 1);
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let run = |seed: u64| {
            let config = SimulationConfig { seed: Some(seed), ..Default::default() };
            let mut orchestrator = SimulationOrchestrator::new(config).unwrap();
            orchestrator.generate_passengers();
            orchestrator.run(120);
            (
                orchestrator.statistics().floors_traveled,
                orchestrator.statistics().stops,
                orchestrator.statistics().passengers_delivered,
                orchestrator.controller().car().current_floor(),
            )
        };

        assert_eq!(run(7), run(7));
    }
}
