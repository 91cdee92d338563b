//! Configuration structures for the elevator simulator
//!
//! This module contains the simulation configuration structure and validation
//! logic used to control the floor range, door timing, passenger roster, and
//! run length of the simulation.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default timing constants for the door protocol
pub mod door_timing {
    /// Ticks a door stays open before the auto-close fires
    pub const OPEN_TICKS: u32 = 3;

    /// Ticks granted per extension while a passenger is mid-transit
    pub const GRACE_TICKS: u32 = 1;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elevator-car-simulator",
    version = "0.1.0",
    about = "Elevator Car Simulator - Runs a single-car dispatch and door simulation",
    long_about = "Simulates a single elevator car serving a fixed range of floors: hall calls \
and cab destinations drive a SCAN-style dispatch algorithm, and floor doors follow a tick-based \
auto-close protocol that gates when the car may move again.

EXAMPLES:
    # Run with default settings
    elevator-car-simulator

    # Use a configuration file
    elevator-car-simulator --config config.json

    # Override specific settings
    elevator-car-simulator --passenger-count 12 --highest-floor 9 --seed 7

    # Generate configuration template
    elevator-car-simulator --print-config > my-config.json

    # Validate configuration without running
    elevator-car-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Lowest floor served by the car
    #[arg(long, help = "Lowest floor served by the car")]
    pub lowest_floor: Option<i32>,

    /// Highest floor served by the car
    #[arg(long, help = "Highest floor served by the car")]
    pub highest_floor: Option<i32>,

    /// Ticks a door stays open before auto-closing
    #[arg(long, help = "Ticks a door stays open before auto-closing")]
    pub door_open_ticks: Option<u32>,

    /// Extension ticks while a passenger is mid-transit
    #[arg(long, help = "Extension ticks while a passenger is mid-transit")]
    pub door_grace_ticks: Option<u32>,

    /// Maximum ticks a passenger takes to board
    #[arg(long, help = "Maximum ticks a passenger takes to board")]
    pub max_boarding_ticks: Option<u32>,

    /// Number of passengers to generate
    #[arg(
        long,
        help = "Number of passengers to generate",
        long_help = "Number of randomly generated passengers placed in the building at the start of the run. Default: 4"
    )]
    pub passenger_count: Option<usize>,

    /// Fraction of passengers that are distracted (0.0-1.0)
    #[arg(
        long,
        help = "Fraction of distracted passengers (0.0-1.0)",
        long_help = "Fraction of passengers who miss the first door opening because they are distracted. Range: 0.0-1.0. Default: 0.1"
    )]
    pub distracted_percentage: Option<f64>,

    /// Number of ticks to simulate
    #[arg(long, help = "Number of ticks to simulate")]
    pub max_ticks: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output path for the JSON run report
    #[arg(short, long, help = "Output path for the JSON run report")]
    pub output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Lowest floor served by the car
    pub lowest_floor: Option<i32>,

    /// Highest floor served by the car
    pub highest_floor: Option<i32>,

    /// Ticks a door stays open before auto-closing
    pub door_open_ticks: Option<u32>,

    /// Extension ticks while a passenger is mid-transit
    pub door_grace_ticks: Option<u32>,

    /// Maximum ticks a passenger takes to board
    pub max_boarding_ticks: Option<u32>,

    /// Number of passengers to generate
    pub passenger_count: Option<usize>,

    /// Fraction of passengers that are distracted (0.0-1.0)
    pub distracted_percentage: Option<f64>,

    /// Number of ticks to simulate
    pub max_ticks: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the JSON run report
    pub output: Option<String>,
}

/// Configuration for the elevator simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lowest floor served by the car
    pub lowest_floor: i32,

    /// Highest floor served by the car
    pub highest_floor: i32,

    /// Ticks a door stays open before auto-closing
    pub door_open_ticks: u32,

    /// Extension ticks while a passenger is mid-transit
    pub door_grace_ticks: u32,

    /// Maximum ticks a passenger takes to board
    pub max_boarding_ticks: u32,

    /// Number of passengers to generate
    pub passenger_count: usize,

    /// Fraction of passengers that are distracted (0.0-1.0)
    pub distracted_percentage: f64,

    /// Number of ticks to simulate
    pub max_ticks: u64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the JSON run report
    pub output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Floor range is invalid
    #[error("Invalid floor range: lowest ({0}) must be < highest ({1})")]
    InvalidFloorRange(i32, i32),

    /// Door open duration is invalid
    #[error("Door open ticks must be greater than 0")]
    InvalidDoorOpenTicks,

    /// Door grace duration is invalid
    #[error("Door grace ticks must be greater than 0")]
    InvalidDoorGraceTicks,

    /// Boarding duration is invalid
    #[error("Max boarding ticks must be greater than 0")]
    InvalidBoardingTicks,

    /// Tick budget is invalid
    #[error("Max ticks must be greater than 0")]
    InvalidMaxTicks,

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lowest_floor: 0,
            highest_floor: 5,
            door_open_ticks: door_timing::OPEN_TICKS,
            door_grace_ticks: door_timing::GRACE_TICKS,
            max_boarding_ticks: 2,
            passenger_count: 4,
            distracted_percentage: 0.1,
            max_ticks: 200,
            seed: None,
            output: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            lowest_floor: config_file.lowest_floor.unwrap_or(defaults.lowest_floor),
            highest_floor: config_file.highest_floor.unwrap_or(defaults.highest_floor),
            door_open_ticks: config_file.door_open_ticks.unwrap_or(defaults.door_open_ticks),
            door_grace_ticks: config_file.door_grace_ticks.unwrap_or(defaults.door_grace_ticks),
            max_boarding_ticks: config_file
                .max_boarding_ticks
                .unwrap_or(defaults.max_boarding_ticks),
            passenger_count: config_file.passenger_count.unwrap_or(defaults.passenger_count),
            distracted_percentage: config_file
                .distracted_percentage
                .unwrap_or(defaults.distracted_percentage),
            max_ticks: config_file.max_ticks.unwrap_or(defaults.max_ticks),
            seed: config_file.seed.or(defaults.seed),
            output: config_file.output.or(defaults.output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.lowest_floor {
            config.lowest_floor = value;
        }
        if let Some(value) = args.highest_floor {
            config.highest_floor = value;
        }
        if let Some(value) = args.door_open_ticks {
            config.door_open_ticks = value;
        }
        if let Some(value) = args.door_grace_ticks {
            config.door_grace_ticks = value;
        }
        if let Some(value) = args.max_boarding_ticks {
            config.max_boarding_ticks = value;
        }
        if let Some(value) = args.passenger_count {
            config.passenger_count = value;
        }
        if let Some(value) = args.distracted_percentage {
            config.distracted_percentage = value;
        }
        if let Some(value) = args.max_ticks {
            config.max_ticks = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output {
            config.output = Some(value);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.lowest_floor >= self.highest_floor {
            return Err(ConfigValidationError::InvalidFloorRange(
                self.lowest_floor,
                self.highest_floor,
            ));
        }
        if self.door_open_ticks == 0 {
            return Err(ConfigValidationError::InvalidDoorOpenTicks);
        }
        if self.door_grace_ticks == 0 {
            return Err(ConfigValidationError::InvalidDoorGraceTicks);
        }
        if self.max_boarding_ticks == 0 {
            return Err(ConfigValidationError::InvalidBoardingTicks);
        }
        if self.max_ticks == 0 {
            return Err(ConfigValidationError::InvalidMaxTicks);
        }
        if !(0.0..=1.0).contains(&self.distracted_percentage) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: "distracted_percentage".to_string(),
                value: self.distracted_percentage,
            });
        }
        Ok(())
    }

    /// Number of floors served by the car
    pub fn floor_count(&self) -> usize {
        (self.highest_floor - self.lowest_floor + 1) as usize
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_count(), 6);
    }

    #[test]
    fn test_invalid_floor_range() {
        let config = SimulationConfig { lowest_floor: 3, highest_floor: 3, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidFloorRange(3, 3))
        ));
    }

    #[test]
    fn test_invalid_door_timing() {
        let config = SimulationConfig { door_open_ticks: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDoorOpenTicks)));

        let config = SimulationConfig { door_grace_ticks: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDoorGraceTicks)));
    }

    #[test]
    fn test_invalid_percentage() {
        let config = SimulationConfig { distracted_percentage: 1.5, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = SimulationConfig::default();
        let json = config.print_json().unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.highest_floor, config.highest_floor);
        assert_eq!(back.door_open_ticks, config.door_open_ticks);
    }

    #[test]
    fn test_negative_floor_range_is_valid() {
        let config =
            SimulationConfig { lowest_floor: -2, highest_floor: 3, ..Default::default() };
        assert!(config.validate().is_ok());
        assert_eq!(config.floor_count(), 6);
    }
}
