// Elevator Car Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/elevator-car-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/elevator-car-simulator --passenger-count 5 --max-ticks 500 --seed 7 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use elevator_car_simulator::simulation::{LoggingConfig, SimulationOrchestrator};
use elevator_car_simulator::types::{CliArgs, SimulationConfig};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Elevator Car Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    // Run the simulation
    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {}", e);
        process::exit(1);
    }

    info!("Elevator Car Simulator completed successfully");
}

/// Initialize the orchestrator, run the configured number of ticks, and
/// report the results
fn run_simulation(config: SimulationConfig) -> anyhow::Result<()> {
    let output_path = config.output.clone();
    let max_ticks = config.max_ticks;

    let mut orchestrator =
        SimulationOrchestrator::new(config).context("failed to create orchestrator")?;
    orchestrator.generate_passengers();

    eprintln!("Running simulation for {} ticks...", max_ticks);
    orchestrator.run(max_ticks);

    // Post-run invariant check; violations during the run are repaired and
    // counted, so a healthy system ends clean.
    let violations = orchestrator.validate_constraints();
    if !violations.is_empty() {
        for violation in &violations {
            error!("Constraint violation: {}", violation);
        }
    }

    eprintln!("\nRun results:");
    eprintln!("{}", orchestrator.statistics().detailed_breakdown());

    for passenger in orchestrator.passengers() {
        eprintln!("  {}", passenger);
    }

    if let Some(path) = output_path {
        write_report(&orchestrator, &path)?;
        eprintln!("\nRun report written to: {}", path);
    }

    Ok(())
}

/// Write the JSON run report to a file
fn write_report(orchestrator: &SimulationOrchestrator, path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(orchestrator.statistics())
        .context("failed to serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("failed to write report to {}", path))?;
    info!(path, "run report written");
    Ok(())
}

/// Print the startup banner with the effective configuration
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Elevator Car Simulator");
    eprintln!("======================");
    print_configuration_summary(config);
    eprintln!();
}

/// Print a human-readable configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("  Floors: {} to {}", config.lowest_floor, config.highest_floor);
    eprintln!(
        "  Door timing: {} open ticks, {} grace ticks",
        config.door_open_ticks, config.door_grace_ticks
    );
    eprintln!(
        "  Passengers: {} ({:.0}% distracted), boarding up to {} ticks",
        config.passenger_count,
        config.distracted_percentage * 100.0,
        config.max_boarding_ticks
    );
    eprintln!("  Run length: {} ticks", config.max_ticks);
    match config.seed {
        Some(seed) => eprintln!("  Seed: {}", seed),
        None => eprintln!("  Seed: from entropy"),
    }
}
