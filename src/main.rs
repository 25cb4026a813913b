// Daily Routine FSM - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/daily-routine-fsm
// ```
//
// Or fast and reproducibly, letting the day run past midnight:
//
// ```console
// $ ./target/release/daily-routine-fsm --tick-delay-ms 0 --seed 42 --end-hour 24 --closing-ticks 3
// ```

use anyhow::Context;
use clap::Parser;
use daily_routine_fsm::simulation::{DayRunner, LoggingConfig, SimulationError};
use daily_routine_fsm::types::config::CliArgs;
use daily_routine_fsm::types::SimulationConfig;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
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

    // Held until exit so buffered file logs get flushed
    let log_guard = match LoggingConfig::from_cli_args(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Daily Routine FSM");

    let exit_code = match run(args) {
        Ok(()) => {
            info!("Daily Routine FSM completed successfully");
            0
        }
        // A closed stdout (e.g. piping into `head`) ends the run quietly
        Err(e) if e.downcast_ref::<SimulationError>().is_some_and(SimulationError::is_broken_pipe) => 0,
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };

    drop(log_guard);
    process::exit(exit_code);
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let dry_run = args.dry_run;
    let summary = args.summary;

    let config =
        SimulationConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    let mut runner = DayRunner::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let statistics = runner.run(&mut out)?;

    if summary {
        eprintln!();
        eprintln!("{}", statistics);
    }

    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Days: {}", config.days);
    eprintln!("  Hours: {} - {}", config.start_hour, config.end_hour);
    eprintln!("  Closing Ticks: {}", config.closing_ticks);
    eprintln!("  Ticks per Day: {}", config.ticks_per_day());
    eprintln!("  Tick Delay: {} ms", config.tick_delay_ms);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
}
