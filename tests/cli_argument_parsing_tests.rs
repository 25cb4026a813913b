//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! merged over configuration files and defaults.

use clap::Parser;
use daily_routine_fsm::types::config::{CliArgs, SimulationConfig};
use daily_routine_fsm::types::{ConfigValidationError, OutputFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn parse(args: &[&str]) -> CliArgs {
    let mut argv = vec!["daily-routine-fsm"];
    argv.extend_from_slice(args);
    CliArgs::try_parse_from(argv).unwrap()
}

/// Test that no arguments leave every override unset
#[test]
fn test_no_arguments() {
    let args = parse(&[]);
    assert!(args.config.is_none());
    assert!(args.days.is_none());
    assert!(args.start_hour.is_none());
    assert!(args.end_hour.is_none());
    assert!(args.closing_ticks.is_none());
    assert!(args.tick_delay_ms.is_none());
    assert!(args.seed.is_none());
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);
    assert!(!args.summary);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

/// Test parsing of the days argument
#[test]
fn test_days_argument_parsing() {
    assert_eq!(parse(&["--days", "5"]).days, Some(5));
    assert_eq!(parse(&["--days", "365"]).days, Some(365));

    let config = SimulationConfig::from_cli_args(parse(&["--days", "0"])).unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDaysCount(0))));
}

/// Test that the hour range accepts out-of-window and negative hours
#[test]
fn test_hour_range_arguments() {
    let args = parse(&["--start-hour", "-2", "--end-hour", "24", "--closing-ticks", "3"]);
    assert_eq!(args.start_hour, Some(-2));
    assert_eq!(args.end_hour, Some(24));
    assert_eq!(args.closing_ticks, Some(3));

    let config = SimulationConfig::from_cli_args(args).unwrap();
    config.validate().unwrap();
    assert_eq!(config.ticks_per_day(), 27 + 3);
    assert_eq!(config.hour_sequence().first(), Some(&-2));
}

/// Test that an inverted hour range parses but fails validation
#[test]
fn test_inverted_hour_range() {
    let config =
        SimulationConfig::from_cli_args(parse(&["--start-hour", "12", "--end-hour", "6"])).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidHourRange(12, 6))
    ));
}

/// Test output format selection
#[test]
fn test_output_format_argument() {
    let config = SimulationConfig::from_cli_args(parse(&["--output-format", "json"])).unwrap();
    assert_eq!(config.get_output_format(), Ok(OutputFormat::Json));

    let config = SimulationConfig::from_cli_args(parse(&["--output-format", "yaml"])).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidOutputFormat(_))
    ));
}

/// Test logging and mode flags
#[test]
fn test_flags() {
    let args = parse(&["-v", "--dry-run", "--summary"]);
    assert!(args.verbose);
    assert!(args.dry_run);
    assert!(args.summary);
    assert!(!args.debug);

    assert!(parse(&["--debug"]).debug);
    assert!(parse(&["--print-config"]).print_config);
}

/// Test that malformed values are rejected by the parser
#[test]
fn test_invalid_values_rejected() {
    assert!(CliArgs::try_parse_from(["test", "--days", "many"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--days", "-1"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--tick-delay-ms", "fast"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--seed", "-5"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--no-such-flag"]).is_err());
}

/// Test that an overly long tick delay fails validation
#[test]
fn test_tick_delay_limit() {
    let config =
        SimulationConfig::from_cli_args(parse(&["--tick-delay-ms", "600000"])).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigValidationError::InvalidTickDelay { value: 600_000, .. })
    ));
}

/// Test that CLI values take precedence over the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(file, r#"{{ "days": 4, "seed": 11, "tick_delay_ms": 0 }}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config =
        SimulationConfig::from_cli_args(parse(&["--config", &path, "--days", "2"])).unwrap();
    assert_eq!(config.days, 2);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.tick_delay_ms, 0);
    assert_eq!(config.end_hour, 23);
}

/// Test that a missing or unsupported configuration file is reported
#[test]
fn test_bad_config_file() {
    let result = SimulationConfig::from_cli_args(parse(&["-c", "/no/such/file.json"]));
    assert!(result.is_err());

    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let result = SimulationConfig::from_cli_args(parse(&["--config", &path]));
    assert!(result.is_err());
}

/// Test that oversized days are rejected before any hours are built
#[test]
fn test_tick_count_limit() {
    let config =
        SimulationConfig::from_cli_args(parse(&["--closing-ticks", "18446744073709551615"])).unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::TooManyTicks { .. })));

    let config = SimulationConfig::from_cli_args(parse(&[
        "--start-hour",
        "-2147483648",
        "--end-hour",
        "2147483647",
    ]))
    .unwrap();
    assert!(matches!(config.validate(), Err(ConfigValidationError::TooManyTicks { .. })));

    // Rejected with an error, not a panic
    assert!(daily_routine_fsm::DayRunner::new(config).is_err());
}

/// Test parsing of the log output flags
#[test]
fn test_log_output_arguments() {
    let args = parse(&["--log-dir", "/tmp/day-logs", "--log-json"]);
    assert_eq!(args.log_dir.as_deref(), Some("/tmp/day-logs"));
    assert!(args.log_json);

    let args = parse(&[]);
    assert!(args.log_dir.is_none());
    assert!(!args.log_json);

    assert!(CliArgs::try_parse_from(["test", "--log-dir"]).is_err());
}
