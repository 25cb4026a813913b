//! Configuration structures for the daily routine simulator
//!
//! This module contains the driver configuration, its command line surface and
//! the validation logic. The state machine itself has no tunables; everything
//! here controls how hours are fed to it and how narration is written.

use super::OutputFormat;
use crate::day::schedule::END_HOUR;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Driver pacing limits
pub mod pacing {
    /// Default real-time delay between two ticks, in milliseconds
    pub const DEFAULT_TICK_DELAY_MS: u64 = 1_000;

    /// Longest accepted delay between two ticks, in milliseconds
    pub const MAX_TICK_DELAY_MS: u64 = 60_000;

    /// Most ticks a single day may be fed, closing ticks included
    pub const MAX_TICKS_PER_DAY: usize = 10_000;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "daily-routine-fsm",
    version,
    about = "Daily Routine FSM - Narrates an ordinary day driven by a probabilistic state machine",
    long_about = "Feeds hourly ticks into a finite-state machine that sleeps, wakes up, eats, studies and relaxes, with random life events (a missed alarm, a skipped meal, a friend showing up) bending the expected route.

EXAMPLES:
    # Run one day, one tick per second
    daily-routine-fsm

    # Run fast and reproducibly
    daily-routine-fsm --tick-delay-ms 0 --seed 42

    # Let the day run past midnight until it is over
    daily-routine-fsm --end-hour 24 --closing-ticks 3

    # Emit JSON lines instead of sentences
    daily-routine-fsm --output-format json

    # Generate configuration template
    daily-routine-fsm --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
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

    /// Number of days to simulate
    #[arg(long, help = "Number of days to simulate", long_help = "Number of independent days to simulate. Must be greater than 0. Default: 1")]
    pub days: Option<usize>,

    /// First hour fed to the machine
    #[arg(long, allow_negative_numbers = true, help = "First hour fed to the machine (default: 0)")]
    pub start_hour: Option<i32>,

    /// Last hour fed to the machine (inclusive)
    #[arg(long, allow_negative_numbers = true, help = "Last hour fed to the machine, inclusive (default: 23)")]
    pub end_hour: Option<i32>,

    /// Extra end-of-day ticks appended after the hour range
    #[arg(
        long,
        help = "Extra end-of-day (hour 24) ticks appended after the hour range",
        long_help = "Number of additional hour-24 ticks fed after the configured range. The day only completes once the finished state sees an hour-24 tick. Default: 0"
    )]
    pub closing_ticks: Option<usize>,

    /// Real-time delay between ticks in milliseconds
    #[arg(long, help = "Delay between ticks in milliseconds (default: 1000)")]
    pub tick_delay_ms: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for narration lines
    #[arg(long, help = "Output format (text or json)")]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for daily rolling JSON log files
    #[arg(
        long,
        value_name = "DIR",
        help = "Also write JSON logs to daily rolling files in DIR",
        long_help = "Write logs as JSON to daily rolling files under DIR, in addition to stderr. Narration on stdout is unaffected."
    )]
    pub log_dir: Option<String>,

    /// Emit stderr logs as JSON
    #[arg(long, help = "Format stderr logs as JSON")]
    pub log_json: bool,

    /// Dry run mode - validate configuration without running the day
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Print run statistics to stderr when done
    #[arg(long, help = "Print run statistics to stderr when done")]
    pub summary: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of days to simulate
    pub days: Option<usize>,

    /// First hour fed to the machine
    pub start_hour: Option<i32>,

    /// Last hour fed to the machine (inclusive)
    pub end_hour: Option<i32>,

    /// Extra end-of-day ticks appended after the hour range
    pub closing_ticks: Option<usize>,

    /// Real-time delay between ticks in milliseconds
    pub tick_delay_ms: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for narration lines
    pub output_format: Option<String>,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: usize,

    /// First hour fed to the machine
    pub start_hour: i32,

    /// Last hour fed to the machine (inclusive)
    pub end_hour: i32,

    /// Extra end-of-day ticks appended after the hour range
    pub closing_ticks: usize,

    /// Real-time delay between ticks in milliseconds
    pub tick_delay_ms: u64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for narration lines
    pub output_format: String,
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
    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(usize),

    /// Hour range is inverted
    #[error("Invalid hour range: start ({0}) must be <= end ({1})")]
    InvalidHourRange(i32, i32),

    /// Output format is not recognised
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    /// Hour range plus closing ticks feeds a day too many ticks
    #[error("Too many ticks per day: hours {start}..={end} plus {closing_ticks} closing ticks exceed {max}")]
    TooManyTicks {
        /// First configured hour
        start: i32,
        /// Last configured hour
        end: i32,
        /// Configured closing ticks
        closing_ticks: usize,
        /// Most ticks accepted per day
        max: usize,
    },

    /// Tick delay is too long
    #[error("Tick delay must be at most {max} ms, got {value}")]
    InvalidTickDelay {
        /// The configured delay
        value: u64,
        /// The longest accepted delay
        max: u64,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 1,
            start_hour: 0,
            end_hour: 23,
            closing_ticks: 0,
            tick_delay_ms: pacing::DEFAULT_TICK_DELAY_MS,
            seed: None,
            output_format: "text".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
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

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            days: config_file.days.unwrap_or(defaults.days),
            start_hour: config_file.start_hour.unwrap_or(defaults.start_hour),
            end_hour: config_file.end_hour.unwrap_or(defaults.end_hour),
            closing_ticks: config_file.closing_ticks.unwrap_or(defaults.closing_ticks),
            tick_delay_ms: config_file.tick_delay_ms.unwrap_or(defaults.tick_delay_ms),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.start_hour {
            config.start_hour = value;
        }
        if let Some(value) = args.end_hour {
            config.end_hour = value;
        }
        if let Some(value) = args.closing_ticks {
            config.closing_ticks = value;
        }
        if let Some(value) = args.tick_delay_ms {
            config.tick_delay_ms = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Hours themselves are not range-checked: the machine accepts any integer
    /// and simply stays put on hours outside its windows.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(self.days));
        }

        if self.start_hour > self.end_hour {
            return Err(ConfigValidationError::InvalidHourRange(self.start_hour, self.end_hour));
        }

        match self.tick_count() {
            Some(ticks) if ticks <= pacing::MAX_TICKS_PER_DAY => {}
            _ => {
                return Err(ConfigValidationError::TooManyTicks {
                    start: self.start_hour,
                    end: self.end_hour,
                    closing_ticks: self.closing_ticks,
                    max: pacing::MAX_TICKS_PER_DAY,
                })
            }
        }

        if self.tick_delay_ms > pacing::MAX_TICK_DELAY_MS {
            return Err(ConfigValidationError::InvalidTickDelay {
                value: self.tick_delay_ms,
                max: pacing::MAX_TICK_DELAY_MS,
            });
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Delay between two ticks
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    /// The hours fed to each day, in order
    ///
    /// Call [`validate`](Self::validate) first; an unchecked range can be
    /// arbitrarily large.
    pub fn hour_sequence(&self) -> Vec<i32> {
        (self.start_hour..=self.end_hour)
            .chain(std::iter::repeat(END_HOUR).take(self.closing_ticks))
            .collect()
    }

    /// Number of ticks fed to each day, saturating at `usize::MAX`
    pub fn ticks_per_day(&self) -> usize {
        self.tick_count().unwrap_or(usize::MAX)
    }

    fn tick_count(&self) -> Option<usize> {
        let range = (i64::from(self.end_hour) - i64::from(self.start_hour) + 1).max(0);
        usize::try_from(range).ok()?.checked_add(self.closing_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn empty_args() -> CliArgs {
        CliArgs::try_parse_from(["test"]).unwrap()
    }

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.days, 1);
        assert_eq!(config.start_hour, 0);
        assert_eq!(config.end_hour, 23);
        assert_eq!(config.closing_ticks, 0);
        assert_eq!(config.tick_delay_ms, 1_000);
        assert!(config.seed.is_none());
        assert_eq!(config.output_format, "text");
        config.validate().unwrap();
    }

    #[test]
    fn test_default_hour_sequence_matches_one_day() {
        let config = SimulationConfig::default();
        let hours = config.hour_sequence();

        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first(), Some(&0));
        assert_eq!(hours.last(), Some(&23));
    }

    #[test]
    fn test_closing_ticks_append_end_hour() {
        let config = SimulationConfig { start_hour: 22, closing_ticks: 2, ..Default::default() };
        assert_eq!(config.hour_sequence(), vec![22, 23, 24, 24]);
        assert_eq!(config.ticks_per_day(), 4);
    }

    #[test]
    fn test_days_validation() {
        let config = SimulationConfig { days: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDaysCount(0))));
    }

    #[test]
    fn test_hour_range_validation() {
        let config = SimulationConfig { start_hour: 10, end_hour: 9, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidHourRange(10, 9))
        ));

        // Out-of-window hours are fine as long as the range is ordered
        let config = SimulationConfig { start_hour: -3, end_hour: 30, ..Default::default() };
        config.validate().unwrap();
    }

    #[test]
    fn test_tick_count_limit() {
        let config = SimulationConfig { closing_ticks: usize::MAX, ..Default::default() };
        assert_eq!(config.ticks_per_day(), usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::TooManyTicks { closing_ticks: usize::MAX, .. })
        ));

        let config = SimulationConfig { start_hour: i32::MIN, end_hour: i32::MAX, ..Default::default() };
        assert_eq!(config.ticks_per_day(), 1 << 32);
        assert!(matches!(config.validate(), Err(ConfigValidationError::TooManyTicks { .. })));

        // Exactly at the limit is still accepted
        let config = SimulationConfig {
            end_hour: 23,
            closing_ticks: pacing::MAX_TICKS_PER_DAY - 24,
            ..Default::default()
        };
        assert_eq!(config.ticks_per_day(), pacing::MAX_TICKS_PER_DAY);
        config.validate().unwrap();

        let config = SimulationConfig { closing_ticks: config.closing_ticks + 1, ..config };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_delay_validation() {
        let config = SimulationConfig { tick_delay_ms: 120_000, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTickDelay { value: 120_000, .. })
        ));
        assert_eq!(SimulationConfig::default().tick_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_output_format_validation() {
        let config = SimulationConfig { output_format: "csv".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOutputFormat(_))));

        let config = SimulationConfig { output_format: "json".to_string(), ..Default::default() };
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_config_file_loading() {
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "days": 3,
            "end_hour": 24,
            "closing_ticks": 2,
            "seed": 12345
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.days, 3);
        assert_eq!(config.end_hour, 24);
        assert_eq!(config.closing_ticks, 2);
        assert_eq!(config.seed, Some(12345));
        // Unset fields keep their defaults
        assert_eq!(config.start_hour, 0);
        assert_eq!(config.tick_delay_ms, 1_000);
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            SimulationConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            SimulationConfig::from_file(temp_file.path()),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = empty_args();
        args.days = Some(2);
        args.tick_delay_ms = Some(0);
        args.seed = Some(54321);
        args.output_format = Some("json".to_string());

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.days, 2);
        assert_eq!(config.tick_delay_ms, 0);
        assert_eq!(config.seed, Some(54321));
        assert_eq!(config.output_format, "json");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{ "days": 5, "seed": 1 }"#).unwrap();

        let mut args = empty_args();
        args.config = Some(temp_file.path().display().to_string());
        args.seed = Some(2);

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.days, 5);
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");

        let config = SimulationConfig { days: 4, seed: Some(7), ..Default::default() };
        config.save_to_file(&path).unwrap();

        let reloaded = SimulationConfig::from_file(&path).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_print_json_contains_fields() {
        let json = SimulationConfig::default().print_json().unwrap();
        assert!(json.contains("\"days\""));
        assert!(json.contains("\"tick_delay_ms\""));
        assert!(json.contains("\"output_format\""));
    }
}
