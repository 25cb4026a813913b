//! Logging and tracing configuration
//!
//! Logs always go to stderr so that stdout carries nothing but narration.
//! A log directory adds daily rolling JSON files next to the console output.

use crate::types::config::CliArgs;
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level emitted by this crate
    pub level: Level,
    /// Format stderr output as JSON
    pub json: bool,
    /// Directory for rolling log files, if any
    pub log_directory: Option<PathBuf>,
    /// File name prefix for rolling log files
    pub log_file_prefix: String,
    /// Log span open and close events
    pub span_events: bool,
    /// Colour stderr output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json: false,
            log_directory: None,
            log_file_prefix: "daily-routine-fsm".to_string(),
            span_events: false,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Quiet logging: warnings and errors only
    pub fn new() -> Self {
        Self::default()
    }

    /// Logging as selected by the command line flags
    ///
    /// `--debug` wins over `--verbose`; both turn on span events.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO).with_span_events()
        } else {
            Self::new()
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_log_directory(dir);
        }
        config
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Format stderr output as JSON
    pub fn with_json_format(mut self) -> Self {
        self.json = true;
        self
    }

    /// Also write JSON logs to daily rolling files under `directory`
    pub fn with_log_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Set the rolling file name prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Log span open and close events
    pub fn with_span_events(mut self) -> Self {
        self.span_events = true;
        self
    }

    /// Disable ANSI colours
    pub fn without_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    fn fmt_span(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// `RUST_LOG` if set, otherwise `level` for this crate only
    pub fn build_env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        })
    }

    /// Install the global subscriber
    ///
    /// When file logging is on, the returned guard flushes the background
    /// writer on drop and must be kept alive until the program exits.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = self.build_env_filter();

        let console_layer = if self.json {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.fmt_span())
                .boxed()
        } else {
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(self.ansi)
                .with_span_events(self.fmt_span())
                .boxed()
        };

        let (file_layer, guard) = match &self.log_directory {
            Some(directory) => {
                let (writer, guard) =
                    non_blocking(rolling::daily(directory, &self.log_file_prefix));
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_span_events(self.fmt_span());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()?;

        info!(
            level = %self.level,
            json = self.json,
            log_directory = ?self.log_directory,
            "Logging initialized"
        );
        Ok(guard)
    }
}
