//! Simulation driving and reporting
//!
//! This module contains everything around the state machine: the runner that
//! feeds it hours, statistics, logging setup and error handling.
//!
//! # Overview
//!
//! - **DayRunner**: Feeds hours to a fresh machine per day, paces ticks and writes narration
//! - **RunStatistics**: Collects per-day and per-run counters
//! - **LoggingConfig**: Configures the tracing subscriber
//! - **SimulationError**: Error handling for driver operations
//!
//! # Usage Example
//!
//! ```rust
//! use daily_routine_fsm::simulation::*;
//! use daily_routine_fsm::types::*;
//!
//! let config = SimulationConfig { tick_delay_ms: 0, seed: Some(42), ..Default::default() };
//! let mut runner = DayRunner::new(config).unwrap();
//!
//! let mut narration = Vec::new();
//! let stats = runner.run(&mut narration).unwrap();
//! assert_eq!(stats.days_simulated, 1);
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use statistics::*;
