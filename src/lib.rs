//! Daily Routine FSM
//!
//! A probabilistic finite-state machine that simulates an ordinary day, one
//! hour at a time.
//!
//! # Overview
//!
//! The day moves between sleeping, waking up, eating, studying and relaxing
//! according to fixed hour windows. Random life events bend the route: the
//! alarm clock goes unheard, a meal is forgotten, a friend shows up in the
//! evening. Every tick produces a narration line.
//!
//! ## Key Features
//!
//! - **Explicit state machine**: A pure transition table over an enumerated state set
//! - **Pluggable randomness**: Seeded generators for reproducible runs, scripted draws for tests
//! - **Narration**: Human-readable sentences or JSON lines, one per tick
//! - **Driver**: Real-time pacing, multi-day runs and run statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use daily_routine_fsm::*;
//!
//! let mut day = DayFsm::seeded(7);
//! for hour in 0..24 {
//!     let narration = day.advance(hour);
//!     assert_eq!(narration.hour, hour);
//! }
//! assert!(!day.is_finished());
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Day states, life events, identifiers and configuration
//! - [`day`]: Hour windows, draw sources, the transition table and narration
//! - [`simulation`]: Driver loop, statistics, logging and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │     Day     │    │ Simulation  │
//! │             │    │             │    │             │
//! │ DayState    │◄───┤ Schedule    │◄───┤ DayRunner   │
//! │ LifeEvent   │    │ DayFsm      │    │ Statistics  │
//! │ Config      │    │ Narration   │    │ Logging     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod day;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    ConfigError, ConfigValidationError, DayId, DayState, LifeEvent, OutputFormat,
    SimulationConfig,
};

// State machine
pub use day::{
    transition, DayFsm, DrawSource, FixedDraw, Narration, NarrationEvent, RandomDraws,
    ScriptedDraws, Step,
};

// Driver and reporting
pub use simulation::{
    DayRunner, DayStatistics, LoggingConfig, RunStatistics, SimulationError, SimulationResult,
};
