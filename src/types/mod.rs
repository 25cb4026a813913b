//! Core types and identifiers for the daily routine simulator
//!
//! This module contains the fundamental data types and the driver configuration.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based identifiers for simulated days
//! - **Enums**: Day states, life events and output formats
//! - **Configuration**: Driver configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use daily_routine_fsm::types::*;
//!
//! let day_id = DayId::new();
//! assert!(day_id.to_string().starts_with("DAY_"));
//!
//! assert_eq!(DayState::Studying.label(), "STUDY");
//! assert_eq!(LifeEvent::MetFriend.probability(), 0.5);
//!
//! let config = SimulationConfig { days: 2, tick_delay_ms: 0, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
