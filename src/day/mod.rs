//! The day's state machine
//!
//! This module contains everything that decides what happens within a day:
//!
//! - **schedule**: Fixed hour windows used as transition guards
//! - **draw**: Sources of uniform random draws for the life-event model
//! - **machine**: The transition table and the [`DayFsm`] that applies it
//! - **narration**: The record produced on every tick
//!
//! # Usage Example
//!
//! ```rust
//! use daily_routine_fsm::day::*;
//! use daily_routine_fsm::types::DayState;
//!
//! // No life event ever fires with a draw this high
//! let mut fsm = DayFsm::with_draws(FixedDraw::UNEVENTFUL);
//! for hour in 0..=8 {
//!     fsm.advance(hour);
//! }
//! assert_eq!(fsm.state(), DayState::Awake);
//!
//! let narration = fsm.advance(9);
//! assert_eq!(narration.to_string(), "It's 9 o'clock. Now I do: EAT");
//! assert!(!fsm.is_finished());
//! ```

pub mod draw;
pub mod machine;
pub mod narration;
pub mod schedule;

pub use draw::*;
pub use machine::*;
pub use narration::*;
