//! Enumeration types for the daily routine simulator
//!
//! This module contains the activity states a simulated day moves through,
//! the random life events that can disturb it, and the narration output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activities the simulated person can be doing at any hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayState {
    /// Asleep; the initial state of every day
    Sleeping,
    /// Up and about, waiting for the first meal or study block
    Awake,
    /// Having a meal
    Eating,
    /// Studying
    Studying,
    /// Relaxing in the evening
    Relaxing,
    /// The day is wrapping up (terminal)
    Finished,
}

impl DayState {
    /// All states in the order a regular day visits them
    pub const ALL: [DayState; 6] = [
        DayState::Sleeping,
        DayState::Awake,
        DayState::Eating,
        DayState::Studying,
        DayState::Relaxing,
        DayState::Finished,
    ];

    /// Upper-case label used in narration lines
    pub fn label(&self) -> &'static str {
        match self {
            DayState::Sleeping => "SLEEP",
            DayState::Awake => "WAKE UP",
            DayState::Eating => "EAT",
            DayState::Studying => "STUDY",
            DayState::Relaxing => "RELAX",
            DayState::Finished => "DONE",
        }
    }

    /// Whether no regular transition leaves this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, DayState::Finished)
    }

    /// Whether advancing from this state consumes a random draw
    pub fn needs_draw(&self) -> bool {
        matches!(
            self,
            DayState::Sleeping | DayState::Awake | DayState::Studying | DayState::Relaxing
        )
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sleeping" | "sleep" => Ok(DayState::Sleeping),
            "awake" | "wake up" | "wakeup" => Ok(DayState::Awake),
            "eating" | "eat" => Ok(DayState::Eating),
            "studying" | "study" => Ok(DayState::Studying),
            "relaxing" | "relax" => Ok(DayState::Relaxing),
            "finished" | "done" => Ok(DayState::Finished),
            _ => Err(format!("Unknown day state: {}", s)),
        }
    }
}

/// Random life events that can alter the expected transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeEvent {
    /// The alarm clock went unheard at wake-up time
    OversleptAlarm,
    /// A meal was forgotten
    SkippedMeal,
    /// A friend showed up during the evening
    MetFriend,
}

impl LifeEvent {
    /// All life events
    pub const ALL: [LifeEvent; 3] =
        [LifeEvent::OversleptAlarm, LifeEvent::SkippedMeal, LifeEvent::MetFriend];

    /// Fixed trigger probability of the event
    pub fn probability(&self) -> f64 {
        match self {
            LifeEvent::OversleptAlarm => 0.1,
            LifeEvent::SkippedMeal => 0.2,
            LifeEvent::MetFriend => 0.5,
        }
    }

    /// Upper-case description used in narration lines
    pub fn description(&self) -> &'static str {
        match self {
            LifeEvent::OversleptAlarm => "DIDN'T HEAR THE ALARM CLOCK",
            LifeEvent::SkippedMeal => "FORGOT TO EAT",
            LifeEvent::MetFriend => "MET A FRIEND",
        }
    }
}

impl fmt::Display for LifeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeEvent::OversleptAlarm => write!(f, "Overslept Alarm"),
            LifeEvent::SkippedMeal => write!(f, "Skipped Meal"),
            LifeEvent::MetFriend => write!(f, "Met Friend"),
        }
    }
}

impl FromStr for LifeEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overslept alarm" | "oversleptalarm" | "alarm" => Ok(LifeEvent::OversleptAlarm),
            "skipped meal" | "skippedmeal" | "meal" => Ok(LifeEvent::SkippedMeal),
            "met friend" | "metfriend" | "friend" => Ok(LifeEvent::MetFriend),
            _ => Err(format!("Unknown life event: {}", s)),
        }
    }
}

/// Output formats for narration lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable sentences, one per tick
    Text,
    /// One JSON object per tick (JSON lines)
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_state_labels() {
        assert_eq!(format!("{}", DayState::Sleeping), "SLEEP");
        assert_eq!(format!("{}", DayState::Awake), "WAKE UP");
        assert_eq!(format!("{}", DayState::Eating), "EAT");
        assert_eq!(format!("{}", DayState::Studying), "STUDY");
        assert_eq!(format!("{}", DayState::Relaxing), "RELAX");
        assert_eq!(format!("{}", DayState::Finished), "DONE");
    }

    #[test]
    fn test_day_state_from_str() {
        assert_eq!("sleeping".parse::<DayState>().unwrap(), DayState::Sleeping);
        assert_eq!("WAKE UP".parse::<DayState>().unwrap(), DayState::Awake);
        assert_eq!("study".parse::<DayState>().unwrap(), DayState::Studying);
        assert_eq!("done".parse::<DayState>().unwrap(), DayState::Finished);

        // Test error case
        assert!("napping".parse::<DayState>().is_err());
    }

    #[test]
    fn test_draw_consuming_states() {
        assert!(DayState::Sleeping.needs_draw());
        assert!(DayState::Awake.needs_draw());
        assert!(!DayState::Eating.needs_draw());
        assert!(DayState::Studying.needs_draw());
        assert!(DayState::Relaxing.needs_draw());
        assert!(!DayState::Finished.needs_draw());
    }

    #[test]
    fn test_only_finished_is_terminal() {
        let terminal: Vec<_> = DayState::ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![&DayState::Finished]);
    }

    #[test]
    fn test_life_event_probabilities() {
        assert_eq!(LifeEvent::OversleptAlarm.probability(), 0.1);
        assert_eq!(LifeEvent::SkippedMeal.probability(), 0.2);
        assert_eq!(LifeEvent::MetFriend.probability(), 0.5);
    }

    #[test]
    fn test_life_event_from_str() {
        assert_eq!("alarm".parse::<LifeEvent>().unwrap(), LifeEvent::OversleptAlarm);
        assert_eq!("skipped meal".parse::<LifeEvent>().unwrap(), LifeEvent::SkippedMeal);
        assert_eq!("metfriend".parse::<LifeEvent>().unwrap(), LifeEvent::MetFriend);
        assert!("lottery".parse::<LifeEvent>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

        // Test error case
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let state = DayState::Relaxing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DayState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);

        let event = LifeEvent::MetFriend;
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: LifeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
