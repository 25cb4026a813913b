//! Narration records produced by every tick of the day

use crate::types::{DayState, LifeEvent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something noteworthy that happened on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "event", rename_all = "snake_case")]
pub enum NarrationEvent {
    /// A life event fired
    Happened(LifeEvent),
    /// A life event was possible but did not fire
    Avoided(LifeEvent),
    /// Still asleep when study time began
    Overslept,
    /// The finished state processed the end-of-day tick
    DayOver,
    /// A tick arrived after the day had already completed
    AlreadyOver,
}

/// What the day looked like after one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    /// Hour that was fed to the machine
    pub hour: i32,
    /// State before the tick
    pub from: DayState,
    /// State after the tick
    pub to: DayState,
    /// Noteworthy occurrence, if any
    pub event: Option<NarrationEvent>,
}

impl Narration {
    /// Create a narration record
    pub fn new(hour: i32, from: DayState, to: DayState, event: Option<NarrationEvent>) -> Self {
        Self { hour, from, to, event }
    }

    /// Whether the tick moved the machine to another state
    pub fn state_changed(&self) -> bool {
        self.from != self.to
    }

    /// The life event that fired on this tick, if any
    pub fn fired_event(&self) -> Option<LifeEvent> {
        match self.event {
            Some(NarrationEvent::Happened(event)) => Some(event),
            _ => None,
        }
    }

    /// The life event that was dodged on this tick, if any
    pub fn avoided_event(&self) -> Option<LifeEvent> {
        match self.event {
            Some(NarrationEvent::Avoided(event)) => Some(event),
            _ => None,
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "It's {} o'clock. ", self.hour)?;

        match self.event {
            Some(NarrationEvent::DayOver) => return write!(f, "The day is over!"),
            Some(NarrationEvent::AlreadyOver) => write!(f, "The day is already over. ")?,
            Some(NarrationEvent::Overslept) => write!(f, "I overslept! ")?,
            Some(NarrationEvent::Happened(event)) => {
                write!(f, "{} happened! ", event.description())?
            }
            Some(NarrationEvent::Avoided(event)) => {
                write!(f, "{} did not happen! ", event.description())?
            }
            None => {}
        }

        let lead = if self.state_changed() { "Now" } else { "Currently" };
        write!(f, "{} I do: {}", lead, self.to)
    }
}
