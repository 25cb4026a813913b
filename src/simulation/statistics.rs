//! Statistics collection and reporting
//!
//! Per-day counters are built from a day's narration journal; run statistics
//! fold those together across every simulated day.

use crate::day::{Narration, NarrationEvent};
use crate::types::{DayId, DayState, LifeEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Counters for one simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStatistics {
    /// Which day these counters describe
    pub day_id: DayId,
    /// Number of ticks fed to the machine
    pub ticks: usize,
    /// Ticks that ended in each state
    pub ticks_per_state: BTreeMap<DayState, usize>,
    /// Life events that fired
    pub events_fired: BTreeMap<LifeEvent, usize>,
    /// Life events that were possible but did not fire
    pub events_avoided: BTreeMap<LifeEvent, usize>,
    /// Times study time arrived while still asleep
    pub overslept: usize,
    /// State after the last tick
    pub final_state: DayState,
    /// Whether the day completed
    pub completed: bool,
}

impl DayStatistics {
    /// Create empty statistics for a day that has not started
    pub fn new(day_id: DayId) -> Self {
        Self {
            day_id,
            ticks: 0,
            ticks_per_state: BTreeMap::new(),
            events_fired: BTreeMap::new(),
            events_avoided: BTreeMap::new(),
            overslept: 0,
            final_state: DayState::Sleeping,
            completed: false,
        }
    }

    /// Build statistics from a day's narration journal
    pub fn from_journal(day_id: DayId, journal: &[Narration], completed: bool) -> Self {
        let mut stats = Self::new(day_id);
        for narration in journal {
            stats.record(narration);
        }
        stats.completed = completed;
        stats
    }

    /// Fold one tick into the counters
    pub fn record(&mut self, narration: &Narration) {
        self.ticks += 1;
        *self.ticks_per_state.entry(narration.to).or_insert(0) += 1;
        self.final_state = narration.to;

        match narration.event {
            Some(NarrationEvent::Happened(event)) => {
                *self.events_fired.entry(event).or_insert(0) += 1;
            }
            Some(NarrationEvent::Avoided(event)) => {
                *self.events_avoided.entry(event).or_insert(0) += 1;
            }
            Some(NarrationEvent::Overslept) => self.overslept += 1,
            Some(NarrationEvent::DayOver) => self.completed = true,
            Some(NarrationEvent::AlreadyOver) | None => {}
        }
    }

    /// Ticks that ended in `state`
    pub fn ticks_in(&self, state: DayState) -> usize {
        self.ticks_per_state.get(&state).copied().unwrap_or(0)
    }

    /// Times `event` fired
    pub fn fired(&self, event: LifeEvent) -> usize {
        self.events_fired.get(&event).copied().unwrap_or(0)
    }

    /// Total life events fired
    pub fn total_events_fired(&self) -> usize {
        self.events_fired.values().sum()
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Number of days simulated
    pub days_simulated: usize,
    /// Number of days that completed
    pub days_completed: usize,
    /// Total ticks across all days
    pub total_ticks: usize,
    /// Ticks that ended in each state, across all days
    pub ticks_per_state: BTreeMap<DayState, usize>,
    /// Life events that fired, across all days
    pub events_fired: BTreeMap<LifeEvent, usize>,
    /// Times study time arrived while still asleep, across all days
    pub overslept: usize,
    /// How each day ended
    pub final_states: BTreeMap<DayState, usize>,
    /// Wall-clock duration of the run
    pub simulation_duration: Duration,
}

impl RunStatistics {
    /// Create empty run statistics
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            days_simulated: 0,
            days_completed: 0,
            total_ticks: 0,
            ticks_per_state: BTreeMap::new(),
            events_fired: BTreeMap::new(),
            overslept: 0,
            final_states: BTreeMap::new(),
            simulation_duration: Duration::from_secs(0),
        }
    }

    /// Fold one day into the run
    pub fn add_day(&mut self, day: &DayStatistics) {
        self.days_simulated += 1;
        if day.completed {
            self.days_completed += 1;
        }
        self.total_ticks += day.ticks;
        for (state, count) in &day.ticks_per_state {
            *self.ticks_per_state.entry(*state).or_insert(0) += count;
        }
        for (event, count) in &day.events_fired {
            *self.events_fired.entry(*event).or_insert(0) += count;
        }
        self.overslept += day.overslept;
        *self.final_states.entry(day.final_state).or_insert(0) += 1;
    }

    /// Set the simulation duration
    pub fn set_simulation_duration(&mut self, duration: Duration) {
        self.simulation_duration = duration;
    }

    /// Percentage of days that completed
    pub fn completion_percentage(&self) -> f64 {
        if self.days_simulated == 0 {
            0.0
        } else {
            self.days_completed as f64 / self.days_simulated as f64 * 100.0
        }
    }

    /// Average number of `event` firings per day
    pub fn average_events_per_day(&self, event: LifeEvent) -> f64 {
        if self.days_simulated == 0 {
            0.0
        } else {
            self.events_fired.get(&event).copied().unwrap_or(0) as f64 / self.days_simulated as f64
        }
    }

    /// Share of all ticks that ended in `state`, as a percentage
    pub fn state_percentage(&self, state: DayState) -> f64 {
        if self.total_ticks == 0 {
            0.0
        } else {
            self.ticks_per_state.get(&state).copied().unwrap_or(0) as f64 / self.total_ticks as f64
                * 100.0
        }
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Statistics:")?;
        writeln!(f, "  Days Simulated: {}", self.days_simulated)?;
        writeln!(
            f,
            "  Days Completed: {} ({:.1}%)",
            self.days_completed,
            self.completion_percentage()
        )?;
        writeln!(f, "  Total Ticks: {}", self.total_ticks)?;
        writeln!(f, "  Time Spent:")?;
        for state in DayState::ALL {
            writeln!(f, "    {:<8} {:>5.1}%", state.label(), self.state_percentage(state))?;
        }
        writeln!(f, "  Life Events (per day):")?;
        for event in LifeEvent::ALL {
            writeln!(f, "    {:<16} {:.2}", event.to_string(), self.average_events_per_day(event))?;
        }
        writeln!(f, "  Overslept: {}", self.overslept)?;
        write!(f, "  Runtime: {:.2} seconds", self.simulation_duration.as_secs_f64())
    }
}
