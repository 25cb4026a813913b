//! The day's finite-state machine
//!
//! The transition table lives in [`transition`], a pure function of the
//! current state, the hour and one random draw. [`DayFsm`] owns the mutable
//! side: the current state, the draw source, the completion flag and the
//! narration journal.

use super::draw::{DrawSource, RandomDraws};
use super::narration::{Narration, NarrationEvent};
use super::schedule::{is_end_hour, is_meal_hour, is_relax_hour, is_study_hour, is_wake_hour};
use crate::types::{DayState, LifeEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

/// Outcome of applying the transition table once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State after the tick
    pub next: DayState,
    /// Noteworthy occurrence on the tick
    pub event: Option<NarrationEvent>,
    /// Whether this tick completes the day
    pub completes: bool,
}

impl Step {
    fn to(next: DayState) -> Self {
        Self { next, event: None, completes: false }
    }

    fn with_event(next: DayState, event: NarrationEvent) -> Self {
        Self { next, event: Some(event), completes: false }
    }
}

/// Apply the transition table to `state` for `hour`.
///
/// Guards are checked in priority order and the first match wins. `draw` is a
/// sample from `[0, 1)`; `Eating` and `Finished` ignore it. A meal-hour draw of
/// exactly the skipped-meal probability satisfies neither meal guard and falls
/// through to the next one.
pub fn transition(state: DayState, hour: i32, draw: f64) -> Step {
    let alarm = LifeEvent::OversleptAlarm;
    let meal = LifeEvent::SkippedMeal;
    let friend = LifeEvent::MetFriend;

    match state {
        DayState::Sleeping => {
            if is_wake_hour(hour) {
                if draw < alarm.probability() {
                    Step::with_event(DayState::Sleeping, NarrationEvent::Happened(alarm))
                } else {
                    Step::with_event(DayState::Awake, NarrationEvent::Avoided(alarm))
                }
            } else if is_study_hour(hour) {
                Step::with_event(DayState::Studying, NarrationEvent::Overslept)
            } else {
                Step::to(DayState::Sleeping)
            }
        }
        DayState::Awake => {
            if is_meal_hour(hour) && draw > meal.probability() {
                Step::to(DayState::Eating)
            } else if is_meal_hour(hour) && draw < meal.probability() {
                Step::with_event(DayState::Studying, NarrationEvent::Happened(meal))
            } else if is_study_hour(hour) {
                Step::to(DayState::Studying)
            } else {
                Step::to(DayState::Awake)
            }
        }
        DayState::Eating => {
            if is_study_hour(hour) {
                Step::to(DayState::Studying)
            } else {
                Step::to(DayState::Eating)
            }
        }
        DayState::Studying => {
            if is_relax_hour(hour) {
                Step::to(DayState::Relaxing)
            } else if is_meal_hour(hour) && draw > meal.probability() {
                Step::with_event(DayState::Eating, NarrationEvent::Avoided(meal))
            } else if is_meal_hour(hour) && draw < meal.probability() {
                Step::with_event(DayState::Studying, NarrationEvent::Happened(meal))
            } else {
                Step::to(DayState::Studying)
            }
        }
        DayState::Relaxing => {
            // The end-of-day guard reuses the skipped-meal threshold
            if is_end_hour(hour) && draw > meal.probability() {
                Step::to(DayState::Finished)
            } else if draw < friend.probability() {
                Step::with_event(DayState::Studying, NarrationEvent::Happened(friend))
            } else {
                Step::to(DayState::Relaxing)
            }
        }
        DayState::Finished => {
            if is_end_hour(hour) {
                Step { next: DayState::Finished, event: Some(NarrationEvent::DayOver), completes: true }
            } else {
                Step::to(DayState::Finished)
            }
        }
    }
}

/// A single simulated day
///
/// Starts in [`DayState::Sleeping`] and is fed one hour per [`advance`](Self::advance)
/// call. Once the finished state has seen the end-of-day hour the day is
/// complete and later ticks change nothing.
#[derive(Debug, Clone)]
pub struct DayFsm<D = RandomDraws<StdRng>> {
    state: DayState,
    completed: bool,
    draws: D,
    journal: Vec<Narration>,
}

impl DayFsm<RandomDraws<StdRng>> {
    /// Create a day driven by an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_draws(RandomDraws::new(StdRng::from_entropy()))
    }

    /// Create a day driven by a generator seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::with_draws(RandomDraws::new(StdRng::seed_from_u64(seed)))
    }
}

impl Default for DayFsm<RandomDraws<StdRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawSource> DayFsm<D> {
    /// Create a day that takes its random draws from `draws`
    pub fn with_draws(draws: D) -> Self {
        Self { state: DayState::Sleeping, completed: false, draws, journal: Vec::new() }
    }

    /// Feed one hour to the machine and narrate what happened
    ///
    /// Once the day is complete this returns an `AlreadyOver` narration and
    /// leaves the journal untouched.
    pub fn advance(&mut self, hour: i32) -> Narration {
        let from = self.state;

        if self.completed {
            trace!(hour, "Tick after the day completed; nothing to do");
            return Narration::new(hour, from, from, Some(NarrationEvent::AlreadyOver));
        }

        // Draw-consuming states take a fresh sample on every tick, used or not
        let draw = if from.needs_draw() { self.draws.draw() } else { 0.0 };
        let step = transition(from, hour, draw);

        self.state = step.next;
        if step.completes {
            self.completed = true;
            info!(hour, "Day completed");
        }

        debug!(
            hour,
            draw,
            from = %from,
            to = %step.next,
            event = ?step.event,
            "Day tick"
        );

        self.record(Narration::new(hour, from, step.next, step.event))
    }

    /// Whether the day has completed
    ///
    /// Only true once the finished state has processed an end-of-day tick;
    /// merely entering the finished state is not enough.
    pub fn is_finished(&self) -> bool {
        self.completed
    }

    /// Current state
    pub fn state(&self) -> DayState {
        self.state
    }

    /// Every narration up to and including completion, oldest first
    pub fn journal(&self) -> &[Narration] {
        &self.journal
    }

    /// Borrow the draw source
    pub fn draws(&self) -> &D {
        &self.draws
    }

    /// Consume the machine and return its draw source
    pub fn into_draws(self) -> D {
        self.draws
    }

    fn record(&mut self, narration: Narration) -> Narration {
        self.journal.push(narration);
        narration
    }
}
