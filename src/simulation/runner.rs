//! Driver loop that feeds hours into the day machine
//!
//! The runner owns the random generator for the whole run, builds a fresh
//! [`DayFsm`] per day, paces ticks in real time and writes one narration line
//! per tick.

use crate::day::{DayFsm, DrawSource, Narration, RandomDraws};
use crate::simulation::{DayStatistics, RunStatistics, SimulationError, SimulationResult};
use crate::types::{DayId, OutputFormat, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, info_span, instrument};

/// JSON line written per tick
#[derive(Serialize)]
struct NarrationLine<'a> {
    day: usize,
    #[serde(flatten)]
    narration: &'a Narration,
}

/// Runs one or more simulated days according to a [`SimulationConfig`]
#[derive(Debug)]
pub struct DayRunner {
    config: SimulationConfig,
    hours: Vec<i32>,
    format: OutputFormat,
    pacing: Duration,
    rng: StdRng,
}

impl DayRunner {
    /// Create a runner, validating the configuration first
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let format = config.get_output_format().map_err(SimulationError::configuration_error)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            days = config.days,
            ticks_per_day = config.ticks_per_day(),
            seed = ?config.seed,
            "Initializing day runner"
        );

        Ok(Self {
            hours: config.hour_sequence(),
            pacing: config.tick_delay(),
            format,
            rng,
            config,
        })
    }

    /// Override the delay between ticks
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// The configuration this runner was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The hours fed to each day, in order
    pub fn hours(&self) -> &[i32] {
        &self.hours
    }

    /// Run every configured day, writing narration to `out`
    #[instrument(skip(self, out), fields(days = self.config.days))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> SimulationResult<RunStatistics> {
        let start = Instant::now();
        let mut statistics = RunStatistics::new();
        let multi_day = self.config.days > 1;

        for day in 1..=self.config.days {
            let day_id = DayId::new();
            let _span = info_span!("day", number = day, id = %day_id).entered();

            if multi_day && self.format == OutputFormat::Text {
                writeln!(out, "--- Day {} ---", day)?;
            }

            let mut fsm = DayFsm::with_draws(RandomDraws::new(&mut self.rng));
            drive_day(&self.hours, self.pacing, self.format, day, &mut fsm, out)?;

            let day_statistics =
                DayStatistics::from_journal(day_id, fsm.journal(), fsm.is_finished());
            info!(
                ticks = day_statistics.ticks,
                final_state = %day_statistics.final_state,
                completed = day_statistics.completed,
                events = day_statistics.total_events_fired(),
                "Day ended"
            );
            statistics.add_day(&day_statistics);
        }

        statistics.set_simulation_duration(start.elapsed());
        info!(
            days = statistics.days_simulated,
            completed = statistics.days_completed,
            "Run finished"
        );
        Ok(statistics)
    }

    /// Drive an already-built machine through this runner's hours
    ///
    /// Useful to replay a day with scripted draws. Stops early once the day
    /// completes.
    pub fn run_day<D: DrawSource, W: Write>(
        &self,
        fsm: &mut DayFsm<D>,
        out: &mut W,
    ) -> SimulationResult<DayStatistics> {
        drive_day(&self.hours, self.pacing, self.format, 1, fsm, out)?;
        Ok(DayStatistics::from_journal(DayId::new(), fsm.journal(), fsm.is_finished()))
    }
}

fn drive_day<D: DrawSource, W: Write>(
    hours: &[i32],
    pacing: Duration,
    format: OutputFormat,
    day: usize,
    fsm: &mut DayFsm<D>,
    out: &mut W,
) -> SimulationResult<()> {
    for (index, &hour) in hours.iter().enumerate() {
        if index > 0 && !pacing.is_zero() {
            thread::sleep(pacing);
        }

        let narration = fsm.advance(hour);
        write_narration(out, format, day, &narration)?;

        if fsm.is_finished() {
            debug!(hour, remaining = hours.len() - index - 1, "Day complete, stopping early");
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_narration<W: Write>(
    out: &mut W,
    format: OutputFormat,
    day: usize,
    narration: &Narration,
) -> SimulationResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", narration)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &NarrationLine { day, narration })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
