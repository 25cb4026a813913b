//! Sources of uniform random draws for the life-event model
//!
//! The machine asks for at most one draw per tick. Production runs wrap a
//! `rand` generator; tests pin the draws so every branch is reachable on demand.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// A source of samples from the uniform distribution on `[0, 1)`
pub trait DrawSource {
    /// Take the next draw
    fn draw(&mut self) -> f64;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

impl<D: DrawSource + ?Sized> DrawSource for Box<D> {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// Draws backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: RngCore> RandomDraws<R> {
    /// Wrap a random number generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> DrawSource for RandomDraws<R> {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always yields the same draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl FixedDraw {
    /// A draw above every event threshold; no life event ever fires
    pub const UNEVENTFUL: FixedDraw = FixedDraw(0.99);

    /// A draw below every event threshold; every life event fires
    pub const EVENTFUL: FixedDraw = FixedDraw(0.0);
}

impl DrawSource for FixedDraw {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Replays a scripted list of draws, then falls back to a default
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedDraws {
    script: VecDeque<f64>,
    fallback: f64,
    taken: usize,
}

impl ScriptedDraws {
    /// Replay `draws` in order, then keep yielding `fallback`
    pub fn new(draws: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self { script: draws.into_iter().collect(), fallback, taken: 0 }
    }

    /// Number of draws handed out so far
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        self.taken += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_draws_stay_in_unit_interval() {
        let mut draws = RandomDraws::new(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let r = draws.draw();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = RandomDraws::new(StdRng::seed_from_u64(42));
        let mut b = RandomDraws::new(StdRng::seed_from_u64(42));
        let left: Vec<f64> = (0..16).map(|_| a.draw()).collect();
        let right: Vec<f64> = (0..16).map(|_| b.draw()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_scripted_draws_fall_back() {
        let mut draws = ScriptedDraws::new([0.05, 0.3], 0.9);
        assert_eq!(draws.remaining(), 2);
        assert_eq!(draws.draw(), 0.05);
        assert_eq!(draws.draw(), 0.3);
        assert_eq!(draws.draw(), 0.9);
        assert_eq!(draws.draw(), 0.9);
        assert_eq!(draws.taken(), 4);
        assert_eq!(draws.remaining(), 0);
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn take_one<D: DrawSource>(mut source: D) -> f64 {
            source.draw()
        }

        let mut draws = ScriptedDraws::new([0.1, 0.2], 0.0);
        assert_eq!(take_one(&mut draws), 0.1);
        assert_eq!(draws.draw(), 0.2);
    }
}
