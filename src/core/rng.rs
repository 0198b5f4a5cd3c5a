//! Injectable randomness for the simulation.
//!
//! Every subsystem draws from a [`RandomSource`] passed in by the caller.
//! Any `rand::Rng` works (`rand::thread_rng()` in production, a seeded
//! `ChaCha8Rng` in tests), and [`ScriptedRng`] replays an exact sequence so
//! tests can pin down individual dice and spawn outcomes.

use super::constants::CRIT_FAIL_THRESHOLD;
use rand::Rng;
use std::collections::VecDeque;

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index into a collection of `len` elements. `len` must be > 0.
    fn index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Uniform float in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Single die with faces `1..=sides`.
    fn die(&mut self, sides: u32) -> u32 {
        self.index(sides as usize) as u32 + 1
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of values, then returns `fallback` forever.
///
/// The default fallback of 0.5 fails every chance roll at or below 50%
/// and rolls a 4 on a d6, so exhausted scripts never explode dice.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.5,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback.clamp(0.0, 0.999_999);
        self
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

/// Value in `[0, 1)` that makes [`RandomSource::die`] land on `face` of a d6.
pub fn d6_face(face: u32) -> f64 {
    (face.clamp(1, 6) as f64 - 0.5) / 6.0
}

/// Result of a 3d6 exploding roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub total: u32,
    pub rolls: Vec<u32>,
}

impl DiceRoll {
    pub fn is_critical_failure(&self) -> bool {
        self.total > CRIT_FAIL_THRESHOLD
    }
}

/// Rolls three d6; every six is re-rolled and added on top, uncapped.
pub fn roll_exploding_3d6<R: RandomSource + ?Sized>(rng: &mut R) -> DiceRoll {
    let mut rolls = Vec::with_capacity(3);
    let mut total = 0;
    for _ in 0..3 {
        let mut die = rng.die(6);
        rolls.push(die);
        total += die;
        while die == 6 {
            die = rng.die(6);
            rolls.push(die);
            total += die;
        }
    }
    DiceRoll { total, rolls }
}
