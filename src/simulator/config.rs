//! Simulation configuration.

use crate::core::constants::{MS_PER_DAY, VIRTUAL_MS_PER_TICK};
use crate::economy::ThreatLevel;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Real-time ticks to run (each is 250 ms of wall clock)
    pub ticks: u64,

    /// Game speed preset
    pub speed: u32,

    /// Starting archetype id
    pub archetype: String,

    pub auto_buy: bool,

    pub threat: ThreatLevel,

    /// Log verbosity (0 = silent, 1 = summary, 2 = level-ups)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 100_000,
            speed: 50,
            archetype: "j1".to_string(),
            auto_buy: true,
            threat: ThreatLevel::Standard,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Roughly one virtual year at top speed.
    pub fn one_year() -> Self {
        Self {
            ticks: 1_100,
            speed: 500,
            ..Default::default()
        }
    }

    /// Virtual days covered if no lockout freezes the clock.
    pub fn virtual_days(&self) -> f64 {
        (self.ticks as f64 * self.speed as f64 * VIRTUAL_MS_PER_TICK as f64) / MS_PER_DAY as f64
    }
}
