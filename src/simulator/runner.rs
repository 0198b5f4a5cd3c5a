//! Drives one seeded run through the engine.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::constants::REAL_TICK_INTERVAL_MS;
use crate::core::engine::Engine;
use crate::core::error::{ActionError, ActionResult};
use crate::core::events::TickEvent;
use crate::core::tick::TickContext;
use crate::economy::ReviewOutcome;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> ActionResult<SimReport> {
    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut engine = Engine::new(rng);
    engine.start_new(&config.archetype)?;
    engine.set_speed(config.speed)?;
    engine.set_threat_level(config.threat)?;
    if engine.state().map(|s| s.auto_buy_hardware) != Some(config.auto_buy) {
        engine.toggle_auto_buy()?;
    }

    let mut stats = RunStats::default();
    let mut real_now: i64 = 0;
    for tick in 0..config.ticks {
        real_now += REAL_TICK_INTERVAL_MS as i64;
        let events = engine.tick(&TickContext { real_now_ms: real_now });
        stats.record(tick, &events);

        if let Some(state) = engine.state() {
            stats.peak_heat = stats.peak_heat.max(state.heat);
            if state.is_locked_out() {
                stats.ticks_locked_out += 1;
            }
        }
        if config.verbosity >= 2 {
            for event in &events {
                if let TickEvent::LeveledUp { level, .. } = event {
                    println!("  tick {:>8}: level {}", tick, level);
                }
            }
        }
    }

    let state = engine.reset().ok_or(ActionError::NoState)?;
    Ok(SimReport::from_run(config, stats, &state))
}

impl RunStats {
    /// Folds one tick's events into the counters.
    pub fn record(&mut self, tick: u64, events: &[TickEvent]) {
        for event in events {
            match event {
                TickEvent::HackSucceeded { cash, critical, .. } => {
                    self.hacks_completed += 1;
                    self.hack_cash += cash;
                    if *critical {
                        self.critical_hacks += 1;
                    }
                }
                TickEvent::PhaseFailed { critical, .. } => {
                    self.phase_failures += 1;
                    if *critical {
                        self.critical_failures += 1;
                    }
                }
                TickEvent::LockoutStarted { .. } => self.lockouts += 1,
                TickEvent::WagePaid { amount } => self.wages += amount,
                TickEvent::ExpensesPaid { amount, .. } => self.expenses += amount,
                TickEvent::Evicted => self.evictions += 1,
                TickEvent::CareerReview { outcome, .. } => match outcome {
                    ReviewOutcome::Promoted => self.promotions += 1,
                    ReviewOutcome::Demoted => self.demotions += 1,
                    ReviewOutcome::Maintained => {}
                },
                TickEvent::BountyCompleted { reward, .. } => {
                    self.bounties_completed += 1;
                    self.bounty_cash += reward;
                }
                TickEvent::BountiesExpired { count } => self.bounties_expired += *count as u64,
                TickEvent::AutoBought { cost, .. } => {
                    self.hardware_bought += 1;
                    self.hardware_spend += cost;
                }
                TickEvent::LeveledUp { level, .. } => self.level_ups.push((*level, tick)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SimConfig {
        SimConfig {
            seed: Some(seed),
            ticks: 3_000,
            speed: 50,
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = run_simulation(&config(7)).unwrap();
        let b = run_simulation(&config(7)).unwrap();
        assert_eq!(a.final_cash, b.final_cash);
        assert_eq!(a.final_level, b.final_level);
        assert_eq!(a.stats.hacks_completed, b.stats.hacks_completed);
    }

    #[test]
    fn test_run_makes_progress() {
        let report = run_simulation(&config(11)).unwrap();
        assert!(report.stats.hacks_completed > 0);
        assert!(report.final_level >= 1);
        assert!(report.stats.peak_heat <= 100.0);
    }

    #[test]
    fn test_unknown_archetype() {
        let bad = SimConfig {
            archetype: "nobody".to_string(),
            ..config(1)
        };
        assert_eq!(
            run_simulation(&bad).unwrap_err(),
            ActionError::NotFound("nobody".to_string())
        );
    }

    #[test]
    fn test_record_counts_events() {
        let mut stats = RunStats::default();
        stats.record(
            5,
            &[
                TickEvent::WagePaid { amount: 11 },
                TickEvent::LeveledUp {
                    level: 2,
                    points_granted: false,
                },
                TickEvent::Evicted,
            ],
        );
        assert_eq!(stats.wages, 11);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.level_ups, vec![(2, 5)]);
    }
}
