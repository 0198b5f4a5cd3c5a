//! Heat decay and the lockout state machine.
//!
//! Heat builds up on failed kill-chain phases and bleeds off every hacking
//! tick. Reaching [`MAX_HEAT`] locks the terminal for a stretch of *real*
//! time that shrinks with Endurance.

use super::bonuses::HackBonuses;
use crate::character::SpecialType;
use crate::core::clock::Activity;
use crate::core::constants::{
    AGILITY_HEAT_DECAY, LOCKOUT_BASE_MS, LOCKOUT_MIN_MS, LOCKOUT_MS_PER_ENDURANCE, MAX_HEAT,
};
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use tracing::info;

/// Extra decay per hacking tick from living somewhere with climate control.
pub fn lifestyle_heat_bonus(lifestyle_level: u8) -> f64 {
    if lifestyle_level >= 6 {
        1.0
    } else if lifestyle_level >= 4 {
        0.5
    } else {
        0.0
    }
}

/// Heat shed on a hacking tick.
///
/// A heat generation multiplier below 1 amplifies decay by `2 - mult`;
/// multipliers above 1 do not slow it.
pub fn hacking_heat_decay(state: &SimulationState, bonuses: &HackBonuses) -> f64 {
    let agility = state.special.get(SpecialType::Agility) as f64;
    let mut decay = agility * AGILITY_HEAT_DECAY
        + bonuses.software_heat
        + lifestyle_heat_bonus(state.economy.lifestyle_level);
    let heat_gen = bonuses.heat_gen_mult();
    if heat_gen < 1.0 {
        decay *= 2.0 - heat_gen;
    }
    decay
}

/// Heat shed on a sleeping tick.
pub fn sleep_heat_decay(lifestyle_level: u8) -> f64 {
    if lifestyle_level >= 5 {
        5.0
    } else if lifestyle_level >= 3 {
        3.0
    } else {
        2.0
    }
}

pub fn apply_sleep_decay(state: &mut SimulationState) {
    let decay = sleep_heat_decay(state.economy.lifestyle_level);
    state.heat = (state.heat - decay).max(0.0);
}

/// Real-time lockout length for an Endurance score.
pub fn lockout_duration_ms(endurance: u32) -> i64 {
    (LOCKOUT_BASE_MS - endurance as i64 * LOCKOUT_MS_PER_ENDURANCE).max(LOCKOUT_MIN_MS)
}

/// Pins heat at the maximum and starts a lockout ending `real_now + duration`.
pub fn enter_lockout(state: &mut SimulationState, real_now: i64, events: &mut Vec<TickEvent>) {
    let duration = lockout_duration_ms(state.special.get(SpecialType::Endurance));
    let until = real_now.saturating_add(duration);
    state.heat = MAX_HEAT;
    state.lockout = Some(until);
    state.activity = Activity::Lockout;
    info!(duration_ms = duration, "terminal locked out");
    events.push(TickEvent::LockoutStarted { until });
}

/// Ends the lockout once real time reaches its end. Returns true if it ended.
///
/// Activity stays `Lockout` until the next tick re-derives it from the clock.
pub fn release_if_elapsed(
    state: &mut SimulationState,
    real_now: i64,
    events: &mut Vec<TickEvent>,
) -> bool {
    match state.lockout {
        Some(until) if real_now >= until => {
            state.heat = 0.0;
            state.lockout = None;
            info!("lockout expired");
            events.push(TickEvent::LockoutEnded);
            true
        }
        _ => false,
    }
}
