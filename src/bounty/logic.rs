//! Bounty generation, expiry and fulfilment.

use super::types::{Bounty, BountyKind};
use crate::core::clock;
use crate::core::constants::*;
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::rng::RandomSource;
use crate::hacking::targets::random_target;

/// Builds a new contract against a random target, scaled to the player's level.
///
/// Draw order: target, big-contract roll, reward jitter, kind, expiry.
pub fn generate_bounty<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
) -> Bounty {
    let target = random_target(rng);
    let is_big = rng.chance(BIG_BOUNTY_CHANCE);
    let jitter = (rng.next_f64() * BOUNTY_REWARD_JITTER).floor() as u64;
    let reward = BOUNTY_REWARD_PER_LEVEL * state.level.max(1) as u64
        + if is_big { BIG_BOUNTY_BONUS } else { 0 }
        + jitter;

    let kind_roll = rng.next_f64();
    let kind = if kind_roll < 0.33 {
        BountyKind::Scout
    } else if kind_roll < 0.66 {
        BountyKind::Extract
    } else {
        BountyKind::Disrupt
    };

    let days = rng.uniform(BOUNTY_MIN_DAYS, BOUNTY_MAX_DAYS);
    let expires_at = state.virtual_time + (days * MS_PER_DAY as f64) as i64;

    let description = if is_big {
        format!("Extract Executive Data from {}", target.company)
    } else {
        format!("Disrupt operations at {}", target.company)
    };

    Bounty {
        id: state.mint_id("b"),
        target_id: target.id.to_string(),
        description,
        reward,
        expires_at,
        kind,
    }
}

/// Hourly bounty board maintenance: drop expired contracts, maybe post a new one.
///
/// Only runs when the clock has crossed an hour boundary since the last check.
pub fn process_hourly<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let last_check = state.last_bounty_check;
    state.last_bounty_check = state.virtual_time;
    if !clock::crossed_hour(last_check, state.virtual_time) {
        return;
    }

    let now = state.virtual_time;
    let before = state.active_bounties.len();
    state.active_bounties.retain(|b| !b.is_expired(now));
    let expired = before - state.active_bounties.len();
    if expired > 0 {
        events.push(TickEvent::BountiesExpired { count: expired });
    }

    if state.active_bounties.len() < MAX_ACTIVE_BOUNTIES && rng.chance(BOUNTY_SPAWN_CHANCE) {
        let bounty = generate_bounty(state, rng);
        events.push(TickEvent::BountyPosted {
            description: bounty.description.clone(),
        });
        state.active_bounties.push(bounty);
    }
}

/// Pays out the first live bounty on `target_id`, if any.
pub fn fulfill_for_target(
    state: &mut SimulationState,
    target_id: &str,
    events: &mut Vec<TickEvent>,
) -> Option<u64> {
    let now = state.virtual_time;
    let idx = state
        .active_bounties
        .iter()
        .position(|b| b.target_id == target_id && !b.is_expired(now))?;
    let bounty = state.active_bounties.remove(idx);
    state.cash = state.cash.saturating_add(bounty.reward);
    events.push(TickEvent::BountyCompleted {
        description: bounty.description,
        reward: bounty.reward,
    });
    Some(bounty.reward)
}
