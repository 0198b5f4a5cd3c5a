//! The tick reducer: one pure step from the current state to the next.
//!
//! [`tick`] never mutates its input. It clones the state, runs the subsystems
//! in a fixed order and returns the new state together with the events it
//! produced. Exactly one of three branches runs on any tick:
//!
//! - **Locked out**: virtual time is frozen. Only the real-time release check
//!   and the peer population run.
//! - **Overheated**: the hacking step hit maximum heat, so every other player
//!   effect of the tick is discarded and the lockout begins. Peers still move.
//! - **Normal**: clock, economy, bounties, radiation, activity work, peers
//!   and achievements, in that order.

use super::clock::{self, Activity};
use super::effects::prune_expired;
use super::events::{apply_tick_events, TickEvent};
use super::game_state::SimulationState;
use super::rng::RandomSource;
use crate::achievements::evaluate_achievements;
use crate::bounty;
use crate::economy;
use crate::hacking::heat;
use crate::hacking::{process_hacking, HackTick};
use crate::mutation;
use crate::peers;
use tracing::debug;

/// Inputs to a tick that come from outside the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickContext {
    /// Wall-clock epoch ms; only lockout timing reads it
    pub real_now_ms: i64,
}

/// Result of processing a single tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: SimulationState,
    /// Events produced during this tick, in order. Their log lines are
    /// already written into `state.log`.
    pub events: Vec<TickEvent>,
}

/// Advances the simulation by one tick.
///
/// `rng` is any [`RandomSource`]: `rand::thread_rng()` in production, a
/// seeded `ChaCha8Rng` or a `ScriptedRng` in tests.
pub fn tick<R: RandomSource + ?Sized>(
    prev: &SimulationState,
    ctx: &TickContext,
    rng: &mut R,
) -> TickOutcome {
    let mut state = prev.clone();
    let mut events = Vec::new();

    // ── Locked out: wait for real time to pass ──────────────────
    if state.is_locked_out() {
        heat::release_if_elapsed(&mut state, ctx.real_now_ms, &mut events);
        peers::simulate_peers(&mut state, rng, &mut events);
        apply_tick_events(&mut state, &events);
        return TickOutcome { state, events };
    }

    // ── Paused ──────────────────────────────────────────────────
    if state.speed_multiplier == 0 {
        return TickOutcome { state, events };
    }

    // ── 1. Clock and activity ───────────────────────────────────
    state.virtual_time = clock::advance(prev.virtual_time, prev.speed_multiplier);
    let today = clock::calendar(state.virtual_time);
    let activity = clock::classify(today.hour, false);
    if activity != state.activity {
        events.push(TickEvent::ActivityChanged {
            from: state.activity,
            to: activity,
        });
        state.activity = activity;
    }
    prune_expired(&mut state.active_effects, state.virtual_time);

    // ── 2. Economy ──────────────────────────────────────────────
    economy::process_daily(&mut state, &today, rng, &mut events);
    economy::process_annual_review(&mut state, &today, rng, &mut events);
    economy::update_market(&mut state, rng);

    // ── 3. Bounty board ─────────────────────────────────────────
    bounty::process_hourly(&mut state, rng, &mut events);

    // ── 4. Radiation ────────────────────────────────────────────
    let radiation_before = state.player_radiation;
    mutation::accumulate_radiation(&mut state, rng);
    mutation::check_mutation(&mut state, radiation_before, rng, &mut events);

    // ── 5. Activity-specific work ───────────────────────────────
    match activity {
        Activity::Job => {
            economy::pay_wage(&mut state, &mut events);
        }
        Activity::Sleeping => heat::apply_sleep_decay(&mut state),
        Activity::Hacking => {
            if process_hacking(&mut state, rng, &mut events) == HackTick::Overheated {
                return overheat(prev, state.virtual_time, ctx, rng);
            }
        }
        Activity::Lockout => {}
    }

    // ── 6. Background population ────────────────────────────────
    peers::simulate_peers(&mut state, rng, &mut events);

    finish(state, events)
}

/// Builds the lockout branch from the pre-tick state, keeping only the clock advance.
///
/// The bounty board check stamp is not advanced, so an hour crossed here is
/// still maintained on the next normal tick.
fn overheat<R: RandomSource + ?Sized>(
    prev: &SimulationState,
    virtual_time: i64,
    ctx: &TickContext,
    rng: &mut R,
) -> TickOutcome {
    let mut state = prev.clone();
    state.virtual_time = virtual_time;
    let mut events = Vec::new();
    debug!(heat = prev.heat, "overheated; discarding tick effects");
    heat::enter_lockout(&mut state, ctx.real_now_ms, &mut events);
    peers::simulate_peers(&mut state, rng, &mut events);
    finish(state, events)
}

fn finish(mut state: SimulationState, mut events: Vec<TickEvent>) -> TickOutcome {
    evaluate_achievements(&mut state, &mut events);
    apply_tick_events(&mut state, &events);
    TickOutcome { state, events }
}
