//! Radiation exposure and mutation draws.

use super::data::{MutationDef, MUTATIONS};
use crate::core::constants::*;
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::rng::RandomSource;

/// Dose received on an exposed tick: `max(1, global / 10)` divided by the lifestyle tier.
pub fn exposure_dose(state: &SimulationState) -> f64 {
    let base = (state.global_radiation / RADIATION_EXPOSURE_DIVISOR).max(1.0);
    base / state.lifestyle().level.max(1) as f64
}

/// Rolls for this tick's exposure. Returns the dose actually absorbed.
pub fn accumulate_radiation<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
) -> f64 {
    if !rng.chance(RADIATION_EXPOSURE_CHANCE) {
        return 0.0;
    }
    let before = state.player_radiation;
    state.player_radiation = (before + exposure_dose(state)).clamp(0.0, MAX_PLAYER_RADIATION);
    state.player_radiation - before
}

/// Number of whole mutation steps contained in a radiation level.
pub fn radiation_band(radiation: f64) -> i64 {
    (radiation / MUTATION_RADIATION_STEP).floor() as i64
}

/// Draws at most one mutation when player radiation has crossed into a higher
/// band since `prev_radiation`.
pub fn check_mutation<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    prev_radiation: f64,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Option<&'static MutationDef> {
    if radiation_band(state.player_radiation) <= radiation_band(prev_radiation) {
        return None;
    }
    if !rng.chance(MUTATION_CHANCE) {
        return None;
    }
    draw_mutation(state, rng, events)
}

/// Grants one mutation the player does not have yet, chosen uniformly.
pub fn draw_mutation<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Option<&'static MutationDef> {
    let available: Vec<&'static MutationDef> = MUTATIONS
        .iter()
        .filter(|m| !state.mutations.iter().any(|owned| owned == m.id))
        .collect();
    if available.is_empty() {
        return None;
    }
    let mutation = available[rng.index(available.len())];
    state.mutations.push(mutation.id.to_string());
    events.push(TickEvent::MutationGained {
        name: mutation.name,
    });
    Some(mutation)
}
