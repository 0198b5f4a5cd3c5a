//! JSON export and validated import of the simulation state.

use crate::character::get_archetype;
use crate::core::constants::*;
use crate::core::game_state::SimulationState;
use crate::economy::LIFESTYLE_TIERS;
use crate::hacking::get_target;
use crate::mutation::get_mutation;
use std::collections::BTreeSet;
use std::io;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no active session")]
    NoState,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid save state: {0}")]
    Invalid(String),
}

/// Serializes the state as pretty-printed JSON.
pub fn export_state(state: &SimulationState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parses and validates exported JSON. Nothing is returned unless the whole
/// document is a consistent state.
pub fn import_state(text: &str) -> Result<SimulationState, SaveError> {
    let state: SimulationState = serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "rejected import: malformed JSON");
        e
    })?;
    validate_state(&state).map_err(|e| {
        warn!(error = %e, "rejected import");
        e
    })?;
    Ok(state)
}

fn check(ok: bool, what: &str) -> Result<(), SaveError> {
    if ok {
        Ok(())
    } else {
        Err(SaveError::Invalid(what.to_string()))
    }
}

fn in_range(value: f64, lo: f64, hi: f64) -> bool {
    value.is_finite() && value >= lo && value <= hi
}

/// Checks every bounded field of a state.
pub fn validate_state(state: &SimulationState) -> Result<(), SaveError> {
    check(get_archetype(&state.archetype).is_some(), "unknown archetype")?;
    check(in_range(state.heat, 0.0, MAX_HEAT), "heat out of range")?;
    check(
        state.hacking_progress.is_finite() && state.hacking_progress < HACK_COMPLETE,
        "hacking progress out of range",
    )?;
    check(
        state.level >= 1 && state.level as usize <= LEVEL_THRESHOLDS.len(),
        "level out of range",
    )?;
    check(state.special.in_range(), "attribute out of range")?;
    check(state.skills.in_range(), "skill out of range")?;
    check(
        SPEED_PRESETS.contains(&state.speed_multiplier),
        "unknown speed multiplier",
    )?;
    check(get_target(&state.current_target).is_some(), "unknown target")?;

    let economy = &state.economy;
    check(
        economy.job_grade >= 1 && economy.job_grade <= MAX_JOB_GRADE,
        "job grade out of range",
    )?;
    check(
        LIFESTYLE_TIERS
            .iter()
            .any(|t| t.level == economy.lifestyle_level),
        "unknown lifestyle tier",
    )?;

    check(
        in_range(state.global_radiation, 0.0, MAX_GLOBAL_RADIATION),
        "global radiation out of range",
    )?;
    check(
        in_range(state.player_radiation, 0.0, MAX_PLAYER_RADIATION),
        "player radiation out of range",
    )?;
    let unique: BTreeSet<&String> = state.mutations.iter().collect();
    check(unique.len() == state.mutations.len(), "duplicate mutation")?;
    check(
        state.mutations.iter().all(|m| get_mutation(m).is_some()),
        "unknown mutation",
    )?;

    check(
        state.corporations.values().all(|c| {
            c.price.is_finite()
                && c.price > 0.0
                && c.reputation <= MAX_REPUTATION
                && in_range(c.trace_level, 0.0, MAX_TRACE)
        }),
        "corporation stats out of range",
    )?;
    check(
        state.active_bounties.iter().all(|b| b.reward > 0),
        "bounty without reward",
    )?;
    check(
        state.peers.iter().all(|p| in_range(p.heat, 0.0, MAX_HEAT)),
        "peer heat out of range",
    )?;
    check(state.log.len() <= LOG_CAPACITY, "log over capacity")?;
    Ok(())
}
