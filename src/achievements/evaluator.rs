//! Threshold checks run against the state at the end of every tick.

use super::types::AchievementId;
use crate::core::constants::*;
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;

/// True if the state currently satisfies the condition for `id`.
pub fn condition_met(state: &SimulationState, id: AchievementId) -> bool {
    match id {
        AchievementId::HelloWorld => state.total_hacks >= 1,
        AchievementId::MarketMover => state
            .corporations
            .values()
            .any(|c| c.owned_shares >= MARKET_MOVER_SHARES),
        AchievementId::Meltdown => state.heat >= MAX_HEAT,
        AchievementId::Millionaire => state.cash >= MILLIONAIRE_CASH,
        AchievementId::GhostInTheShell => state.level >= GHOST_LEVEL,
        AchievementId::GlowingSea => state.global_radiation >= GLOWING_SEA_RADIATION,
    }
}

/// Latches every achievement whose condition now holds.
///
/// Already-unlocked achievements are skipped, so each one produces exactly
/// one event over the life of a save.
pub fn evaluate_achievements(state: &mut SimulationState, events: &mut Vec<TickEvent>) {
    for id in AchievementId::ALL {
        if state.achievements.is_unlocked(id) || !condition_met(state, id) {
            continue;
        }
        if state.achievements.unlock(id, state.virtual_time) {
            events.push(TickEvent::AchievementUnlocked { id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::rng::ScriptedRng;

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    #[test]
    fn test_fresh_state_unlocks_nothing() {
        let mut state = state();
        let mut events = Vec::new();
        evaluate_achievements(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.achievements.unlocked_count(), 0);
    }

    #[test]
    fn test_first_hack_unlocks_hello_world_once() {
        let mut state = state();
        state.total_hacks = 1;
        let mut events = Vec::new();
        evaluate_achievements(&mut state, &mut events);
        assert_eq!(
            events,
            vec![TickEvent::AchievementUnlocked {
                id: AchievementId::HelloWorld
            }]
        );

        state.total_hacks = 2;
        evaluate_achievements(&mut state, &mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_latch_survives_condition_loss() {
        let mut state = state();
        state.heat = MAX_HEAT;
        let mut events = Vec::new();
        evaluate_achievements(&mut state, &mut events);
        state.heat = 0.0;
        evaluate_achievements(&mut state, &mut events);
        assert!(state.achievements.is_unlocked(AchievementId::Meltdown));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_each_threshold() {
        let mut state = state();
        state.cash = MILLIONAIRE_CASH;
        state.level = GHOST_LEVEL;
        state.global_radiation = GLOWING_SEA_RADIATION;
        if let Some(corp) = state.corporations.get_mut("ROBC") {
            corp.owned_shares = MARKET_MOVER_SHARES;
        }
        let mut events = Vec::new();
        evaluate_achievements(&mut state, &mut events);
        assert_eq!(events.len(), 4);
        assert!(!state.achievements.is_unlocked(AchievementId::HelloWorld));
    }
}
