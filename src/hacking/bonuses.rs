//! Aggregates every source of hacking bonuses into one snapshot per tick.

use crate::character::SpecialType;
use crate::core::constants::{BASE_HACK_SPEED, INT_SPEED_FACTOR};
use crate::core::effects::Modifiers;
use crate::core::game_state::SimulationState;
use crate::mutation::get_mutation;
use crate::shop::catalog::{SoftwareStat, HARDWARE, SOFTWARE, UNLOCKABLES, VAULT_ROOMS};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HackBonuses {
    /// Sum of active effects, mutations and installed content
    pub modifiers: Modifiers,
    pub hardware_speed: f64,
    pub vault_speed: f64,
    pub software_speed: f64,
    pub software_cash: f64,
    pub software_crit: f64,
    pub software_heat: f64,
}

impl HackBonuses {
    pub fn collect(state: &SimulationState) -> Self {
        let mut modifiers = Modifiers::NONE;
        for effect in state
            .active_effects
            .iter()
            .filter(|e| e.is_active(state.virtual_time))
        {
            modifiers = modifiers.combine(&effect.modifiers);
        }
        for mutation in state.mutations.iter().filter_map(|id| get_mutation(id)) {
            modifiers = modifiers.combine(&mutation.effects);
        }
        for content in UNLOCKABLES
            .iter()
            .filter(|u| state.unlocked_content.contains(u.id))
        {
            modifiers = modifiers.combine(&content.bonus);
        }

        let hardware_speed = HARDWARE
            .iter()
            .map(|h| h.speed_bonus(state.hardware_owned(h.id)))
            .sum();
        let vault_speed = VAULT_ROOMS
            .iter()
            .map(|r| r.speed_per_level * state.vault_level(r.id) as f64)
            .sum();

        let software_total = |stat: SoftwareStat| -> f64 {
            SOFTWARE
                .iter()
                .filter(|s| s.stat == stat)
                .map(|s| s.value * state.software_owned(s.id) as f64)
                .sum()
        };

        Self {
            modifiers,
            hardware_speed,
            vault_speed,
            software_speed: software_total(SoftwareStat::Speed),
            software_cash: software_total(SoftwareStat::Cash),
            software_crit: software_total(SoftwareStat::Crit),
            software_heat: software_total(SoftwareStat::Heat),
        }
    }

    pub fn speed_mult(&self) -> f64 {
        1.0 + self.modifiers.speed
    }

    pub fn heat_gen_mult(&self) -> f64 {
        1.0 + self.modifiers.heat_gen
    }

    pub fn cash_mult(&self) -> f64 {
        1.0 + self.modifiers.cash
    }

    pub fn xp_mult(&self) -> f64 {
        1.0 + self.modifiers.xp
    }

    pub fn crit_flat(&self) -> f64 {
        self.modifiers.crit
    }

    /// Intelligence after temporary and mutation modifiers, never below zero.
    pub fn effective_intelligence(&self, state: &SimulationState) -> u32 {
        let base = state.special.get(SpecialType::Intelligence) as i64;
        (base + self.modifiers.intelligence as i64).max(0) as u32
    }

    /// Progress gained per hacking tick.
    pub fn hack_speed(&self, state: &SimulationState) -> f64 {
        let int_mod = self.effective_intelligence(state) as f64 * INT_SPEED_FACTOR;
        (BASE_HACK_SPEED + self.hardware_speed + self.software_speed + self.vault_speed)
            * (1.0 + int_mod)
            * self.speed_mult()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::effects::ActiveEffect;
    use crate::core::rng::ScriptedRng;

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    #[test]
    fn test_base_speed_uses_intelligence() {
        let state = state();
        let bonuses = HackBonuses::collect(&state);
        // Int 8 → 0.05 × 1.8
        assert!((bonuses.hack_speed(&state) - 0.09).abs() < 1e-9);
    }

    #[test]
    fn test_hardware_software_and_vault_add_speed() {
        let mut state = state();
        state.hardware.insert("u1".to_string(), 2);
        state.software.insert("sw2".to_string(), 1);
        state.vault_levels.insert("v8".to_string(), 3);
        let bonuses = HackBonuses::collect(&state);
        assert!((bonuses.hardware_speed - 1.0).abs() < 1e-9);
        assert!((bonuses.software_speed - 0.2).abs() < 1e-9);
        assert!((bonuses.vault_speed - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_expired_effects_ignored() {
        let mut state = state();
        state.active_effects.push(ActiveEffect {
            source_id: "c3".to_string(),
            name: "Mentats".to_string(),
            expires_at: state.virtual_time,
            modifiers: Modifiers {
                intelligence: 2,
                ..Modifiers::NONE
            },
        });
        let bonuses = HackBonuses::collect(&state);
        assert_eq!(bonuses.effective_intelligence(&state), 8);

        state.active_effects[0].expires_at = state.virtual_time + 1;
        let bonuses = HackBonuses::collect(&state);
        assert_eq!(bonuses.effective_intelligence(&state), 10);
    }

    #[test]
    fn test_mutations_and_content_fold_into_multipliers() {
        let mut state = state();
        state.mutations.push("m3".to_string());
        state.unlocked_content.insert("s3".to_string());
        let bonuses = HackBonuses::collect(&state);
        assert!((bonuses.cash_mult() - 1.3).abs() < 1e-9);
        assert_eq!(bonuses.heat_gen_mult(), 1.0);
    }
}
