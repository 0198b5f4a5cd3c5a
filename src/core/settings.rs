//! Player-adjustable settings.

use super::constants::SPEED_PRESETS;
use super::error::{ActionError, ActionResult};
use super::game_state::SimulationState;
use super::log::LogKind;
use crate::economy::{lifestyle_tier, ThreatLevel, LIFESTYLE_TIERS};

pub const MAX_NAME_LEN: usize = 32;

pub fn set_speed(state: &mut SimulationState, speed: u32) -> ActionResult<()> {
    if !SPEED_PRESETS.contains(&speed) {
        return Err(ActionError::InvalidValue(format!("speed {}", speed)));
    }
    state.speed_multiplier = speed;
    Ok(())
}

/// Flips auto-hack and returns the new setting.
pub fn toggle_auto_hack(state: &mut SimulationState) -> bool {
    state.auto_hack = !state.auto_hack;
    state.auto_hack
}

/// Flips hardware auto-buy and returns the new setting.
pub fn toggle_auto_buy(state: &mut SimulationState) -> bool {
    state.auto_buy_hardware = !state.auto_buy_hardware;
    state.auto_buy_hardware
}

pub fn set_threat_level(state: &mut SimulationState, level: ThreatLevel) {
    if state.threat_level == level {
        return;
    }
    state.threat_level = level;
    let config = level.config();
    state.push_log(
        "SYS",
        format!("Threat level set to {}. {}", config.label, config.description),
        LogKind::System,
    );
}

/// Moves to another lifestyle tier. The new daily cost applies from the next day.
pub fn set_lifestyle(state: &mut SimulationState, level: u8) -> ActionResult<()> {
    if !LIFESTYLE_TIERS.iter().any(|t| t.level == level) {
        return Err(ActionError::InvalidValue(format!("lifestyle tier {}", level)));
    }
    if state.economy.lifestyle_level == level {
        return Ok(());
    }
    state.economy.lifestyle_level = level;
    let tier = lifestyle_tier(level);
    state.push_log(
        "FINANCE",
        format!("Moved to {} ({} Caps/day).", tier.name, tier.daily_cost),
        LogKind::Info,
    );
    Ok(())
}

pub fn rename(state: &mut SimulationState, name: &str) -> ActionResult<()> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(ActionError::InvalidValue(format!("name {:?}", name)));
    }
    state.player_name = name.to_string();
    Ok(())
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
    fn test_speed_must_be_a_preset() {
        let mut state = state();
        assert!(set_speed(&mut state, 500).is_ok());
        assert_eq!(state.speed_multiplier, 500);
        assert!(set_speed(&mut state, 7).is_err());
        assert_eq!(state.speed_multiplier, 500);
    }

    #[test]
    fn test_toggles() {
        let mut state = state();
        assert!(!toggle_auto_hack(&mut state));
        assert!(toggle_auto_hack(&mut state));
        assert!(toggle_auto_buy(&mut state));
    }

    #[test]
    fn test_lifestyle_bounds() {
        let mut state = state();
        assert!(set_lifestyle(&mut state, 0).is_err());
        assert!(set_lifestyle(&mut state, 7).is_err());
        set_lifestyle(&mut state, 4).unwrap();
        assert_eq!(state.lifestyle().name, "Uptown");
        assert_eq!(
            state.log.latest().map(|e| e.message.as_str()),
            Some("Moved to Uptown (300 Caps/day).")
        );
    }

    #[test]
    fn test_threat_level_logs_change() {
        let mut state = state();
        let before = state.log.len();
        set_threat_level(&mut state, ThreatLevel::Standard);
        assert_eq!(state.log.len(), before);
        set_threat_level(&mut state, ThreatLevel::Suicidal);
        assert_eq!(state.threat_level, ThreatLevel::Suicidal);
        assert_eq!(state.log.len(), before + 1);
    }

    #[test]
    fn test_rename_validation() {
        let mut state = state();
        assert!(rename(&mut state, "   ").is_err());
        assert!(rename(&mut state, &"x".repeat(33)).is_err());
        rename(&mut state, "  Nyx ").unwrap();
        assert_eq!(state.player_name, "Nyx");
    }
}
