//! Levels, upgrade points and unlockable content.

use super::attributes::SpecialType;
use super::skills::SkillType;
use crate::core::constants::POINTS_EVERY_N_LEVELS;
use crate::core::error::{ActionError, ActionResult};
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::shop::catalog::UNLOCKABLES;

/// What an upgrade point is spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeTarget {
    Attribute(SpecialType),
    Skill(SkillType),
}

impl UpgradeTarget {
    /// Parses an attribute abbreviation or name, falling back to a skill name.
    pub fn parse(input: &str) -> Option<UpgradeTarget> {
        SpecialType::parse(input)
            .map(UpgradeTarget::Attribute)
            .or_else(|| SkillType::parse(input).map(UpgradeTarget::Skill))
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeTarget::Attribute(attr) => attr.name(),
            UpgradeTarget::Skill(skill) => skill.name(),
        }
    }
}

/// Advances at most one level if experience has reached the next threshold.
///
/// Every fifth level grants one upgrade point and one perk point.
/// Returns true if a level was gained.
pub fn check_level_up(state: &mut SimulationState, events: &mut Vec<TickEvent>) -> bool {
    let Some(threshold) = state.next_level_threshold() else {
        return false;
    };
    if state.experience < threshold {
        return false;
    }

    state.level += 1;
    let points_granted = state.level % POINTS_EVERY_N_LEVELS == 0;
    if points_granted {
        state.upgrade_points += 1;
        state.perk_points += 1;
    }
    events.push(TickEvent::LeveledUp {
        level: state.level,
        points_granted,
    });
    true
}

/// Installs every unlockable whose level requirement is now met.
pub fn install_unlocked_content(state: &mut SimulationState, events: &mut Vec<TickEvent>) {
    for content in UNLOCKABLES.iter() {
        if state.level >= content.unlock_level
            && state.unlocked_content.insert(content.id.to_string())
        {
            events.push(TickEvent::ContentInstalled { name: content.name });
        }
    }
}

/// Spends one upgrade point: attribute +1 or skill +5.
pub fn spend_upgrade_point(
    state: &mut SimulationState,
    target: UpgradeTarget,
) -> ActionResult<u32> {
    if state.upgrade_points == 0 {
        return Err(ActionError::NoPoints);
    }
    let raised = match target {
        UpgradeTarget::Attribute(attr) => state.special.increment(attr),
        UpgradeTarget::Skill(skill) => state.skills.train(skill),
    };
    if !raised {
        return Err(ActionError::CapReached(target.name().to_string()));
    }
    state.upgrade_points -= 1;
    Ok(match target {
        UpgradeTarget::Attribute(attr) => state.special.get(attr),
        UpgradeTarget::Skill(skill) => state.skills.get(skill),
    })
}
