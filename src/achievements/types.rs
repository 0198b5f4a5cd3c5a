//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AchievementId {
    HelloWorld,
    MarketMover,
    Meltdown,
    Millionaire,
    GhostInTheShell,
    GlowingSea,
}

impl AchievementId {
    pub const ALL: [AchievementId; 6] = [
        AchievementId::HelloWorld,
        AchievementId::MarketMover,
        AchievementId::Meltdown,
        AchievementId::Millionaire,
        AchievementId::GhostInTheShell,
        AchievementId::GlowingSea,
    ];
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    /// Virtual time of the unlock
    pub unlocked_at: i64,
}

/// One-way latches keyed by achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Achievements {
    pub unlocked: BTreeMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId, virtual_time: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: virtual_time,
            },
        );
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}
