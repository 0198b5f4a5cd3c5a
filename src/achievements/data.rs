//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::HelloWorld,
        name: "Hello World",
        description: "Complete your first successful hack",
    },
    AchievementDef {
        id: AchievementId::MarketMover,
        name: "Market Mover",
        description: "Own 100 shares of a single corporation",
    },
    AchievementDef {
        id: AchievementId::Meltdown,
        name: "Meltdown",
        description: "Push your terminal to 100% heat",
    },
    AchievementDef {
        id: AchievementId::Millionaire,
        name: "Millionaire",
        description: "Hold 1,000,000 caps",
    },
    AchievementDef {
        id: AchievementId::GhostInTheShell,
        name: "Ghost in the Shell",
        description: "Reach level 10",
    },
    AchievementDef {
        id: AchievementId::GlowingSea,
        name: "Glowing Sea",
        description: "Witness global radiation reach 50",
    },
];

pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}
