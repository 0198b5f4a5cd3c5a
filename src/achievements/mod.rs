//! Achievements: one-way latches evaluated after every tick.

pub mod data;
pub mod evaluator;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use evaluator::evaluate_achievements;
pub use types::{AchievementId, Achievements};
