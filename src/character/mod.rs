//! Character attributes, skills, archetypes and progression.

pub mod archetypes;
pub mod attributes;
pub mod progression;
pub mod skills;

pub use archetypes::{get_archetype, Archetype, ALL_ARCHETYPES};
pub use attributes::{Special, SpecialType};
pub use progression::{spend_upgrade_point, UpgradeTarget};
pub use skills::{SkillType, Skills};
