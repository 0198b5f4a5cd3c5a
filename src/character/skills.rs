use super::attributes::SpecialType;
use crate::core::constants::{MAX_SKILL, NUM_SKILLS, SKILL_POINT_STEP};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillType {
    Science,
    Lockpick,
    Sneak,
    Barter,
    Speech,
    Repair,
}

impl SkillType {
    pub fn all() -> [SkillType; NUM_SKILLS] {
        [
            SkillType::Science,
            SkillType::Lockpick,
            SkillType::Sneak,
            SkillType::Barter,
            SkillType::Speech,
            SkillType::Repair,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillType::Science => "Science",
            SkillType::Lockpick => "Lockpick",
            SkillType::Sneak => "Sneak",
            SkillType::Barter => "Barter",
            SkillType::Speech => "Speech",
            SkillType::Repair => "Repair",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SkillType::Science => 0,
            SkillType::Lockpick => 1,
            SkillType::Sneak => 2,
            SkillType::Barter => 3,
            SkillType::Speech => 4,
            SkillType::Repair => 5,
        }
    }

    /// Attribute the skill is associated with on the character sheet.
    pub fn governing_attribute(&self) -> SpecialType {
        match self {
            SkillType::Science | SkillType::Repair => SpecialType::Intelligence,
            SkillType::Lockpick => SpecialType::Perception,
            SkillType::Sneak => SpecialType::Agility,
            SkillType::Barter | SkillType::Speech => SpecialType::Charisma,
        }
    }

    pub fn parse(input: &str) -> Option<SkillType> {
        let trimmed = input.trim();
        SkillType::all()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(trimmed))
    }
}

/// Six skills, each held in `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Skills {
    values: [u32; NUM_SKILLS],
}

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(SkillType, u32)]) -> Self {
        let mut skills = Self::new();
        for &(skill, value) in pairs {
            skills.set(skill, value);
        }
        skills
    }

    pub fn get(&self, skill: SkillType) -> u32 {
        self.values[skill.index()]
    }

    pub fn set(&mut self, skill: SkillType, value: u32) {
        self.values[skill.index()] = value.min(MAX_SKILL);
    }

    /// Adds one point-spend step. Returns false when already at the cap.
    pub fn train(&mut self, skill: SkillType) -> bool {
        let current = self.get(skill);
        if current >= MAX_SKILL {
            return false;
        }
        self.set(skill, current + SKILL_POINT_STEP);
        true
    }

    pub fn in_range(&self) -> bool {
        self.values.iter().all(|v| *v <= MAX_SKILL)
    }
}
