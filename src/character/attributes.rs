use crate::core::constants::{MAX_ATTRIBUTE, MIN_ATTRIBUTE, NUM_SPECIAL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpecialType {
    Strength,
    Perception,
    Endurance,
    Charisma,
    Intelligence,
    Agility,
    Luck,
}

impl SpecialType {
    pub fn all() -> [SpecialType; NUM_SPECIAL] {
        [
            SpecialType::Strength,
            SpecialType::Perception,
            SpecialType::Endurance,
            SpecialType::Charisma,
            SpecialType::Intelligence,
            SpecialType::Agility,
            SpecialType::Luck,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            SpecialType::Strength => "S",
            SpecialType::Perception => "P",
            SpecialType::Endurance => "E",
            SpecialType::Charisma => "C",
            SpecialType::Intelligence => "I",
            SpecialType::Agility => "A",
            SpecialType::Luck => "L",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialType::Strength => "Strength",
            SpecialType::Perception => "Perception",
            SpecialType::Endurance => "Endurance",
            SpecialType::Charisma => "Charisma",
            SpecialType::Intelligence => "Intelligence",
            SpecialType::Agility => "Agility",
            SpecialType::Luck => "Luck",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SpecialType::Strength => 0,
            SpecialType::Perception => 1,
            SpecialType::Endurance => 2,
            SpecialType::Charisma => 3,
            SpecialType::Intelligence => 4,
            SpecialType::Agility => 5,
            SpecialType::Luck => 6,
        }
    }

    /// Accepts the single-letter abbreviation or the full name, any case.
    pub fn parse(input: &str) -> Option<SpecialType> {
        let lower = input.trim().to_ascii_lowercase();
        SpecialType::all()
            .into_iter()
            .find(|s| {
                s.abbrev().eq_ignore_ascii_case(&lower) || s.name().to_ascii_lowercase() == lower
            })
    }
}

/// The seven S.P.E.C.I.A.L. attributes, each held in `[1, 10]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Special {
    values: [u32; NUM_SPECIAL],
}

impl Default for Special {
    fn default() -> Self {
        Self::uniform(5)
    }
}

impl Special {
    /// Values in S, P, E, C, I, A, L order; each is clamped into range.
    pub fn new(values: [u32; NUM_SPECIAL]) -> Self {
        Self {
            values: values.map(|v| v.clamp(MIN_ATTRIBUTE, MAX_ATTRIBUTE)),
        }
    }

    pub fn uniform(value: u32) -> Self {
        Self::new([value; NUM_SPECIAL])
    }

    pub fn get(&self, attr: SpecialType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: SpecialType, value: u32) {
        self.values[attr.index()] = value.clamp(MIN_ATTRIBUTE, MAX_ATTRIBUTE);
    }

    /// Raises an attribute by one. Returns false when it is already at the cap.
    pub fn increment(&mut self, attr: SpecialType) -> bool {
        let current = self.get(attr);
        if current >= MAX_ATTRIBUTE {
            return false;
        }
        self.values[attr.index()] = current + 1;
        true
    }

    pub fn in_range(&self) -> bool {
        self.values
            .iter()
            .all(|v| (MIN_ATTRIBUTE..=MAX_ATTRIBUTE).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_values() {
        let special = Special::new([0, 5, 11, 3, 10, 1, 99]);
        assert_eq!(special.get(SpecialType::Strength), 1);
        assert_eq!(special.get(SpecialType::Endurance), 10);
        assert_eq!(special.get(SpecialType::Luck), 10);
        assert!(special.in_range());
    }

    #[test]
    fn test_get_set() {
        let mut special = Special::default();
        special.set(SpecialType::Intelligence, 8);
        assert_eq!(special.get(SpecialType::Intelligence), 8);
        assert_eq!(special.get(SpecialType::Agility), 5);

        special.set(SpecialType::Intelligence, 40);
        assert_eq!(special.get(SpecialType::Intelligence), 10);
    }

    #[test]
    fn test_increment_stops_at_cap() {
        let mut special = Special::uniform(9);
        assert!(special.increment(SpecialType::Luck));
        assert_eq!(special.get(SpecialType::Luck), 10);
        assert!(!special.increment(SpecialType::Luck));
        assert_eq!(special.get(SpecialType::Luck), 10);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, attr) in SpecialType::all().iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_parse_accepts_abbrev_and_name() {
        assert_eq!(SpecialType::parse("I"), Some(SpecialType::Intelligence));
        assert_eq!(SpecialType::parse("luck"), Some(SpecialType::Luck));
        assert_eq!(SpecialType::parse(" Agility "), Some(SpecialType::Agility));
        assert_eq!(SpecialType::parse("wisdom"), None);
    }
}
