//! Starting archetypes: pre-war day jobs the player picks at character creation.

use super::attributes::Special;
use super::skills::{SkillType, Skills};

#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// S, P, E, C, I, A, L
    pub special: [u32; 7],
    pub skills: &'static [(SkillType, u32)],
}

impl Archetype {
    pub fn starting_special(&self) -> Special {
        Special::new(self.special)
    }

    pub fn starting_skills(&self) -> Skills {
        Skills::from_pairs(self.skills)
    }
}

pub const ALL_ARCHETYPES: &[Archetype] = &[
    Archetype {
        id: "j1",
        name: "Barnaby \"Bitwise\" Hale",
        title: "Data Entry Clerk",
        description: "A cog in the machine who learned to read between the lines.",
        special: [3, 6, 4, 3, 8, 5, 4],
        skills: &[(SkillType::Science, 15), (SkillType::Repair, 10)],
    },
    Archetype {
        id: "j2",
        name: "Myrtle \"Mainframe\" Vance",
        title: "Switchboard Operator",
        description: "Has heard every secret in the Commonwealth.",
        special: [2, 7, 3, 8, 6, 4, 5],
        skills: &[(SkillType::Speech, 20), (SkillType::Barter, 10)],
    },
    Archetype {
        id: "j3",
        name: "Percival \"Punchcard\" Graves",
        title: "Jr. Systems Analyst",
        description: "Thinks in binary. Dreams in code.",
        special: [2, 5, 3, 2, 10, 3, 6],
        skills: &[(SkillType::Science, 25), (SkillType::Lockpick, 5)],
    },
    Archetype {
        id: "j4",
        name: "Ethel \"Ethernet\" Merman",
        title: "Telegram Transcriptionist",
        description: "Fast hands and a charming voice for social engineering.",
        special: [3, 4, 5, 7, 5, 8, 3],
        skills: &[(SkillType::Sneak, 15), (SkillType::Speech, 15)],
    },
    Archetype {
        id: "j5",
        name: "Walter \"Waveform\" Bishop",
        title: "Lab Assistant",
        description: "Used to dangerous experiments. High tolerance for failure.",
        special: [4, 5, 8, 3, 7, 4, 4],
        skills: &[(SkillType::Repair, 20), (SkillType::Science, 10)],
    },
    Archetype {
        id: "j6",
        name: "Stanley \"Silicon\" Kowalski",
        title: "Vacuum Tube Replacer",
        description: "Strong back, steady hands. Good at fixing mistakes.",
        special: [8, 4, 6, 3, 4, 5, 5],
        skills: &[(SkillType::Repair, 25), (SkillType::Lockpick, 10)],
    },
    Archetype {
        id: "j10",
        name: "Howard \"Hardware\" Hughes",
        title: "Avionics Tinkerer",
        description: "Obsessive. Paranoid. Brilliant.",
        special: [3, 8, 2, 2, 9, 6, 8],
        skills: &[(SkillType::Science, 20), (SkillType::Sneak, 10)],
    },
];

pub fn get_archetype(id: &str) -> Option<&'static Archetype> {
    ALL_ARCHETYPES.iter().find(|a| a.id == id)
}
