//! Mutation catalog.

use crate::core::effects::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub effects: Modifiers,
}

pub const MUTATIONS: [MutationDef; 8] = [
    MutationDef {
        id: "m1",
        name: "Eagle Eyes",
        description: "Spot weak points in any cipher. +5% Critical Chance.",
        effects: Modifiers { crit: 0.05, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m2",
        name: "Adrenal Reaction",
        description: "Fingers move faster under stress. +10% Hack Speed.",
        effects: Modifiers { speed: 0.1, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m3",
        name: "Marsupial",
        description: "Carry more loot out of every breach. +10% Caps.",
        effects: Modifiers { cash: 0.1, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m4",
        name: "Egghead",
        description: "Swollen cortex. +1 Intelligence, -5% Hack Speed.",
        effects: Modifiers { intelligence: 1, speed: -0.05, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m5",
        name: "Healing Factor",
        description: "Body sheds heat faster. -15% Heat generation.",
        effects: Modifiers { heat_gen: -0.15, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m6",
        name: "Speed Demon",
        description: "Runs hot and fast. +20% Hack Speed, +10% Heat generation.",
        effects: Modifiers { speed: 0.2, heat_gen: 0.1, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m7",
        name: "Herd Mentality",
        description: "Learns from the crowd. +10% XP.",
        effects: Modifiers { xp: 0.1, ..Modifiers::NONE },
    },
    MutationDef {
        id: "m8",
        name: "Empath",
        description: "Marks pay more, but you hesitate. +15% Caps, -2% Critical Chance.",
        effects: Modifiers { cash: 0.15, crit: -0.02, ..Modifiers::NONE },
    },
];

pub fn get_mutation(id: &str) -> Option<&'static MutationDef> {
    MUTATIONS.iter().find(|m| m.id == id)
}
