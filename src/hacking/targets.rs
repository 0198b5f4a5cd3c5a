//! Static catalog of corporations and their hackable subsidiaries.

use crate::core::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorporationDef {
    pub code: &'static str,
    pub name: &'static str,
    pub motto: &'static str,
    pub initial_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub id: &'static str,
    pub company: &'static str,
    /// Code of the owning corporation
    pub parent: &'static str,
    pub system: &'static str,
    pub difficulty: u32,
}

pub const CORPORATIONS: [CorporationDef; 5] = [
    CorporationDef {
        code: "VTEC",
        name: "Vault-Tec",
        motto: "The end of the world is just the beginning.",
        initial_price: 150.0,
    },
    CorporationDef {
        code: "ROBC",
        name: "RobCo Industries",
        motto: "Tomorrow's technology, today!",
        initial_price: 220.0,
    },
    CorporationDef {
        code: "GATM",
        name: "General Atomics",
        motto: "Making life easier through nuclear power.",
        initial_price: 180.0,
    },
    CorporationDef {
        code: "POSE",
        name: "Poseidon Energy",
        motto: "Powering the future.",
        initial_price: 300.0,
    },
    CorporationDef {
        code: "WTEK",
        name: "West-Tek",
        motto: "Better living through chemistry.",
        initial_price: 400.0,
    },
];

macro_rules! target {
    ($id:expr, $company:expr, $parent:expr, $system:expr, $difficulty:expr) => {
        Target {
            id: $id,
            company: $company,
            parent: $parent,
            system: $system,
            difficulty: $difficulty,
        }
    };
}

pub const TARGETS: [Target; 25] = [
    target!("VTEC-1", "Project Safehouse", "VTEC", "Cryo-Storage Controls", 1),
    target!("VTEC-2", "Future-Tech", "VTEC", "G.E.C.K. Simulation Node", 2),
    target!("VTEC-3", "Vault-Tec University", "VTEC", "Behavioral Analysis DB", 3),
    target!("VTEC-4", "Vault-Tec Agriculture", "VTEC", "Hydroponics Regulator", 4),
    target!("VTEC-5", "Vault-Tec Defense", "VTEC", "Turret Firmware Server", 5),
    target!("ROBC-1", "Unified Operating Systems", "ROBC", "Mainframe Kernel", 1),
    target!("ROBC-2", "RobCo Service Center", "ROBC", "Protectron Diagnostic Uplink", 2),
    target!("ROBC-3", "Atomic Automaton", "ROBC", "Pip-Boy OS Source Code", 3),
    target!("ROBC-4", "Mechanist Labs", "ROBC", "Brain-Bot Schematic", 4),
    target!("ROBC-5", "Liberty Defense", "ROBC", "Prime Targeting Array", 5),
    target!("GATM-1", "G.A. Robotics", "GATM", "Mr. Handy Personality Core", 1),
    target!("GATM-2", "Galleria Management", "GATM", "Shopping Plaza Network", 2),
    target!("GATM-3", "G.A. Nuclear", "GATM", "Fusion Core Fabrication", 3),
    target!("GATM-4", "Miss Nanny Corp", "GATM", "Childcare Algorithms", 4),
    target!("GATM-5", "G.A. Military", "GATM", "Mister Gutsy Weapons Control", 5),
    target!("POSE-1", "Poseidon Oil", "POSE", "Oil Rig Pressure Valve", 1),
    target!("POSE-2", "HELIOS One", "POSE", "Archimedes Orbital Link", 2),
    target!("POSE-3", "Poseidon Radar", "POSE", "Enclave Deep Net", 3),
    target!("POSE-4", "Poseidon Gas", "POSE", "Pipeline Flow Monitor", 4),
    target!("POSE-5", "Atlas Power", "POSE", "Reactors 1-4 Override", 5),
    target!("WTEK-1", "West-Tek Research", "WTEK", "F.E.V. Sequencing Vat", 1),
    target!("WTEK-2", "Power Armor Div", "WTEK", "T-51b Servos Logic", 2),
    target!("WTEK-3", "Biomedical Research", "WTEK", "Pan-Immunity Virion", 3),
    target!("WTEK-4", "Advanced Weapons", "WTEK", "Laser Rifle Focusing", 4),
    target!("WTEK-5", "West-Tek Logistics", "WTEK", "Hazardous Transport Manifest", 5),
];

pub fn get_target(id: &str) -> Option<&'static Target> {
    TARGETS.iter().find(|t| t.id == id)
}

/// Resolves a target id, falling back to the first catalog entry.
pub fn target_or_default(id: &str) -> &'static Target {
    get_target(id).unwrap_or(&TARGETS[0])
}

pub fn random_target<R: RandomSource + ?Sized>(rng: &mut R) -> &'static Target {
    &TARGETS[rng.index(TARGETS.len())]
}

pub fn get_corporation(code: &str) -> Option<&'static CorporationDef> {
    CORPORATIONS.iter().find(|c| c.code == code)
}
