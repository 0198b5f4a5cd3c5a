//! Static catalogs for everything the player can buy, compile or install.

use crate::core::constants::MS_PER_HOUR;
use crate::core::effects::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareKind {
    Cpu,
    Ram,
    Network,
    Cooling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    pub cost_multiplier: f64,
    pub kind: HardwareKind,
    pub value: f64,
}

impl HardwareDef {
    /// Hack speed contributed by `owned` units. Only CPU hardware adds speed.
    pub fn speed_bonus(&self, owned: u32) -> f64 {
        match self.kind {
            HardwareKind::Cpu => self.value * owned as f64,
            _ => 0.0,
        }
    }
}

pub const HARDWARE: [HardwareDef; 4] = [
    HardwareDef {
        id: "u1",
        name: "Eyebot Optical Sensors",
        description: "Basic visual targeting. Increases Hack Speed slightly.",
        base_cost: 50.0,
        cost_multiplier: 1.5,
        kind: HardwareKind::Cpu,
        value: 0.5,
    },
    HardwareDef {
        id: "u2",
        name: "Pip-Boy 2000 Mk VI",
        description: "Personal info processor. Increases CapCoin mining rate.",
        base_cost: 75.0,
        cost_multiplier: 1.6,
        kind: HardwareKind::Ram,
        value: 5.0,
    },
    HardwareDef {
        id: "u3",
        name: "Protectron Relays",
        description: "Automated protocols. Increases Critical Chance.",
        base_cost: 200.0,
        cost_multiplier: 1.8,
        kind: HardwareKind::Network,
        value: 1.0,
    },
    HardwareDef {
        id: "u4",
        name: "Robo-Brain Cortex",
        description: "Organic-synthetic hybrid processing. Massive Speed boost.",
        base_cost: 1500.0,
        cost_multiplier: 2.5,
        kind: HardwareKind::Cooling,
        value: 15.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftwareStat {
    Cash,
    Speed,
    Crit,
    Heat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftwareDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    pub cost_multiplier: f64,
    pub stat: SoftwareStat,
    /// Bonus per owned copy
    pub value: f64,
}

pub const SOFTWARE: [SoftwareDef; 4] = [
    SoftwareDef {
        id: "sw1",
        name: "Dataminer_v1.exe",
        description: "Background process that scrapes extra data.",
        base_cost: 100.0,
        cost_multiplier: 1.4,
        stat: SoftwareStat::Cash,
        value: 2.0,
    },
    SoftwareDef {
        id: "sw2",
        name: "Logic_Bomb.bat",
        description: "Overloads systems to speed up processing.",
        base_cost: 250.0,
        cost_multiplier: 1.5,
        stat: SoftwareStat::Speed,
        value: 0.2,
    },
    SoftwareDef {
        id: "sw3",
        name: "Backdoor_Trojan",
        description: "Maintains persistent access for critical strikes.",
        base_cost: 500.0,
        cost_multiplier: 1.6,
        stat: SoftwareStat::Crit,
        value: 0.5,
    },
    SoftwareDef {
        id: "sw4",
        name: "Coolant_Override",
        description: "Optimizes fan speeds to reduce heat buildup.",
        base_cost: 800.0,
        cost_multiplier: 1.7,
        stat: SoftwareStat::Heat,
        value: 0.5,
    },
];

/// Content installed automatically once the player reaches `unlock_level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnlockableDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_level: u32,
    pub bonus: Modifiers,
}

pub const UNLOCKABLES: [UnlockableDef; 7] = [
    UnlockableDef {
        id: "s1",
        name: "Vault-Tec_Manual.pdf",
        description: "Standard procedures. +10% XP Gain.",
        unlock_level: 2,
        bonus: Modifiers { xp: 0.1, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s2",
        name: "VATS_Targeting.exe",
        description: "Assisted Targeting. +15% Hack Speed.",
        unlock_level: 5,
        bonus: Modifiers { speed: 0.15, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s3",
        name: "Silver_Shroud_Script.txt",
        description: "Deception protocols. +20% CapCoin yield.",
        unlock_level: 10,
        bonus: Modifiers { cash: 0.2, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s4",
        name: "Institute_Teleport_Log.dat",
        description: "Signal interception. +5% Critical Chance.",
        unlock_level: 15,
        bonus: Modifiers { crit: 0.05, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s5",
        name: "P.A.M. Prediction Engine",
        description: "Probabilistic computing. +25% Hack Speed.",
        unlock_level: 20,
        bonus: Modifiers { speed: 0.25, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s6",
        name: "Enclave_Sat_Link.enc",
        description: "Global reach. +30% CapCoin yield.",
        unlock_level: 30,
        bonus: Modifiers { cash: 0.3, ..Modifiers::NONE },
    },
    UnlockableDef {
        id: "s7",
        name: "ZAX_Personality_Matrix",
        description: "Sentient AI integration. All stats +15%.",
        unlock_level: 50,
        bonus: Modifiers {
            speed: 0.15,
            cash: 0.15,
            xp: 0.15,
            crit: 0.05,
            ..Modifiers::NONE
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaultRoomDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlock_level: u32,
    pub base_cost: f64,
    /// Hack speed per room level
    pub speed_per_level: f64,
}

pub const VAULT_UPGRADE_COST_MULTIPLIER: f64 = 1.5;

pub const VAULT_ROOMS: [VaultRoomDef; 10] = [
    VaultRoomDef {
        id: "v1",
        name: "Vault Door",
        description: "Heavy plasteel blast door.",
        unlock_level: 1,
        base_cost: 100.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v2",
        name: "Elevator Shaft",
        description: "Vertical transit access.",
        unlock_level: 1,
        base_cost: 200.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v3",
        name: "Overseer Office",
        description: "Command center for operations.",
        unlock_level: 2,
        base_cost: 500.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v4",
        name: "Diner",
        description: "Nutritional paste dispensary.",
        unlock_level: 3,
        base_cost: 300.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v5",
        name: "Water Treatment",
        description: "Purifies irradiated water.",
        unlock_level: 5,
        base_cost: 600.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v6",
        name: "Living Quarters A",
        description: "Bunk beds for dwellers.",
        unlock_level: 7,
        base_cost: 400.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v7",
        name: "Living Quarters B",
        description: "Overflow housing.",
        unlock_level: 9,
        base_cost: 400.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v8",
        name: "Power Plant",
        description: "General Atomics fusion reactor.",
        unlock_level: 12,
        base_cost: 1000.0,
        speed_per_level: 0.1,
    },
    VaultRoomDef {
        id: "v9",
        name: "Clinic",
        description: "Auto-Doc medical bay.",
        unlock_level: 15,
        base_cost: 800.0,
        speed_per_level: 0.0,
    },
    VaultRoomDef {
        id: "v10",
        name: "Armory",
        description: "Weapon and gear storage.",
        unlock_level: 20,
        base_cost: 1500.0,
        speed_per_level: 0.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumableSpecial {
    None,
    /// Forces one mutation draw on use
    DrawMutation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumableDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Instant heat change on use
    pub heat: f64,
    /// Instant player radiation change on use
    pub rads: f64,
    /// Virtual ms the timed effect lasts; 0 for instant-only items
    pub duration_ms: i64,
    pub modifiers: Modifiers,
    pub special: ConsumableSpecial,
    /// Units the shop holds after a restock
    pub restock: u32,
}

pub const CONSUMABLES: [ConsumableDef; 8] = [
    ConsumableDef {
        id: "c1",
        name: "Nuka-Cola",
        description: "Ice cold. Takes the edge off a hot terminal.",
        base_cost: 20.0,
        heat: -10.0,
        rads: 5.0,
        duration_ms: 0,
        modifiers: Modifiers::NONE,
        special: ConsumableSpecial::None,
        restock: 10,
    },
    ConsumableDef {
        id: "c2",
        name: "RadAway",
        description: "Flushes accumulated radiation.",
        base_cost: 80.0,
        heat: 0.0,
        rads: -100.0,
        duration_ms: 0,
        modifiers: Modifiers::NONE,
        special: ConsumableSpecial::None,
        restock: 5,
    },
    ConsumableDef {
        id: "c3",
        name: "Mentats",
        description: "+2 Intelligence for 4 hours.",
        base_cost: 120.0,
        heat: 0.0,
        rads: 0.0,
        duration_ms: 4 * MS_PER_HOUR,
        modifiers: Modifiers { intelligence: 2, ..Modifiers::NONE },
        special: ConsumableSpecial::None,
        restock: 3,
    },
    ConsumableDef {
        id: "c4",
        name: "Psycho",
        description: "+25% Hack Speed, +25% Heat generation for 2 hours.",
        base_cost: 150.0,
        heat: 0.0,
        rads: 0.0,
        duration_ms: 2 * MS_PER_HOUR,
        modifiers: Modifiers { speed: 0.25, heat_gen: 0.25, ..Modifiers::NONE },
        special: ConsumableSpecial::None,
        restock: 3,
    },
    ConsumableDef {
        id: "c5",
        name: "Jet",
        description: "+50% Hack Speed for 1 hour.",
        base_cost: 90.0,
        heat: 0.0,
        rads: 0.0,
        duration_ms: MS_PER_HOUR,
        modifiers: Modifiers { speed: 0.5, ..Modifiers::NONE },
        special: ConsumableSpecial::None,
        restock: 4,
    },
    ConsumableDef {
        id: "c6",
        name: "Day Tripper",
        description: "+5% Critical Chance for 4 hours.",
        base_cost: 100.0,
        heat: 0.0,
        rads: 0.0,
        duration_ms: 4 * MS_PER_HOUR,
        modifiers: Modifiers { crit: 0.05, ..Modifiers::NONE },
        special: ConsumableSpecial::None,
        restock: 3,
    },
    ConsumableDef {
        id: "c7",
        name: "Coolant Canister",
        description: "Vents 30 Heat and dampens heat generation for 2 hours.",
        base_cost: 200.0,
        heat: -30.0,
        rads: 0.0,
        duration_ms: 2 * MS_PER_HOUR,
        modifiers: Modifiers { heat_gen: -0.2, ..Modifiers::NONE },
        special: ConsumableSpecial::None,
        restock: 2,
    },
    ConsumableDef {
        id: "c10",
        name: "Mutagenic Serum",
        description: "Experimental. Forces a genetic mutation.",
        base_cost: 500.0,
        heat: 0.0,
        rads: 50.0,
        duration_ms: 0,
        modifiers: Modifiers::NONE,
        special: ConsumableSpecial::DrawMutation,
        restock: 1,
    },
];

pub fn get_hardware(id: &str) -> Option<&'static HardwareDef> {
    HARDWARE.iter().find(|h| h.id == id)
}

pub fn get_software(id: &str) -> Option<&'static SoftwareDef> {
    SOFTWARE.iter().find(|s| s.id == id)
}

pub fn get_unlockable(id: &str) -> Option<&'static UnlockableDef> {
    UNLOCKABLES.iter().find(|u| u.id == id)
}

pub fn get_vault_room(id: &str) -> Option<&'static VaultRoomDef> {
    VAULT_ROOMS.iter().find(|r| r.id == id)
}

pub fn get_consumable(id: &str) -> Option<&'static ConsumableDef> {
    CONSUMABLES.iter().find(|c| c.id == id)
}
