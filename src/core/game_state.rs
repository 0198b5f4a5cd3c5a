use super::clock::{self, Activity, START_TIME_MS};
use super::constants::*;
use super::effects::ActiveEffect;
use super::log::{LogBuffer, LogKind};
use super::rng::RandomSource;
use crate::achievements::Achievements;
use crate::bounty::{self, Bounty};
use crate::character::{Archetype, Skills, Special};
use crate::economy::{lifestyle_tier, Corporation, EconomyState, LifestyleTier, ThreatLevel};
use crate::hacking::targets::{random_target, target_or_default, Target, CORPORATIONS};
use crate::peers::Peer;
use crate::shop;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The single authoritative simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub id: String,
    pub player_name: String,
    pub archetype: String,

    // Clock
    pub virtual_time: i64,
    pub speed_multiplier: u32,
    pub activity: Activity,

    // Progress
    pub cash: u64,
    pub experience: u64,
    pub level: u32,
    pub upgrade_points: u32,
    pub perk_points: u32,
    pub total_hacks: u64,
    pub special: Special,
    pub skills: Skills,

    // Hacking
    pub hacking_progress: f64,
    /// Highest kill-chain phase already rolled for on the current target
    pub last_phase: Option<usize>,
    pub auto_hack: bool,
    pub auto_buy_hardware: bool,
    pub heat: f64,
    /// Real-time end of an active lockout (epoch ms)
    pub lockout: Option<i64>,
    pub threat_level: ThreatLevel,
    pub current_target: String,

    // World
    pub economy: EconomyState,
    pub corporations: BTreeMap<String, Corporation>,
    pub active_bounties: Vec<Bounty>,
    /// Virtual time the bounty board was last maintained
    pub last_bounty_check: i64,
    pub achievements: Achievements,
    pub global_radiation: f64,
    pub player_radiation: f64,
    pub mutations: Vec<String>,
    pub peers: Vec<Peer>,

    // Owned things
    pub hardware: BTreeMap<String, u32>,
    pub software: BTreeMap<String, u32>,
    pub vault_levels: BTreeMap<String, u32>,
    pub unlocked_content: BTreeSet<String>,
    pub inventory: BTreeMap<String, u32>,
    pub shop_stock: BTreeMap<String, u32>,
    pub active_effects: Vec<ActiveEffect>,

    // Kill-chain matrix for the current target
    pub technique_histogram: BTreeMap<String, u32>,
    pub technique_last_seen: BTreeMap<String, String>,

    pub log: LogBuffer,
    pub next_serial: u64,
}

impl SimulationState {
    /// Creates a fresh character from an archetype at the fixed starting date.
    pub fn new<R: RandomSource + ?Sized>(archetype: &Archetype, rng: &mut R) -> Self {
        let start = clock::calendar(START_TIME_MS);
        let corporations = CORPORATIONS
            .iter()
            .map(|def| {
                (
                    def.code.to_string(),
                    Corporation {
                        name: def.name.to_string(),
                        price: def.initial_price,
                        trend: 0.0,
                        owned_shares: 0,
                        reputation: 0,
                        trace_level: 0.0,
                    },
                )
            })
            .collect();

        let mut state = Self {
            id: uuid::Uuid::new_v4().to_string(),
            player_name: archetype.name.to_string(),
            archetype: archetype.id.to_string(),
            virtual_time: START_TIME_MS,
            speed_multiplier: 1,
            activity: clock::classify(start.hour, false),
            cash: STARTING_CASH,
            experience: 0,
            level: 1,
            upgrade_points: 0,
            perk_points: 0,
            total_hacks: 0,
            special: archetype.starting_special(),
            skills: archetype.starting_skills(),
            hacking_progress: 0.0,
            last_phase: None,
            auto_hack: true,
            auto_buy_hardware: false,
            heat: 0.0,
            lockout: None,
            threat_level: ThreatLevel::default(),
            current_target: random_target(rng).id.to_string(),
            economy: EconomyState::new(
                start.year,
                start.day_of_year,
                START_TIME_MS,
                STARTING_LIFESTYLE,
            ),
            corporations,
            active_bounties: Vec::new(),
            last_bounty_check: START_TIME_MS,
            achievements: Achievements::default(),
            global_radiation: STARTING_GLOBAL_RADIATION,
            player_radiation: 0.0,
            mutations: Vec::new(),
            peers: Vec::new(),
            hardware: BTreeMap::new(),
            software: BTreeMap::new(),
            vault_levels: BTreeMap::new(),
            unlocked_content: BTreeSet::new(),
            inventory: BTreeMap::new(),
            shop_stock: BTreeMap::new(),
            active_effects: Vec::new(),
            technique_histogram: BTreeMap::new(),
            technique_last_seen: BTreeMap::new(),
            log: LogBuffer::new(),
            next_serial: 0,
        };

        shop::restock(&mut state, start.day_of_year);
        for _ in 0..STARTING_BOUNTIES {
            let bounty = bounty::generate_bounty(&mut state, rng);
            state.active_bounties.push(bounty);
        }

        state.push_log("SYS", "WIREFRAME PROTOCOL INITIALIZED.".to_string(), LogKind::System);
        state.push_log(
            "SYS",
            format!("Welcome, {}. Assigned: {}.", archetype.name, archetype.title),
            LogKind::System,
        );
        state
    }

    /// Appends a log entry stamped with the current virtual time.
    pub fn push_log(&mut self, tag: &str, message: String, kind: LogKind) {
        self.log.push(self.virtual_time, tag, message, kind);
    }

    /// Mints a deterministic id such as `b-7`.
    pub fn mint_id(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.next_serial);
        self.next_serial += 1;
        id
    }

    pub fn target(&self) -> &'static Target {
        target_or_default(&self.current_target)
    }

    pub fn lifestyle(&self) -> &'static LifestyleTier {
        lifestyle_tier(self.economy.lifestyle_level)
    }

    pub fn is_locked_out(&self) -> bool {
        self.lockout.is_some()
    }

    pub fn hardware_owned(&self, id: &str) -> u32 {
        self.hardware.get(id).copied().unwrap_or(0)
    }

    pub fn software_owned(&self, id: &str) -> u32 {
        self.software.get(id).copied().unwrap_or(0)
    }

    pub fn vault_level(&self, id: &str) -> u32 {
        self.vault_levels.get(id).copied().unwrap_or(0)
    }

    pub fn inventory_count(&self, id: &str) -> u32 {
        self.inventory.get(id).copied().unwrap_or(0)
    }

    /// XP needed to leave the current level, if the table goes that far.
    pub fn next_level_threshold(&self) -> Option<u64> {
        LEVEL_THRESHOLDS.get(self.level as usize).copied()
    }
}
