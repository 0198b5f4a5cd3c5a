use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeerStatus {
    Idle,
    Hacking,
    Locked,
}

/// Another hacker on the network, simulated in the background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Peer {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub heat: f64,
    pub status: PeerStatus,
    /// Current activity phrase shown in the network panel
    pub activity: String,
    pub needs_help: bool,
}

pub const PEER_HANDLES: [&str; 16] = [
    "NullPointer",
    "Zer0Cool",
    "AcidBurn",
    "CrashOverride",
    "LordNikon",
    "CerealKiller",
    "PhantomPhreak",
    "GhostByte",
    "RadRoach",
    "Deathclaw_99",
    "VaultBoy",
    "SynthHunter",
    "NukaHacker",
    "Mr.Gutsy",
    "BrotherhoodOps",
    "Courier6",
];

pub const PEER_ACTIVITIES: [&str; 10] = [
    "Scanning subnet 10.0.x.x",
    "Brute-forcing RobCo terminal",
    "Cracking Vault-Tec payroll",
    "Phishing General Atomics staff",
    "Mining CapCoin on stolen cycles",
    "Spoofing Enclave radio",
    "Injecting payload into Poseidon SCADA",
    "Downloading West-Tek schematics",
    "Laundering caps through Red Rocket",
    "Idling on a BBS",
];

pub const LOCKED_ACTIVITY: &str = "CRITICAL FAILURE - TRACE COMPLETE";
