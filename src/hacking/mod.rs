//! The hacking engine: targets, kill-chain phases, heat and payouts.

pub mod bonuses;
pub mod heat;
pub mod logic;
pub mod phases;
pub mod targets;

pub use bonuses::HackBonuses;
pub use logic::{process_hacking, HackTick};
pub use targets::{get_target, Target, TARGETS};
