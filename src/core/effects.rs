//! Stat modifiers shared by timed effects, mutations and installed content.

use serde::{Deserialize, Serialize};

/// Additive bonuses; multipliers are formed as `1 + Σ field`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Modifiers {
    pub speed: f64,
    pub heat_gen: f64,
    pub crit: f64,
    pub cash: f64,
    pub xp: f64,
    pub intelligence: i32,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        speed: 0.0,
        heat_gen: 0.0,
        crit: 0.0,
        cash: 0.0,
        xp: 0.0,
        intelligence: 0,
    };

    pub fn combine(&self, other: &Modifiers) -> Modifiers {
        Modifiers {
            speed: self.speed + other.speed,
            heat_gen: self.heat_gen + other.heat_gen,
            crit: self.crit + other.crit,
            cash: self.cash + other.cash,
            xp: self.xp + other.xp,
            intelligence: self.intelligence + other.intelligence,
        }
    }
}

/// A consumable's effect that lasts until `expires_at` (virtual ms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub source_id: String,
    pub name: String,
    pub expires_at: i64,
    pub modifiers: Modifiers,
}

impl ActiveEffect {
    pub fn is_active(&self, now: i64) -> bool {
        self.expires_at > now
    }
}

/// Drops effects that expired at or before `now`.
pub fn prune_expired(effects: &mut Vec<ActiveEffect>, now: i64) {
    effects.retain(|e| e.is_active(now));
}
