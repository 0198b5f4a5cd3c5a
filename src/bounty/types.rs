use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BountyKind {
    Scout,
    Extract,
    Disrupt,
}

impl BountyKind {
    pub fn name(&self) -> &'static str {
        match self {
            BountyKind::Scout => "SCOUT",
            BountyKind::Extract => "EXTRACT",
            BountyKind::Disrupt => "DISRUPT",
        }
    }
}

/// A fixer contract paid out on the next successful hack of `target_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bounty {
    pub id: String,
    pub target_id: String,
    pub description: String,
    pub reward: u64,
    /// Virtual ms; the bounty is gone at or after this instant
    pub expires_at: i64,
    pub kind: BountyKind,
}

impl Bounty {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}
