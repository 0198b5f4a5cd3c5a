use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EconomyPhase {
    Recession,
    Stable,
    Boom,
}

impl EconomyPhase {
    pub const ALL: [EconomyPhase; 3] = [
        EconomyPhase::Recession,
        EconomyPhase::Stable,
        EconomyPhase::Boom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EconomyPhase::Recession => "RECESSION",
            EconomyPhase::Stable => "STABLE",
            EconomyPhase::Boom => "BOOM",
        }
    }

    pub fn wage_multiplier(&self) -> f64 {
        match self {
            EconomyPhase::Boom => 1.5,
            EconomyPhase::Recession => 0.8,
            EconomyPhase::Stable => 1.0,
        }
    }

    /// Multiplier applied to every shop price.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            EconomyPhase::Boom => 1.2,
            EconomyPhase::Recession => 0.9,
            EconomyPhase::Stable => 1.0,
        }
    }

    /// Hourly drift added to every stock price change.
    pub fn market_bias(&self) -> f64 {
        match self {
            EconomyPhase::Boom => 0.02,
            EconomyPhase::Recession => -0.02,
            EconomyPhase::Stable => 0.0,
        }
    }
}

/// Result of the annual career review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Promoted,
    Demoted,
    Maintained,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatConfig {
    pub label: &'static str,
    /// Reward multiplier for cash and XP
    pub multiplier: f64,
    /// Multiplier for heat gained on failed phases
    pub heat_mod: f64,
    /// Corporate trace left by each failed phase
    pub trace_mod: f64,
    pub description: &'static str,
}

/// Player-selected risk appetite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThreatLevel {
    Safe,
    Cautious,
    #[default]
    Standard,
    Risky,
    Dangerous,
    Suicidal,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 6] = [
        ThreatLevel::Safe,
        ThreatLevel::Cautious,
        ThreatLevel::Standard,
        ThreatLevel::Risky,
        ThreatLevel::Dangerous,
        ThreatLevel::Suicidal,
    ];

    pub fn config(&self) -> ThreatConfig {
        match self {
            ThreatLevel::Safe => ThreatConfig {
                label: "SAFE",
                multiplier: 0.5,
                heat_mod: 0.1,
                trace_mod: 0.0,
                description: "Low Risk. Low Reward. Undetectable.",
            },
            ThreatLevel::Cautious => ThreatConfig {
                label: "CAUTIOUS",
                multiplier: 0.8,
                heat_mod: 0.5,
                trace_mod: 0.0,
                description: "Standard protocols. Minimal tracing.",
            },
            ThreatLevel::Standard => ThreatConfig {
                label: "STANDARD",
                multiplier: 1.0,
                heat_mod: 1.0,
                trace_mod: 1.0,
                description: "Balanced approach.",
            },
            ThreatLevel::Risky => ThreatConfig {
                label: "RISKY",
                multiplier: 1.5,
                heat_mod: 1.5,
                trace_mod: 2.0,
                description: "Aggressive probing. Trace buildup probable.",
            },
            ThreatLevel::Dangerous => ThreatConfig {
                label: "DANGEROUS",
                multiplier: 2.5,
                heat_mod: 2.5,
                trace_mod: 3.0,
                description: "Brute force. High rewards. Rapid trace.",
            },
            ThreatLevel::Suicidal => ThreatConfig {
                label: "SUICIDAL",
                multiplier: 5.0,
                heat_mod: 4.0,
                trace_mod: 4.0,
                description: "Burn zero-days. Win big or lose everything.",
            },
        }
    }

    /// 1-based level as shown in the settings panel.
    pub fn from_level(level: u8) -> Option<ThreatLevel> {
        Self::ALL.get((level as usize).checked_sub(1)?).copied()
    }

    pub fn parse(input: &str) -> Option<ThreatLevel> {
        let trimmed = input.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Self::from_level(level);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.config().label.eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifestyleTier {
    pub level: u8,
    pub name: &'static str,
    pub daily_cost: u64,
    pub xp_mult: f64,
}

pub const LIFESTYLE_TIERS: [LifestyleTier; 6] = [
    LifestyleTier { level: 1, name: "Homeless", daily_cost: 0, xp_mult: 0.9 },
    LifestyleTier { level: 2, name: "Tenement", daily_cost: 45, xp_mult: 1.0 },
    LifestyleTier { level: 3, name: "Suburban", daily_cost: 120, xp_mult: 1.1 },
    LifestyleTier { level: 4, name: "Uptown", daily_cost: 300, xp_mult: 1.2 },
    LifestyleTier { level: 5, name: "Penthouse", daily_cost: 750, xp_mult: 1.35 },
    LifestyleTier { level: 6, name: "Executive Vault", daily_cost: 2000, xp_mult: 1.5 },
];

/// Looks up a lifestyle tier, falling back to the lowest one for unknown levels.
pub fn lifestyle_tier(level: u8) -> &'static LifestyleTier {
    LIFESTYLE_TIERS
        .iter()
        .find(|t| t.level == level)
        .unwrap_or(&LIFESTYLE_TIERS[0])
}

pub const CORPORATE_LADDER: [&str; 10] = [
    "Intern",
    "Junior Associate",
    "Associate",
    "Senior Associate",
    "Supervisor",
    "Department Manager",
    "Regional Manager",
    "Director",
    "Vice President",
    "Chief Executive",
];

pub fn job_title(grade: u32) -> &'static str {
    let idx = (grade.max(1) as usize - 1).min(CORPORATE_LADDER.len() - 1);
    CORPORATE_LADDER[idx]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomyState {
    pub job_grade: u32,
    pub phase: EconomyPhase,
    pub last_review_year: i32,
    pub lifestyle_level: u8,
    /// Ordinal day of the last processed daily tick
    pub last_expense_day: Option<u32>,
    pub last_job_pay: i64,
    pub last_market_update: i64,
    pub last_restock_day: Option<u32>,
}

impl EconomyState {
    pub fn new(start_year: i32, start_day: u32, start_time: i64, lifestyle_level: u8) -> Self {
        Self {
            job_grade: 1,
            phase: EconomyPhase::Stable,
            last_review_year: start_year,
            lifestyle_level,
            last_expense_day: Some(start_day),
            last_job_pay: start_time,
            last_market_update: start_time,
            last_restock_day: None,
        }
    }

    pub fn lifestyle(&self) -> &'static LifestyleTier {
        lifestyle_tier(self.lifestyle_level)
    }
}

/// Listed corporation with market and intrusion stats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Corporation {
    pub name: String,
    pub price: f64,
    /// Last hourly change as a fraction, e.g. 0.03 for +3%
    pub trend: f64,
    pub owned_shares: u32,
    pub reputation: u32,
    pub trace_level: f64,
}
