//! Events produced by a tick and their terminal-log rendering.

use super::clock::{self, Activity};
use super::game_state::SimulationState;
use super::log::LogKind;
use crate::achievements::{get_achievement_def, AchievementId};
use crate::economy::{EconomyPhase, ReviewOutcome};

/// A single thing that happened during a tick.
///
/// Subsystems push these while they run; the reducer writes the matching
/// log lines once the tick's state is final.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Clock ───────────────────────────────────────────────────
    ActivityChanged { from: Activity, to: Activity },

    // ── Economy ─────────────────────────────────────────────────
    ExpensesPaid { amount: u64, lifestyle: &'static str },
    /// Daily expenses exceeded cash; lifestyle dropped to the lowest tier.
    Evicted,
    ShopRestocked,
    CareerReview { outcome: ReviewOutcome, grade: u32 },
    EconomyShift { phase: EconomyPhase },
    WagePaid { amount: u64 },

    // ── Hacking ─────────────────────────────────────────────────
    AutoBought { name: &'static str, cost: u64 },
    PhaseEntered { company: &'static str, phase: &'static str },
    PhaseFailed { reason: &'static str, heat: f64, critical: bool },
    TraceDetected { corporation: &'static str },
    /// A corporation's trace completed and it seized part of the player's cash.
    AssetsFrozen { corporation: &'static str, seized: u64 },
    TechniqueObserved { technique: &'static str },
    HackSucceeded { company: &'static str, cash: u64, xp: u64, critical: bool },
    LeveledUp { level: u32, points_granted: bool },
    ContentInstalled { name: &'static str },

    // ── Heat ────────────────────────────────────────────────────
    LockoutStarted { until: i64 },
    LockoutEnded,

    // ── Bounties ────────────────────────────────────────────────
    BountyCompleted { description: String, reward: u64 },
    BountiesExpired { count: usize },
    BountyPosted { description: String },

    // ── Radiation ───────────────────────────────────────────────
    MutationGained { name: &'static str },

    // ── Achievements ────────────────────────────────────────────
    AchievementUnlocked { id: AchievementId },

    // ── Peers ───────────────────────────────────────────────────
    PeerJoined { name: String },
    PeerNeedsHelp { name: String },
    PeerLocked { name: String },
}

impl TickEvent {
    /// Tag, message and kind of the log line for this event, if it has one.
    pub fn log_line(&self) -> Option<(&'static str, String, LogKind)> {
        let line = match self {
            TickEvent::ActivityChanged { from, to } => {
                let (message, kind) = clock::transition_message(*from, *to)?;
                ("SYSTEM", message.to_string(), kind)
            }
            TickEvent::ExpensesPaid { amount, lifestyle } => (
                "FINANCE",
                format!("Daily Expenses Paid: -{} Caps ({})", amount, lifestyle),
                LogKind::Info,
            ),
            TickEvent::Evicted => (
                "FINANCE",
                "EVICTION NOTICE. Downgraded to homeless status.".to_string(),
                LogKind::Error,
            ),
            TickEvent::ShopRestocked => (
                "SHOP",
                "Supply caravan arrived. Aid station restocked.".to_string(),
                LogKind::Info,
            ),
            TickEvent::CareerReview { outcome, grade } => match outcome {
                ReviewOutcome::Promoted => (
                    "HR_DEPT",
                    format!(
                        "ANNUAL REVIEW: Performance Exceeded Expectations. PROMOTED to Grade {}. Wage Increased.",
                        grade
                    ),
                    LogKind::Success,
                ),
                ReviewOutcome::Demoted => (
                    "HR_DEPT",
                    format!(
                        "ANNUAL REVIEW: Performance Sub-Optimal. DEMOTED to Grade {}. Wage Reduced.",
                        grade
                    ),
                    LogKind::Error,
                ),
                ReviewOutcome::Maintained => (
                    "HR_DEPT",
                    format!(
                        "ANNUAL REVIEW: Performance Meets Expectations. Grade {} maintained.",
                        grade
                    ),
                    LogKind::Info,
                ),
            },
            TickEvent::EconomyShift { phase } => (
                "NEWS",
                format!(
                    "MARKET SHIFT: Analysts declare economy entered {} phase.",
                    phase.name()
                ),
                match phase {
                    EconomyPhase::Boom => LogKind::Success,
                    EconomyPhase::Recession => LogKind::Error,
                    EconomyPhase::Stable => LogKind::Info,
                },
            ),
            TickEvent::WagePaid { .. } => return None,
            TickEvent::AutoBought { name, .. } => {
                ("SHOP", format!("Auto-Bought {}.", name), LogKind::Info)
            }
            TickEvent::PhaseEntered { company, phase } => (
                "HACK",
                format!("[{}] Phase: {}...", company, phase),
                LogKind::Phase,
            ),
            TickEvent::PhaseFailed {
                reason,
                heat,
                critical,
            } => {
                let prefix = if *critical { "CRITICAL " } else { "" };
                (
                    "FAIL",
                    format!("{}Error: {}. Heat +{}.", prefix, reason, heat.floor() as u64),
                    LogKind::Warning,
                )
            }
            TickEvent::TechniqueObserved { .. } => return None,
            TickEvent::HackSucceeded {
                company,
                cash,
                critical,
                ..
            } => {
                let message = if *critical {
                    format!("CRITICAL HIT. Access Granted: {}. +{} Caps.", company, cash)
                } else {
                    format!("Access Granted: {}. +{} Caps.", company, cash)
                };
                ("ROOT", message, LogKind::Success)
            }
            TickEvent::LeveledUp {
                level,
                points_granted,
            } => {
                let message = if *points_granted {
                    format!("Level {}. +1 Upgrade Point.", level)
                } else {
                    format!("Level {}.", level)
                };
                ("LVL", message, LogKind::Warning)
            }
            TickEvent::ContentInstalled { name } => {
                ("SYS", format!("Installed {}.", name), LogKind::System)
            }
            TickEvent::LockoutStarted { .. } => (
                "SYS",
                "CRITICAL HEAT. LOCKOUT.".to_string(),
                LogKind::Error,
            ),
            TickEvent::LockoutEnded => (
                "SYS",
                "HEAT DISSIPATED. Systems cooled.".to_string(),
                LogKind::Success,
            ),
            TickEvent::BountyCompleted {
                description,
                reward,
            } => (
                "CONTRACT",
                format!("Bounty Complete: {}. Reward: {}", description, reward),
                LogKind::Bounty,
            ),
            TickEvent::BountiesExpired { count } => {
                let message = if *count == 1 {
                    "A bounty contract has expired.".to_string()
                } else {
                    format!("{} bounty contracts have expired.", count)
                };
                ("INFO", message, LogKind::Info)
            }
            TickEvent::BountyPosted { description } => (
                "NET",
                format!("New Bounty Contract available: {}", description),
                LogKind::Bounty,
            ),
            TickEvent::MutationGained { name } => (
                "BIO_HAZARD",
                format!("DNA Corrupted. Mutation Gained: {}", name),
                LogKind::Mutation,
            ),
            TickEvent::AchievementUnlocked { id } => {
                let name = get_achievement_def(*id).map(|d| d.name).unwrap_or("???");
                ("ACHIEVEMENT", format!("Unlocked: {}", name), LogKind::Success)
            }
            TickEvent::TraceDetected { corporation } => (
                "WARN",
                format!("Tracing signal detected from {}...", corporation),
                LogKind::Warning,
            ),
            TickEvent::AssetsFrozen {
                corporation,
                seized,
            } => (
                "ALERT",
                format!(
                    "TRACE COMPLETE: {} assets frozen! Lost {} Caps.",
                    corporation, seized
                ),
                LogKind::Error,
            ),
            TickEvent::PeerJoined { name } => (
                "NET",
                format!("{} connected to the network.", name),
                LogKind::Network,
            ),
            TickEvent::PeerNeedsHelp { name } => (
                "NET",
                format!("{} is running hot and requesting aid.", name),
                LogKind::Warning,
            ),
            TickEvent::PeerLocked { name } => (
                "NET",
                format!("{} has been traced. Connection lost.", name),
                LogKind::Network,
            ),
        };
        Some(line)
    }
}

/// Writes the log lines for `events` into the state's terminal log, in order.
pub fn apply_tick_events(state: &mut SimulationState, events: &[TickEvent]) {
    for event in events {
        if let Some((tag, message, kind)) = event.log_line() {
            state.push_log(tag, message, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_events_have_no_log_line() {
        assert!(TickEvent::WagePaid { amount: 10 }.log_line().is_none());
        assert!(TickEvent::TechniqueObserved {
            technique: "T1566 Phishing"
        }
        .log_line()
        .is_none());
        assert!(TickEvent::ActivityChanged {
            from: Activity::Lockout,
            to: Activity::Hacking
        }
        .log_line()
        .is_none());
    }

    #[test]
    fn test_expense_line_format() {
        let (tag, message, kind) = TickEvent::ExpensesPaid {
            amount: 45,
            lifestyle: "Tenement",
        }
        .log_line()
        .unwrap();
        assert_eq!(tag, "FINANCE");
        assert_eq!(message, "Daily Expenses Paid: -45 Caps (Tenement)");
        assert_eq!(kind, LogKind::Info);
    }

    #[test]
    fn test_failure_line_floors_heat() {
        let (_, message, _) = TickEvent::PhaseFailed {
            reason: "Honeypot Triggered",
            heat: 7.5,
            critical: false,
        }
        .log_line()
        .unwrap();
        assert_eq!(message, "Error: Honeypot Triggered. Heat +7.");
    }

    #[test]
    fn test_achievement_line_uses_catalog_name() {
        let (_, message, _) = TickEvent::AchievementUnlocked {
            id: AchievementId::GhostInTheShell,
        }
        .log_line()
        .unwrap();
        assert_eq!(message, "Unlocked: Ghost in the Shell");
    }
}
