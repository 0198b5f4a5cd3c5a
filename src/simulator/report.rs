//! Simulation report generation.

use super::config::SimConfig;
use crate::achievements::get_achievement_def;
use crate::core::clock::format_datetime;
use crate::core::game_state::SimulationState;
use crate::economy::job_title;
use crate::mutation::get_mutation;
use serde::Serialize;

/// Counters accumulated from tick events during a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub hacks_completed: u64,
    pub critical_hacks: u64,
    pub hack_cash: u64,
    pub phase_failures: u64,
    pub critical_failures: u64,
    pub lockouts: u64,
    pub ticks_locked_out: u64,
    pub peak_heat: f64,
    pub wages: u64,
    pub expenses: u64,
    pub evictions: u64,
    pub promotions: u64,
    pub demotions: u64,
    pub bounties_completed: u64,
    pub bounties_expired: u64,
    pub bounty_cash: u64,
    pub hardware_bought: u64,
    pub hardware_spend: u64,
    /// (level reached, tick)
    pub level_ups: Vec<(u32, u64)>,
}

/// Results of one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub seed: Option<u64>,
    pub archetype: String,
    pub ticks: u64,
    pub speed: u32,
    pub final_time: String,
    pub final_level: u32,
    pub final_xp: u64,
    pub final_cash: u64,
    pub job: String,
    pub lifestyle: String,
    pub heat: f64,
    pub player_radiation: f64,
    pub global_radiation: f64,
    pub mutations: Vec<String>,
    pub achievements: Vec<String>,
    pub peers: usize,
    pub stats: RunStats,
}

impl SimReport {
    pub fn from_run(config: &SimConfig, stats: RunStats, state: &SimulationState) -> Self {
        Self {
            seed: config.seed,
            archetype: state.archetype.clone(),
            ticks: config.ticks,
            speed: config.speed,
            final_time: format_datetime(state.virtual_time),
            final_level: state.level,
            final_xp: state.experience,
            final_cash: state.cash,
            job: job_title(state.economy.job_grade).to_string(),
            lifestyle: state.lifestyle().name.to_string(),
            heat: state.heat,
            player_radiation: state.player_radiation,
            global_radiation: state.global_radiation,
            mutations: state
                .mutations
                .iter()
                .filter_map(|id| get_mutation(id))
                .map(|m| m.name.to_string())
                .collect(),
            achievements: state
                .achievements
                .unlocked
                .keys()
                .filter_map(|id| get_achievement_def(*id))
                .map(|def| def.name.to_string())
                .collect(),
            peers: state.peers.len(),
            stats,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let s = &self.stats;
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    WIREFRAME SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── RUN ──────────────────────────────────────────────────────────\n");
        match self.seed {
            Some(seed) => report.push_str(&format!("  Seed:          {}\n", seed)),
            None => report.push_str("  Seed:          (entropy)\n"),
        }
        report.push_str(&format!("  Archetype:     {}\n", self.archetype));
        report.push_str(&format!("  Ticks:         {} at {}x\n", self.ticks, self.speed));
        report.push_str(&format!("  Ended at:      {}\n\n", self.final_time));

        report.push_str("── CHARACTER ────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Level:         {} ({} XP)\n", self.final_level, self.final_xp));
        report.push_str(&format!("  Caps:          {}\n", self.final_cash));
        report.push_str(&format!("  Job:           {}\n", self.job));
        report.push_str(&format!("  Lifestyle:     {}\n", self.lifestyle));
        report.push_str(&format!(
            "  Radiation:     {:.1} (global {:.1})\n",
            self.player_radiation, self.global_radiation
        ));
        if !self.mutations.is_empty() {
            report.push_str(&format!("  Mutations:     {}\n", self.mutations.join(", ")));
        }
        if !self.achievements.is_empty() {
            report.push_str(&format!("  Achievements:  {}\n", self.achievements.join(", ")));
        }
        report.push('\n');

        report.push_str("── HACKING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Hacks:         {} ({} critical)\n",
            s.hacks_completed, s.critical_hacks
        ));
        report.push_str(&format!("  Hack Caps:     {}\n", s.hack_cash));
        report.push_str(&format!(
            "  Phase Fails:   {} ({} critical)\n",
            s.phase_failures, s.critical_failures
        ));
        report.push_str(&format!(
            "  Lockouts:      {} ({} ticks locked)\n",
            s.lockouts, s.ticks_locked_out
        ));
        report.push_str(&format!("  Peak Heat:     {:.1}%\n\n", s.peak_heat));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Wages:         {}\n", s.wages));
        report.push_str(&format!("  Expenses:      {}\n", s.expenses));
        report.push_str(&format!("  Evictions:     {}\n", s.evictions));
        report.push_str(&format!(
            "  Reviews:       +{} / -{}\n",
            s.promotions, s.demotions
        ));
        report.push_str(&format!(
            "  Bounties:      {} done, {} expired, {} Caps\n",
            s.bounties_completed, s.bounties_expired, s.bounty_cash
        ));
        report.push_str(&format!(
            "  Hardware:      {} units, {} Caps\n\n",
            s.hardware_bought, s.hardware_spend
        ));

        if !s.level_ups.is_empty() {
            report.push_str("── LEVEL PACING ─────────────────────────────────────────────────\n");
            for (level, tick) in &s.level_ups {
                report.push_str(&format!("  Level {:>2} at tick {}\n", level, tick));
            }
            report.push('\n');
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
