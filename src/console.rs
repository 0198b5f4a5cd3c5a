//! Terminal command vocabulary.
//!
//! Commands never change the simulation beyond writing log lines (and
//! `clear`, which empties the log). Parsing is separate from execution so the
//! driver can react to [`CommandOutcome::Exit`] without touching state.

use crate::achievements::ALL_ACHIEVEMENTS;
use crate::character::get_archetype;
use crate::core::clock::format_datetime;
use crate::core::game_state::SimulationState;
use crate::core::log::LogKind;
use crate::economy::job_title;

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Status,
    Clear,
    WhoAmI,
    Target,
    Upgrade,
    Help,
    Exit,
    /// Blank line
    Empty,
    Unknown(String),
}

/// What the driver should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

pub const COMMANDS: [(&str, &str); 7] = [
    ("status", "Vital signs and finances"),
    ("clear", "Clear the terminal"),
    ("whoami", "Operator identity"),
    ("target", "Current intrusion target"),
    ("upgrade", "Unspent upgrade points"),
    ("help", "List commands"),
    ("exit", "Save and disconnect"),
];

impl ConsoleCommand {
    pub fn parse(line: &str) -> ConsoleCommand {
        let word = line.trim();
        match word.to_ascii_lowercase().as_str() {
            "" => ConsoleCommand::Empty,
            "status" => ConsoleCommand::Status,
            "clear" | "cls" => ConsoleCommand::Clear,
            "whoami" => ConsoleCommand::WhoAmI,
            "target" => ConsoleCommand::Target,
            "upgrade" => ConsoleCommand::Upgrade,
            "help" | "?" => ConsoleCommand::Help,
            "exit" | "quit" => ConsoleCommand::Exit,
            _ => ConsoleCommand::Unknown(word.to_string()),
        }
    }
}

fn reply(state: &mut SimulationState, message: String) {
    state.push_log("CMD", message, LogKind::Info);
}

/// Runs a command against the state.
pub fn execute(state: &mut SimulationState, command: &ConsoleCommand) -> CommandOutcome {
    match command {
        ConsoleCommand::Empty => {}
        ConsoleCommand::Status => {
            let lockout = if state.is_locked_out() { " [LOCKED OUT]" } else { "" };
            let message = format!(
                "{} | {} | Heat {:.0}% | Rads {:.0} | {} Caps | Achievements {}/{}{}",
                format_datetime(state.virtual_time),
                state.activity.name(),
                state.heat,
                state.player_radiation,
                state.cash,
                state.achievements.unlocked_count(),
                ALL_ACHIEVEMENTS.len(),
                lockout
            );
            reply(state, message);
        }
        ConsoleCommand::Clear => state.log.clear(),
        ConsoleCommand::WhoAmI => {
            let title = get_archetype(&state.archetype).map_or("Unknown", |a| a.title);
            let message = format!(
                "{} // {} // {} (grade {}) // Level {}",
                state.player_name,
                title,
                job_title(state.economy.job_grade),
                state.economy.job_grade,
                state.level
            );
            reply(state, message);
        }
        ConsoleCommand::Target => {
            let target = state.target();
            let message = format!(
                "{} [{}] {} // Difficulty {} // {:.1}% breached",
                target.company,
                target.id,
                target.system,
                target.difficulty,
                state.hacking_progress.max(0.0)
            );
            reply(state, message);
        }
        ConsoleCommand::Upgrade => {
            let message = match state.next_level_threshold() {
                Some(next) => format!(
                    "{} upgrade points, {} perk points. XP {}/{}.",
                    state.upgrade_points, state.perk_points, state.experience, next
                ),
                None => format!(
                    "{} upgrade points, {} perk points. Maximum level.",
                    state.upgrade_points, state.perk_points
                ),
            };
            reply(state, message);
        }
        ConsoleCommand::Help => {
            for (name, description) in COMMANDS {
                reply(state, format!("{:<8} {}", name, description));
            }
        }
        ConsoleCommand::Exit => {
            state.push_log("SYS", "Disconnecting.".to_string(), LogKind::System);
            return CommandOutcome::Exit;
        }
        ConsoleCommand::Unknown(word) => {
            state.push_log(
                "CMD",
                format!("Command not recognized: {}", word),
                LogKind::Warning,
            );
        }
    }
    CommandOutcome::Continue
}
