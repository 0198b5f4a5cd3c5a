//! The engine owns the single mutable state slot and the random source.
//!
//! Ticks and actions on an empty slot are no-ops. Every action runs against
//! a copy of the state and is committed only if it succeeds, so a rejected
//! action leaves no trace.

use super::error::{ActionError, ActionResult};
use super::events::TickEvent;
use super::game_state::SimulationState;
use super::rng::RandomSource;
use super::settings;
use super::tick::{tick, TickContext};
use crate::character::{get_archetype, spend_upgrade_point, UpgradeTarget};
use crate::console::{self, CommandOutcome, ConsoleCommand};
use crate::economy::ThreatLevel;
use crate::peers::aid_peer;
use crate::save::{export_state, import_state, SaveError};
use crate::shop;
use tracing::{debug, info, warn};

pub struct Engine<R: RandomSource> {
    state: Option<SimulationState>,
    rng: R,
}

impl<R: RandomSource> Engine<R> {
    /// An engine with no session loaded.
    pub fn new(rng: R) -> Self {
        Self { state: None, rng }
    }

    pub fn with_state(state: SimulationState, rng: R) -> Self {
        Self {
            state: Some(state),
            rng,
        }
    }

    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// Creates a fresh character, replacing any current session.
    pub fn start_new(&mut self, archetype_id: &str) -> ActionResult<&SimulationState> {
        let archetype = get_archetype(archetype_id)
            .ok_or_else(|| ActionError::NotFound(archetype_id.to_string()))?;
        let state = SimulationState::new(archetype, &mut self.rng);
        info!(archetype = archetype.id, "new session");
        Ok(&*self.state.insert(state))
    }

    pub fn load(&mut self, state: SimulationState) {
        self.state = Some(state);
    }

    /// Ends the session and hands back its final state.
    pub fn reset(&mut self) -> Option<SimulationState> {
        self.state.take()
    }

    /// Advances one tick. Returns the tick's events (none without a session).
    pub fn tick(&mut self, ctx: &TickContext) -> Vec<TickEvent> {
        let Some(prev) = self.state.as_ref() else {
            return Vec::new();
        };
        let outcome = tick(prev, ctx, &mut self.rng);
        self.state = Some(outcome.state);
        outcome.events
    }

    /// Runs `action` on a copy of the state and commits it only on success.
    pub fn apply<T>(
        &mut self,
        name: &str,
        action: impl FnOnce(&mut SimulationState, &mut R) -> ActionResult<T>,
    ) -> ActionResult<T> {
        let current = self.state.as_ref().ok_or(ActionError::NoState)?;
        let mut draft = current.clone();
        match action(&mut draft, &mut self.rng) {
            Ok(value) => {
                self.state = Some(draft);
                debug!(action = name, "applied");
                Ok(value)
            }
            Err(e) => {
                warn!(action = name, error = %e, "rejected");
                Err(e)
            }
        }
    }

    // ── Shop ────────────────────────────────────────────────────

    pub fn buy_hardware(&mut self, id: &str, quantity: u32) -> ActionResult<u64> {
        self.apply("buy_hardware", |s, _| shop::buy_hardware(s, id, quantity))
    }

    pub fn buy_software(&mut self, id: &str, quantity: u32) -> ActionResult<u64> {
        self.apply("buy_software", |s, _| shop::buy_software(s, id, quantity))
    }

    pub fn buy_consumable(&mut self, id: &str, quantity: u32) -> ActionResult<u64> {
        self.apply("buy_consumable", |s, _| shop::buy_consumable(s, id, quantity))
    }

    /// Uses one consumable from the inventory. Returns its display name.
    pub fn use_consumable(&mut self, id: &str) -> ActionResult<&'static str> {
        self.apply("use_consumable", |s, rng| {
            shop::use_consumable(s, id, rng).map(|def| def.name)
        })
    }

    pub fn upgrade_vault(&mut self, id: &str) -> ActionResult<u32> {
        self.apply("upgrade_vault", |s, _| shop::upgrade_vault(s, id))
    }

    pub fn buy_shares(&mut self, code: &str, amount: u32) -> ActionResult<u64> {
        self.apply("buy_shares", |s, _| shop::buy_shares(s, code, amount))
    }

    pub fn sell_shares(&mut self, code: &str, amount: u32) -> ActionResult<u64> {
        self.apply("sell_shares", |s, _| shop::sell_shares(s, code, amount))
    }

    // ── Character ───────────────────────────────────────────────

    pub fn spend_upgrade_point(&mut self, target: UpgradeTarget) -> ActionResult<u32> {
        self.apply("spend_upgrade_point", |s, _| spend_upgrade_point(s, target))
    }

    pub fn aid_peer(&mut self, peer_id: &str) -> ActionResult<u64> {
        self.apply("aid_peer", |s, _| aid_peer(s, peer_id))
    }

    // ── Settings ────────────────────────────────────────────────

    pub fn set_speed(&mut self, speed: u32) -> ActionResult<()> {
        self.apply("set_speed", |s, _| settings::set_speed(s, speed))
    }

    pub fn toggle_auto_hack(&mut self) -> ActionResult<bool> {
        self.apply("toggle_auto_hack", |s, _| Ok(settings::toggle_auto_hack(s)))
    }

    pub fn toggle_auto_buy(&mut self) -> ActionResult<bool> {
        self.apply("toggle_auto_buy", |s, _| Ok(settings::toggle_auto_buy(s)))
    }

    pub fn set_threat_level(&mut self, level: ThreatLevel) -> ActionResult<()> {
        self.apply("set_threat_level", |s, _| {
            settings::set_threat_level(s, level);
            Ok(())
        })
    }

    pub fn set_lifestyle(&mut self, level: u8) -> ActionResult<()> {
        self.apply("set_lifestyle", |s, _| settings::set_lifestyle(s, level))
    }

    pub fn rename(&mut self, name: &str) -> ActionResult<()> {
        self.apply("rename", |s, _| settings::rename(s, name))
    }

    // ── Console ─────────────────────────────────────────────────

    /// Runs one line of console input. Without a session only `exit` does anything.
    pub fn command(&mut self, line: &str) -> CommandOutcome {
        let command = ConsoleCommand::parse(line);
        match self.state.as_mut() {
            Some(state) => console::execute(state, &command),
            None if command == ConsoleCommand::Exit => CommandOutcome::Exit,
            None => CommandOutcome::Continue,
        }
    }

    // ── Persistence ─────────────────────────────────────────────

    pub fn export(&self) -> Result<String, SaveError> {
        let state = self.state.as_ref().ok_or(SaveError::NoState)?;
        export_state(state)
    }

    /// Replaces the session with an imported one. On error nothing changes.
    pub fn import(&mut self, text: &str) -> Result<(), SaveError> {
        let state = import_state(text)?;
        info!(archetype = %state.archetype, level = state.level, "imported session");
        self.state = Some(state);
        Ok(())
    }
}
