//! Using items from the inventory.

use super::catalog::{get_consumable, ConsumableDef, ConsumableSpecial};
use crate::core::constants::{MAX_HEAT, MAX_PLAYER_RADIATION};
use crate::core::effects::ActiveEffect;
use crate::core::error::{ActionError, ActionResult};
use crate::core::events::{apply_tick_events, TickEvent};
use crate::core::game_state::SimulationState;
use crate::core::log::LogKind;
use crate::core::rng::RandomSource;
use crate::mutation;

/// Consumes one unit: instant heat and radiation changes, then any timed effect
/// or special action.
pub fn use_consumable<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    id: &str,
    rng: &mut R,
) -> ActionResult<&'static ConsumableDef> {
    let def = get_consumable(id).ok_or_else(|| ActionError::NotFound(id.to_string()))?;
    if state.is_locked_out() {
        return Err(ActionError::LockedOut);
    }
    let count = state.inventory_count(def.id);
    if count == 0 {
        return Err(ActionError::NotOwned(def.name.to_string()));
    }
    state.inventory.insert(def.id.to_string(), count - 1);

    state.heat = (state.heat + def.heat).clamp(0.0, MAX_HEAT);
    state.player_radiation = (state.player_radiation + def.rads).clamp(0.0, MAX_PLAYER_RADIATION);

    if def.duration_ms > 0 {
        state.active_effects.push(ActiveEffect {
            source_id: def.id.to_string(),
            name: def.name.to_string(),
            expires_at: state.virtual_time + def.duration_ms,
            modifiers: def.modifiers,
        });
    }

    state.push_log("ITEM", format!("Used {}.", def.name), LogKind::Success);

    if def.special == ConsumableSpecial::DrawMutation {
        let mut events: Vec<TickEvent> = Vec::new();
        mutation::draw_mutation(state, rng, &mut events);
        apply_tick_events(state, &events);
    }
    Ok(def)
}
