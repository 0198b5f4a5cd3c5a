//! Pricing and purchases: hardware, software, consumables and vault rooms.
//!
//! Every purchase is all-or-nothing. Multi-unit orders price each unit in
//! sequence (the cost multiplier compounds per owned unit) and are rejected
//! outright if the whole order is unaffordable.

use super::catalog::{
    get_consumable, get_hardware, get_software, get_vault_room, HardwareDef, CONSUMABLES,
    HARDWARE, VAULT_UPGRADE_COST_MULTIPLIER,
};
use crate::character::SkillType;
use crate::core::constants::BARTER_DISCOUNT_FACTOR;
use crate::core::error::{ActionError, ActionResult};
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::log::LogKind;

/// Barter discount times the economy phase's price multiplier.
pub fn price_factor(state: &SimulationState) -> f64 {
    let barter = state.skills.get(SkillType::Barter) as f64;
    let discount = (1.0 - barter * BARTER_DISCOUNT_FACTOR).max(0.0);
    discount * state.economy.phase.price_multiplier()
}

/// Price of the next unit when `owned` are already held.
pub fn unit_cost(base: f64, multiplier: f64, owned: u32, factor: f64) -> u64 {
    (base * multiplier.powi(owned as i32) * factor).floor().max(0.0) as u64
}

/// Total price of `quantity` more units bought one after another.
///
/// Summing stops once the running total exceeds `budget`, so an unaffordable
/// order returns the first total that is already out of reach.
pub fn order_cost(
    base: f64,
    multiplier: f64,
    owned: u32,
    quantity: u32,
    factor: f64,
    budget: u64,
) -> u64 {
    let mut total = 0u64;
    for i in 0..quantity {
        total = total.saturating_add(unit_cost(base, multiplier, owned.saturating_add(i), factor));
        if total > budget {
            break;
        }
    }
    total
}

pub fn hardware_cost(state: &SimulationState, def: &HardwareDef) -> u64 {
    unit_cost(
        def.base_cost,
        def.cost_multiplier,
        state.hardware_owned(def.id),
        price_factor(state),
    )
}

fn charge(state: &mut SimulationState, cost: u64) -> ActionResult<()> {
    if state.cash < cost {
        return Err(ActionError::InsufficientFunds {
            needed: cost,
            available: state.cash,
        });
    }
    state.cash -= cost;
    Ok(())
}

fn check_quantity(quantity: u32) -> ActionResult<()> {
    if quantity == 0 {
        return Err(ActionError::InvalidQuantity);
    }
    Ok(())
}

/// Buys `quantity` units of hardware. Returns the total spent.
pub fn buy_hardware(state: &mut SimulationState, id: &str, quantity: u32) -> ActionResult<u64> {
    check_quantity(quantity)?;
    let def = get_hardware(id).ok_or_else(|| ActionError::NotFound(id.to_string()))?;
    let owned = state.hardware_owned(def.id);
    let factor = price_factor(state);
    let cost = order_cost(def.base_cost, def.cost_multiplier, owned, quantity, factor, state.cash);
    charge(state, cost)?;
    state.hardware.insert(def.id.to_string(), owned + quantity);
    state.push_log("SHOP", format!("Bought {}.", def.name), LogKind::Info);
    Ok(cost)
}

/// Compiles `quantity` copies of a software package. Returns the total spent.
pub fn buy_software(state: &mut SimulationState, id: &str, quantity: u32) -> ActionResult<u64> {
    check_quantity(quantity)?;
    let def = get_software(id).ok_or_else(|| ActionError::NotFound(id.to_string()))?;
    let owned = state.software_owned(def.id);
    let factor = price_factor(state);
    let cost = order_cost(def.base_cost, def.cost_multiplier, owned, quantity, factor, state.cash);
    charge(state, cost)?;
    state.software.insert(def.id.to_string(), owned + quantity);
    state.push_log("SHOP", format!("Compiled {}.", def.name), LogKind::Info);
    Ok(cost)
}

/// Buys consumables out of the shop's current stock into the inventory.
pub fn buy_consumable(state: &mut SimulationState, id: &str, quantity: u32) -> ActionResult<u64> {
    check_quantity(quantity)?;
    let def = get_consumable(id).ok_or_else(|| ActionError::NotFound(id.to_string()))?;
    let in_stock = state.shop_stock.get(def.id).copied().unwrap_or(0);
    if in_stock < quantity {
        return Err(ActionError::OutOfStock(def.name.to_string()));
    }
    let cost =
        unit_cost(def.base_cost, 1.0, 0, price_factor(state)).saturating_mul(quantity as u64);
    charge(state, cost)?;
    state.shop_stock.insert(def.id.to_string(), in_stock - quantity);
    *state.inventory.entry(def.id.to_string()).or_insert(0) += quantity;
    state.push_log("SHOP", format!("Purchased {}.", def.name), LogKind::Info);
    Ok(cost)
}

/// Raises a vault room one level. Returns the new level.
pub fn upgrade_vault(state: &mut SimulationState, id: &str) -> ActionResult<u32> {
    let room = get_vault_room(id).ok_or_else(|| ActionError::NotFound(id.to_string()))?;
    if state.level < room.unlock_level {
        return Err(ActionError::LevelTooLow {
            required: room.unlock_level,
        });
    }
    let current = state.vault_level(room.id);
    let cost = unit_cost(room.base_cost, VAULT_UPGRADE_COST_MULTIPLIER, current, 1.0);
    charge(state, cost)?;
    state.vault_levels.insert(room.id.to_string(), current + 1);
    state.push_log("VAULT", format!("Upgraded {}.", room.name), LogKind::Info);
    Ok(current + 1)
}

/// Buys one unit of the cheapest hardware the player can afford right now.
pub fn auto_buy_hardware(
    state: &mut SimulationState,
    events: &mut Vec<TickEvent>,
) -> Option<&'static HardwareDef> {
    let (def, cost) = HARDWARE
        .iter()
        .map(|def| (def, hardware_cost(state, def)))
        .filter(|(_, cost)| *cost <= state.cash)
        .min_by_key(|(_, cost)| *cost)?;
    state.cash -= cost;
    *state.hardware.entry(def.id.to_string()).or_insert(0) += 1;
    events.push(TickEvent::AutoBought {
        name: def.name,
        cost,
    });
    Some(def)
}

/// Refills the aid station for `day`. Returns false if it was already restocked that day.
pub fn restock(state: &mut SimulationState, day: u32) -> bool {
    if state.economy.last_restock_day == Some(day) {
        return false;
    }
    for def in CONSUMABLES.iter() {
        state.shop_stock.insert(def.id.to_string(), def.restock);
    }
    state.economy.last_restock_day = Some(day);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::rng::ScriptedRng;
    use crate::economy::EconomyPhase;

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    #[test]
    fn test_unit_cost_compounds() {
        assert_eq!(unit_cost(50.0, 1.5, 0, 1.0), 50);
        assert_eq!(unit_cost(50.0, 1.5, 2, 1.0), 112);
        assert_eq!(order_cost(50.0, 1.5, 0, 3, 1.0, u64::MAX), 50 + 75 + 112);
        // Stops at the first total past the budget
        assert_eq!(order_cost(50.0, 1.5, 0, 3, 1.0, 100), 50 + 75);
    }

    #[test]
    fn test_price_factor_barter_and_phase() {
        let mut state = state();
        assert_eq!(price_factor(&state), 1.0);
        state.skills.set(SkillType::Barter, 20);
        state.economy.phase = EconomyPhase::Boom;
        assert!((price_factor(&state) - 0.96).abs() < 1e-9);
    }

    #[test]
    fn test_buy_hardware_in_sequence() {
        let mut state = state();
        let spent = buy_hardware(&mut state, "u1", 2).unwrap();
        assert_eq!(spent, 125);
        assert_eq!(state.cash, 125);
        assert_eq!(state.hardware_owned("u1"), 2);
    }

    #[test]
    fn test_unaffordable_order_changes_nothing() {
        let mut state = state();
        let before = state.clone();
        let err = buy_hardware(&mut state, "u1", 4).unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientFunds {
                needed: 50 + 75 + 112 + 168,
                available: 250
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_huge_order_rejected_without_pricing_every_unit() {
        let mut state = state();
        let before = state.clone();
        let err = buy_hardware(&mut state, "u1", u32::MAX).unwrap_err();
        // u1, u1, u1, then the fourth unit pushes past 250
        assert_eq!(
            err,
            ActionError::InsufficientFunds {
                needed: 50 + 75 + 112 + 168,
                available: 250
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_id_and_zero_quantity() {
        let mut state = state();
        assert_eq!(
            buy_software(&mut state, "sw9", 1),
            Err(ActionError::NotFound("sw9".to_string()))
        );
        assert_eq!(buy_software(&mut state, "sw1", 0), Err(ActionError::InvalidQuantity));
    }

    #[test]
    fn test_buy_consumable_uses_stock() {
        let mut state = state();
        buy_consumable(&mut state, "c1", 3).unwrap();
        assert_eq!(state.cash, 250 - 60);
        assert_eq!(state.shop_stock["c1"], 7);
        assert_eq!(state.inventory_count("c1"), 3);
        assert_eq!(
            buy_consumable(&mut state, "c10", 2),
            Err(ActionError::OutOfStock("Mutagenic Serum".to_string()))
        );
    }

    #[test]
    fn test_vault_is_level_gated() {
        let mut state = state();
        assert_eq!(
            upgrade_vault(&mut state, "v8"),
            Err(ActionError::LevelTooLow { required: 12 })
        );
        assert_eq!(upgrade_vault(&mut state, "v1"), Ok(1));
        assert_eq!(state.cash, 150);
        assert_eq!(upgrade_vault(&mut state, "v1"), Ok(2));
        assert_eq!(state.cash, 0);
    }

    #[test]
    fn test_auto_buy_picks_cheapest_affordable() {
        let mut state = state();
        let mut events = Vec::new();
        state.cash = 60;
        let bought = auto_buy_hardware(&mut state, &mut events).map(|d| d.id);
        assert_eq!(bought, Some("u1"));
        assert_eq!(state.cash, 10);
        assert!(auto_buy_hardware(&mut state, &mut events).is_none());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_restock_once_per_day() {
        let mut state = state();
        state.shop_stock.insert("c3".to_string(), 0);
        assert!(!restock(&mut state, 102));
        assert!(restock(&mut state, 103));
        assert_eq!(state.shop_stock["c3"], 3);
    }
}
