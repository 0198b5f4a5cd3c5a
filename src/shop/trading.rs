//! Buying and selling corporate shares.

use crate::core::constants::SHARES_PER_LEVEL;
use crate::core::error::{ActionError, ActionResult};
use crate::core::game_state::SimulationState;
use crate::core::log::LogKind;

/// Most shares of one corporation the player may hold at their level.
pub fn share_cap(level: u32) -> u32 {
    level.saturating_mul(SHARES_PER_LEVEL)
}

/// Buys shares at the current price, rounded up. Returns the cost.
pub fn buy_shares(state: &mut SimulationState, code: &str, amount: u32) -> ActionResult<u64> {
    if amount == 0 {
        return Err(ActionError::InvalidQuantity);
    }
    let cap = share_cap(state.level);
    let cash = state.cash;
    let corp = state
        .corporations
        .get_mut(code)
        .ok_or_else(|| ActionError::NotFound(code.to_string()))?;
    if corp.owned_shares.saturating_add(amount) > cap {
        return Err(ActionError::CapReached(format!("{} holdings", corp.name)));
    }
    let cost = (corp.price * amount as f64).ceil() as u64;
    if cash < cost {
        return Err(ActionError::InsufficientFunds {
            needed: cost,
            available: cash,
        });
    }
    corp.owned_shares += amount;
    let message = format!("Bought {} shares of {}.", amount, corp.name);
    state.cash -= cost;
    state.push_log("MARKET", message, LogKind::Info);
    Ok(cost)
}

/// Sells shares at the current price, rounded down. Returns the proceeds.
pub fn sell_shares(state: &mut SimulationState, code: &str, amount: u32) -> ActionResult<u64> {
    if amount == 0 {
        return Err(ActionError::InvalidQuantity);
    }
    let corp = state
        .corporations
        .get_mut(code)
        .ok_or_else(|| ActionError::NotFound(code.to_string()))?;
    if corp.owned_shares < amount {
        return Err(ActionError::InsufficientShares {
            owned: corp.owned_shares,
            requested: amount,
        });
    }
    let value = (corp.price * amount as f64).floor() as u64;
    corp.owned_shares -= amount;
    let message = format!("Sold {} shares of {}.", amount, corp.name);
    state.cash = state.cash.saturating_add(value);
    state.push_log("MARKET", message, LogKind::Info);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::rng::ScriptedRng;

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    #[test]
    fn test_buy_and_sell_round_prices() {
        let mut state = state();
        state.corporations.get_mut("VTEC").unwrap().price = 10.4;
        assert_eq!(buy_shares(&mut state, "VTEC", 2), Ok(21));
        assert_eq!(state.cash, 229);
        assert_eq!(sell_shares(&mut state, "VTEC", 2), Ok(20));
        assert_eq!(state.cash, 249);
        assert_eq!(state.corporations["VTEC"].owned_shares, 0);
    }

    #[test]
    fn test_share_cap_by_level() {
        let mut state = state();
        state.cash = 1_000_000;
        assert!(matches!(
            buy_shares(&mut state, "VTEC", 11),
            Err(ActionError::CapReached(_))
        ));
        assert!(buy_shares(&mut state, "VTEC", 10).is_ok());
        state.level = 2;
        assert!(buy_shares(&mut state, "VTEC", 10).is_ok());
    }

    #[test]
    fn test_rejections_leave_state() {
        let mut state = state();
        let before = state.clone();
        assert!(matches!(
            buy_shares(&mut state, "WTEK", 10),
            Err(ActionError::InsufficientFunds { .. })
        ));
        assert_eq!(
            sell_shares(&mut state, "WTEK", 1),
            Err(ActionError::InsufficientShares {
                owned: 0,
                requested: 1
            })
        );
        assert_eq!(
            buy_shares(&mut state, "NOPE", 1),
            Err(ActionError::NotFound("NOPE".to_string()))
        );
        assert_eq!(state, before);
    }
}
