//! Daily, hourly and annual economy processing.

use super::types::{EconomyPhase, ReviewOutcome};
use crate::character::SpecialType;
use crate::core::clock::Calendar;
use crate::core::constants::*;
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::rng::{roll_exploding_3d6, RandomSource};
use crate::shop;

/// Runs the once-per-day work when the day of year has changed.
///
/// Deducts living expenses (evicting to the lowest tier on a shortfall),
/// drifts global radiation upward and restocks the shop.
/// Returns true if a new day was processed.
pub fn process_daily<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    today: &Calendar,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> bool {
    if state.economy.last_expense_day == Some(today.day_of_year) {
        return false;
    }
    state.economy.last_expense_day = Some(today.day_of_year);

    pay_daily_expenses(state, events);

    if rng.chance(DAILY_RADIATION_DRIFT_CHANCE) {
        state.global_radiation =
            (state.global_radiation + DAILY_RADIATION_DRIFT).min(MAX_GLOBAL_RADIATION);
    }

    if shop::restock(state, today.day_of_year) {
        events.push(TickEvent::ShopRestocked);
    }
    true
}

/// Charges the current lifestyle's daily cost, never driving cash below zero.
pub fn pay_daily_expenses(state: &mut SimulationState, events: &mut Vec<TickEvent>) {
    let lifestyle = state.lifestyle();
    if lifestyle.daily_cost == 0 {
        return;
    }

    let paid = lifestyle.daily_cost.min(state.cash);
    state.cash -= paid;
    events.push(TickEvent::ExpensesPaid {
        amount: paid,
        lifestyle: lifestyle.name,
    });

    if paid < lifestyle.daily_cost && state.economy.lifestyle_level > 1 {
        state.economy.lifestyle_level = 1;
        events.push(TickEvent::Evicted);
    }
}

/// Runs the annual career review once the calendar year moves past the last one.
pub fn process_annual_review<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    today: &Calendar,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Option<ReviewOutcome> {
    if today.year <= state.economy.last_review_year {
        return None;
    }
    state.economy.last_review_year = today.year;

    let performance = roll_exploding_3d6(rng).total as f64
        + state.special.get(SpecialType::Intelligence) as f64
        + state.special.get(SpecialType::Charisma) as f64 / 2.0;
    let required = BASE_PERFORMANCE + PERFORMANCE_PER_GRADE * state.economy.job_grade as f64;

    let grade = state.economy.job_grade;
    let outcome = if performance >= required && grade < MAX_JOB_GRADE {
        state.economy.job_grade += 1;
        ReviewOutcome::Promoted
    } else if performance < DEMOTION_THRESHOLD && grade > 1 {
        state.economy.job_grade -= 1;
        ReviewOutcome::Demoted
    } else {
        ReviewOutcome::Maintained
    };
    events.push(TickEvent::CareerReview {
        outcome,
        grade: state.economy.job_grade,
    });

    if rng.chance(ECONOMY_SHIFT_CHANCE) {
        let phase = EconomyPhase::ALL[rng.index(EconomyPhase::ALL.len())];
        if phase != state.economy.phase {
            state.economy.phase = phase;
            events.push(TickEvent::EconomyShift { phase });
        }
    }
    Some(outcome)
}

/// Hourly stock drift and trace cooldown. Returns true if the market moved.
pub fn update_market<R: RandomSource + ?Sized>(state: &mut SimulationState, rng: &mut R) -> bool {
    if state.virtual_time - state.economy.last_market_update < MS_PER_HOUR {
        return false;
    }
    state.economy.last_market_update = state.virtual_time;

    let bias = state.economy.phase.market_bias();
    for corp in state.corporations.values_mut() {
        let flux = (rng.next_f64() - 0.5) * MARKET_FLUX_RANGE;
        let change = flux + bias;
        corp.price = (corp.price * (1.0 + change)).max(MIN_STOCK_PRICE);
        corp.trend = change;
        corp.trace_level = (corp.trace_level - TRACE_DECAY_PER_HOUR).max(0.0);
    }
    true
}

/// Hourly wage for the current grade, phase and Charisma.
pub fn hourly_wage(state: &SimulationState) -> u64 {
    let charisma = state.special.get(SpecialType::Charisma) as f64;
    let wage = BASE_WAGE
        * state.economy.job_grade as f64
        * state.economy.phase.wage_multiplier()
        * (1.0 + charisma * CHARISMA_WAGE_FACTOR);
    wage.floor().max(0.0) as u64
}

/// Pays the hourly wage if a full virtual hour has passed since the last payment.
pub fn pay_wage(state: &mut SimulationState, events: &mut Vec<TickEvent>) -> Option<u64> {
    if state.virtual_time - state.economy.last_job_pay < MS_PER_HOUR {
        return None;
    }
    let amount = hourly_wage(state);
    state.cash = state.cash.saturating_add(amount);
    state.economy.last_job_pay = state.virtual_time;
    events.push(TickEvent::WagePaid { amount });
    Some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::clock;
    use crate::core::rng::{d6_face, ScriptedRng};

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    fn next_day(state: &SimulationState) -> Calendar {
        clock::calendar(state.virtual_time + MS_PER_DAY)
    }

    #[test]
    fn test_same_day_is_skipped() {
        let mut state = state();
        let today = clock::calendar(state.virtual_time);
        let mut events = Vec::new();
        assert!(!process_daily(&mut state, &today, &mut ScriptedRng::new([]), &mut events));
        assert_eq!(state.cash, STARTING_CASH);
    }

    #[test]
    fn test_daily_expense_deducted() {
        let mut state = state();
        let tomorrow = next_day(&state);
        let mut events = Vec::new();
        process_daily(&mut state, &tomorrow, &mut ScriptedRng::new([0.9]), &mut events);
        assert_eq!(state.cash, STARTING_CASH - 45);
        assert_eq!(state.economy.last_expense_day, Some(103));
        assert_eq!(
            events[0],
            TickEvent::ExpensesPaid {
                amount: 45,
                lifestyle: "Tenement"
            }
        );
        assert!(events.contains(&TickEvent::ShopRestocked));
    }

    #[test]
    fn test_shortfall_evicts_and_floors_cash() {
        let mut state = state();
        state.cash = 30;
        let tomorrow = next_day(&state);
        let mut events = Vec::new();
        process_daily(&mut state, &tomorrow, &mut ScriptedRng::new([0.9]), &mut events);
        assert_eq!(state.cash, 0);
        assert_eq!(state.economy.lifestyle_level, 1);
        assert!(events.contains(&TickEvent::Evicted));
    }

    #[test]
    fn test_homeless_pays_nothing() {
        let mut state = state();
        state.economy.lifestyle_level = 1;
        let mut events = Vec::new();
        pay_daily_expenses(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.cash, STARTING_CASH);
    }

    #[test]
    fn test_radiation_drift_on_roll() {
        let mut state = state();
        let tomorrow = next_day(&state);
        let mut events = Vec::new();
        process_daily(&mut state, &tomorrow, &mut ScriptedRng::new([0.1]), &mut events);
        assert_eq!(state.global_radiation, STARTING_GLOBAL_RADIATION + 0.5);
    }

    #[test]
    fn test_review_promotes_on_high_roll() {
        let mut state = state();
        let next_year = Calendar {
            year: 2076,
            day_of_year: 1,
            hour: 0,
            minute: 0,
        };
        let mut events = Vec::new();
        // 4+4+4 + Int 8 + Cha 1.5 = 21.5 ≥ 17; no economy shift
        let mut rng = ScriptedRng::new([d6_face(4), d6_face(4), d6_face(4), 0.9]);
        let outcome = process_annual_review(&mut state, &next_year, &mut rng, &mut events);
        assert_eq!(outcome, Some(ReviewOutcome::Promoted));
        assert_eq!(state.economy.job_grade, 2);
        assert_eq!(state.economy.last_review_year, 2076);

        // Same year does not review twice
        assert_eq!(
            process_annual_review(&mut state, &next_year, &mut rng, &mut events),
            None
        );
    }

    #[test]
    fn test_review_demotes_on_low_roll() {
        let mut state = state();
        state.economy.job_grade = 3;
        state.special.set(SpecialType::Intelligence, 1);
        state.special.set(SpecialType::Charisma, 1);
        let next_year = Calendar {
            year: 2076,
            day_of_year: 1,
            hour: 0,
            minute: 0,
        };
        let mut events = Vec::new();
        // 1+1+1 + 1 + 0.5 = 4.5 < 10
        let mut rng = ScriptedRng::new([d6_face(1), d6_face(1), d6_face(1), 0.9]);
        let outcome = process_annual_review(&mut state, &next_year, &mut rng, &mut events);
        assert_eq!(outcome, Some(ReviewOutcome::Demoted));
        assert_eq!(state.economy.job_grade, 2);
    }

    #[test]
    fn test_economy_shift_logged_only_on_change() {
        let mut state = state();
        let next_year = Calendar {
            year: 2076,
            day_of_year: 1,
            hour: 0,
            minute: 0,
        };
        let mut events = Vec::new();
        // Shift to Boom
        let mut rng = ScriptedRng::new([d6_face(3), d6_face(3), d6_face(3), 0.1, 0.9]);
        process_annual_review(&mut state, &next_year, &mut rng, &mut events);
        assert_eq!(state.economy.phase, EconomyPhase::Boom);
        assert!(events.contains(&TickEvent::EconomyShift {
            phase: EconomyPhase::Boom
        }));
    }

    #[test]
    fn test_market_waits_an_hour() {
        let mut state = state();
        let mut rng = ScriptedRng::new([]);
        state.virtual_time += MS_PER_HOUR - 1;
        assert!(!update_market(&mut state, &mut rng));
        state.virtual_time += 1;
        assert!(update_market(&mut state, &mut rng));
        assert_eq!(state.economy.last_market_update, state.virtual_time);
    }

    #[test]
    fn test_market_price_floor_and_trace_decay() {
        let mut state = state();
        state.economy.phase = EconomyPhase::Recession;
        for corp in state.corporations.values_mut() {
            corp.price = 1.0;
            corp.trace_level = 0.5;
        }
        state.virtual_time += MS_PER_HOUR;
        update_market(&mut state, &mut ScriptedRng::new([]).with_fallback(0.0));
        for corp in state.corporations.values() {
            assert_eq!(corp.price, MIN_STOCK_PRICE);
            assert_eq!(corp.trace_level, 0.0);
            assert!((corp.trend - (-0.07)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wage_formula() {
        let mut state = state();
        // 10 × 1 × 1.0 × 1.15
        assert_eq!(hourly_wage(&state), 11);
        state.economy.phase = EconomyPhase::Boom;
        state.economy.job_grade = 2;
        assert_eq!(hourly_wage(&state), 34);
    }

    #[test]
    fn test_wage_paid_hourly() {
        let mut state = state();
        let mut events = Vec::new();
        state.virtual_time += 30 * 60_000;
        assert_eq!(pay_wage(&mut state, &mut events), None);
        state.virtual_time += 30 * 60_000;
        assert_eq!(pay_wage(&mut state, &mut events), Some(11));
        assert_eq!(state.cash, STARTING_CASH + 11);
        assert_eq!(pay_wage(&mut state, &mut events), None);
    }
}
