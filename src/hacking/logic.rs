//! Per-tick hacking: kill-chain progress, phase rolls and payouts.

use super::bonuses::HackBonuses;
use super::heat::hacking_heat_decay;
use super::phases::{phase_index_for, FAILURE_REASONS, KILL_CHAIN_PHASES};
use super::targets::random_target;
use crate::bounty;
use crate::character::progression::{check_level_up, install_unlocked_content};
use crate::character::{SkillType, SpecialType};
use crate::core::clock;
use crate::core::constants::*;
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::rng::{roll_exploding_3d6, RandomSource};
use crate::shop;

/// What the hacking step did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackTick {
    /// Auto-hack is off
    Idle,
    Progressed,
    Completed,
    /// Heat reached the maximum; the caller must switch to the lockout branch
    Overheated,
}

/// Runs one hacking tick against the current target.
pub fn process_hacking<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> HackTick {
    if !state.auto_hack {
        return HackTick::Idle;
    }

    if state.auto_buy_hardware {
        shop::auto_buy_hardware(state, events);
    }

    let bonuses = HackBonuses::collect(state);

    // ── 1. Heat decay ──
    let decay = hacking_heat_decay(state, &bonuses);
    state.heat = (state.heat - decay).max(0.0);
    if state.heat >= MAX_HEAT {
        return HackTick::Overheated;
    }

    // ── 2. Progress ──
    state.hacking_progress += bonuses.hack_speed(state);
    let phase_idx = phase_index_for(state.hacking_progress);

    // ── 3. Phase resolution roll ──
    let entered_new_phase = state.last_phase.map_or(true, |last| phase_idx > last);
    if entered_new_phase && state.hacking_progress < HACK_COMPLETE {
        resolve_phase(state, phase_idx, &bonuses, rng, events);
        if state.heat >= MAX_HEAT {
            return HackTick::Overheated;
        }
    }

    // ── 4. Technique flavour ──
    if state.hacking_progress < HACK_COMPLETE && rng.chance(TECHNIQUE_EVENT_CHANCE) {
        record_technique(state, phase_idx, rng, events);
    }

    // ── 5. Completion ──
    if state.hacking_progress >= HACK_COMPLETE {
        complete_hack(state, &bonuses, rng, events);
        return HackTick::Completed;
    }

    HackTick::Progressed
}

/// Rolls 3d6 (exploding) against `Int + Science - difficulty` for a newly entered phase.
fn resolve_phase<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    phase_idx: usize,
    bonuses: &HackBonuses,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let phase = &KILL_CHAIN_PHASES[phase_idx];
    let target = state.target();
    events.push(TickEvent::PhaseEntered {
        company: target.company,
        phase: phase.name,
    });

    let target_number = bonuses.effective_intelligence(state) as i64
        + state.skills.get(SkillType::Science) as i64
        - target.difficulty as i64;
    let roll = roll_exploding_3d6(rng);

    if roll.total as i64 > target_number {
        let critical = roll.is_critical_failure();
        let base = if critical { CRIT_FAIL_HEAT } else { FAIL_HEAT };
        let heat = base * state.threat_level.config().heat_mod * bonuses.heat_gen_mult();
        state.heat = (state.heat + heat).max(0.0);
        state.hacking_progress -= PHASE_FAIL_PROGRESS_PENALTY;
        let reason = FAILURE_REASONS[rng.index(FAILURE_REASONS.len())];
        events.push(TickEvent::PhaseFailed {
            reason,
            heat,
            critical,
        });
        accrue_trace(state, critical, rng, events);
    }

    state.last_phase = Some(phase_idx);
}

/// Leaves a trace on the target's parent corporation after a failed phase.
///
/// A completed trace seizes part of the player's cash and resets the meter.
fn accrue_trace<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    critical: bool,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let trace_mod = state.threat_level.config().trace_mod;
    if trace_mod <= 0.0 {
        return;
    }
    let parent = state.target().parent;
    let Some(corp) = state.corporations.get_mut(parent) else {
        return;
    };

    let base = if critical { CRIT_FAIL_TRACE } else { FAIL_TRACE };
    corp.trace_level = (corp.trace_level + base * trace_mod).min(MAX_TRACE);
    if corp.trace_level >= MAX_TRACE {
        corp.trace_level = 0.0;
        let kept = (state.cash as f64 * (1.0 - TRACE_SEIZURE_FRACTION)).floor() as u64;
        let seized = state.cash - kept.min(state.cash);
        state.cash -= seized;
        events.push(TickEvent::AssetsFrozen {
            corporation: parent,
            seized,
        });
    } else if corp.trace_level > TRACE_WARNING_LEVEL && rng.chance(TRACE_WARNING_CHANCE) {
        events.push(TickEvent::TraceDetected {
            corporation: parent,
        });
    }
}

fn record_technique<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    phase_idx: usize,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let techniques = KILL_CHAIN_PHASES[phase_idx].techniques;
    let technique = techniques[rng.index(techniques.len())];
    *state
        .technique_histogram
        .entry(technique.to_string())
        .or_insert(0) += 1;
    state.technique_last_seen.insert(
        technique.to_string(),
        clock::format_clock(state.virtual_time),
    );
    events.push(TickEvent::TechniqueObserved { technique });
}

/// Pays out a finished hack and moves on to a fresh target.
fn complete_hack<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    bonuses: &HackBonuses,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    let target = state.target();
    let threat = state.threat_level.config();
    let difficulty = target.difficulty as f64;

    let crit_chance = state.special.get(SpecialType::Luck) as f64 * LUCK_CRIT_FACTOR
        + bonuses.software_crit
        + bonuses.crit_flat();
    let critical = rng.next_f64() < crit_chance;

    let speech_bonus = 1.0 + state.skills.get(SkillType::Speech) as f64 * SPEECH_CASH_FACTOR;
    let base_cash = CASH_PER_LEVEL * state.level as f64
        + CASH_PER_DIFFICULTY * difficulty
        + bonuses.software_cash;
    let crit_mult = if critical { 2.0 } else { 1.0 };
    let cash = (base_cash * speech_bonus * crit_mult * threat.multiplier * bonuses.cash_mult())
        .floor()
        .max(0.0) as u64;
    state.cash = state.cash.saturating_add(cash);

    let int_bonus = 1.0 + state.special.get(SpecialType::Intelligence) as f64 * INT_XP_FACTOR;
    let base_xp = BASE_HACK_XP + XP_PER_DIFFICULTY * difficulty;
    let xp_mult = threat.multiplier * state.lifestyle().xp_mult * bonuses.xp_mult();
    let xp = (base_xp * int_bonus * xp_mult).floor().max(0.0) as u64;
    state.experience = state.experience.saturating_add(xp);

    events.push(TickEvent::HackSucceeded {
        company: target.company,
        cash,
        xp,
        critical,
    });

    if let Some(corp) = state.corporations.get_mut(target.parent) {
        corp.reputation = (corp.reputation + REPUTATION_PER_HACK).min(MAX_REPUTATION);
    }

    bounty::fulfill_for_target(state, target.id, events);
    check_level_up(state, events);
    install_unlocked_content(state, events);

    state.hacking_progress = 0.0;
    state.heat = (state.heat - SUCCESS_HEAT_RELIEF).max(0.0);
    state.current_target = random_target(rng).id.to_string();
    state.technique_histogram.clear();
    state.technique_last_seen.clear();
    state.last_phase = None;
    state.total_hacks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::rng::{d6_face, ScriptedRng};
    use crate::economy::ThreatLevel;

    fn state() -> SimulationState {
        let mut state =
            SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]));
        state.current_target = "VTEC-1".to_string();
        state
    }

    #[test]
    fn test_idle_when_auto_hack_off() {
        let mut state = state();
        state.auto_hack = false;
        let mut events = Vec::new();
        let result = process_hacking(&mut state, &mut ScriptedRng::new([]), &mut events);
        assert_eq!(result, HackTick::Idle);
        assert_eq!(state.hacking_progress, 0.0);
    }

    #[test]
    fn test_first_tick_rolls_for_reconnaissance() {
        let mut state = state();
        let mut events = Vec::new();
        // Roll 1+1+1 succeeds; technique roll 0.99 misses
        let mut rng = ScriptedRng::new([d6_face(1), d6_face(1), d6_face(1), 0.99]);
        let result = process_hacking(&mut state, &mut rng, &mut events);
        assert_eq!(result, HackTick::Progressed);
        assert_eq!(state.last_phase, Some(0));
        assert!((state.hacking_progress - 0.09).abs() < 1e-9);
        assert!(matches!(
            events[0],
            TickEvent::PhaseEntered {
                phase: "Reconnaissance",
                ..
            }
        ));
    }

    #[test]
    fn test_failed_phase_adds_heat_and_penalty() {
        let mut state = state();
        // Int 8 + Science 15 - diff 1 = 22; roll 6+6+6+5+4+1 = 28 fails critically
        let mut rng = ScriptedRng::new([
            d6_face(6),
            d6_face(6),
            d6_face(6),
            d6_face(5),
            d6_face(4),
            d6_face(1),
            0.0,
            0.99,
        ]);
        let mut events = Vec::new();
        process_hacking(&mut state, &mut rng, &mut events);
        assert!((state.heat - CRIT_FAIL_HEAT).abs() < 1e-9);
        assert!((state.hacking_progress - (0.09 - PHASE_FAIL_PROGRESS_PENALTY)).abs() < 1e-9);
        assert!(events.iter().any(|e| matches!(
            e,
            TickEvent::PhaseFailed {
                critical: true,
                reason: "Connection Refused by Peer",
                ..
            }
        )));
    }

    #[test]
    fn test_failed_phase_traces_by_threat_level() {
        let mut state = state();
        let mut events = Vec::new();
        state.threat_level = ThreatLevel::Safe;
        accrue_trace(&mut state, true, &mut ScriptedRng::new([]), &mut events);
        assert_eq!(state.corporations["VTEC"].trace_level, 0.0);

        state.threat_level = ThreatLevel::Standard;
        accrue_trace(&mut state, false, &mut ScriptedRng::new([]), &mut events);
        assert_eq!(state.corporations["VTEC"].trace_level, 1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_trace_warning_above_half() {
        let mut state = state();
        state.threat_level = ThreatLevel::Risky;
        state.corporations.get_mut("VTEC").unwrap().trace_level = 50.0;
        let mut events = Vec::new();
        accrue_trace(&mut state, false, &mut ScriptedRng::new([0.1]), &mut events);
        assert_eq!(state.corporations["VTEC"].trace_level, 52.0);
        assert_eq!(events, vec![TickEvent::TraceDetected { corporation: "VTEC" }]);
    }

    #[test]
    fn test_completed_trace_seizes_cash() {
        let mut state = state();
        state.threat_level = ThreatLevel::Risky;
        state.corporations.get_mut("VTEC").unwrap().trace_level = 95.0;
        let mut events = Vec::new();
        accrue_trace(&mut state, true, &mut ScriptedRng::new([]), &mut events);
        assert_eq!(state.corporations["VTEC"].trace_level, 0.0);
        assert_eq!(state.cash, 200);
        assert_eq!(
            events,
            vec![TickEvent::AssetsFrozen {
                corporation: "VTEC",
                seized: 50
            }]
        );
    }

    #[test]
    fn test_no_reroll_within_same_phase() {
        let mut state = state();
        state.last_phase = Some(0);
        state.hacking_progress = 5.0;
        let mut events = Vec::new();
        process_hacking(&mut state, &mut ScriptedRng::new([0.99]), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_overheat_before_progress() {
        let mut state = state();
        state.heat = 150.0;
        let mut events = Vec::new();
        let result = process_hacking(&mut state, &mut ScriptedRng::new([]), &mut events);
        assert_eq!(result, HackTick::Overheated);
        assert_eq!(state.hacking_progress, 0.0);
    }

    #[test]
    fn test_completion_pays_and_resets() {
        let mut state = state();
        state.active_bounties.clear();
        state.hacking_progress = 99.95;
        state.last_phase = Some(6);
        state.heat = 30.0;
        state.technique_histogram.insert("T1566 Phishing".to_string(), 2);
        let mut events = Vec::new();
        // crit roll 0.5 misses (Luck 4 → 0.08), new target index 0
        let mut rng = ScriptedRng::new([0.5, 0.0]);
        let result = process_hacking(&mut state, &mut rng, &mut events);
        assert_eq!(result, HackTick::Completed);
        // (20 + 10) × 1 × 1
        assert_eq!(state.cash, STARTING_CASH + 30);
        // (20 + 5) × 1.4 = 35
        assert_eq!(state.experience, 35);
        assert_eq!(state.hacking_progress, 0.0);
        assert_eq!(state.last_phase, None);
        assert!(state.technique_histogram.is_empty());
        assert_eq!(state.total_hacks, 1);
        assert!((state.heat - (30.0 - 0.25 - SUCCESS_HEAT_RELIEF)).abs() < 1e-9);
        assert_eq!(state.corporations["VTEC"].reputation, 1);
        assert_eq!(state.corporations["VTEC"].trace_level, 0.0);
    }

    #[test]
    fn test_critical_success_doubles_cash() {
        let mut state = state();
        state.active_bounties.clear();
        state.hacking_progress = 99.95;
        state.last_phase = Some(6);
        let mut events = Vec::new();
        let mut rng = ScriptedRng::new([0.01, 0.0]);
        process_hacking(&mut state, &mut rng, &mut events);
        assert_eq!(state.cash, STARTING_CASH + 60);
    }

    #[test]
    fn test_technique_recorded_with_timestamp() {
        let mut state = state();
        state.last_phase = Some(0);
        let mut events = Vec::new();
        let mut rng = ScriptedRng::new([0.05, 0.0]);
        process_hacking(&mut state, &mut rng, &mut events);
        assert_eq!(state.technique_histogram.get("T1595 Active Scanning"), Some(&1));
        assert_eq!(
            state
                .technique_last_seen
                .get("T1595 Active Scanning")
                .map(String::as_str),
            Some("06:00")
        );
    }
}
