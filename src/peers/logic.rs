//! Background simulation of other hackers on the network.

use super::types::{Peer, PeerStatus, LOCKED_ACTIVITY, PEER_ACTIVITIES, PEER_HANDLES};
use crate::core::constants::*;
use crate::core::error::{ActionError, ActionResult};
use crate::core::events::TickEvent;
use crate::core::game_state::SimulationState;
use crate::core::log::LogKind;
use crate::core::rng::RandomSource;

fn spawn_peer<R: RandomSource + ?Sized>(state: &mut SimulationState, rng: &mut R) -> Peer {
    let name = PEER_HANDLES[rng.index(PEER_HANDLES.len())].to_string();
    let level = rng.die(PEER_MAX_LEVEL);
    let heat = rng.uniform(0.0, PEER_MAX_START_HEAT);
    let status = if rng.chance(0.5) {
        PeerStatus::Idle
    } else {
        PeerStatus::Hacking
    };
    let activity = PEER_ACTIVITIES[rng.index(PEER_ACTIVITIES.len())].to_string();
    Peer {
        id: state.mint_id("p"),
        name,
        level,
        heat,
        status,
        activity,
        needs_help: false,
    }
}

/// One tick of the peer population: maybe spawn a newcomer, then advance everyone still online.
pub fn simulate_peers<R: RandomSource + ?Sized>(
    state: &mut SimulationState,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) {
    if state.peers.len() < MAX_PEERS && rng.chance(PEER_SPAWN_CHANCE) {
        let peer = spawn_peer(state, rng);
        events.push(TickEvent::PeerJoined {
            name: peer.name.clone(),
        });
        state.peers.push(peer);
    }

    for peer in state
        .peers
        .iter_mut()
        .filter(|p| p.status != PeerStatus::Locked)
    {
        if rng.chance(PEER_HEAT_CHANCE) {
            peer.heat += rng.next_f64() * PEER_HEAT_GAIN;
        }

        if peer.heat > PEER_HELP_THRESHOLD && !peer.needs_help {
            peer.needs_help = true;
            events.push(TickEvent::PeerNeedsHelp {
                name: peer.name.clone(),
            });
        }

        if peer.heat >= MAX_HEAT {
            peer.heat = MAX_HEAT;
            peer.status = PeerStatus::Locked;
            peer.activity = LOCKED_ACTIVITY.to_string();
            peer.needs_help = true;
            events.push(TickEvent::PeerLocked {
                name: peer.name.clone(),
            });
        } else if rng.chance(PEER_ACTIVITY_REFRESH_CHANCE) {
            peer.activity = PEER_ACTIVITIES[rng.index(PEER_ACTIVITIES.len())].to_string();
            peer.status = PeerStatus::Hacking;
        }
    }
}

/// Cools down a peer who asked for help and pays the player for it.
///
/// Locked peers still count as asking for help; aid brings them back online.
pub fn aid_peer(state: &mut SimulationState, peer_id: &str) -> ActionResult<u64> {
    let peer = state
        .peers
        .iter_mut()
        .find(|p| p.id == peer_id)
        .ok_or_else(|| ActionError::NotFound(peer_id.to_string()))?;
    if !peer.needs_help {
        return Err(ActionError::NoAidNeeded(peer.name.clone()));
    }
    peer.heat = 0.0;
    peer.needs_help = false;
    peer.status = PeerStatus::Hacking;
    let name = peer.name.clone();

    state.cash = state.cash.saturating_add(PEER_AID_REWARD);
    state.push_log(
        "NET",
        format!("Rerouted trace for {}. +{} Caps.", name, PEER_AID_REWARD),
        LogKind::Success,
    );
    Ok(PEER_AID_REWARD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::get_archetype;
    use crate::core::rng::ScriptedRng;

    fn state() -> SimulationState {
        SimulationState::new(get_archetype("j1").unwrap(), &mut ScriptedRng::new([]))
    }

    fn peer(id: &str, heat: f64) -> Peer {
        Peer {
            id: id.to_string(),
            name: format!("peer-{}", id),
            level: 5,
            heat,
            status: PeerStatus::Hacking,
            activity: PEER_ACTIVITIES[0].to_string(),
            needs_help: false,
        }
    }

    #[test]
    fn test_spawn_draws_fields() {
        let mut state = state();
        let mut events = Vec::new();
        // spawn, handle 0, level 20, heat 15, Idle, activity 0
        let mut rng = ScriptedRng::new([0.0, 0.0, 0.99, 0.5, 0.1, 0.0]);
        simulate_peers(&mut state, &mut rng, &mut events);
        assert_eq!(state.peers.len(), 1);
        let p = &state.peers[0];
        assert_eq!(p.name, "NullPointer");
        assert_eq!(p.level, 20);
        assert_eq!(p.heat, 15.0);
        assert_eq!(p.status, PeerStatus::Idle);
        assert!(matches!(events[0], TickEvent::PeerJoined { .. }));
    }

    #[test]
    fn test_no_spawn_at_capacity() {
        let mut state = state();
        for i in 0..MAX_PEERS {
            let mut p = peer(&i.to_string(), 0.0);
            p.status = PeerStatus::Locked;
            state.peers.push(p);
        }
        let mut events = Vec::new();
        simulate_peers(&mut state, &mut ScriptedRng::new([0.0]), &mut events);
        assert_eq!(state.peers.len(), MAX_PEERS);
    }

    #[test]
    fn test_hot_peer_requests_help_then_locks() {
        let mut state = state();
        state.peers.push(peer("a", 79.0));
        let mut events = Vec::new();
        // no spawn, heat +4, no refresh
        simulate_peers(&mut state, &mut ScriptedRng::new([0.9, 0.1, 0.5, 0.9]), &mut events);
        assert!(state.peers[0].needs_help);
        assert_eq!(state.peers[0].heat, 83.0);

        events.clear();
        state.peers[0].heat = 99.0;
        simulate_peers(&mut state, &mut ScriptedRng::new([0.9, 0.1, 0.5]), &mut events);
        let p = &state.peers[0];
        assert_eq!(p.status, PeerStatus::Locked);
        assert_eq!(p.heat, 100.0);
        assert_eq!(p.activity, LOCKED_ACTIVITY);
        assert!(p.needs_help);
        assert!(events.contains(&TickEvent::PeerLocked {
            name: "peer-a".to_string()
        }));
    }

    #[test]
    fn test_locked_peer_waits_for_aid() {
        let mut state = state();
        let mut p = peer("a", 100.0);
        p.status = PeerStatus::Locked;
        p.activity = LOCKED_ACTIVITY.to_string();
        p.needs_help = true;
        state.peers.push(p.clone());
        let mut events = Vec::new();
        simulate_peers(&mut state, &mut ScriptedRng::new([0.9]).with_fallback(0.0), &mut events);
        assert_eq!(state.peers[0], p);

        assert_eq!(aid_peer(&mut state, "a"), Ok(PEER_AID_REWARD));
        let p = &state.peers[0];
        assert_eq!(p.status, PeerStatus::Hacking);
        assert_eq!(p.heat, 0.0);
        assert!(!p.needs_help);

        // Back in the update loop: heat +4, no refresh
        simulate_peers(&mut state, &mut ScriptedRng::new([0.9, 0.1, 0.5, 0.9]), &mut events);
        assert_eq!(state.peers[0].heat, 4.0);
    }

    #[test]
    fn test_full_locked_population_recovers_through_aid() {
        let mut state = state();
        for i in 0..MAX_PEERS {
            let mut p = peer(&i.to_string(), 100.0);
            p.status = PeerStatus::Locked;
            p.needs_help = true;
            state.peers.push(p);
        }
        let ids: Vec<String> = state.peers.iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            assert!(aid_peer(&mut state, id).is_ok());
        }
        assert!(state.peers.iter().all(|p| p.status == PeerStatus::Hacking));
        assert_eq!(state.cash, STARTING_CASH + PEER_AID_REWARD * MAX_PEERS as u64);
    }

    #[test]
    fn test_activity_refresh_sets_hacking() {
        let mut state = state();
        let mut p = peer("a", 10.0);
        p.status = PeerStatus::Idle;
        state.peers.push(p);
        let mut events = Vec::new();
        simulate_peers(&mut state, &mut ScriptedRng::new([0.9, 0.9, 0.01, 0.99]), &mut events);
        assert_eq!(state.peers[0].status, PeerStatus::Hacking);
        assert_eq!(state.peers[0].activity, PEER_ACTIVITIES[9]);
    }

    #[test]
    fn test_aid_peer() {
        let mut state = state();
        let mut p = peer("a", 90.0);
        p.needs_help = true;
        state.peers.push(p);
        state.peers.push(peer("b", 10.0));

        assert_eq!(aid_peer(&mut state, "a"), Ok(PEER_AID_REWARD));
        assert_eq!(state.cash, STARTING_CASH + PEER_AID_REWARD);
        assert_eq!(state.peers[0].heat, 0.0);
        assert!(!state.peers[0].needs_help);

        assert!(matches!(aid_peer(&mut state, "a"), Err(ActionError::NoAidNeeded(_))));
        assert!(matches!(aid_peer(&mut state, "b"), Err(ActionError::NoAidNeeded(_))));
        assert_eq!(
            aid_peer(&mut state, "zz"),
            Err(ActionError::NotFound("zz".to_string()))
        );
    }
}
