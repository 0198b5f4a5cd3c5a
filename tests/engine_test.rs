//! The engine facade: atomic actions, console commands and persistence.

use wireframe::character::UpgradeTarget;
use wireframe::console::CommandOutcome;
use wireframe::core::{ActionError, Engine, ScriptedRng, TickContext};
use wireframe::save::SaveManager;

fn engine() -> Engine<ScriptedRng> {
    let mut engine = Engine::new(ScriptedRng::new([]));
    engine.start_new("j1").unwrap();
    engine
}

fn cash(engine: &Engine<ScriptedRng>) -> u64 {
    engine.state().map(|s| s.cash).unwrap_or(0)
}

#[test]
fn purchases_are_all_or_nothing() {
    let mut engine = engine();
    assert_eq!(engine.buy_hardware("u1", 2), Ok(125));
    assert_eq!(cash(&engine), 125);

    let before = engine.state().cloned();
    assert!(matches!(
        engine.buy_hardware("u1", 3),
        Err(ActionError::InsufficientFunds { .. })
    ));
    assert_eq!(engine.state().cloned(), before);
    assert_eq!(
        engine.buy_software("nope", 1),
        Err(ActionError::NotFound("nope".to_string()))
    );
}

#[test]
fn points_and_settings() {
    let mut engine = engine();
    assert_eq!(
        engine.spend_upgrade_point(UpgradeTarget::parse("I").unwrap()),
        Err(ActionError::NoPoints)
    );
    assert!(engine.set_speed(3).is_err());
    engine.set_speed(500).unwrap();
    engine.set_lifestyle(3).unwrap();
    engine.rename("Ghost").unwrap();
    let state = engine.state().unwrap();
    assert_eq!(state.speed_multiplier, 500);
    assert_eq!(state.economy.lifestyle_level, 3);
    assert_eq!(state.player_name, "Ghost");
}

#[test]
fn console_commands_log_replies() {
    let mut engine = engine();
    assert_eq!(engine.command("status"), CommandOutcome::Continue);
    assert_eq!(engine.command("sudo make me a sandwich"), CommandOutcome::Continue);
    let last = engine.state().and_then(|s| s.log.latest()).map(|e| e.message.clone());
    assert_eq!(
        last.as_deref(),
        Some("Command not recognized: sudo make me a sandwich")
    );
    assert_eq!(engine.command("exit"), CommandOutcome::Exit);
}

#[test]
fn save_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("wireframe-engine-test-{}", std::process::id()));
    let manager = SaveManager::at_path(dir.join("wireframe.sav"));

    let mut engine = engine();
    for i in 0..50 {
        engine.tick(&TickContext { real_now_ms: i * 250 });
    }
    let state = engine.state().cloned().unwrap();
    manager.save(&state).unwrap();
    assert!(manager.save_exists());

    let mut restored = Engine::new(ScriptedRng::new([]));
    restored.load(manager.load().unwrap());
    assert_eq!(restored.state(), Some(&state));

    std::fs::remove_dir_all(&dir).ok();
}
