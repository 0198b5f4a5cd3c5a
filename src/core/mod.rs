//! Simulation core: state, clock, randomness, the tick reducer and the engine.

pub mod clock;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod error;
pub mod events;
pub mod game_state;
pub mod log;
pub mod rng;
pub mod settings;
pub mod tick;

pub use engine::Engine;
pub use error::{ActionError, ActionResult};
pub use events::TickEvent;
pub use game_state::SimulationState;
pub use rng::{RandomSource, ScriptedRng};
pub use tick::{tick, TickContext, TickOutcome};
