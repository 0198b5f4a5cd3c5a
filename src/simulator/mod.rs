//! Headless balance runs.
//!
//! A run drives the real [`Engine`](crate::core::Engine) with a seeded
//! `ChaCha8Rng` and a synthetic wall clock, collecting statistics from the
//! events each tick returns.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
