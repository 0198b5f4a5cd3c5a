//! Wireframe - idle hacking simulation library
//!
//! The simulation core is a pure tick reducer over [`core::SimulationState`].
//! [`core::Engine`] owns the state slot and exposes ticks and player actions;
//! the binaries drive it in real time (`wireframe`) or headless (`simulate`).

pub mod achievements;
pub mod bounty;
pub mod build_info;
pub mod character;
pub mod console;
pub mod core;
pub mod economy;
pub mod hacking;
pub mod mutation;
pub mod peers;
pub mod save;
pub mod shop;
pub mod simulator;
