//! Radiation and the mutations it causes.

pub mod data;
pub mod logic;

pub use data::*;
pub use logic::*;
