//! Other hackers sharing the network.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
