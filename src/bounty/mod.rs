//! Fixer contracts posted against specific targets.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
