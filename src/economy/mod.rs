//! Jobs, living expenses, the stock market and career reviews.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
