//! Errors returned by player actions.

use thiserror::Error;

/// Why an action was rejected. A rejected action never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no active session")]
    NoState,

    #[error("unknown id: {0}")]
    NotFound(String),

    #[error("insufficient funds: need {needed} caps, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("{0} is already at its maximum")]
    CapReached(String),

    #[error("no upgrade points available")]
    NoPoints,

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("requires level {required}")]
    LevelTooLow { required: u32 },

    #[error("{0} is out of stock")]
    OutOfStock(String),

    #[error("none in inventory: {0}")]
    NotOwned(String),

    #[error("not enough shares: own {owned}, tried to sell {requested}")]
    InsufficientShares { owned: u32, requested: u32 },

    #[error("terminal is locked out")]
    LockedOut,

    #[error("{0} does not need help")]
    NoAidNeeded(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

pub type ActionResult<T> = Result<T, ActionError>;
