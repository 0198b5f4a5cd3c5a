//! Persistence: JSON export/import and the checksummed save file.

pub mod manager;
pub mod transfer;

pub use manager::SaveManager;
pub use transfer::{export_state, import_state, validate_state, SaveError};
