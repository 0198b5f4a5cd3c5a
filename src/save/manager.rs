//! Checksummed save file in the platform config directory.

use super::transfer::{export_state, import_state, SaveError};
use crate::core::constants::{SAVE_FILE_NAME, SAVE_HEADER_MAGIC};
use crate::core::game_state::SimulationState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Manages saving and loading the simulation with a checksum header.
pub struct SaveManager {
    save_path: PathBuf,
}

fn checksum_hex(body: &str) -> String {
    Sha256::digest(body.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

impl SaveManager {
    /// Creates a SaveManager rooted in the platform config directory.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "wireframe").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit file path instead of the config directory.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "wireframe-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;
        Ok(Self::at_path(temp_dir.join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the state to disk.
    ///
    /// File format:
    /// - Header line: `WIREFRAME1 <sha256 of body, hex>`
    /// - Body: the exported JSON
    pub fn save(&self, state: &SimulationState) -> Result<(), SaveError> {
        let body = export_state(state)?;
        let contents = format!("{} {}\n{}", SAVE_HEADER_MAGIC, checksum_hex(&body), body);
        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.save_path, contents)?;
        info!(path = %self.save_path.display(), "saved");
        Ok(())
    }

    /// Reads the file and returns its body once the header and checksum check out.
    fn read_verified(&self) -> io::Result<String> {
        let contents = fs::read_to_string(&self.save_path)?;
        let (header, body) = contents.split_once('\n').ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Missing save header")
        })?;

        let mut parts = header.split_whitespace();
        let magic = parts.next().unwrap_or_default();
        if magic != SAVE_HEADER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save header: expected {}, got {}",
                    SAVE_HEADER_MAGIC, magic
                ),
            ));
        }

        let stored = parts.next().unwrap_or_default();
        if stored != checksum_hex(body) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }
        Ok(body.to_string())
    }

    /// Loads and validates the saved state.
    pub fn load(&self) -> Result<SimulationState, SaveError> {
        let body = self.read_verified()?;
        let state = import_state(&body)?;
        info!(path = %self.save_path.display(), "loaded");
        Ok(state)
    }
}
