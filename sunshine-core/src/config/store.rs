//! File-backed configuration storage.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::Config;

/// Default configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and saves the configuration record.
///
/// Passed explicitly to whoever needs it; there is no global instance.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Store at the default location (`config.json`).
    pub fn new() -> Self {
        Self::at(PathBuf::from(CONFIG_FILE))
    }

    /// Store at a specific path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the configuration file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to defaults.
    ///
    /// Never fails: a missing or malformed file yields `Config::default()`.
    /// Numeric fields are clamped to their ranges.
    pub fn load(&self) -> Config {
        let mut config = match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };
        config.validate();
        config
    }

    fn try_load(&self) -> Result<Config, ConfigError> {
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save the configuration, overwriting the file.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        config.serialize(&mut ser)?;
        std::fs::write(&self.path, buf)?;
        tracing::info!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
