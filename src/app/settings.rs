//! Application settings, optionally loaded from a TOML file.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration error with a plain message.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {}", message)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Default settings file consulted when no `--config` flag is given.
pub const DEFAULT_SETTINGS_FILE: &str = "neon_tictactoe.toml";

fn default_store_path() -> PathBuf {
    PathBuf::from("neon_tictactoe.json")
}

fn default_effects() -> bool {
    true
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_tick_ms() -> u64 {
    50
}

/// User-configurable application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct AppSettings {
    /// Path of the JSON store slot.
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Whether the decorative particle field is rendered.
    #[serde(default = "default_effects")]
    effects: bool,

    /// Simulated third-party login latency in milliseconds
    /// (presentation-only, no effect on core state).
    #[serde(default = "default_login_delay_ms")]
    login_delay_ms: u64,

    /// Event loop poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            effects: default_effects(),
            login_delay_ms: default_login_delay_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl AppSettings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(store_path = %settings.store_path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Loads the default settings file if present, otherwise built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but is invalid.
    #[instrument]
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_SETTINGS_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the store path.
    pub fn set_store_path(&mut self, path: PathBuf) {
        self.store_path = path;
    }

    /// Disables the decorative particle field.
    pub fn disable_effects(&mut self) {
        self.effects = false;
    }
}
