//! # Machine Configuration
//!
//! Configuration management for the brew engine.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BARISTA_TEMPERATURE=85                                             │
//! │     BARISTA_TIP_INTERVAL_SECS=30                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/barista/machine.toml (Linux)                             │
//! │     ~/Library/Application Support/com.barista.machine/machine.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     temperature 90 °C, clock 1 s, tips 10 s                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # machine.toml
//! [machine]
//! temperature = 90  # °C, within [65, 95]
//!
//! [timers]
//! clock_interval_secs = 1
//! tip_interval_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use barista_core::validation::validate_temperature;
use barista_core::DEFAULT_TEMPERATURE;

use crate::error::{EngineError, EngineResult};

// =============================================================================
// Machine Settings
// =============================================================================

fn default_temperature() -> u32 {
    DEFAULT_TEMPERATURE
}

/// Machine-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Brew temperature in °C; shown in the heat-water brew step.
    #[serde(default = "default_temperature")]
    pub temperature: u32,
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            temperature: default_temperature(),
        }
    }
}

// =============================================================================
// Timer Settings
// =============================================================================

fn default_clock_interval() -> u64 {
    1
}

fn default_tip_interval() -> u64 {
    10
}

/// Background timer cadences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Seconds between wall-clock publications.
    #[serde(default = "default_clock_interval")]
    pub clock_interval_secs: u64,

    /// Seconds between tip rotations.
    #[serde(default = "default_tip_interval")]
    pub tip_interval_secs: u64,
}

impl Default for TimerSettings {
    fn default() -> Self {
        TimerSettings {
            clock_interval_secs: default_clock_interval(),
            tip_interval_secs: default_tip_interval(),
        }
    }
}

// =============================================================================
// Main Machine Configuration
// =============================================================================

/// Complete engine configuration.
///
/// ## Example Config File
/// ```toml
/// [machine]
/// temperature = 90
///
/// [timers]
/// clock_interval_secs = 1
/// tip_interval_secs = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Machine-level settings.
    #[serde(default)]
    pub machine: MachineSettings,

    /// Background timer cadences.
    #[serde(default)]
    pub timers: TimerSettings,
}

impl MachineConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (machine.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> EngineResult<Self> {
        let mut config = Self::default();

        // Try to load from config file
        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        // Validate the configuration
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load machine config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> EngineResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| EngineError::ConfigSaveFailed("No config path available".into()))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Machine config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        validate_temperature(self.machine.temperature)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;

        if self.timers.clock_interval_secs == 0 {
            return Err(EngineError::InvalidConfig(
                "clock_interval_secs must be greater than 0".into(),
            ));
        }

        if self.timers.tip_interval_secs == 0 {
            return Err(EngineError::InvalidConfig(
                "tip_interval_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // Brew temperature
        if let Ok(temperature) = std::env::var("BARISTA_TEMPERATURE") {
            if let Ok(t) = temperature.parse::<u32>() {
                debug!(temperature = t, "Overriding temperature from environment");
                self.machine.temperature = t;
            }
        }

        // Clock cadence
        if let Ok(secs) = std::env::var("BARISTA_CLOCK_INTERVAL_SECS") {
            if let Ok(s) = secs.parse::<u64>() {
                self.timers.clock_interval_secs = s;
            }
        }

        // Tip cadence
        if let Ok(secs) = std::env::var("BARISTA_TIP_INTERVAL_SECS") {
            if let Ok(s) = secs.parse::<u64>() {
                self.timers.tip_interval_secs = s;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "barista", "machine").map(|dirs| {
            let config_dir = dirs.config_dir();
            config_dir.join("machine.toml")
        })
    }
}
