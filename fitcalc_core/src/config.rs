//! Configuration file support for fitcalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitcalc/config.toml`.
//! It only supplies defaults for values the user leaves off the command line.

use crate::{ActivityLevel, Result, Sex, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallback calculator inputs
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub unit_system: UnitSystem,

    /// No default sex unless configured; the CLI then requires `--sex`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            sex: None,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

/// Output rendering configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Print results as JSON instead of text
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("fitcalc").join("config.toml")
    }
}
