//! Application configuration for CoinTracker
//!
//! Holds preferences that apply across profiles: the last active profile,
//! display formatting, and the default log filter. Per-profile settings
//! (goal, theme, quick actions) live in the profile document instead.

use serde::{Deserialize, Serialize};

use super::paths::CoinPaths;
use crate::error::CoinError;
use crate::models::DEFAULT_PROFILE;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Last active profile
    #[serde(default = "default_profile")]
    pub current_profile: String,

    /// Date format used when printing timestamps (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default number of rows shown by `history`
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Optional tracing filter directive (e.g. "coin_tracker=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_history_limit() -> usize {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            current_profile: default_profile(),
            date_format: default_date_format(),
            history_limit: default_history_limit(),
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Load config from disk, or create a default config if the file doesn't exist
    pub fn load_or_create(paths: &CoinPaths) -> Result<Self, CoinError> {
        let config_path = paths.config_file();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .map_err(|e| CoinError::Io(format!("Failed to read config file: {}", e)))?;

            let config: AppConfig = serde_json::from_str(&contents)
                .map_err(|e| CoinError::Config(format!("Failed to parse config file: {}", e)))?;

            Ok(config)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(AppConfig::default())
        }
    }

    /// Save config to disk
    pub fn save(&self, paths: &CoinPaths) -> Result<(), CoinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CoinError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(paths.config_file(), contents)
            .map_err(|e| CoinError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
