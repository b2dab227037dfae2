//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Thresholds for the analytics engine.
///
/// All windows and bands live here so the aggregation functions stay pure;
/// nothing in the core reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Maximum entries per ranking
    #[serde(default = "default_ranking_cap")]
    pub ranking_cap: usize,

    /// Minimum weekly battles to qualify for the win-rate board
    #[serde(default = "default_min_win_rate_battles")]
    pub min_win_rate_battles: u32,

    /// Trailing window for the inactivity probe, in hours
    #[serde(default = "default_kick_window_hours")]
    pub kick_window_hours: i64,

    /// Trend diffs within ±band read as flat
    #[serde(default = "default_trend_flat_band")]
    pub trend_flat_band: i64,

    /// Length of the "weekly" window in days
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

fn default_ranking_cap() -> usize {
    30
}

fn default_min_win_rate_battles() -> u32 {
    10
}

fn default_kick_window_hours() -> i64 {
    48
}

fn default_trend_flat_band() -> i64 {
    5
}

fn default_window_days() -> i64 {
    7
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            ranking_cap: default_ranking_cap(),
            min_win_rate_battles: default_min_win_rate_battles(),
            kick_window_hours: default_kick_window_hours(),
            trend_flat_band: default_trend_flat_band(),
            window_days: default_window_days(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.ranking_cap == 0 {
            return Err(ConfigError::ValidationError(
                "Ranking cap must be greater than 0".to_string(),
            ));
        }

        if self.analytics.window_days <= 0 {
            return Err(ConfigError::ValidationError(
                "Window length must be at least one day".to_string(),
            ));
        }

        if self.analytics.kick_window_hours <= 0 {
            return Err(ConfigError::ValidationError(
                "Kick window must be at least one hour".to_string(),
            ));
        }

        if self.analytics.trend_flat_band < 0 {
            return Err(ConfigError::ValidationError(
                "Trend flat band cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}
