//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, StatisticsConfig, StorageConfig, TaxonomyConfig};
use crate::constants::BOARD_COLUMNS;
use crate::constants::PATTERN_WIDTH;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "beadroad.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BEADROAD_*`)
/// 2. Project config (`beadroad.toml` in project root)
/// 3. User config (`~/.beadroad/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeadroadConfig {
    pub analysis: AnalysisConfig,
    pub taxonomy: TaxonomyConfig,
    pub statistics: StatisticsConfig,
    pub storage: StorageConfig,
}

impl BeadroadConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config falls back to defaults.
                        ::tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &BeadroadConfig) -> Result<(), ConfigError> {
        if let Some(width) = config.analysis.zone_width {
            if !(PATTERN_WIDTH..=BOARD_COLUMNS).contains(&width) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.zone_width".to_string(),
                    message: format!("must be between {PATTERN_WIDTH} and {BOARD_COLUMNS}"),
                });
            }
        }
        if config.statistics.sample_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "statistics.sample_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.statistics.recent_window_minutes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "statistics.recent_window_minutes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.beadroad/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".beadroad").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut BeadroadConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BeadroadConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut BeadroadConfig, other: &BeadroadConfig) {
        if other.analysis.zone_width.is_some() {
            base.analysis.zone_width = other.analysis.zone_width;
        }
        if other.taxonomy.path.is_some() {
            base.taxonomy.path = other.taxonomy.path.clone();
        }
        if other.statistics.sample_limit.is_some() {
            base.statistics.sample_limit = other.statistics.sample_limit;
        }
        if other.statistics.recent_window_minutes.is_some() {
            base.statistics.recent_window_minutes = other.statistics.recent_window_minutes;
        }
        if other.statistics.recent_display.is_some() {
            base.statistics.recent_display = other.statistics.recent_display;
        }
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric values are ignored.
    fn apply_env_overrides(config: &mut BeadroadConfig) {
        if let Ok(val) = std::env::var("BEADROAD_ZONE_WIDTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.zone_width = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BEADROAD_TAXONOMY_PATH") {
            config.taxonomy.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("BEADROAD_SAMPLE_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.statistics.sample_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BEADROAD_RECENT_WINDOW_MINUTES") {
            if let Ok(v) = val.parse::<u32>() {
                config.statistics.recent_window_minutes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BEADROAD_DB_PATH") {
            config.storage.db_path = Some(PathBuf::from(val));
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
