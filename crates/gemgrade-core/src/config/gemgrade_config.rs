//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GradingConfig, MappingConfig, StorageConfig};
use crate::constants::MAX_READ_POOL_SIZE;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "gemgrade.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`GEMGRADE_*`)
/// 3. Project config (`gemgrade.toml` in project root)
/// 4. User config (`~/.gemgrade/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GemgradeConfig {
    pub storage: StorageConfig,
    pub grading: GradingConfig,
    pub mapping: MappingConfig,
}

/// Override arguments supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub database_path: Option<String>,
    pub read_pool_size: Option<usize>,
    pub concurrent_queries: Option<bool>,
    pub fallback_shape: Option<String>,
}

impl GemgradeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A broken user file is fatal only
        // when it fails to parse.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &GemgradeConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.storage.read_pool_size {
            if size == 0 || size > MAX_READ_POOL_SIZE {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: format!("must be between 1 and {MAX_READ_POOL_SIZE}"),
                });
            }
        }
        if let Some(ref path) = config.storage.database_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.database_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref shape) = config.mapping.fallback_shape {
            if shape.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "mapping.fallback_shape".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".gemgrade").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GemgradeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GemgradeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GemgradeConfig, other: &GemgradeConfig) {
        if other.storage.database_path.is_some() {
            base.storage.database_path = other.storage.database_path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }
        if other.grading.concurrent_queries.is_some() {
            base.grading.concurrent_queries = other.grading.concurrent_queries;
        }
        if other.mapping.fallback_shape.is_some() {
            base.mapping.fallback_shape = other.mapping.fallback_shape.clone();
        }
    }

    /// Pattern: `GEMGRADE_<SECTION>_<KEY>`. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut GemgradeConfig) {
        if let Ok(val) = std::env::var("GEMGRADE_STORAGE_DATABASE_PATH") {
            config.storage.database_path = Some(val);
        }
        if let Ok(val) = std::env::var("GEMGRADE_STORAGE_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GEMGRADE_GRADING_CONCURRENT_QUERIES") {
            if let Ok(v) = val.parse::<bool>() {
                config.grading.concurrent_queries = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GEMGRADE_MAPPING_FALLBACK_SHAPE") {
            config.mapping.fallback_shape = Some(val);
        }
    }

    fn apply_overrides(config: &mut GemgradeConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.database_path {
            config.storage.database_path = Some(v.clone());
        }
        if let Some(v) = overrides.read_pool_size {
            config.storage.read_pool_size = Some(v);
        }
        if let Some(v) = overrides.concurrent_queries {
            config.grading.concurrent_queries = Some(v);
        }
        if let Some(ref v) = overrides.fallback_shape {
            config.mapping.fallback_shape = Some(v.clone());
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

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
