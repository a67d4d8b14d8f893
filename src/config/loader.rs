//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading balance
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::BalanceConfig;

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "balance.yaml";

/// Loads and provides access to balance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── balance.yaml   # Thresholds, holiday marker and column keys
/// ```
///
/// # Example
///
/// ```no_run
/// use balance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Overtime limit: {}h", loader.config().overtime_limit);
/// # Ok::<(), balance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: BalanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `balance.yaml` is missing
    /// - the file contains invalid YAML
    /// - a threshold fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = config_path.display().to_string();

        let content = fs::read_to_string(&config_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, "Loaded balance configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: BalanceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: BalanceConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying balance configuration.
    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }
}
