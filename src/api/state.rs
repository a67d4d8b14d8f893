//! Application state for the Balance Engine API.

use std::sync::Arc;

use crate::config::{BalanceConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded balance configuration; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the balance configuration.
    pub fn config(&self) -> &BalanceConfig {
        self.config.config()
    }
}
