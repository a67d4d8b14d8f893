//! Configuration loading and management for the Balance Engine.
//!
//! This module loads the daily target, the monthly overtime ceiling and the
//! table column keys from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use balance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Daily target: {}h", loader.config().expected_daily_hours);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    BalanceConfig, ColumnKeys, DEFAULT_EXPECTED_HOURS, DEFAULT_HOLIDAY_MARKER, MAX_DAILY_HOURS,
    MAX_OVERTIME_LIMIT, OVERTIME_LIMIT, OVERTIME_WARNING_RATIO,
};
