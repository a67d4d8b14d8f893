//! Configuration types for balance calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `balance.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default daily target in hours.
pub const DEFAULT_EXPECTED_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default monthly overtime ceiling in hours.
pub const OVERTIME_LIMIT: Decimal = Decimal::from_parts(45, 0, 0, false, 0);

/// Default share of the ceiling above which the approaching warning fires.
pub const OVERTIME_WARNING_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Upper bound for the daily target: the hours in a day.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Upper bound for the monthly overtime ceiling: the hours in a 31-day month.
pub const MAX_OVERTIME_LIMIT: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// Default schedule text marking a public holiday.
pub const DEFAULT_HOLIDAY_MARKER: &str = "公休";

/// Semantic column keys used to read cells from an attendance row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnKeys {
    /// Column holding the actual worked time (e.g. "8.30").
    pub actual_worked: String,
    /// Column holding the contracted worked time for the day.
    pub contracted_worked: String,
    /// Column holding the schedule descriptor.
    pub schedule: String,
}

impl Default for ColumnKeys {
    fn default() -> Self {
        Self {
            actual_worked: "ALL_WORK_MINUTE".to_string(),
            contracted_worked: "FIXED_WORK_MINUTE".to_string(),
            schedule: "SCHEDULE".to_string(),
        }
    }
}

/// Thresholds and table layout for a balance calculation.
///
/// Every field falls back to its default when omitted from the YAML file.
///
/// # Example
///
/// ```
/// use balance_engine::config::{BalanceConfig, DEFAULT_EXPECTED_HOURS, OVERTIME_LIMIT};
///
/// let config = BalanceConfig::default();
/// assert_eq!(config.expected_daily_hours, DEFAULT_EXPECTED_HOURS);
/// assert_eq!(config.overtime_limit, OVERTIME_LIMIT);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Hours expected on every working day.
    pub expected_daily_hours: Decimal,
    /// Monthly overtime ceiling in hours.
    pub overtime_limit: Decimal,
    /// Fraction of the ceiling that triggers the approaching warning.
    pub warning_ratio: Decimal,
    /// Substring of the schedule cell that marks a public holiday.
    pub holiday_marker: String,
    /// Column keys for reading attendance rows.
    pub columns: ColumnKeys,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            expected_daily_hours: DEFAULT_EXPECTED_HOURS,
            overtime_limit: OVERTIME_LIMIT,
            warning_ratio: OVERTIME_WARNING_RATIO,
            holiday_marker: DEFAULT_HOLIDAY_MARKER.to_string(),
            columns: ColumnKeys::default(),
        }
    }
}

impl BalanceConfig {
    /// Returns the overtime level above which the approaching warning fires.
    pub fn warning_threshold(&self) -> Decimal {
        self.overtime_limit * self.warning_ratio
    }

    /// Returns a copy with the given thresholds replaced.
    pub fn with_overrides(
        &self,
        expected_daily_hours: Option<Decimal>,
        overtime_limit: Option<Decimal>,
    ) -> Self {
        let mut config = self.clone();
        if let Some(hours) = expected_daily_hours {
            config.expected_daily_hours = hours;
        }
        if let Some(limit) = overtime_limit {
            config.overtime_limit = limit;
        }
        config
    }

    /// Checks that every threshold is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when a threshold is not
    /// positive or exceeds [`MAX_DAILY_HOURS`] / [`MAX_OVERTIME_LIMIT`], the
    /// warning ratio lies outside `(0, 1]`, or a column key or
    /// the holiday marker is empty.
    pub fn validate(&self) -> EngineResult<()> {
        if self.expected_daily_hours <= Decimal::ZERO {
            return Err(invalid("expected_daily_hours", "must be greater than zero"));
        }
        if self.expected_daily_hours > MAX_DAILY_HOURS {
            return Err(invalid("expected_daily_hours", "must be at most 24"));
        }
        if self.overtime_limit <= Decimal::ZERO {
            return Err(invalid("overtime_limit", "must be greater than zero"));
        }
        if self.overtime_limit > MAX_OVERTIME_LIMIT {
            return Err(invalid("overtime_limit", "must be at most 744"));
        }
        if self.warning_ratio <= Decimal::ZERO || self.warning_ratio > Decimal::ONE {
            return Err(invalid("warning_ratio", "must be within (0, 1]"));
        }
        let keys = [
            ("columns.actual_worked", &self.columns.actual_worked),
            ("columns.contracted_worked", &self.columns.contracted_worked),
            ("columns.schedule", &self.columns.schedule),
            ("holiday_marker", &self.holiday_marker),
        ];
        for (field, key) in keys {
            if key.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_EXPECTED_HOURS, dec("8"));
        assert_eq!(OVERTIME_LIMIT, dec("45"));
        assert_eq!(OVERTIME_WARNING_RATIO, dec("0.8"));
    }

    #[test]
    fn test_warning_threshold_is_eighty_percent_of_limit() {
        let config = BalanceConfig::default();
        assert_eq!(config.warning_threshold(), dec("36"));
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: BalanceConfig = serde_yaml::from_str("overtime_limit: 30\n").unwrap();
        assert_eq!(config.overtime_limit, dec("30"));
        assert_eq!(config.expected_daily_hours, dec("8"));
        assert_eq!(config.columns.schedule, "SCHEDULE");
        assert_eq!(config.holiday_marker, "公休");
    }

    #[test]
    fn test_with_overrides_replaces_only_given_values() {
        let config = BalanceConfig::default().with_overrides(Some(dec("7.5")), None);
        assert_eq!(config.expected_daily_hours, dec("7.5"));
        assert_eq!(config.overtime_limit, dec("45"));
    }

    #[test]
    fn test_validate_rejects_zero_expected_hours() {
        let config = BalanceConfig::default().with_overrides(Some(Decimal::ZERO), None);
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "expected_daily_hours");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_limit() {
        let config = BalanceConfig::default().with_overrides(None, Some(dec("-1")));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "overtime_limit"
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_thresholds() {
        let config = BalanceConfig::default()
            .with_overrides(Some(dec("79228162514264337593543950335")), None);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "expected_daily_hours"
        ));

        let config = BalanceConfig::default().with_overrides(None, Some(dec("745")));
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "overtime_limit"
        ));
    }

    #[test]
    fn test_validate_accepts_upper_bounds() {
        let config = BalanceConfig::default()
            .with_overrides(Some(MAX_DAILY_HOURS), Some(MAX_OVERTIME_LIMIT));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ratio_above_one() {
        let config = BalanceConfig {
            warning_ratio: dec("1.2"),
            ..BalanceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_column_key() {
        let mut config = BalanceConfig::default();
        config.columns.schedule = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { field, .. }) if field == "columns.schedule"
        ));
    }
}
