//! Working-day classification and day record extraction.
//!
//! This module turns an [`AttendanceRow`] into a [`DayRecord`]: it decides
//! whether the row is a scheduled working day and parses the actual and
//! contracted worked time.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::BalanceConfig;
use crate::models::{AttendanceRow, DayRecord};

use super::time_parser::parse_work_time_parts;

/// A worked-time token whose minutes group is 60 or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAnomaly {
    /// Column the token was read from.
    pub column: String,
    /// The token as it appeared in the cell, trimmed.
    pub token: String,
}

/// A day record together with anything odd noticed while extracting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDay {
    /// The extracted record.
    pub record: DayRecord,
    /// Tokens with out-of-range minutes; their values are still used.
    pub anomalies: Vec<TokenAnomaly>,
}

/// Returns true when the schedule cell marks a working day.
///
/// A row is a working day when its schedule cell exists, is not blank, and
/// does not contain `holiday_marker`.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::is_working_day;
/// use balance_engine::models::TableRow;
///
/// let row = TableRow::new().with_cell("SCHEDULE", "複数回休憩");
/// assert!(is_working_day(&row, "SCHEDULE", "公休"));
///
/// let holiday = TableRow::new().with_cell("SCHEDULE", "複数回休憩(公休)");
/// assert!(!is_working_day(&holiday, "SCHEDULE", "公休"));
/// ```
pub fn is_working_day<R: AttendanceRow + ?Sized>(
    row: &R,
    schedule_key: &str,
    holiday_marker: &str,
) -> bool {
    match row.cell_text(schedule_key) {
        Some(text) => {
            let text = text.trim();
            !text.is_empty() && !text.contains(holiday_marker)
        }
        None => false,
    }
}

/// Extracts the [`DayRecord`] for a row using the configured column keys.
///
/// A missing cell, an unparseable token and a token too large for a
/// [`Decimal`](rust_decimal::Decimal) are all treated as absent time.
pub fn extract_day_record<R: AttendanceRow + ?Sized>(
    row: &R,
    config: &BalanceConfig,
) -> ExtractedDay {
    let columns = &config.columns;
    let mut anomalies = Vec::new();

    let mut read_hours = |key: &str| {
        let token = row.cell_text(key)?;
        let parts = parse_work_time_parts(token)?;
        if !parts.minutes_in_range() {
            warn!(column = key, token = token.trim(), "Minutes group is 60 or more");
            anomalies.push(TokenAnomaly {
                column: key.to_string(),
                token: token.trim().to_string(),
            });
        }
        parts.to_hours()
    };

    let actual_worked = read_hours(&columns.actual_worked);
    let contracted_worked = read_hours(&columns.contracted_worked);
    let is_working_day = is_working_day(row, &columns.schedule, &config.holiday_marker);

    ExtractedDay {
        record: DayRecord {
            is_working_day,
            actual_worked,
            contracted_worked,
        },
        anomalies,
    }
}
