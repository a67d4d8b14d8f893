//! Per-day records and the running balance state.
//!
//! This module contains the [`DayRecord`] extracted from each attendance row,
//! the [`BalanceState`] accumulated over a month, and the [`DayOutcome`]
//! describing how a single record affected that state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One attendance row reduced to the values the engine needs.
///
/// Hour values are fractional hours: `8.5` is eight and a half hours.
///
/// # Example
///
/// ```
/// use balance_engine::models::DayRecord;
/// use rust_decimal::Decimal;
///
/// let completed = DayRecord::worked(Decimal::new(85, 1), Some(Decimal::new(8, 0)));
/// assert!(completed.is_working_day);
/// assert_eq!(completed.actual_worked, Some(Decimal::new(85, 1)));
///
/// let upcoming = DayRecord::scheduled();
/// assert_eq!(upcoming.actual_worked, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Whether the day is a scheduled working day.
    pub is_working_day: bool,
    /// Hours actually worked, absent when not yet recorded.
    pub actual_worked: Option<Decimal>,
    /// Contracted hours for the day, absent when not provided.
    pub contracted_worked: Option<Decimal>,
}

impl DayRecord {
    /// A working day with recorded time.
    pub fn worked(actual: Decimal, contracted: Option<Decimal>) -> Self {
        Self {
            is_working_day: true,
            actual_worked: Some(actual),
            contracted_worked: contracted,
        }
    }

    /// A working day that has not been worked yet.
    pub fn scheduled() -> Self {
        Self {
            is_working_day: true,
            actual_worked: None,
            contracted_worked: None,
        }
    }

    /// A weekend, public holiday or otherwise unscheduled day.
    pub fn day_off() -> Self {
        Self {
            is_working_day: false,
            actual_worked: None,
            contracted_worked: None,
        }
    }
}

/// The balance accumulated across a month of day records.
///
/// All fields start at zero and only move forward while rows are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceState {
    /// Running total of (actual - daily target) over completed working days.
    pub cumulative_diff: Decimal,
    /// Running total of (actual - contracted) over completed working days.
    pub overtime_diff: Decimal,
    /// Scheduled working days without recorded time.
    pub remaining_days: u32,
}

/// How a single day record was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayOutcome {
    /// A working day with recorded time; carries the balance after this day.
    Completed {
        /// The cumulative balance including this day.
        running_balance: Decimal,
    },
    /// A working day still to come.
    Remaining,
    /// A day that does not affect the balance.
    NotCounted,
    /// A working day whose hours would overflow the balance; it is left out.
    Overflowed,
}
