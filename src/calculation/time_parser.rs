//! Worked-time token parsing.
//!
//! Attendance cells show durations as `H.MM`, where the two digits after the
//! dot are minutes, not a decimal fraction: `"8.30"` is eight and a half
//! hours.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

static WORK_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only; `\d` would also admit other Unicode digits.
    Regex::new(r"^([0-9]+)\.([0-9]{2})$").expect("work time pattern is valid")
});

/// A worked-time token split into its components.
///
/// The minutes group is taken as written; values of 60 and above are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTime {
    /// Whole hours.
    pub hours: Decimal,
    /// The two-digit minutes group.
    pub minutes: u32,
}

impl WorkTime {
    /// Converts to fractional hours: `hours + minutes / 60`.
    ///
    /// Returns `None` when the sum does not fit in a [`Decimal`].
    pub fn to_hours(&self) -> Option<Decimal> {
        self.hours
            .checked_add(Decimal::from(self.minutes) / MINUTES_PER_HOUR)
    }

    /// Returns false when the minutes group is 60 or more.
    pub fn minutes_in_range(&self) -> bool {
        self.minutes < 60
    }
}

/// Splits a worked-time token into hours and minutes.
///
/// Returns `None` unless the trimmed text is one or more digits, a dot, and
/// exactly two digits. An hour group too large for a [`Decimal`] is also
/// rejected.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::parse_work_time_parts;
///
/// let parts = parse_work_time_parts(" 8.75 ").unwrap();
/// assert_eq!(parts.minutes, 75);
/// assert!(!parts.minutes_in_range());
///
/// assert!(parse_work_time_parts("8:30").is_none());
/// ```
pub fn parse_work_time_parts(text: &str) -> Option<WorkTime> {
    let captures = WORK_TIME_PATTERN.captures(text.trim())?;
    let hours = Decimal::from_str(captures.get(1)?.as_str()).ok()?;
    let minutes = captures.get(2)?.as_str().parse::<u32>().ok()?;
    Some(WorkTime { hours, minutes })
}

/// Parses a worked-time token into fractional hours.
///
/// Returns `None` for anything [`parse_work_time_parts`] rejects and for
/// tokens whose value overflows a [`Decimal`].
///
/// # Examples
///
/// ```
/// use balance_engine::calculation::parse_work_time;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_work_time("8.30"), Some(Decimal::from_str("8.5").unwrap()));
/// assert_eq!(parse_work_time("12.45"), Some(Decimal::from_str("12.75").unwrap()));
/// assert_eq!(parse_work_time(""), None);
/// assert_eq!(parse_work_time("8.0"), None);
/// ```
pub fn parse_work_time(text: &str) -> Option<Decimal> {
    parse_work_time_parts(text)?.to_hours()
}
