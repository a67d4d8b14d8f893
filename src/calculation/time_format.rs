//! `H:MM` formatting of fractional hours.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::time_parser::MINUTES_PER_HOUR;

/// Formats the magnitude of `hours` as `H:MM`.
///
/// Minutes are rounded half-up; a value that rounds to 60 minutes carries
/// into the hour. Hours are never padded and may exceed 99. The sign is
/// ignored.
///
/// # Examples
///
/// ```
/// use balance_engine::calculation::format_hm;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(format_hm(dec("8.5")), "8:30");
/// assert_eq!(format_hm(dec("-2.25")), "2:15");
/// assert_eq!(format_hm(dec("99.9917")), "100:00");
/// ```
pub fn format_hm(hours: Decimal) -> String {
    let abs = hours.abs();
    let mut whole = abs.floor();
    let mut minutes = ((abs - whole) * MINUTES_PER_HOUR)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or_default();

    if minutes == 60 {
        whole += Decimal::ONE;
        minutes = 0;
    }

    format!("{}:{:02}", whole.normalize(), minutes)
}

/// Formats `hours` as a signed `+H:MM` / `-H:MM` difference.
///
/// Zero is rendered with a plus sign.
///
/// # Examples
///
/// ```
/// use balance_engine::calculation::format_diff;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_diff(Decimal::ZERO), "+0:00");
/// assert_eq!(format_diff(Decimal::from_str("-0.5").unwrap()), "-0:30");
/// ```
pub fn format_diff(hours: Decimal) -> String {
    let sign = if hours >= Decimal::ZERO { '+' } else { '-' };
    format!("{}{}", sign, format_hm(hours))
}
