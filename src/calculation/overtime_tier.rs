//! Overtime warning tier selection.
//!
//! The tiers are checked in order: reaching the limit wins over the
//! approaching warning, even when the overtime equals the limit exactly.

use rust_decimal::Decimal;

use crate::config::BalanceConfig;
use crate::models::{BannerData, OvertimeTier};

/// Selects the overtime warning tier for the banner.
///
/// - `projected_overtime >= overtime_limit` → [`OvertimeTier::Exceeded`]
/// - `projected_overtime > overtime_limit * warning_ratio` with days left →
///   [`OvertimeTier::Approaching`], carrying the highest average daily hours
///   that keeps overtime under the limit
/// - otherwise [`OvertimeTier::None`]
///
/// # Example
///
/// ```
/// use balance_engine::calculation::classify_overtime;
/// use balance_engine::config::BalanceConfig;
/// use balance_engine::models::{BannerData, OvertimeTier};
/// use rust_decimal::Decimal;
///
/// let data = BannerData {
///     remaining_days: 5,
///     remaining_required: Decimal::new(40, 0),
///     avg_per_day: Decimal::new(8, 0),
///     cumulative_diff: Decimal::ZERO,
///     projected_overtime: Decimal::new(45, 0),
/// };
/// assert_eq!(classify_overtime(&data, &BalanceConfig::default()), OvertimeTier::Exceeded);
/// ```
pub fn classify_overtime(data: &BannerData, config: &BalanceConfig) -> OvertimeTier {
    let overtime = data.projected_overtime;

    if overtime >= config.overtime_limit {
        return OvertimeTier::Exceeded;
    }

    if overtime > config.warning_threshold() && data.remaining_days > 0 {
        return OvertimeTier::Approaching {
            max_daily: max_daily_hours(
                overtime,
                data.remaining_days,
                config.expected_daily_hours,
                config.overtime_limit,
            ),
        };
    }

    OvertimeTier::None
}

/// Highest average daily hours over `remaining_days` that keeps overtime
/// under `overtime_limit`.
///
/// Returns `expected_daily_hours` when no days remain.
pub fn max_daily_hours(
    projected_overtime: Decimal,
    remaining_days: u32,
    expected_daily_hours: Decimal,
    overtime_limit: Decimal,
) -> Decimal {
    let headroom = overtime_limit
        .saturating_sub(projected_overtime)
        .checked_div(Decimal::from(remaining_days))
        .unwrap_or(Decimal::ZERO);
    expected_daily_hours.saturating_add(headroom)
}
