//! Projection of the remaining monthly requirement.

use rust_decimal::Decimal;

use crate::models::{BalanceState, BannerData};

/// Derives the banner values from a finished balance.
///
/// - `remaining_required = remaining_days * expected_daily_hours - cumulative_diff`
/// - `avg_per_day = remaining_required / remaining_days`, or zero with no days left
/// - `projected_overtime` is the overtime balance as it stands
///
/// Values beyond the [`Decimal`] range saturate.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::project_remaining;
/// use balance_engine::config::DEFAULT_EXPECTED_HOURS;
/// use balance_engine::models::BalanceState;
/// use rust_decimal::Decimal;
///
/// let state = BalanceState {
///     cumulative_diff: Decimal::new(-4, 0),
///     overtime_diff: Decimal::ZERO,
///     remaining_days: 4,
/// };
/// let data = project_remaining(&state, DEFAULT_EXPECTED_HOURS);
/// assert_eq!(data.remaining_required, Decimal::new(36, 0));
/// assert_eq!(data.avg_per_day, Decimal::new(9, 0));
/// ```
pub fn project_remaining(state: &BalanceState, expected_daily_hours: Decimal) -> BannerData {
    let days = Decimal::from(state.remaining_days);
    let remaining_required = days
        .saturating_mul(expected_daily_hours)
        .saturating_sub(state.cumulative_diff);
    let avg_per_day = remaining_required
        .checked_div(days)
        .unwrap_or(Decimal::ZERO);

    BannerData {
        remaining_days: state.remaining_days,
        remaining_required,
        avg_per_day,
        cumulative_diff: state.cumulative_diff,
        projected_overtime: state.overtime_diff,
    }
}
