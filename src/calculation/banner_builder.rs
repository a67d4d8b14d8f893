//! Summary banner construction.
//!
//! The banner has two or three lines:
//!
//! 1. remaining working days and the hours still required, with the average
//!    daily pace, or a goal-cleared marker once nothing is owed;
//! 2. the current time balance, green when non-negative and red otherwise;
//! 3. an overtime warning, only when [`classify_overtime`] selects a tier.

use rust_decimal::Decimal;

use crate::config::BalanceConfig;
use crate::models::{BannerColor, BannerData, BannerLine, BannerSegment, OvertimeTier};

use super::overtime_tier::classify_overtime;
use super::time_format::{format_diff, format_hm};

/// Marker shown once the monthly requirement has been met.
pub const GOAL_CLEARED_MARKER: &str = "goal cleared";

/// Builds the banner lines for `data`.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::build_banner_lines;
/// use balance_engine::config::BalanceConfig;
/// use balance_engine::models::{BannerColor, BannerData};
/// use rust_decimal::Decimal;
///
/// let data = BannerData {
///     remaining_days: 10,
///     remaining_required: Decimal::new(80, 0),
///     avg_per_day: Decimal::new(8, 0),
///     cumulative_diff: Decimal::ZERO,
///     projected_overtime: Decimal::new(20, 0),
/// };
/// let lines = build_banner_lines(&data, &BalanceConfig::default());
///
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].text().contains("80:00"));
/// assert!(lines[1].text().contains("+0:00"));
/// assert!(lines[1].has_color(BannerColor::Green));
/// ```
pub fn build_banner_lines(data: &BannerData, config: &BalanceConfig) -> Vec<BannerLine> {
    let tier = classify_overtime(data, config);
    build_banner_lines_for_tier(data, tier, config)
}

/// Builds the banner lines for `data` with an already selected tier.
pub fn build_banner_lines_for_tier(
    data: &BannerData,
    tier: OvertimeTier,
    config: &BalanceConfig,
) -> Vec<BannerLine> {
    let mut lines = vec![required_line(data), balance_line(data.cumulative_diff)];
    if let Some(line) = overtime_line(data.projected_overtime, tier, config) {
        lines.push(line);
    }
    lines
}

fn required_line(data: &BannerData) -> BannerLine {
    let days = day_count(data.remaining_days);

    if data.remaining_required <= Decimal::ZERO {
        return BannerLine::new(vec![
            BannerSegment::bold(format!(
                "Remaining {} / Required {}",
                days,
                format_diff(data.remaining_required)
            )),
            BannerSegment::plain(" "),
            BannerSegment::bold_colored(format!("✓ {}", GOAL_CLEARED_MARKER), BannerColor::Green),
        ]);
    }

    BannerLine::new(vec![
        BannerSegment::bold(format!(
            "Remaining {} / Required {}",
            days,
            format_hm(data.remaining_required)
        )),
        BannerSegment::plain(" (average "),
        BannerSegment::bold(format_hm(data.avg_per_day)),
        BannerSegment::plain(" per day)"),
    ])
}

fn balance_line(cumulative_diff: Decimal) -> BannerLine {
    BannerLine::new(vec![
        BannerSegment::plain("Time balance: "),
        BannerSegment::colored(
            format_diff(cumulative_diff),
            BannerColor::for_balance(cumulative_diff),
        ),
    ])
}

fn overtime_line(overtime: Decimal, tier: OvertimeTier, config: &BalanceConfig) -> Option<BannerLine> {
    let pace = format!(
        "⚠ Overtime {} at {}h/day pace",
        format_hm(overtime),
        config.expected_daily_hours.normalize()
    );
    let limit = config.overtime_limit.normalize();

    let segment = match tier {
        OvertimeTier::None => return None,
        OvertimeTier::Exceeded => BannerSegment::bold_colored(
            format!("{}: {}h limit exceeded", pace, limit),
            BannerColor::Red,
        ),
        OvertimeTier::Approaching { max_daily } => BannerSegment::bold_colored(
            format!(
                "{}: approaching the {}h limit. Average under {} per day to avoid it",
                pace,
                limit,
                format_hm(max_daily)
            ),
            BannerColor::Orange,
        ),
    };

    Some(BannerLine::new(vec![segment]))
}

fn day_count(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}
