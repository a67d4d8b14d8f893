//! One-shot balance computation over an attendance table.
//!
//! [`compute_balance_report`] is the entry point the host calls once its
//! table is available. It extracts every row, accumulates the balance,
//! projects the remaining requirement, picks the overtime tier, builds the
//! banner and annotates each row, recording each decision in the audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BalanceConfig;
use crate::models::{
    AttendanceRow, AuditStep, AuditTrace, AuditWarning, BalanceReport, BalanceState, BannerColor,
    BannerData, DayOutcome, OvertimeTier, RowBalance,
};

use super::balance_accumulator::BalanceAccumulator;
use super::banner_builder::build_banner_lines_for_tier;
use super::day_classifier::extract_day_record;
use super::overtime_tier::classify_overtime;
use super::projection::project_remaining;
use super::time_format::{format_diff, format_hm};

/// Warning code for worked-time tokens whose minutes group is 60 or more.
pub const MINUTES_OUT_OF_RANGE: &str = "MINUTES_OUT_OF_RANGE";

/// Warning code for working days left out because their hours overflow the balance.
pub const BALANCE_OVERFLOW: &str = "BALANCE_OVERFLOW";

/// Computes the balance report for an ordered attendance table.
///
/// Rows must be in calendar order; the running balance shown on each row
/// depends on it.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::compute_balance_report;
/// use balance_engine::config::BalanceConfig;
/// use balance_engine::models::TableRow;
///
/// let rows = vec![
///     TableRow::new()
///         .with_cell("SCHEDULE", "Standard")
///         .with_cell("ALL_WORK_MINUTE", "9.00")
///         .with_cell("FIXED_WORK_MINUTE", "8.00"),
///     TableRow::new().with_cell("SCHEDULE", "Standard"),
///     TableRow::new().with_cell("SCHEDULE", "Standard(公休)"),
/// ];
///
/// let report = compute_balance_report(&rows, &BalanceConfig::default());
///
/// assert_eq!(report.rows[0].display.as_deref(), Some("+1:00"));
/// assert_eq!(report.banner.remaining_days, 1);
/// assert_eq!(report.banner_lines.len(), 2);
/// ```
pub fn compute_balance_report<R: AttendanceRow>(rows: &[R], config: &BalanceConfig) -> BalanceReport {
    let start_time = Instant::now();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut row_balances: Vec<RowBalance> = Vec::with_capacity(rows.len());
    let mut accumulator = BalanceAccumulator::new(config.expected_daily_hours);

    for (row_index, row) in rows.iter().enumerate() {
        let extracted = extract_day_record(row, config);
        for anomaly in extracted.anomalies {
            warnings.push(AuditWarning {
                code: MINUTES_OUT_OF_RANGE.to_string(),
                message: format!(
                    "Row {}: '{}' in column {} has 60 or more minutes and was used as written",
                    row_index, anomaly.token, anomaly.column
                ),
                severity: "low".to_string(),
            });
        }

        let outcome = accumulator.push(&extracted.record);
        if outcome == DayOutcome::Overflowed {
            warn!(row_index, "Worked time overflows the balance; day left out");
            warnings.push(AuditWarning {
                code: BALANCE_OVERFLOW.to_string(),
                message: format!(
                    "Row {}: worked time is too large to add to the balance and was left out",
                    row_index
                ),
                severity: "medium".to_string(),
            });
        }
        row_balances.push(annotate_row(row_index, outcome));
    }

    let state = accumulator.finish();
    let banner = project_remaining(&state, config.expected_daily_hours);
    let overtime_tier = classify_overtime(&banner, config);
    let banner_lines = build_banner_lines_for_tier(&banner, overtime_tier, config);

    let steps = vec![
        accumulation_step(1, rows.len(), &row_balances, &state, config),
        projection_step(2, &state, &banner, config),
        overtime_step(3, &banner, overtime_tier, config),
    ];

    info!(
        diff = %format_diff(banner.cumulative_diff),
        remaining_days = banner.remaining_days,
        remaining_required = %format_hm(banner.remaining_required),
        avg_per_day = %format_hm(banner.avg_per_day),
        projected_overtime = %format_hm(banner.projected_overtime),
        "Balance computed"
    );

    BalanceReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        rows: row_balances,
        banner,
        overtime_tier,
        banner_lines,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
        },
    }
}

fn annotate_row(row_index: usize, outcome: DayOutcome) -> RowBalance {
    let (display, color) = match outcome {
        DayOutcome::Completed { running_balance } => (
            Some(format_diff(running_balance)),
            Some(BannerColor::for_balance(running_balance)),
        ),
        DayOutcome::Remaining | DayOutcome::NotCounted | DayOutcome::Overflowed => (None, None),
    };

    RowBalance {
        row_index,
        outcome,
        display,
        color,
    }
}

fn accumulation_step(
    step_number: u32,
    row_count: usize,
    rows: &[RowBalance],
    state: &BalanceState,
    config: &BalanceConfig,
) -> AuditStep {
    let completed = rows
        .iter()
        .filter(|r| matches!(r.outcome, DayOutcome::Completed { .. }))
        .count();

    AuditStep {
        step_number,
        rule_id: "balance_accumulation".to_string(),
        rule_name: "Balance Accumulation".to_string(),
        input: serde_json::json!({
            "rows": row_count,
            "expected_daily_hours": config.expected_daily_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "cumulative_diff": state.cumulative_diff.normalize().to_string(),
            "overtime_diff": state.overtime_diff.normalize().to_string(),
            "remaining_days": state.remaining_days
        }),
        reasoning: format!(
            "{} completed working days, {} remaining, {} rows not counted; balance {}",
            completed,
            state.remaining_days,
            row_count - completed - state.remaining_days as usize,
            format_diff(state.cumulative_diff)
        ),
    }
}

fn projection_step(
    step_number: u32,
    state: &BalanceState,
    banner: &BannerData,
    config: &BalanceConfig,
) -> AuditStep {
    let reasoning = if banner.remaining_required <= Decimal::ZERO {
        format!(
            "Monthly requirement met with {} to spare",
            format_hm(banner.remaining_required)
        )
    } else if banner.remaining_days == 0 {
        format!(
            "{} still required but no working days remain",
            format_hm(banner.remaining_required)
        )
    } else {
        format!(
            "{} required over {} days, {} per day on average",
            format_hm(banner.remaining_required),
            banner.remaining_days,
            format_hm(banner.avg_per_day)
        )
    };

    AuditStep {
        step_number,
        rule_id: "remaining_projection".to_string(),
        rule_name: "Remaining Requirement Projection".to_string(),
        input: serde_json::json!({
            "remaining_days": state.remaining_days,
            "cumulative_diff": state.cumulative_diff.normalize().to_string(),
            "expected_daily_hours": config.expected_daily_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "remaining_required": banner.remaining_required.normalize().to_string(),
            "avg_per_day": banner.avg_per_day.normalize().to_string()
        }),
        reasoning,
    }
}

fn overtime_step(
    step_number: u32,
    banner: &BannerData,
    tier: OvertimeTier,
    config: &BalanceConfig,
) -> AuditStep {
    let overtime = format_hm(banner.projected_overtime);
    let limit = config.overtime_limit.normalize();

    let (level, reasoning) = match tier {
        OvertimeTier::Exceeded => (
            "exceeded",
            format!("Overtime {} has reached the {}h limit", overtime, limit),
        ),
        OvertimeTier::Approaching { max_daily } => (
            "approaching",
            format!(
                "Overtime {} is above {}h; averaging under {} over {} days stays within {}h",
                overtime,
                config.warning_threshold().normalize(),
                format_hm(max_daily),
                banner.remaining_days,
                limit
            ),
        ),
        OvertimeTier::None => (
            "none",
            format!("Overtime {} needs no warning", overtime),
        ),
    };

    AuditStep {
        step_number,
        rule_id: "overtime_tier".to_string(),
        rule_name: "Overtime Warning Tier".to_string(),
        input: serde_json::json!({
            "projected_overtime": banner.projected_overtime.normalize().to_string(),
            "overtime_limit": limit.to_string(),
            "warning_threshold": config.warning_threshold().normalize().to_string(),
            "remaining_days": banner.remaining_days
        }),
        output: serde_json::json!({ "level": level }),
        reasoning,
    }
}
