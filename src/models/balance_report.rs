//! Balance report models for the Balance Engine.
//!
//! This module contains the [`BalanceReport`] type and its associated
//! structures that capture all outputs of one balance computation: per-row
//! annotations, banner values and lines, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BannerColor, BannerData, BannerLine, DayOutcome, OvertimeTier};

/// The balance column entry for one table row.
///
/// Only completed working days carry a display value; other rows leave the
/// balance cell empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowBalance {
    /// Zero-based position of the row in the table.
    pub row_index: usize,
    /// How the row was counted.
    pub outcome: DayOutcome,
    /// Signed `H:MM` running balance, for completed working days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Color of the running balance, for completed working days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<BannerColor>,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag suspicious input that was still used as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a balance computation.
///
/// # Example
///
/// ```
/// use balance_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one balance computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// Balance column entries, one per input row, in input order.
    pub rows: Vec<RowBalance>,
    /// Values summarized on the banner.
    pub banner: BannerData,
    /// The overtime warning level.
    pub overtime_tier: OvertimeTier,
    /// Styled banner lines, two or three of them.
    pub banner_lines: Vec<BannerLine>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl BalanceReport {
    /// Returns the final time balance.
    pub fn cumulative_diff(&self) -> Decimal {
        self.banner.cumulative_diff
    }
}
