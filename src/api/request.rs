//! Request types for the Balance Engine API.
//!
//! This module defines the JSON request body shared by the `/balance` and
//! `/balance/banner` endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TableRow;

/// Request body for the balance endpoints.
///
/// Rows are sent in table order. The optional thresholds replace the
/// configured ones for this request only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The attendance table rows.
    pub rows: Vec<RowRequest>,
    /// Override for the daily target in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_daily_hours: Option<Decimal>,
    /// Override for the monthly overtime ceiling in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_limit: Option<Decimal>,
}

/// One attendance row in a balance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowRequest {
    /// Cell text by column key (e.g. `"ALL_WORK_MINUTE": "8.30"`).
    #[serde(default)]
    pub cells: HashMap<String, String>,
}

impl From<RowRequest> for TableRow {
    fn from(req: RowRequest) -> Self {
        TableRow { cells: req.cells }
    }
}
