//! Attendance row access.
//!
//! The host page owns the table; the engine only needs text by semantic
//! column key. [`AttendanceRow`] is that seam, and [`TableRow`] is a plain
//! record for rows captured once and handed over.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read access to one row of the attendance table.
pub trait AttendanceRow {
    /// Returns the text of the cell for `key`, or `None` when the row has no such cell.
    fn cell_text(&self, key: &str) -> Option<&str>;
}

/// A captured attendance row keyed by column.
///
/// # Example
///
/// ```
/// use balance_engine::models::{AttendanceRow, TableRow};
///
/// let row = TableRow::new()
///     .with_cell("SCHEDULE", "Standard")
///     .with_cell("ALL_WORK_MINUTE", "8.30");
///
/// assert_eq!(row.cell_text("ALL_WORK_MINUTE"), Some("8.30"));
/// assert_eq!(row.cell_text("FIXED_WORK_MINUTE"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell text by column key.
    #[serde(default)]
    pub cells: HashMap<String, String>,
}

impl TableRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, replacing any previous value for the key.
    pub fn with_cell(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.cells.insert(key.into(), text.into());
        self
    }
}

impl AttendanceRow for TableRow {
    fn cell_text(&self, key: &str) -> Option<&str> {
        self.cells.get(key).map(String::as_str)
    }
}

impl<R: AttendanceRow + ?Sized> AttendanceRow for &R {
    fn cell_text(&self, key: &str) -> Option<&str> {
        (**self).cell_text(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cell_is_none() {
        let row = TableRow::new();
        assert_eq!(row.cell_text("SCHEDULE"), None);
    }

    #[test]
    fn test_with_cell_replaces_value() {
        let row = TableRow::new()
            .with_cell("ALL_WORK_MINUTE", "7.00")
            .with_cell("ALL_WORK_MINUTE", "8.00");
        assert_eq!(row.cell_text("ALL_WORK_MINUTE"), Some("8.00"));
    }

    #[test]
    fn test_deserialize_row_from_json() {
        let row: TableRow =
            serde_json::from_str(r#"{"cells": {"SCHEDULE": "Standard"}}"#).unwrap();
        assert_eq!(row.cell_text("SCHEDULE"), Some("Standard"));
    }

    #[test]
    fn test_reference_forwards_lookup() {
        let row = TableRow::new().with_cell("SCHEDULE", "Standard");
        let by_ref: &TableRow = &row;
        assert_eq!(AttendanceRow::cell_text(&by_ref, "SCHEDULE"), Some("Standard"));
    }
}
