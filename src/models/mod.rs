//! Core data models for the Balance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balance_report;
mod banner;
mod day_record;
mod table_row;

pub use balance_report::{AuditStep, AuditTrace, AuditWarning, BalanceReport, RowBalance};
pub use banner::{BannerColor, BannerData, BannerLine, BannerSegment, OvertimeTier};
pub use day_record::{BalanceState, DayOutcome, DayRecord};
pub use table_row::{AttendanceRow, TableRow};
