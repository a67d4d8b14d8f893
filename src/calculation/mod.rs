//! Calculation logic for the Balance Engine.
//!
//! This module contains the numeric core: worked-time parsing, `H:MM`
//! formatting, working-day classification, running balance accumulation,
//! projection of the remaining requirement, overtime tier selection, banner
//! construction, and the one-shot report that chains them together.

mod balance_accumulator;
mod balance_report;
mod banner_builder;
mod day_classifier;
mod overtime_tier;
mod projection;
mod time_format;
mod time_parser;

pub use balance_accumulator::{BalanceAccumulator, accumulate_balance};
pub use balance_report::{BALANCE_OVERFLOW, MINUTES_OUT_OF_RANGE, compute_balance_report};
pub use banner_builder::{GOAL_CLEARED_MARKER, build_banner_lines, build_banner_lines_for_tier};
pub use day_classifier::{ExtractedDay, TokenAnomaly, extract_day_record, is_working_day};
pub use overtime_tier::{classify_overtime, max_daily_hours};
pub use projection::project_remaining;
pub use time_format::{format_diff, format_hm};
pub use time_parser::{MINUTES_PER_HOUR, WorkTime, parse_work_time, parse_work_time_parts};
