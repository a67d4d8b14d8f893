//! Running balance accumulation.
//!
//! This module walks day records once, in table order, and maintains the
//! time balance against the daily target, the overtime balance against
//! contracted hours, and the count of working days still to come.

use rust_decimal::Decimal;

use crate::models::{BalanceState, DayOutcome, DayRecord};

/// Single-pass accumulator over day records.
///
/// # Example
///
/// ```
/// use balance_engine::calculation::BalanceAccumulator;
/// use balance_engine::config::DEFAULT_EXPECTED_HOURS;
/// use balance_engine::models::{DayOutcome, DayRecord};
/// use rust_decimal::Decimal;
///
/// let mut accumulator = BalanceAccumulator::new(DEFAULT_EXPECTED_HOURS);
/// let outcome = accumulator.push(&DayRecord::worked(Decimal::new(9, 0), None));
/// assert_eq!(outcome, DayOutcome::Completed { running_balance: Decimal::ONE });
///
/// accumulator.push(&DayRecord::scheduled());
/// let state = accumulator.finish();
/// assert_eq!(state.cumulative_diff, Decimal::ONE);
/// assert_eq!(state.remaining_days, 1);
/// ```
#[derive(Debug, Clone)]
pub struct BalanceAccumulator {
    expected_daily_hours: Decimal,
    state: BalanceState,
}

impl BalanceAccumulator {
    /// Creates an accumulator with all balances at zero.
    pub fn new(expected_daily_hours: Decimal) -> Self {
        Self {
            expected_daily_hours,
            state: BalanceState::default(),
        }
    }

    /// Folds one day into the balance and reports how it was counted.
    ///
    /// A day whose hours would overflow either balance leaves the state
    /// untouched and is reported as [`DayOutcome::Overflowed`].
    pub fn push(&mut self, day: &DayRecord) -> DayOutcome {
        if !day.is_working_day {
            return DayOutcome::NotCounted;
        }

        match day.actual_worked {
            Some(actual) => match self.advance(actual, day.contracted_worked) {
                Some((cumulative_diff, overtime_diff)) => {
                    self.state.cumulative_diff = cumulative_diff;
                    self.state.overtime_diff = overtime_diff;
                    DayOutcome::Completed {
                        running_balance: cumulative_diff,
                    }
                }
                None => DayOutcome::Overflowed,
            },
            None => {
                self.state.remaining_days += 1;
                DayOutcome::Remaining
            }
        }
    }

    fn advance(&self, actual: Decimal, contracted: Option<Decimal>) -> Option<(Decimal, Decimal)> {
        let cumulative_diff = self
            .state
            .cumulative_diff
            .checked_add(actual.checked_sub(self.expected_daily_hours)?)?;
        // Overtime only moves on days that state their contracted hours.
        let overtime_diff = match contracted {
            Some(contracted) => self
                .state
                .overtime_diff
                .checked_add(actual.checked_sub(contracted)?)?,
            None => self.state.overtime_diff,
        };
        Some((cumulative_diff, overtime_diff))
    }

    /// Returns the balance so far.
    pub fn state(&self) -> &BalanceState {
        &self.state
    }

    /// Consumes the accumulator and returns the final balance.
    pub fn finish(self) -> BalanceState {
        self.state
    }
}

/// Accumulates a whole month of day records.
pub fn accumulate_balance<'a, I>(days: I, expected_daily_hours: Decimal) -> BalanceState
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut accumulator = BalanceAccumulator::new(expected_daily_hours);
    for day in days {
        accumulator.push(day);
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXPECTED_HOURS;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let state = accumulate_balance(std::iter::empty(), DEFAULT_EXPECTED_HOURS);
        assert_eq!(state, BalanceState::default());
    }

    #[test]
    fn test_completed_day_adds_difference_to_target() {
        let days = [DayRecord::worked(dec("8.5"), None)];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(state.cumulative_diff, dec("0.5"));
        assert_eq!(state.overtime_diff, Decimal::ZERO);
        assert_eq!(state.remaining_days, 0);
    }

    #[test]
    fn test_short_day_goes_negative() {
        let days = [DayRecord::worked(dec("6"), Some(dec("8")))];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(state.cumulative_diff, dec("-2"));
        assert_eq!(state.overtime_diff, dec("-2"));
    }

    #[test]
    fn test_overtime_tracks_contracted_hours_not_target() {
        let days = [
            DayRecord::worked(dec("9"), Some(dec("7"))),
            DayRecord::worked(dec("8"), Some(dec("6"))),
        ];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(state.cumulative_diff, dec("1"));
        assert_eq!(state.overtime_diff, dec("4"));
    }

    #[test]
    fn test_missing_contracted_skips_overtime_only() {
        let days = [
            DayRecord::worked(dec("10"), None),
            DayRecord::worked(dec("9"), Some(dec("8"))),
        ];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(state.cumulative_diff, dec("3"));
        assert_eq!(state.overtime_diff, dec("1"));
    }

    #[test]
    fn test_scheduled_day_without_time_is_remaining() {
        let days = [
            DayRecord::worked(dec("8"), Some(dec("8"))),
            DayRecord::scheduled(),
            DayRecord::scheduled(),
        ];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(state.remaining_days, 2);
        assert_eq!(state.cumulative_diff, Decimal::ZERO);
    }

    #[test]
    fn test_day_off_changes_nothing() {
        let mut accumulator = BalanceAccumulator::new(DEFAULT_EXPECTED_HOURS);
        assert_eq!(accumulator.push(&DayRecord::day_off()), DayOutcome::NotCounted);

        // Time recorded on an unscheduled day is ignored too.
        let weekend_work = DayRecord {
            is_working_day: false,
            actual_worked: Some(dec("4")),
            contracted_worked: Some(dec("0")),
        };
        assert_eq!(accumulator.push(&weekend_work), DayOutcome::NotCounted);
        assert_eq!(accumulator.finish(), BalanceState::default());
    }

    #[test]
    fn test_running_balance_reported_per_completed_day() {
        let mut accumulator = BalanceAccumulator::new(DEFAULT_EXPECTED_HOURS);

        let first = accumulator.push(&DayRecord::worked(dec("9"), None));
        let second = accumulator.push(&DayRecord::worked(dec("7.5"), None));
        let third = accumulator.push(&DayRecord::scheduled());

        assert_eq!(first, DayOutcome::Completed { running_balance: dec("1") });
        assert_eq!(second, DayOutcome::Completed { running_balance: dec("0.5") });
        assert_eq!(third, DayOutcome::Remaining);
        assert_eq!(accumulator.state().remaining_days, 1);
    }

    #[test]
    fn test_overflowing_day_is_left_out() {
        let huge = dec("50000000000000000000000000000");
        let mut accumulator = BalanceAccumulator::new(DEFAULT_EXPECTED_HOURS);

        let first = accumulator.push(&DayRecord::worked(huge, Some(dec("8"))));
        assert!(matches!(first, DayOutcome::Completed { .. }));

        let second = accumulator.push(&DayRecord::worked(huge, Some(dec("8"))));
        assert_eq!(second, DayOutcome::Overflowed);
        assert_eq!(accumulator.state().cumulative_diff, huge - dec("8"));
        assert_eq!(accumulator.state().overtime_diff, huge - dec("8"));

        let third = accumulator.push(&DayRecord::worked(dec("9"), Some(dec("8"))));
        assert!(matches!(third, DayOutcome::Completed { .. }));
        assert_eq!(accumulator.state().overtime_diff, huge - dec("7"));
    }

    #[test]
    fn test_overflowing_overtime_keeps_time_balance_unchanged() {
        let huge = dec("50000000000000000000000000000");
        let mut accumulator = BalanceAccumulator::new(DEFAULT_EXPECTED_HOURS);

        accumulator.push(&DayRecord::worked(dec("0"), Some(huge)));
        let outcome = accumulator.push(&DayRecord::worked(dec("0"), Some(huge)));

        assert_eq!(outcome, DayOutcome::Overflowed);
        assert_eq!(accumulator.state().cumulative_diff, dec("-8"));
        assert_eq!(accumulator.state().overtime_diff, -huge);
    }

    #[test]
    fn test_custom_daily_target() {
        let days = [DayRecord::worked(dec("8"), None)];
        let state = accumulate_balance(&days, dec("7.5"));
        assert_eq!(state.cumulative_diff, dec("0.5"));
    }

    #[test]
    fn test_thirds_of_hours_accumulate_exactly_enough() {
        // Three days of 8:20 against an 8h target make one hour.
        let twenty_past = dec("8") + dec("20") / dec("60");
        let days = [
            DayRecord::worked(twenty_past, None),
            DayRecord::worked(twenty_past, None),
            DayRecord::worked(twenty_past, None),
        ];
        let state = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);
        assert_eq!(crate::calculation::format_diff(state.cumulative_diff), "+1:00");
    }
}
