//! Property tests for the parsing, formatting and accumulation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use balance_engine::calculation::{
    accumulate_balance, build_banner_lines, format_diff, format_hm, parse_work_time,
    project_remaining,
};
use balance_engine::config::{BalanceConfig, DEFAULT_EXPECTED_HOURS};
use balance_engine::models::DayRecord;

/// Hours with up to four decimal places, either sign.
fn hours() -> impl Strategy<Value = Decimal> {
    (-2_000_000i64..2_000_000).prop_map(|n| Decimal::new(n, 4))
}

fn day() -> impl Strategy<Value = DayRecord> {
    prop_oneof![
        (0i64..1600, proptest::option::of(0i64..1600)).prop_map(|(actual, contracted)| {
            DayRecord::worked(Decimal::new(actual, 2), contracted.map(|c| Decimal::new(c, 2)))
        }),
        Just(DayRecord::scheduled()),
        Just(DayRecord::day_off()),
    ]
}

proptest! {
    #[test]
    fn formatted_minutes_are_always_two_digits_below_sixty(h in hours()) {
        let text = format_hm(h);
        let (whole, minutes) = text.split_once(':').unwrap();

        prop_assert!(!whole.is_empty());
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));
        prop_assert_eq!(minutes.len(), 2);
        prop_assert!(minutes.parse::<u32>().unwrap() < 60);
    }

    #[test]
    fn format_hm_ignores_sign(h in hours()) {
        prop_assert_eq!(format_hm(h), format_hm(-h));
    }

    #[test]
    fn format_diff_is_sign_plus_magnitude(h in hours()) {
        let sign = if h >= Decimal::ZERO { "+" } else { "-" };
        prop_assert_eq!(format_diff(h), format!("{}{}", sign, format_hm(h)));
    }

    #[test]
    fn parses_hour_minute_tokens(
        h in 0u32..10_000,
        m in 0u32..100,
        lead in "[ \t]{0,3}",
        trail in "[ \t]{0,3}",
    ) {
        let token = format!("{}.{:02}", h, m);
        let expected = Decimal::from(h) + Decimal::from(m) / Decimal::from(60);

        prop_assert_eq!(parse_work_time(&token), Some(expected));
        prop_assert_eq!(parse_work_time(&format!("{}{}{}", lead, token, trail)), Some(expected));
    }

    #[test]
    fn rejects_tokens_without_two_digit_minutes(h in 0u32..1000, m in 0u32..10) {
        prop_assert_eq!(parse_work_time(&format!("{}.{}", h, m)), None);
        prop_assert_eq!(parse_work_time(&format!("{}:{:02}", h, m)), None);
        prop_assert_eq!(parse_work_time(&format!("{}.{:03}", h, m)), None);
        prop_assert_eq!(parse_work_time(&h.to_string()), None);
    }

    #[test]
    fn days_off_never_move_the_balance(
        days in proptest::collection::vec(day(), 0..40),
        insert_at in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let baseline = accumulate_balance(&days, DEFAULT_EXPECTED_HOURS);

        let mut padded = days.clone();
        for index in insert_at {
            let at = index.index(padded.len() + 1);
            padded.insert(at, DayRecord::day_off());
        }

        prop_assert_eq!(accumulate_balance(&padded, DEFAULT_EXPECTED_HOURS), baseline);
    }

    #[test]
    fn banner_has_two_lines_unless_overtime_warns(days in proptest::collection::vec(day(), 0..40)) {
        let config = BalanceConfig::default();
        let state = accumulate_balance(&days, config.expected_daily_hours);
        let data = project_remaining(&state, config.expected_daily_hours);
        let lines = build_banner_lines(&data, &config);

        let warns = data.projected_overtime >= config.overtime_limit
            || (data.projected_overtime > config.warning_threshold() && data.remaining_days > 0);
        prop_assert_eq!(lines.len(), if warns { 3 } else { 2 });
    }
}
