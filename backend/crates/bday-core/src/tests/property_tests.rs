use crate::{BirthdayCalculator, LeapDayPolicy};

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Countdown Bounds
// =========================================================================

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 plus up to ~200 years
    (0i64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_policy() -> impl Strategy<Value = LeapDayPolicy> {
    prop_oneof![Just(LeapDayPolicy::Feb28), Just(LeapDayPolicy::Mar1)]
}

proptest! {
    #[test]
    fn given_non_leap_day_birth_when_counting_then_under_366(
        dob in any_date(),
        today in any_date(),
        policy in any_policy(),
    ) {
        prop_assume!(!(dob.month() == 2 && dob.day() == 29));

        let days = BirthdayCalculator::new(policy).days_until_next(dob, today);

        prop_assert!(days < 366);
    }

    #[test]
    fn given_any_birth_when_counting_then_never_more_than_a_leap_year(
        dob in any_date(),
        today in any_date(),
        policy in any_policy(),
    ) {
        let days = BirthdayCalculator::new(policy).days_until_next(dob, today);

        prop_assert!(days <= 366);
    }

    #[test]
    fn given_matching_month_and_day_when_counting_then_zero(
        dob in any_date(),
        year in 1900i32..2100,
    ) {
        prop_assume!(!(dob.month() == 2 && dob.day() == 29));
        let today = NaiveDate::from_ymd_opt(year, dob.month(), dob.day()).unwrap();

        let days = BirthdayCalculator::default().days_until_next(dob, today);

        prop_assert_eq!(days, 0);
    }

    #[test]
    fn given_countdown_when_adding_days_to_today_then_lands_on_anniversary(
        dob in any_date(),
        today in any_date(),
        policy in any_policy(),
    ) {
        let calculator = BirthdayCalculator::new(policy);

        let days = calculator.days_until_next(dob, today);
        let target = today + Duration::days(i64::from(days));

        prop_assert_eq!(target, calculator.next_anniversary(dob, today));
        prop_assert!(target >= today);
    }
}
