//! Property-based tests for due-date calculation
//!
//! Uses proptest to verify properties that should hold for every valid submission.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use turnaround::{calculate_due_date, is_weekend_date, DueDateError, END_HOUR, START_HOUR};

/// Any weekday submission inside working hours, 2000-01-01 onwards.
fn valid_submission() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..20_000, START_HOUR..END_HOUR, 0u32..60, 0u32..60)
        .prop_filter_map("submission must be on a workday", |(days, h, m, s)| {
            let date = NaiveDate::from_ymd_opt(2000, 1, 1)? + chrono::Duration::days(days);
            if is_weekend_date(date) {
                return None;
            }
            date.and_hms_opt(h, m, s)
        })
}

/// Any timestamp at all, valid or not.
fn any_submission() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..20_000, 0u32..24, 0u32..60).prop_filter_map("in range", |(days, h, m)| {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1)? + chrono::Duration::days(days);
        date.and_hms_opt(h, m, 0)
    })
}

proptest! {
    /// Zero turnaround returns the submission unchanged
    #[test]
    fn zero_turnaround_is_identity(submitted in valid_submission()) {
        prop_assert_eq!(calculate_due_date(submitted, 0).unwrap(), submitted);
    }

    /// Minutes and seconds never change
    #[test]
    fn minutes_and_seconds_preserved(submitted in valid_submission(), hours in 0i64..500) {
        let due = calculate_due_date(submitted, hours).unwrap();
        prop_assert_eq!(due.minute(), submitted.minute());
        prop_assert_eq!(due.second(), submitted.second());
        prop_assert_eq!(due.nanosecond(), submitted.nanosecond());
    }

    /// The due date is always a workday inside working hours
    #[test]
    fn due_is_inside_working_week(submitted in valid_submission(), hours in 0i64..500) {
        let due = calculate_due_date(submitted, hours).unwrap();
        prop_assert!(!is_weekend_date(due.date()), "due on weekend: {}", due);
        prop_assert!((START_HOUR..END_HOUR).contains(&due.hour()), "due hour: {}", due);
    }

    /// Negative turnaround is rejected whatever the submission looks like
    #[test]
    fn negative_turnaround_always_rejected(submitted in any_submission(), hours in -500i64..0) {
        prop_assert_eq!(
            calculate_due_date(submitted, hours),
            Err(DueDateError::NegativeDuration)
        );
    }

    /// More turnaround never yields an earlier due date
    #[test]
    fn monotonic_in_turnaround(
        submitted in valid_submission(),
        a in 0i64..300,
        b in 0i64..300,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let due_lo = calculate_due_date(submitted, lo).unwrap();
        let due_hi = calculate_due_date(submitted, hi).unwrap();
        prop_assert!(due_lo <= due_hi, "{} h → {}, {} h → {}", lo, due_lo, hi, due_hi);
    }

    /// A full 40-hour week lands on the same weekday and time one week later
    #[test]
    fn forty_hours_is_one_calendar_week(submitted in valid_submission()) {
        let due = calculate_due_date(submitted, 40).unwrap();
        prop_assert_eq!(due.weekday(), submitted.weekday());
        prop_assert_eq!(due - submitted, chrono::Duration::days(7));
    }

    /// Another 40 working hours always moves the due date exactly one week
    #[test]
    fn extra_week_of_hours_adds_seven_days(submitted in valid_submission(), hours in 0i64..2_000) {
        let due = calculate_due_date(submitted, hours).unwrap();
        let due_plus_week = calculate_due_date(submitted, hours + 40).unwrap();
        prop_assert_eq!(due_plus_week - due, chrono::Duration::days(7));
    }

    /// Turnarounds too large for the calendar fail instead of panicking
    #[test]
    fn huge_turnaround_is_out_of_range(
        submitted in valid_submission(),
        hours in 1_000_000_000i64..=i64::MAX,
    ) {
        prop_assert_eq!(
            calculate_due_date(submitted, hours),
            Err(DueDateError::OutOfRange)
        );
    }
}
