//! The three stages of a due-date calculation.
//!
//! - [`validate_submission`] — reject inputs before anything moves
//! - [`roll_working_hours`] — spend the turnaround budget hour by hour across workdays
//! - [`normalize_due_date`] — pull a result off the end-of-day edge or a weekend
//!
//! Each stage takes and returns a plain [`NaiveDateTime`]; none of them touch
//! minute, second or sub-second fields.

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::trace;

use crate::calendar::{
    add_days, add_hours, is_weekend_date, is_working_hour, with_hour, END_HOUR, START_HOUR,
};
use crate::error::{DueDateError, Result};

// ── validate_submission ─────────────────────────────────────────────────────

/// Check that a submission can be scheduled.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. a negative turnaround → [`DueDateError::NegativeDuration`]
/// 2. an hour outside `[09:00, 17:00)` → [`DueDateError::OutsideWorkingHours`]
/// 3. a Saturday or Sunday → [`DueDateError::NonWorkday`]
pub fn validate_submission(submitted: NaiveDateTime, turnaround_hours: i64) -> Result<()> {
    if turnaround_hours < 0 {
        return Err(DueDateError::NegativeDuration);
    }

    if !is_working_hour(submitted.hour()) {
        return Err(DueDateError::OutsideWorkingHours);
    }

    if is_weekend_date(submitted.date()) {
        return Err(DueDateError::NonWorkday);
    }

    Ok(())
}

// ── roll_working_hours ──────────────────────────────────────────────────────

/// Working hours in one Monday to Friday week.
const WORK_WEEK_HOURS: i64 = (5 * (END_HOUR - START_HOUR)) as i64;

/// Advance `start` by `hours` working hours.
///
/// Each pass either hops a weekend day forward by two calendar days (no
/// budget spent), finishes inside the current day, or spends the rest of the
/// current day and continues from 09:00 on the next date. Spending the budget
/// exactly at the end of a day leaves the result at 09:00 on the following
/// date, which may be a Saturday; [`normalize_due_date`] deals with that.
///
/// The weekend hop is always two days, so a Sunday lands on Tuesday.
///
/// While more than a week of budget remains, whole weeks are taken in one
/// step: 40 working hours from any working position end on the same weekday
/// and hour seven days later.
///
/// `start` must already have passed [`validate_submission`]. A zero or
/// negative budget returns `start` unchanged.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] if the result would fall past the
/// last date chrono can represent.
pub fn roll_working_hours(start: NaiveDateTime, hours: i64) -> Result<NaiveDateTime> {
    let mut due = start;
    let mut remaining = hours;

    while remaining > 0 {
        if is_weekend_date(due.date()) {
            trace!(date = %due.date(), "weekend, skipping two days");
            due = add_days(due, 2).ok_or(DueDateError::OutOfRange)?;
            continue;
        }

        if remaining > WORK_WEEK_HOURS && is_working_hour(due.hour()) {
            // Leave at least one hour so the final day is still rolled hour by hour.
            let weeks = (remaining - 1) / WORK_WEEK_HOURS;
            let days = u64::try_from(weeks)
                .ok()
                .and_then(|w| w.checked_mul(7))
                .ok_or(DueDateError::OutOfRange)?;
            due = add_days(due, days).ok_or(DueDateError::OutOfRange)?;
            remaining -= weeks * WORK_WEEK_HOURS;
            trace!(date = %due.date(), weeks, remaining, "skipping whole weeks");
            continue;
        }

        let hours_left_today = i64::from(END_HOUR) - i64::from(due.hour());

        if hours_left_today > remaining {
            trace!(date = %due.date(), hours = remaining, "finishing within the day");
            due = add_hours(due, remaining).ok_or(DueDateError::OutOfRange)?;
            break;
        }

        remaining -= hours_left_today;
        trace!(date = %due.date(), spent = hours_left_today, remaining, "rolling to next day");
        due = with_hour(due, START_HOUR)
            .and_then(|d| add_days(d, 1))
            .ok_or(DueDateError::OutOfRange)?;
    }

    Ok(due)
}

// ── normalize_due_date ──────────────────────────────────────────────────────

/// Snap a rolled result back onto a workday inside working hours.
///
/// A result at or past 17:00 moves to 09:00 the next day; a result on a
/// weekend moves forward two days at a time to 09:00. Minutes and seconds are
/// kept. A timestamp that already satisfies both is returned as is.
///
/// # Errors
///
/// Returns [`DueDateError::OutOfRange`] if the move would leave the
/// representable calendar.
pub fn normalize_due_date(due: NaiveDateTime) -> Result<NaiveDateTime> {
    let mut due = due;

    if due.hour() >= END_HOUR {
        trace!(due = %due, "past end of day");
        due = add_days(due, 1)
            .and_then(|d| with_hour(d, START_HOUR))
            .ok_or(DueDateError::OutOfRange)?;
    }

    while is_weekend_date(due.date()) {
        trace!(due = %due, weekday = %due.weekday(), "on a weekend");
        due = add_days(due, 2)
            .and_then(|d| with_hour(d, START_HOUR))
            .ok_or(DueDateError::OutOfRange)?;
    }

    Ok(due)
}

// ── Tests ───────────────────────────────────────────────────────────────────
