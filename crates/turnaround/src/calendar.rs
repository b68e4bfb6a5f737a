//! The fixed business calendar: Monday through Friday, 09:00 to 17:00 local time.
//!
//! Everything here works on the naive wall clock. Moving a timestamp only ever
//! changes its date and hour; minute, second and sub-second fields ride along
//! untouched through every step. The stepping primitives return `None` rather
//! than leave the representable calendar.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};

/// First working hour of the day (inclusive).
pub const START_HOUR: u32 = 9;

/// End of the working day (exclusive). A timestamp at 17:xx is outside working hours.
pub const END_HOUR: u32 = 17;

/// Whether a day index falls on the weekend.
///
/// Indices follow the 0 = Sunday .. 6 = Saturday convention, i.e.
/// [`chrono::Weekday::num_days_from_sunday`].
///
/// # Examples
///
/// ```
/// use turnaround::calendar::is_weekend;
///
/// assert!(is_weekend(0)); // Sunday
/// assert!(!is_weekend(3)); // Wednesday
/// assert!(is_weekend(6)); // Saturday
/// ```
pub fn is_weekend(day_index: u32) -> bool {
    day_index == 0 || day_index == 6
}

/// Whether a calendar date is a Saturday or Sunday.
pub fn is_weekend_date(date: NaiveDate) -> bool {
    is_weekend(date.weekday().num_days_from_sunday())
}

/// Whether an hour of the day lies inside `[START_HOUR, END_HOUR)`.
pub fn is_working_hour(hour: u32) -> bool {
    (START_HOUR..END_HOUR).contains(&hour)
}

/// Move `dt` to `hour` on the same date.
///
/// Only the hour field changes; minutes, seconds and nanoseconds (including a
/// leap second) are kept as they are. `None` if `hour` is not a valid hour.
pub(crate) fn with_hour(dt: NaiveDateTime, hour: u32) -> Option<NaiveDateTime> {
    Timelike::with_hour(&dt, hour)
}

/// Move `dt` forward by whole hours within its date.
pub(crate) fn add_hours(dt: NaiveDateTime, hours: i64) -> Option<NaiveDateTime> {
    let hour = u32::try_from(i64::from(dt.hour()).checked_add(hours)?).ok()?;
    with_hour(dt, hour)
}

/// Move `dt` forward by whole calendar days, keeping its time of day.
///
/// `None` past the end of the representable calendar.
pub(crate) fn add_days(dt: NaiveDateTime, days: u64) -> Option<NaiveDateTime> {
    let date = dt.date().checked_add_days(Days::new(days))?;
    Some(date.and_time(dt.time()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
