//! Business due-date calculation.
//!
//! Given the moment a job was submitted and a turnaround in working hours,
//! compute when the turnaround elapses. Only hours between 09:00 and 17:00
//! on Monday through Friday count. All functions are pure: nothing reads the
//! system clock, and the only time zone involved is the host's local zone in
//! [`calculate_due_date_local`].
//!
//! # Functions
//!
//! - [`calculate_due_date`] — wall-clock in, wall-clock out
//! - [`calculate_due_date_local`] — the same on [`chrono::Local`] datetimes
//! - [`compute_due_date`] — string in, serializable [`DueDate`] out
//!
//! # Field preservation
//!
//! Only the date and the hour of the submission move. Minutes, seconds and
//! sub-second fields of the due date are always those of the submission, no
//! matter how many days the calculation crosses.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::error::{DueDateError, Result};
use crate::schedule::{normalize_due_date, roll_working_hours, validate_submission};

// ── calculate_due_date ──────────────────────────────────────────────────────

/// Compute the due date for a submission on the local wall clock.
///
/// # Arguments
///
/// * `submitted` — The submission time, as local date and time-of-day fields
/// * `turnaround_hours` — Working hours until the job is due
///
/// # Errors
///
/// Returns [`DueDateError::NegativeDuration`] for a negative turnaround,
/// [`DueDateError::OutsideWorkingHours`] if `submitted` is before 09:00 or at
/// or after 17:00, and [`DueDateError::NonWorkday`] if it falls on a weekend.
/// The checks run in that order. A turnaround that carries the due date past
/// the last representable date fails with [`DueDateError::OutOfRange`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use turnaround::calculate_due_date;
///
/// // Tuesday 14:12 plus 16 working hours
/// let submitted = NaiveDate::from_ymd_opt(2024, 3, 19)
///     .unwrap()
///     .and_hms_opt(14, 12, 0)
///     .unwrap();
/// let due = calculate_due_date(submitted, 16).unwrap();
/// assert_eq!(due.to_string(), "2024-03-21 14:12:00"); // Thursday
/// ```
pub fn calculate_due_date(
    submitted: NaiveDateTime,
    turnaround_hours: i64,
) -> Result<NaiveDateTime> {
    validate_submission(submitted, turnaround_hours)?;

    let rolled = roll_working_hours(submitted, turnaround_hours)?;
    let due = normalize_due_date(rolled)?;

    debug!(%submitted, turnaround_hours, %due, "computed due date");
    Ok(due)
}

/// Compute the due date for a submission in the host's local time zone.
///
/// The calculation runs on the wall-clock fields of `submitted` as the host
/// zone shows them; the resulting wall-clock time is then placed back in that
/// zone. A zero turnaround returns `submitted` itself.
///
/// # Errors
///
/// The validation errors of [`calculate_due_date`], plus
/// [`DueDateError::InvalidDatetime`] if the due wall-clock time does not
/// exist in the host zone (a DST gap). An ambiguous local time resolves to
/// the earlier instant.
pub fn calculate_due_date_local(
    submitted: DateTime<Local>,
    turnaround_hours: i64,
) -> Result<DateTime<Local>> {
    calculate_due_date_in_zone(submitted, turnaround_hours)
}

/// Wall-clock calculation in whatever zone `submitted` carries.
fn calculate_due_date_in_zone<T: TimeZone>(
    submitted: DateTime<T>,
    turnaround_hours: i64,
) -> Result<DateTime<T>> {
    let due = calculate_due_date(submitted.naive_local(), turnaround_hours)?;

    if turnaround_hours == 0 {
        return Ok(submitted);
    }

    submitted
        .timezone()
        .from_local_datetime(&due)
        .earliest()
        .ok_or_else(|| {
            DueDateError::InvalidDatetime(format!("{due} does not exist in the local time zone"))
        })
}

// ── compute_due_date ────────────────────────────────────────────────────────

/// A computed due date with the inputs echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDate {
    /// The submission time (ISO 8601 local wall clock, no offset).
    pub submitted: String,
    /// The due time (ISO 8601 local wall clock, no offset).
    pub due: String,
    /// Day of the week of the due time (e.g., "Monday").
    pub due_weekday: String,
    /// The turnaround that was applied, in working hours.
    pub turnaround_hours: i64,
    /// Calendar days between the submission date and the due date.
    pub calendar_days: i64,
}

/// Compute a due date from a timestamp string.
///
/// # Arguments
///
/// * `submitted` — A local wall-clock timestamp: `YYYY-MM-DD HH:MM`,
///   `YYYY-MM-DD HH:MM:SS` (optionally with fractional seconds), or the same
///   with a `T` between date and time
/// * `turnaround_hours` — Working hours until the job is due
///
/// # Errors
///
/// Returns [`DueDateError::InvalidDatetime`] if `submitted` cannot be parsed.
/// Parsing happens first; a parsed timestamp then goes through the same
/// checks as [`calculate_due_date`].
///
/// # Examples
///
/// ```
/// use turnaround::compute_due_date;
///
/// let result = compute_due_date("2024-03-22 16:21", 1).unwrap();
/// assert_eq!(result.due, "2024-03-25T09:21:00");
/// assert_eq!(result.due_weekday, "Monday");
/// ```
pub fn compute_due_date(submitted: &str, turnaround_hours: i64) -> Result<DueDate> {
    let submitted_dt = parse_local_datetime(submitted)?;
    let due = calculate_due_date(submitted_dt, turnaround_hours)?;

    Ok(DueDate {
        submitted: format_local_datetime(&submitted_dt),
        due: format_local_datetime(&due),
        due_weekday: due.format("%A").to_string(),
        turnaround_hours,
        calendar_days: (due.date() - submitted_dt.date()).num_days(),
    })
}

// ── Internal helpers ────────────────────────────────────────────────────────

const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a local wall-clock timestamp without offset.
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DueDateError::InvalidDatetime(s.to_string()))
}

/// ISO 8601 without offset; fractional seconds only when non-zero.
fn format_local_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
