//! # turnaround
//!
//! Business due-date computation.
//!
//! Given the time a job was submitted and a turnaround in working hours,
//! turnaround computes when the job is due. Only the hours from 09:00 to
//! 17:00 on Monday through Friday count toward the turnaround.
//!
//! ## Modules
//!
//! - [`due_date`] — Public entry points: wall-clock, host-local and string forms
//! - [`schedule`] — Validation, hour rolling, end-of-day/weekend normalization
//! - [`calendar`] — Working-window constants and the weekend predicate
//! - [`error`] — Error types

pub mod calendar;
pub mod due_date;
pub mod error;
pub mod schedule;

pub use calendar::{is_weekend, is_weekend_date, END_HOUR, START_HOUR};
pub use due_date::{calculate_due_date, calculate_due_date_local, compute_due_date, DueDate};
pub use error::DueDateError;
pub use schedule::{normalize_due_date, roll_working_hours, validate_submission};
