//! Error types for due-date computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    #[error("Turnaround time cannot be negative")]
    NegativeDuration,

    #[error("Submit time is outside of working hours")]
    OutsideWorkingHours,

    #[error("Submit time must be on a workday")]
    NonWorkday,

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Due date is beyond the supported calendar range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, DueDateError>;
