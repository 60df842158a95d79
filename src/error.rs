//! Engine error types.
//!
//! Only conditions that make a computation impossible are errors here.
//! A draft failing validation is NOT an error: it is a normal
//! [`crate::validation::ValidationReport`] value, because a legitimately
//! built draft can legitimately fail its checks.

use chrono::NaiveDate;
use thiserror::Error;

use crate::lifecycle::Action;
use crate::models::{DoctorId, ScheduleStatus};

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the scheduling engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Month outside `[1, 12]` or year before 1970.
    #[error("invalid calendar month {month}/{year}: month must be 1-12 and year >= 1970")]
    InvalidMonth { month: u32, year: i32 },

    /// Absence interval ends before it starts.
    #[error("invalid absence: end {end} precedes start {start}")]
    InvalidAbsence { start: NaiveDate, end: NaiveDate },

    /// A date precedes the doctor's cycle reference date, so elapsed-day
    /// arithmetic is undefined. Fatal to that single computation only.
    #[error("doctor '{doctor}': reference date {reference} lies after evaluated date {date}")]
    InvalidReferenceDate {
        doctor: DoctorId,
        reference: NaiveDate,
        date: NaiveDate,
    },

    /// Rejected engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The snapshot contains the same doctor id twice.
    #[error("inconsistent snapshot: duplicate doctor id '{0}'")]
    DuplicateDoctor(DoctorId),

    /// The snapshot holds an absence for a doctor it does not contain.
    #[error("inconsistent snapshot: absence for unknown doctor '{0}'")]
    AbsenceForUnknownDoctor(DoctorId),

    /// The requested lifecycle action is not valid from the current state.
    #[error("cannot {action} a {from} schedule")]
    IllegalTransition {
        from: ScheduleStatus,
        action: Action,
    },
}
