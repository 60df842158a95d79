//! Doctor and absence models.
//!
//! Doctors are the staffing pool for on-call shifts. Each doctor carries a
//! cycle reference date: the anchor from which recurring "cycle-shifts" are
//! recalculated at a fixed period, independent of month boundaries.
//!
//! # Deletion
//! A doctor referenced by any schedule is never removed; it transitions to
//! [`DoctorStatus::Deleted`] so historic schedules keep resolving. A deleted
//! doctor must never appear in a newly built draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

/// Opaque doctor identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(String);

impl DoctorId {
    /// Creates a new identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DoctorId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DoctorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Availability status of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoctorStatus {
    /// Eligible for new assignments.
    Available,
    /// Soft-deleted; kept only for historic schedules.
    Deleted,
}

/// A doctor eligible for on-call scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique doctor identifier.
    pub id: DoctorId,
    /// Given name.
    pub first_name: String,
    /// Family name(s).
    pub last_names: String,
    /// Contact email (unique across the roster; uniqueness is the
    /// registry's concern, not checked here).
    pub email: String,
    /// Availability status.
    pub status: DoctorStatus,
    /// Anchor date for cycle-shift arithmetic.
    pub reference_date: NaiveDate,
}

impl Doctor {
    /// Creates an available doctor with empty name fields.
    pub fn new(id: impl Into<DoctorId>, reference_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_names: String::new(),
            email: String::new(),
            status: DoctorStatus::Available,
            reference_date,
        }
    }

    /// Sets the name fields.
    pub fn with_name(mut self, first_name: impl Into<String>, last_names: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_names = last_names.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Marks the doctor as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.status = DoctorStatus::Deleted;
        self
    }

    /// Soft-deletes the doctor in place.
    pub fn mark_deleted(&mut self) {
        self.status = DoctorStatus::Deleted;
    }

    /// Whether the doctor may receive new assignments.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == DoctorStatus::Available
    }
}

/// An absence interval `[start, end]`, both ends inclusive.
///
/// Owned by exactly one doctor; at most one active absence per doctor.
/// The 1:1 ownership is realized as a by-id map in [`crate::Roster`],
/// not as a back-pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// First absent day (inclusive).
    pub start: NaiveDate,
    /// Last absent day (inclusive).
    pub end: NaiveDate,
}

impl Absence {
    /// Creates an absence, rejecting intervals that end before they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        if end < start {
            return Err(EngineError::InvalidAbsence { start, end });
        }
        Ok(Self { start, end })
    }

    /// Whether a date falls within this absence.
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of absent days (at least 1).
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}
