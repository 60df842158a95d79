//! Schedule (solution) model.
//!
//! A schedule is the day-by-day on-call assignment for one calendar month,
//! together with its approval status. Days and status are private and only
//! mutated through [`crate::lifecycle`], so callers can never observe a
//! half-transitioned schedule (days populated but status unchanged, or the
//! other way round).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{DoctorId, Month};

/// Approval status of a month's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// No accepted assignment exists yet.
    NotCreated,
    /// A draft passed validation and awaits an administrator's decision.
    PendingConfirmation,
    /// Approved; immutable until explicitly reopened.
    Confirmed,
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotCreated => "not-created",
            Self::PendingConfirmation => "pending-confirmation",
            Self::Confirmed => "confirmed",
        };
        f.write_str(s)
    }
}

/// A single day's on-call assignment.
///
/// Owned exclusively by its [`Schedule`]; created and destroyed with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Calendar date of the assignment.
    pub date: NaiveDate,
    /// Doctors on call this day, ordered by id.
    pub assigned: BTreeSet<DoctorId>,
}

impl ScheduleDay {
    /// Creates a day with no assignments.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            assigned: BTreeSet::new(),
        }
    }

    /// Adds a doctor to the assignment set.
    pub fn with_doctor(mut self, id: impl Into<DoctorId>) -> Self {
        self.assigned.insert(id.into());
        self
    }

    /// Assigns a doctor in place.
    pub fn assign(&mut self, id: DoctorId) {
        self.assigned.insert(id);
    }

    /// Whether a doctor is assigned on this day.
    pub fn contains(&self, id: &DoctorId) -> bool {
        self.assigned.contains(id)
    }

    /// Number of doctors on call.
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Whether nobody is on call.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// The on-call schedule of one calendar month.
///
/// Weak entity: its identity is the [`Month`] key of the calendar it
/// belongs to. One schedule exists per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    month: Month,
    status: ScheduleStatus,
    days: Vec<ScheduleDay>,
}

impl Schedule {
    /// Creates the initial, empty schedule for a month.
    pub fn not_created(month: Month) -> Self {
        Self {
            month,
            status: ScheduleStatus::NotCreated,
            days: Vec::new(),
        }
    }

    /// The month this schedule covers.
    #[inline]
    pub fn month(&self) -> Month {
        self.month
    }

    /// Current approval status.
    #[inline]
    pub fn status(&self) -> ScheduleStatus {
        self.status
    }

    /// The day entries, in ascending date order.
    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    /// Finds the entry for a given date.
    pub fn day(&self, date: NaiveDate) -> Option<&ScheduleDay> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Whether a doctor is on call on a given date.
    pub fn is_assigned(&self, id: &DoctorId, date: NaiveDate) -> bool {
        self.day(date).is_some_and(|d| d.contains(id))
    }

    /// Total number of (day, doctor) assignments.
    pub fn assignment_count(&self) -> usize {
        self.days.iter().map(ScheduleDay::assigned_count).sum()
    }

    /// Every doctor referenced anywhere in the schedule.
    ///
    /// Callers use this to decide which doctors must be soft-deleted
    /// rather than removed.
    pub fn referenced_doctors(&self) -> BTreeSet<&DoctorId> {
        self.days.iter().flat_map(|d| d.assigned.iter()).collect()
    }

    /// Promotes a validated draft: installs the days and moves to
    /// pending-confirmation in one step.
    pub(crate) fn into_pending(mut self, days: Vec<ScheduleDay>) -> Self {
        self.days = days;
        self.status = ScheduleStatus::PendingConfirmation;
        self
    }

    /// Confirms the pending assignment.
    pub(crate) fn into_confirmed(mut self) -> Self {
        self.status = ScheduleStatus::Confirmed;
        self
    }

    /// Clears the days and returns to the initial state.
    pub(crate) fn into_not_created(mut self) -> Self {
        self.days.clear();
        self.status = ScheduleStatus::NotCreated;
        self
    }
}
