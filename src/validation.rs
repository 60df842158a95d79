//! Draft schedule validation.
//!
//! Checks a draft's day list against the structural and business
//! constraints of its month before the lifecycle may promote it:
//! - **Completeness**: exactly one entry per calendar day of the month:
//!   no gaps, no duplicates, no foreign dates.
//! - **Eligibility**: no assigned doctor may be deleted, absent that day,
//!   or unknown to the roster. Checked even for drafts the builder never
//!   produced, to defend against stale input.
//! - **Coverage**: empty days are advisory or blocking depending on
//!   [`EngineConfig::allow_empty_days`]; optional per-day bounds are
//!   always blocking.
//!
//! All checks are collected in one pass, never short-circuited, so the
//! caller sees the complete picture at once. Detection order is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::EngineConfig;
use crate::models::{DoctorId, DoctorStatus, Month, ScheduleDay};
use crate::roster::Roster;

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A calendar day of the month has no entry.
    MissingDay,
    /// A date appears in more than one entry.
    DuplicateDay,
    /// An entry's date lies outside the declared month.
    ForeignDate,
    /// An assigned doctor is soft-deleted.
    DeletedDoctorAssigned,
    /// An assigned doctor is absent on that day.
    AbsentDoctorAssigned,
    /// An assigned doctor is not in the roster snapshot.
    UnknownDoctorAssigned,
    /// A day has no assigned doctor.
    EmptyDay,
    /// A day has fewer doctors than the configured minimum.
    UnderAssignedDay,
    /// A day has more doctors than the configured maximum.
    OverAssignedDay,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Finding category.
    pub kind: ViolationKind,
    /// The day concerned, when the finding is day-scoped.
    pub date: Option<NaiveDate>,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            kind,
            date: Some(date),
            message: message.into(),
        }
    }
}

/// Outcome of validating a draft.
///
/// `violations` block promotion; `warnings` are surfaced but do not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Blocking findings, in detection order.
    pub violations: Vec<Violation>,
    /// Advisory findings, in detection order.
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    /// Whether the draft may be promoted.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// One human-readable message per blocking violation, in detection
    /// order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }
}

/// Validates a draft's day list against its month, roster, and config.
///
/// Pure and read-only; callable on any day list, not only builder output.
pub fn validate(
    days: &[ScheduleDay],
    month: Month,
    roster: &Roster,
    config: &EngineConfig,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_completeness(days, month, &mut report);
    check_eligibility(days, roster, &mut report);
    check_coverage(days, config, &mut report);

    report
}

/// Exactly one entry per calendar day; no duplicates or foreign dates.
fn check_completeness(days: &[ScheduleDay], month: Month, report: &mut ValidationReport) {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::with_capacity(days.len());
    for day in days {
        *counts.entry(day.date).or_insert(0) += 1;
    }

    for date in month.days() {
        if !counts.contains_key(&date) {
            report.violations.push(Violation::new(
                ViolationKind::MissingDay,
                date,
                format!("no schedule entry for {date}"),
            ));
        }
    }

    let mut reported_dup: HashSet<NaiveDate> = HashSet::new();
    for day in days {
        if counts[&day.date] > 1 && reported_dup.insert(day.date) {
            report.violations.push(Violation::new(
                ViolationKind::DuplicateDay,
                day.date,
                format!("{} appears in {} entries", day.date, counts[&day.date]),
            ));
        }
        if !month.contains(day.date) {
            report.violations.push(Violation::new(
                ViolationKind::ForeignDate,
                day.date,
                format!("{} does not belong to {month}", day.date),
            ));
        }
    }
}

/// No deleted, absent, or unknown doctor on any day.
fn check_eligibility(days: &[ScheduleDay], roster: &Roster, report: &mut ValidationReport) {
    for day in days {
        for id in &day.assigned {
            match roster.get(id) {
                None => report.violations.push(Violation::new(
                    ViolationKind::UnknownDoctorAssigned,
                    day.date,
                    format!("doctor '{id}' assigned on {} is not in the roster", day.date),
                )),
                Some(doctor) if doctor.status == DoctorStatus::Deleted => {
                    report.violations.push(Violation::new(
                        ViolationKind::DeletedDoctorAssigned,
                        day.date,
                        format!("deleted doctor '{id}' assigned on {}", day.date),
                    ));
                }
                Some(_) if roster.is_absent(id, day.date) => {
                    report.violations.push(Violation::new(
                        ViolationKind::AbsentDoctorAssigned,
                        day.date,
                        format!("doctor '{id}' is absent on {}", day.date),
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

/// Empty-day policy and optional per-day bounds.
fn check_coverage(days: &[ScheduleDay], config: &EngineConfig, report: &mut ValidationReport) {
    for day in days {
        if day.is_empty() {
            let v = Violation::new(
                ViolationKind::EmptyDay,
                day.date,
                format!("no doctor on call on {}", day.date),
            );
            if config.allow_empty_days {
                report.warnings.push(v);
            } else {
                report.violations.push(v);
            }
        }
        if let Some(min) = config.min_assigned_per_day {
            if day.assigned_count() < min {
                report.violations.push(Violation::new(
                    ViolationKind::UnderAssignedDay,
                    day.date,
                    format!(
                        "{} has {} doctor(s) on call, minimum is {min}",
                        day.date,
                        day.assigned_count()
                    ),
                ));
            }
        }
        if let Some(max) = config.max_assigned_per_day {
            if day.assigned_count() > max {
                report.violations.push(Violation::new(
                    ViolationKind::OverAssignedDay,
                    day.date,
                    format!(
                        "{} has {} doctor(s) on call, maximum is {max}",
                        day.date,
                        day.assigned_count()
                    ),
                ));
            }
        }
    }
}
