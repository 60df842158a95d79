//! Draft schedule builder.
//!
//! # Algorithm
//!
//! 1. Walk every date of the target month in ascending order.
//! 2. Per date, the candidate set is every doctor that is available,
//!    cycle-due, and not absent on that date.
//! 3. If a per-day maximum is configured, keep the lowest doctor ids.
//! 4. Emit one [`ScheduleDay`] per date, empty or not: a month is never
//!    truncated, even with zero eligible doctors.
//!
//! A doctor whose reference date lies after a walked date cannot be
//! evaluated for that date; the builder excludes the doctor there and
//! records a [`BuildDiagnostic`] instead of aborting the month (one bad
//! doctor must not block scheduling everyone else).
//!
//! The builder performs no persistence and no status transition. The
//! returned [`Draft`] must pass [`crate::validation`] before the
//! lifecycle promotes it.

use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::cycle;
use crate::models::{DoctorId, Month, ScheduleDay};
use crate::roster::Roster;

/// A built-but-not-yet-validated month of assignments.
#[derive(Debug, Clone)]
pub struct Draft {
    /// One entry per calendar day, ascending.
    pub days: Vec<ScheduleDay>,
    /// Per-doctor problems encountered while building.
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// A non-fatal problem that excluded a doctor during the build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildDiagnostic {
    /// First date on which the problem surfaced.
    pub date: NaiveDate,
    /// The excluded doctor.
    pub doctor: DoctorId,
    /// Human-readable description.
    pub message: String,
}

/// Builds the draft assignment for a month.
///
/// Pure with respect to its inputs: the same `(roster, month, config)`
/// always yields the same draft.
pub fn build_draft(roster: &Roster, month: Month, config: &EngineConfig) -> Draft {
    let mut days = Vec::with_capacity(month.day_count() as usize);
    let mut diagnostics = Vec::new();
    // One diagnostic per doctor, not one per (doctor, day)
    let mut flagged: HashSet<DoctorId> = HashSet::new();

    for date in month.days() {
        let mut day = ScheduleDay::new(date);

        for doctor in roster.doctors() {
            if !doctor.is_available() {
                continue;
            }
            if roster.is_absent(&doctor.id, date) {
                continue;
            }
            match cycle::is_due(doctor, date, config.cycle_length_days) {
                Ok(true) => day.assign(doctor.id.clone()),
                Ok(false) => {}
                Err(err) => {
                    if flagged.insert(doctor.id.clone()) {
                        warn!(doctor = %doctor.id, date = %date, %err, "doctor excluded from build");
                        diagnostics.push(BuildDiagnostic {
                            date,
                            doctor: doctor.id.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(max) = config.max_assigned_per_day {
            while day.assigned.len() > max {
                day.assigned.pop_last();
            }
        }

        days.push(day);
    }

    debug!(
        month = %month,
        days = days.len(),
        assignments = days.iter().map(ScheduleDay::assigned_count).sum::<usize>(),
        diagnostics = diagnostics.len(),
        "draft built"
    );
    Draft { days, diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, Doctor};
    use chrono::Datelike;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jan_2024() -> Month {
        Month::new(1, 2024).unwrap()
    }

    #[test]
    fn test_single_doctor_cycle_five() {
        // reference 2024-01-01, cycle 5
        let roster =
            Roster::from_doctors(vec![Doctor::new("D1", date(2024, 1, 1))]).unwrap();
        let draft = build_draft(&roster, jan_2024(), &EngineConfig::new(5));

        assert_eq!(draft.days.len(), 31);
        assert!(draft.diagnostics.is_empty());

        let id = DoctorId::new("D1");
        let due_days = [1, 6, 11, 16, 21, 26, 31];
        for day in &draft.days {
            let expected = due_days.contains(&day.date.day());
            assert_eq!(day.contains(&id), expected, "{}", day.date);
        }
    }

    #[test]
    fn test_absence_excludes_cycle_due_days() {
        // absence 2024-01-10..=2024-01-20 removes Jan 11 and 16
        let mut absences = HashMap::new();
        absences.insert(
            DoctorId::new("D1"),
            Absence::new(date(2024, 1, 10), date(2024, 1, 20)).unwrap(),
        );
        let roster =
            Roster::snapshot(vec![Doctor::new("D1", date(2024, 1, 1))], absences).unwrap();
        let draft = build_draft(&roster, jan_2024(), &EngineConfig::new(5));

        let id = DoctorId::new("D1");
        for day in &draft.days {
            let expected = match day.date.day() {
                1 | 6 | 21 | 26 | 31 => true,
                11 | 16 => false, // cycle-due but absent
                _ => false,
            };
            assert_eq!(day.contains(&id), expected, "{}", day.date);
        }
        assert!(draft.days[10].is_empty()); // Jan 11, sole candidate absent
        assert!(draft.days[15].is_empty()); // Jan 16
    }

    #[test]
    fn test_deleted_doctor_never_assigned() {
        // D2 deleted, excluded regardless of cycle math
        let roster = Roster::from_doctors(vec![
            Doctor::new("D1", date(2024, 1, 5)),
            Doctor::new("D2", date(2024, 1, 1)).deleted(),
        ])
        .unwrap();
        let draft = build_draft(&roster, jan_2024(), &EngineConfig::new(5));

        let d2 = DoctorId::new("D2");
        assert!(draft.days.iter().all(|day| !day.contains(&d2)));
        // D1 still scheduled from its own reference date
        assert!(draft.days[4].contains(&DoctorId::new("D1"))); // Jan 5
    }

    #[test]
    fn test_empty_roster_still_full_month() {
        let roster = Roster::from_doctors(Vec::new()).unwrap();
        let draft = build_draft(&roster, Month::new(2, 2024).unwrap(), &EngineConfig::new(5));
        assert_eq!(draft.days.len(), 29);
        assert!(draft.days.iter().all(ScheduleDay::is_empty));
    }

    #[test]
    fn test_future_reference_date_yields_diagnostic() {
        // D1 unschedulable before Feb; D2 normal. The month still builds.
        let roster = Roster::from_doctors(vec![
            Doctor::new("D1", date(2024, 2, 1)),
            Doctor::new("D2", date(2024, 1, 1)),
        ])
        .unwrap();
        let draft = build_draft(&roster, jan_2024(), &EngineConfig::new(5));

        assert_eq!(draft.days.len(), 31);
        assert_eq!(draft.diagnostics.len(), 1); // deduplicated per doctor
        assert_eq!(draft.diagnostics[0].doctor, DoctorId::new("D1"));
        assert_eq!(draft.diagnostics[0].date, date(2024, 1, 1));
        assert!(draft.days.iter().all(|d| !d.contains(&DoctorId::new("D1"))));
        assert!(draft.days[0].contains(&DoctorId::new("D2")));
    }

    #[test]
    fn test_mid_month_reference_date() {
        // Reference inside the month: excluded before it, due from it on
        let roster =
            Roster::from_doctors(vec![Doctor::new("D1", date(2024, 1, 15))]).unwrap();
        let draft = build_draft(&roster, jan_2024(), &EngineConfig::new(10));

        let id = DoctorId::new("D1");
        assert!(!draft.days[0].contains(&id));
        assert!(draft.days[14].contains(&id)); // Jan 15
        assert!(draft.days[24].contains(&id)); // Jan 25
        assert_eq!(draft.diagnostics.len(), 1);
    }

    #[test]
    fn test_max_assigned_truncates_by_id() {
        // Three doctors all due on Jan 1; cap at 2 keeps lowest ids
        let roster = Roster::from_doctors(vec![
            Doctor::new("D3", date(2024, 1, 1)),
            Doctor::new("D1", date(2024, 1, 1)),
            Doctor::new("D2", date(2024, 1, 1)),
        ])
        .unwrap();
        let config = EngineConfig::new(5).with_max_assigned_per_day(2);
        let draft = build_draft(&roster, jan_2024(), &config);

        let jan1 = &draft.days[0];
        assert_eq!(jan1.assigned_count(), 2);
        assert!(jan1.contains(&DoctorId::new("D1")));
        assert!(jan1.contains(&DoctorId::new("D2")));
        assert!(!jan1.contains(&DoctorId::new("D3")));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let mut absences = HashMap::new();
        absences.insert(
            DoctorId::new("D2"),
            Absence::new(date(2024, 1, 3), date(2024, 1, 8)).unwrap(),
        );
        let roster = Roster::snapshot(
            vec![
                Doctor::new("D1", date(2024, 1, 1)),
                Doctor::new("D2", date(2023, 12, 20)),
            ],
            absences,
        )
        .unwrap();
        let config = EngineConfig::new(3);

        let a = build_draft(&roster, jan_2024(), &config);
        let b = build_draft(&roster, jan_2024(), &config);
        assert_eq!(a.days, b.days);
    }
}
