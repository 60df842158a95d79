//! Cycle-shift calculator.
//!
//! A doctor's recurring shifts repeat every `cycle_length_days` starting
//! from the doctor's reference date, independent of month boundaries.
//! The predicate here is pure and deterministic, so it can be unit-tested
//! for any date without building a full schedule.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::Doctor;

/// Whether a doctor is due a cycle-shift on `date`.
///
/// Due iff the number of whole days elapsed since the doctor's reference
/// date is a multiple of `cycle_length_days`.
///
/// # Errors
/// - [`EngineError::InvalidReferenceDate`] if `date` precedes the
///   reference date (elapsed-day arithmetic would be negative).
/// - [`EngineError::InvalidConfig`] if `cycle_length_days` is zero.
pub fn is_due(doctor: &Doctor, date: NaiveDate, cycle_length_days: u32) -> EngineResult<bool> {
    if cycle_length_days == 0 {
        return Err(EngineError::InvalidConfig(
            "cycle_length_days must be positive".into(),
        ));
    }
    let elapsed = date.signed_duration_since(doctor.reference_date).num_days();
    if elapsed < 0 {
        return Err(EngineError::InvalidReferenceDate {
            doctor: doctor.id.clone(),
            reference: doctor.reference_date,
            date,
        });
    }
    Ok(elapsed % i64::from(cycle_length_days) == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_on_reference_date() {
        let d = Doctor::new("D1", date(2024, 1, 1));
        assert!(is_due(&d, date(2024, 1, 1), 5).unwrap());
    }

    #[test]
    fn test_cycle_of_five() {
        // reference 2024-01-01, cycle 5 → due Jan 1, 6, 11, 16, 21, 26, 31
        let d = Doctor::new("D1", date(2024, 1, 1));
        let due_days = [1, 6, 11, 16, 21, 26, 31];
        for day in 1..=31 {
            let due = is_due(&d, date(2024, 1, day), 5).unwrap();
            assert_eq!(due, due_days.contains(&day), "day {day}");
        }
    }

    #[test]
    fn test_due_across_month_boundary() {
        let d = Doctor::new("D1", date(2024, 1, 29));
        // 2024-02-08 is 10 days later
        assert!(is_due(&d, date(2024, 2, 8), 5).unwrap());
        assert!(!is_due(&d, date(2024, 2, 9), 5).unwrap());
    }

    #[test]
    fn test_date_before_reference_errors() {
        let d = Doctor::new("D1", date(2024, 6, 1));
        let err = is_due(&d, date(2024, 5, 31), 5).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReferenceDate { .. }));
    }

    #[test]
    fn test_zero_cycle_errors() {
        let d = Doctor::new("D1", date(2024, 1, 1));
        assert!(matches!(
            is_due(&d, date(2024, 1, 2), 0),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cycle_of_one_always_due() {
        let d = Doctor::new("D1", date(2024, 1, 1));
        for day in 1..=31 {
            assert!(is_due(&d, date(2024, 1, day), 1).unwrap());
        }
    }

    #[test]
    fn test_periodicity() {
        // If due at t1, also due at t1 + k * cycle for any k
        let doc = Doctor::new("D1", date(2023, 11, 14));
        let cycle = 7u32;
        let mut t = doc.reference_date;
        for _ in 0..20 {
            assert!(is_due(&doc, t, cycle).unwrap());
            t = t.checked_add_days(Days::new(u64::from(cycle))).unwrap();
        }
    }
}
