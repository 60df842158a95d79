//! Calendar month key.
//!
//! A [`Month`] identifies a `(month, year)` pair and is the key its
//! [`crate::Schedule`] derives its identity from (weak-entity relationship:
//! the schedule stores the key, not a live back-pointer, so the object graph
//! stays acyclic).
//!
//! # Validity
//! `month` must be in `[1, 12]` and `year` at least [`Month::MIN_YEAR`].
//! Construction through [`Month::new`] is the single validation point.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

/// A validated `(month, year)` calendar key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    month: u32,
    year: i32,
}

impl Month {
    /// Earliest supported year.
    pub const MIN_YEAR: i32 = 1970;

    /// Creates a month key, rejecting out-of-range values.
    pub fn new(month: u32, year: i32) -> Result<Self, EngineError> {
        if !(1..=12).contains(&month) || year < Self::MIN_YEAR {
            return Err(EngineError::InvalidMonth { month, year });
        }
        Ok(Self { month, year })
    }

    /// Month number, 1-12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Year, >= 1970.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // month/year validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid month key")
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .expect("valid month key")
    }

    /// Number of days in the month (28-31, leap-year aware).
    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    /// All days of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day().iter_days().take(self.day_count() as usize)
    }

    /// Whether a date belongs to this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(1, 2024).is_ok());
        assert!(Month::new(12, 1970).is_ok());

        assert!(matches!(
            Month::new(0, 2024),
            Err(EngineError::InvalidMonth { month: 0, .. })
        ));
        assert!(matches!(Month::new(13, 2024), Err(_)));
        assert!(matches!(Month::new(6, 1969), Err(_)));
    }

    #[test]
    fn test_day_count() {
        assert_eq!(Month::new(1, 2024).unwrap().day_count(), 31);
        assert_eq!(Month::new(2, 2024).unwrap().day_count(), 29); // leap year
        assert_eq!(Month::new(2, 2023).unwrap().day_count(), 28);
        assert_eq!(Month::new(4, 2024).unwrap().day_count(), 30);
        assert_eq!(Month::new(12, 2024).unwrap().day_count(), 31);
    }

    #[test]
    fn test_days_ascending_and_complete() {
        let m = Month::new(2, 2024).unwrap();
        let days: Vec<NaiveDate> = m.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], m.first_day());
        assert_eq!(*days.last().unwrap(), m.last_day());
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_contains() {
        let m = Month::new(1, 2024).unwrap();
        assert!(m.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(m.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!m.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[test]
    fn test_december_rollover() {
        let m = Month::new(12, 2023).unwrap();
        assert_eq!(m.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(3, 2024).unwrap().to_string(), "2024-03");
    }
}
