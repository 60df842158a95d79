//! Roster snapshot.
//!
//! A [`Roster`] is the consistent, immutable view of the doctor registry
//! and absence tracker taken at the start of a build: the candidate pool
//! plus per-doctor exclusion windows. Snapshot construction is where the
//! engine rejects inconsistent input (duplicate doctor ids, absences for
//! doctors that are not in the pool); after that every read is infallible.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, Doctor, DoctorId};

/// An immutable (doctors, absences) snapshot.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    doctors: Vec<Doctor>,
    by_id: HashMap<DoctorId, usize>,
    absences: HashMap<DoctorId, Absence>,
}

impl Roster {
    /// Builds a snapshot, rejecting duplicate ids and dangling absences.
    pub fn snapshot(
        doctors: Vec<Doctor>,
        absences: HashMap<DoctorId, Absence>,
    ) -> EngineResult<Self> {
        let mut by_id = HashMap::with_capacity(doctors.len());
        for (idx, doctor) in doctors.iter().enumerate() {
            if by_id.insert(doctor.id.clone(), idx).is_some() {
                return Err(EngineError::DuplicateDoctor(doctor.id.clone()));
            }
        }
        for id in absences.keys() {
            if !by_id.contains_key(id) {
                return Err(EngineError::AbsenceForUnknownDoctor(id.clone()));
            }
        }
        Ok(Self {
            doctors,
            by_id,
            absences,
        })
    }

    /// A snapshot with no absences.
    pub fn from_doctors(doctors: Vec<Doctor>) -> EngineResult<Self> {
        Self::snapshot(doctors, HashMap::new())
    }

    /// All doctors in snapshot order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Looks up a doctor by id.
    pub fn get(&self, id: &DoctorId) -> Option<&Doctor> {
        self.by_id.get(id).map(|&idx| &self.doctors[idx])
    }

    /// The active absence of a doctor, if any.
    pub fn absence_for(&self, id: &DoctorId) -> Option<&Absence> {
        self.absences.get(id)
    }

    /// Whether a doctor is absent on a given date.
    pub fn is_absent(&self, id: &DoctorId, date: NaiveDate) -> bool {
        self.absences.get(id).is_some_and(|a| a.covers(date))
    }

    /// Number of doctors in the snapshot.
    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
