//! On-call scheduling domain models.
//!
//! Core data types for the guard-shift engine: the staffing pool
//! ([`Doctor`], [`Absence`]), the calendar key ([`Month`]), and the
//! solution ([`Schedule`], [`ScheduleDay`], [`ScheduleStatus`]).
//!
//! All types serialize with serde; the persisted contract shape is
//! `Month 1:1 Schedule{status, days}` and `Doctor 1:0..1 Absence`,
//! with storage owned by the surrounding application.

mod doctor;
mod month;
mod schedule;

pub use doctor::{Absence, Doctor, DoctorId, DoctorStatus};
pub use month::Month;
pub use schedule::{Schedule, ScheduleDay, ScheduleStatus};
