//! On-call guard-shift scheduling engine.
//!
//! Assigns on-call shifts to a pool of doctors for a calendar month,
//! honoring each doctor's recurring cycle-shift pattern and one-off
//! absences, validating the result, and managing the month's approval
//! lifecycle (not-created → pending-confirmation → confirmed).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Doctor`, `Absence`, `Month`,
//!   `Schedule`, `ScheduleDay`, `ScheduleStatus`
//! - **`roster`**: Consistent (doctors, absences) snapshot
//! - **`cycle`**: Cycle-shift due-date predicate
//! - **`builder`**: Draft builder (calendar walk + candidate filtering)
//! - **`validation`**: Structural and business checks, collected into a
//!   report
//! - **`lifecycle`**: Approval state machine and the `Engine` facade
//! - **`config`** / **`error`**: Policy knobs and error types
//!
//! # Data flow
//!
//! Roster snapshot → cycle calculator → builder → validator → lifecycle.
//! The engine is a pure, synchronous computation per month: all I/O
//! (loading doctors and absences, persisting the result) belongs to the
//! surrounding application.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use oncall_roster::{
//!     transition, Action, Doctor, Engine, EngineConfig, Month, Roster, Schedule,
//! };
//!
//! let roster = Roster::from_doctors(vec![
//!     Doctor::new("D1", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!         .with_name("Alice", "Moreno Sanz")
//!         .with_email("alice@example.org"),
//! ])?;
//!
//! // Cycle length 1: the doctor is on call every day.
//! let engine = Engine::new(EngineConfig::new(1))?;
//! let month = Month::new(1, 2024)?;
//!
//! let outcome = engine.generate(&roster, Schedule::not_created(month))?;
//! assert!(outcome.report.is_valid());
//! assert_eq!(outcome.schedule.days().len(), 31);
//!
//! let confirmed = transition(outcome.schedule, Action::Confirm)?;
//! # let _ = confirmed;
//! # Ok::<(), oncall_roster::EngineError>(())
//! ```

pub mod builder;
pub mod config;
pub mod cycle;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod roster;
pub mod validation;

pub use builder::{build_draft, BuildDiagnostic, Draft};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use lifecycle::{transition, Action, BuildOutcome, Engine};
pub use models::{
    Absence, Doctor, DoctorId, DoctorStatus, Month, Schedule, ScheduleDay, ScheduleStatus,
};
pub use roster::Roster;
pub use validation::{validate, ValidationReport, Violation, ViolationKind};
