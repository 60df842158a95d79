//! Schedule lifecycle: the approval state machine and the engine facade.
//!
//! # State machine
//!
//! ```text
//! NotCreated --generate(valid)----> PendingConfirmation   (days installed)
//! NotCreated --generate(invalid)--> NotCreated            (untouched, report returned)
//! PendingConfirmation --Confirm---> Confirmed
//! PendingConfirmation --Discard---> NotCreated            (days cleared)
//! Confirmed  --Reopen-------------> NotCreated            (days cleared)
//! ```
//!
//! There is no path from `Confirmed` back to `PendingConfirmation` except
//! through `NotCreated`. Every other (state, action) pair is rejected at
//! the single match in [`transition`].
//!
//! # Atomicity
//!
//! Transitions consume the schedule and return a new one, so days and
//! status always move together; a caller can never hold a schedule with
//! days installed but the old status, or vice versa. Serializing
//! concurrent access to the same month's schedule is the caller's
//! responsibility; builds for different months share nothing.

use std::fmt;
use tracing::debug;

use crate::builder::{build_draft, BuildDiagnostic, Draft};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Month, Schedule, ScheduleStatus};
use crate::roster::Roster;
use crate::validation::{validate, ValidationReport};

/// An action requested on a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Build, validate, and promote a draft (only from `NotCreated`).
    Build,
    /// Approve a pending schedule.
    Confirm,
    /// Throw away a pending draft and return to `NotCreated`.
    Discard,
    /// Reopen a confirmed schedule for rebuilding. The confirmed
    /// assignment is lost unless the caller archived it first.
    Reopen,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Build => "build",
            Self::Confirm => "confirm",
            Self::Discard => "discard",
            Self::Reopen => "reopen",
        };
        f.write_str(s)
    }
}

/// Applies a lifecycle action to a schedule.
///
/// The transition table is checked in this single place; any pair not
/// listed above yields [`EngineError::IllegalTransition`] and the
/// schedule is dropped unchanged.
pub fn transition(schedule: Schedule, action: Action) -> EngineResult<Schedule> {
    let from = schedule.status();
    let next = match (from, action) {
        (ScheduleStatus::PendingConfirmation, Action::Confirm) => schedule.into_confirmed(),
        (ScheduleStatus::PendingConfirmation, Action::Discard) => schedule.into_not_created(),
        (ScheduleStatus::Confirmed, Action::Reopen) => schedule.into_not_created(),
        (from, action) => return Err(EngineError::IllegalTransition { from, action }),
    };
    debug!(month = %next.month(), %from, to = %next.status(), %action, "schedule transition");
    Ok(next)
}

/// Result of a successful [`Engine::generate`] call.
///
/// "Successful" means the computation ran; the draft itself may still
/// have failed validation, in which case `schedule` is the untouched
/// `NotCreated` input and `report` carries the violations.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// The schedule after the attempt.
    pub schedule: Schedule,
    /// The validation findings for the draft.
    pub report: ValidationReport,
    /// Per-doctor problems encountered while building.
    pub diagnostics: Vec<BuildDiagnostic>,
}

/// The scheduling engine: configuration plus the build/validate/promote
/// composition.
///
/// Pure computation over in-memory data; loading the roster and
/// persisting results are the surrounding application's job.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine, rejecting invalid configuration.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds and validates a draft for a month without touching any
    /// schedule. The draft is a plain value; promoting it is
    /// [`Engine::generate`]'s job.
    pub fn build(&self, roster: &Roster, month: Month) -> (Draft, ValidationReport) {
        let draft = build_draft(roster, month, &self.config);
        let report = validate(&draft.days, month, roster, &self.config);
        (draft, report)
    }

    /// Builds, validates, and promotes in one atomic step.
    ///
    /// Only valid from `NotCreated`. On a passing report the returned
    /// schedule holds the draft days and is `PendingConfirmation`; on a
    /// failing report the input schedule comes back unchanged alongside
    /// the report. A failing validation is a normal outcome, not an
    /// `Err`.
    pub fn generate(&self, roster: &Roster, schedule: Schedule) -> EngineResult<BuildOutcome> {
        if schedule.status() != ScheduleStatus::NotCreated {
            return Err(EngineError::IllegalTransition {
                from: schedule.status(),
                action: Action::Build,
            });
        }

        let (draft, report) = self.build(roster, schedule.month());
        let schedule = if report.is_valid() {
            debug!(month = %schedule.month(), "draft accepted, schedule pending confirmation");
            schedule.into_pending(draft.days)
        } else {
            debug!(
                month = %schedule.month(),
                violations = report.violations.len(),
                "draft rejected, schedule stays not-created"
            );
            schedule
        };

        Ok(BuildOutcome {
            schedule,
            report,
            diagnostics: draft.diagnostics,
        })
    }
}
