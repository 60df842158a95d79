//! Engine configuration.
//!
//! Settles the policy knobs the scheduling rules leave open: the cycle
//! length, what to do with days nobody covers, and optional per-day
//! assignment bounds. By default every eligible cycle-due doctor is
//! assigned and an uncovered day blocks confirmation.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for the scheduling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Days between a doctor's recurring cycle-shifts. Must be positive.
    pub cycle_length_days: u32,
    /// When `false` (the default), a day with no assigned doctor is a
    /// blocking validation violation; when `true` it is only advisory.
    pub allow_empty_days: bool,
    /// Minimum doctors per day enforced by the validator, if set.
    pub min_assigned_per_day: Option<usize>,
    /// Maximum doctors per day. The builder truncates the eligible set
    /// deterministically (ascending doctor id) and the validator enforces
    /// the bound on arbitrary drafts.
    pub max_assigned_per_day: Option<usize>,
}

impl EngineConfig {
    /// Creates a configuration with the given cycle length and default
    /// policies.
    pub fn new(cycle_length_days: u32) -> Self {
        Self {
            cycle_length_days,
            allow_empty_days: false,
            min_assigned_per_day: None,
            max_assigned_per_day: None,
        }
    }

    /// Sets the empty-day policy.
    pub fn with_allow_empty_days(mut self, allow: bool) -> Self {
        self.allow_empty_days = allow;
        self
    }

    /// Sets the per-day minimum.
    pub fn with_min_assigned_per_day(mut self, min: usize) -> Self {
        self.min_assigned_per_day = Some(min);
        self
    }

    /// Sets the per-day maximum.
    pub fn with_max_assigned_per_day(mut self, max: usize) -> Self {
        self.max_assigned_per_day = Some(max);
        self
    }

    /// Rejects unusable configurations.
    pub fn validate(&self) -> EngineResult<()> {
        if self.cycle_length_days == 0 {
            return Err(EngineError::InvalidConfig(
                "cycle_length_days must be positive".into(),
            ));
        }
        if let (Some(min), Some(max)) = (self.min_assigned_per_day, self.max_assigned_per_day) {
            if min > max {
                return Err(EngineError::InvalidConfig(format!(
                    "min_assigned_per_day ({min}) exceeds max_assigned_per_day ({max})"
                )));
            }
        }
        Ok(())
    }
}
