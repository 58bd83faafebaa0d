//! Outbound views of the governor.
//!
//! [`GovernorStatus`] is the read-only snapshot handed to presentation
//! adapters.  [`Report`] describes what a single evaluation did, including
//! any port failures the effect executor swallowed.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PortError;
use crate::fsm::StateId;
use crate::fsm::context::{Effect, MAX_EFFECTS};

/// A point-in-time snapshot suitable for display or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernorStatus {
    pub current_speed: i32,
    pub threshold: i32,
    pub active: bool,
}

/// One-line summary for consoles and dashboards.
impl fmt::Display for GovernorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current Speed: {} km/h, Threshold: {} km/h, Governor Active: {}",
            self.current_speed, self.threshold, self.active
        )
    }
}

/// One effect that its port refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectFailure {
    pub effect: Effect,
    pub error: PortError,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub from: StateId,
    pub to: StateId,
    /// Effects that failed, in execution order.  The remaining effects
    /// still ran.
    pub failures: heapless::Vec<EffectFailure, MAX_EFFECTS>,
}

impl Report {
    /// The governor crossed into `Active` during this evaluation.
    pub fn activated(&self) -> bool {
        self.from == StateId::Idle && self.to == StateId::Active
    }

    /// The governor dropped back to `Idle` during this evaluation.
    pub fn deactivated(&self) -> bool {
        self.from == StateId::Active && self.to == StateId::Idle
    }

    /// Every requested effect succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
