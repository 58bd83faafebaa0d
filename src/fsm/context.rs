//! Explicit governor state threaded through every FSM handler.
//!
//! `GovernorContext` is a small `Copy` value holding everything the
//! transition logic reads: the live threshold, the last speed reading and
//! the current state.  The FSM takes it by value and hands back the next
//! one together with the [`Effects`] the caller must execute, so decision
//! logic never touches a port.

use crate::config::ThresholdConfig;
use crate::vehicle::VehicleState;

use super::StateId;

// ---------------------------------------------------------------------------
// Effects (written by state handlers; executed by the governor service)
// ---------------------------------------------------------------------------

/// A side effect requested by a state handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Command the control unit to limit throttle.
    OverrideAcceleration,
    /// Signal the driver.
    RaiseAlert,
    /// Append an activation record.
    RecordActivation { speed: i32, threshold: i32 },
}

/// Upper bound on effects produced by a single evaluation.
pub const MAX_EFFECTS: usize = 3;

/// Effects produced by one evaluation, in execution order.
pub type Effects = heapless::Vec<Effect, MAX_EFFECTS>;

// ---------------------------------------------------------------------------
// GovernorContext
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernorContext {
    /// Current state.  `Active` is the activation flag.
    pub state: StateId,
    pub threshold: ThresholdConfig,
    pub vehicle: VehicleState,

    /// Number of evaluations run so far.
    pub evaluations: u64,
    /// Number of `Idle -> Active` transitions so far.
    pub activations: u64,
}

impl GovernorContext {
    /// Fresh context: `Idle`, speed 0.
    pub fn new(threshold: ThresholdConfig) -> Self {
        Self {
            state: StateId::Idle,
            threshold,
            vehicle: VehicleState::new(),
            evaluations: 0,
            activations: 0,
        }
    }

    /// Copy of this context with `speed` stored as the latest reading.
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.vehicle.update_speed(speed);
        self
    }

    /// Strictly above threshold.  Equal is not over.
    pub fn is_over_threshold(&self) -> bool {
        self.vehicle.speed() > self.threshold.get()
    }

    pub fn is_active(&self) -> bool {
        self.state == StateId::Active
    }

    pub fn speed(&self) -> i32 {
        self.vehicle.speed()
    }

    pub fn threshold(&self) -> i32 {
        self.threshold.get()
    }
}
