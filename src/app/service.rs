//! Governor service, the hexagonal core.
//!
//! [`Governor`] owns the FSM, the explicit [`GovernorContext`] and the three
//! injected ports.  Decision logic lives in the FSM; this layer only feeds
//! it readings, stores the context it hands back and executes the returned
//! effects against the ports.
//!
//! ```text
//!                 ┌────────────────────────┐ ──▶ ActuatorPort
//!  speed / limit ▶│        Governor        │ ──▶ FeedbackPort
//!                 │  Fsm · GovernorContext │ ──▶ ActivationLog
//!                 └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::{GovernorConfig, ThresholdChangePolicy, ThresholdConfig};
use crate::error::{Error, Result};
use crate::fsm::context::{Effect, Effects, GovernorContext, MAX_EFFECTS};
use crate::fsm::{Fsm, StateId};

use super::events::{EffectFailure, GovernorStatus, Report};
use super::ports::{ActivationLog, ActuatorPort, FeedbackPort};

// ───────────────────────────────────────────────────────────────
// Governor
// ───────────────────────────────────────────────────────────────

/// Edge-triggered speed governor.
pub struct Governor<A, F, L> {
    fsm: Fsm,
    ctx: GovernorContext,
    config: GovernorConfig,
    actuator: A,
    feedback: F,
    log: L,
}

impl<A, F, L> Governor<A, F, L>
where
    A: ActuatorPort,
    F: FeedbackPort,
    L: ActivationLog,
{
    /// Validate `config` and build an `Idle` governor at speed 0.
    pub fn new(config: GovernorConfig, actuator: A, feedback: F, log: L) -> Result<Self> {
        config.validate()?;
        let threshold = ThresholdConfig::new(config.initial_threshold_kmh)?;
        info!(
            "Governor ready: threshold={} km/h, on_change={:?}, readings={:?}",
            threshold.get(),
            config.threshold_change,
            config.reading_policy
        );

        Ok(Self {
            fsm: Fsm::default(),
            ctx: GovernorContext::new(threshold),
            config,
            actuator,
            feedback,
            log,
        })
    }

    // ── Operations ────────────────────────────────────────────

    /// Replace the threshold.
    ///
    /// A non-positive value fails with [`Error::InvalidConfiguration`] and
    /// leaves every piece of state unchanged.  Under
    /// [`ThresholdChangePolicy::Immediate`] the last reading is re-evaluated
    /// against the new threshold and the resulting report returned; under
    /// [`ThresholdChangePolicy::NextReading`] nothing is evaluated.
    ///
    /// Any positive value is accepted, even one a capping reading policy can
    /// never reach; that case is only logged.
    pub fn set_speed_threshold(&mut self, value: i32) -> Result<Option<Report>> {
        if let Err(e) = self.ctx.threshold.set(value) {
            warn!("Threshold update rejected: {}", e);
            return Err(Error::InvalidConfiguration(e));
        }
        info!("Threshold set to {} km/h", value);
        if self.config.reading_policy.caps_speed()
            && value >= self.config.max_plausible_speed_kmh
        {
            warn!(
                "Threshold {} km/h is unreachable: {:?} readings never exceed {} km/h",
                value, self.config.reading_policy, self.config.max_plausible_speed_kmh
            );
        }

        match self.config.threshold_change {
            ThresholdChangePolicy::NextReading => Ok(None),
            ThresholdChangePolicy::Immediate => Ok(Some(self.evaluate(self.ctx))),
        }
    }

    /// Store a new speed reading and run the transition evaluation.
    ///
    /// Only fails when the reading policy is `Reject` and the reading is out
    /// of range; state is then left unchanged.
    pub fn update_vehicle_speed(&mut self, value: i32) -> Result<Report> {
        let speed = self
            .config
            .reading_policy
            .admit(value, self.config.max_plausible_speed_kmh)
            .inspect_err(|e| warn!("Speed reading rejected: {}", e))?;
        if speed != value {
            debug!("Speed reading {} km/h clamped to {} km/h", value, speed);
        }
        debug!("Vehicle speed updated: {} km/h", speed);

        Ok(self.evaluate(self.ctx.with_speed(speed)))
    }

    /// Snapshot of speed, threshold and activation flag.
    pub fn status(&self) -> GovernorStatus {
        GovernorStatus {
            current_speed: self.ctx.speed(),
            threshold: self.ctx.threshold(),
            active: self.ctx.is_active(),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> StateId {
        self.ctx.state
    }

    /// Total `Idle -> Active` transitions since construction.
    pub fn activations(&self) -> u64 {
        self.ctx.activations
    }

    /// Copy of the explicit governor state.
    pub fn context(&self) -> GovernorContext {
        self.ctx
    }

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn activation_log(&self) -> &L {
        &self.log
    }

    /// Tear down and hand the ports back.
    pub fn into_parts(self) -> (A, F, L) {
        (self.actuator, self.feedback, self.log)
    }

    // ── Internal ──────────────────────────────────────────────

    /// Run the FSM on `ctx`, commit the result and execute its effects.
    fn evaluate(&mut self, ctx: GovernorContext) -> Report {
        let from = ctx.state;
        let (next, effects) = self.fsm.step(ctx);
        self.ctx = next;

        if next.state != from {
            info!(
                "Governor {} -> {} (speed={} km/h, threshold={} km/h)",
                self.fsm.name(from),
                self.fsm.name(next.state),
                next.speed(),
                next.threshold()
            );
        }

        let failures = self.execute(&effects);
        Report {
            from,
            to: next.state,
            failures,
        }
    }

    /// Execute every effect in order.  A failure is logged and recorded;
    /// it never stops the effects after it.
    fn execute(&mut self, effects: &Effects) -> heapless::Vec<EffectFailure, MAX_EFFECTS> {
        let mut failures = heapless::Vec::new();
        for &effect in effects {
            let result = match effect {
                Effect::OverrideAcceleration => self.actuator.override_acceleration(),
                Effect::RaiseAlert => self.feedback.raise_alert(),
                Effect::RecordActivation { speed, threshold } => {
                    self.log.record_activation(speed, threshold)
                }
            };
            if let Err(error) = result {
                warn!("Effect {:?} failed: {}", effect, error);
                // At most one failure per effect, so this never overflows.
                let pushed = failures.push(EffectFailure { effect, error });
                debug_assert!(pushed.is_ok());
            }
        }
        failures
    }
}
