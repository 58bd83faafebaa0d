//! Port traits: the hexagonal boundary between the governor and the vehicle.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Governor (domain)
//! ```
//!
//! Driven adapters (throttle control unit, driver alert, activation log)
//! implement these traits.  The [`Governor`](super::service::Governor)
//! owns one implementation of each, injected at construction.  A caller
//! that wants to keep ownership (e.g. a test spy) can pass `&mut T`: every
//! port is also implemented for mutable references.
//!
//! Every method returns a typed [`PortError`] on failure.  The governor
//! treats these as recoverable: a failing alert never prevents actuation
//! or logging, and vice versa.

use crate::error::PortError;

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → control unit)
// ───────────────────────────────────────────────────────────────

/// Throttle-limiting command sent to the vehicle's control unit.
pub trait ActuatorPort {
    /// Override acceleration.  Idempotent.
    fn override_acceleration(&mut self) -> Result<(), PortError>;
}

// ───────────────────────────────────────────────────────────────
// Feedback port (domain → driver)
// ───────────────────────────────────────────────────────────────

/// Visual or audible driver signal.
pub trait FeedbackPort {
    /// Raise the driver alert.  Idempotent.
    fn raise_alert(&mut self) -> Result<(), PortError>;
}

// ───────────────────────────────────────────────────────────────
// Activation log port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// Receives one record per governor activation.
pub trait ActivationLog {
    /// Record the speed and threshold at the moment of activation.
    fn record_activation(&mut self, speed: i32, threshold: i32) -> Result<(), PortError>;
}

// ───────────────────────────────────────────────────────────────
// Borrowed ports
// ───────────────────────────────────────────────────────────────

impl<T: ActuatorPort + ?Sized> ActuatorPort for &mut T {
    fn override_acceleration(&mut self) -> Result<(), PortError> {
        (**self).override_acceleration()
    }
}

impl<T: FeedbackPort + ?Sized> FeedbackPort for &mut T {
    fn raise_alert(&mut self) -> Result<(), PortError> {
        (**self).raise_alert()
    }
}

impl<T: ActivationLog + ?Sized> ActivationLog for &mut T {
    fn record_activation(&mut self, speed: i32, threshold: i32) -> Result<(), PortError> {
        (**self).record_activation(speed, threshold)
    }
}
