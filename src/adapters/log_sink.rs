//! Log-based port adapters.
//!
//! Implement the three governor ports by writing human-readable lines to
//! the `log` facade.  Useful as the simulated control unit on a host, and
//! as the activation log in production where the logger backend forwards
//! to UART or a file.

use log::{info, warn};

use crate::app::ports::{ActivationLog, ActuatorPort, FeedbackPort};
use crate::error::PortError;

/// Simulated throttle cut: logs the override command.
#[derive(Debug, Default)]
pub struct LogActuator;

impl LogActuator {
    pub fn new() -> Self {
        Self
    }
}

impl ActuatorPort for LogActuator {
    fn override_acceleration(&mut self) -> Result<(), PortError> {
        info!("ECU | acceleration overridden to hold threshold");
        Ok(())
    }
}

/// Driver alert rendered as a warning line.
#[derive(Debug, Default)]
pub struct LogFeedback;

impl LogFeedback {
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackPort for LogFeedback {
    fn raise_alert(&mut self) -> Result<(), PortError> {
        warn!("ALERT | speed limit reached");
        Ok(())
    }
}

/// Activation records written to the log.
#[derive(Debug, Default)]
pub struct LogActivationLog;

impl LogActivationLog {
    pub fn new() -> Self {
        Self
    }
}

impl ActivationLog for LogActivationLog {
    fn record_activation(&mut self, speed: i32, threshold: i32) -> Result<(), PortError> {
        info!(
            "GOVERNOR | activated at {} km/h (threshold {} km/h)",
            speed, threshold
        );
        Ok(())
    }
}
