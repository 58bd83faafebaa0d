//! Pin adapters: bridge `embedded-hal` output pins to the governor ports.
//!
//! [`ThrottleCutPin`] asserts a throttle-limit request line wired to the
//! control unit.  [`AlertIndicator`] drives a dash lamp or buzzer enable
//! line.  Both are generic over [`OutputPin`], so any HAL (or a test
//! double) plugs in.  Pin errors surface as [`PortError::PinWriteFailed`].

use embedded_hal::digital::OutputPin;
use log::{debug, error};

use crate::app::ports::{ActuatorPort, FeedbackPort};
use crate::error::PortError;

/// Throttle-limit request line.  High = override asserted.
pub struct ThrottleCutPin<P> {
    pin: P,
    asserted: bool,
}

impl<P: OutputPin> ThrottleCutPin<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            asserted: false,
        }
    }

    /// Drop the request line.  Called by the embedding application once it
    /// decides the override may end; the governor itself never releases.
    pub fn release(&mut self) -> Result<(), PortError> {
        self.pin.set_low().map_err(|_| {
            error!("Throttle cut release failed");
            PortError::PinWriteFailed
        })?;
        self.asserted = false;
        Ok(())
    }

    pub fn is_asserted(&self) -> bool {
        self.asserted
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ActuatorPort for ThrottleCutPin<P> {
    fn override_acceleration(&mut self) -> Result<(), PortError> {
        self.pin.set_high().map_err(|_| {
            error!("Throttle cut assert failed");
            PortError::PinWriteFailed
        })?;
        self.asserted = true;
        debug!("Throttle cut asserted");
        Ok(())
    }
}

/// Driver alert lamp / buzzer enable.  High = alerting.
pub struct AlertIndicator<P> {
    pin: P,
}

impl<P: OutputPin> AlertIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Silence the indicator.
    pub fn clear(&mut self) -> Result<(), PortError> {
        self.pin.set_low().map_err(|_| PortError::PinWriteFailed)
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> FeedbackPort for AlertIndicator<P> {
    fn raise_alert(&mut self) -> Result<(), PortError> {
        self.pin.set_high().map_err(|_| {
            error!("Alert indicator write failed");
            PortError::PinWriteFailed
        })
    }
}
