//! Vehicle-state holder and reading admission.
//!
//! [`VehicleState`] stores the last observed speed verbatim.  Whether a raw
//! reading reaches it unchanged is decided beforehand by
//! [`ReadingPolicy::admit`], so the policy is explicit configuration
//! rather than something buried in the state holder.

use crate::config::ReadingPolicy;
use crate::error::ReadingError;

/// Last observed vehicle speed (km/h).  No history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VehicleState {
    speed: i32,
}

impl VehicleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the current speed.
    pub fn update_speed(&mut self, value: i32) {
        self.speed = value;
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }
}

impl ReadingPolicy {
    /// Apply the policy to a raw reading, returning the speed to store.
    pub fn admit(self, raw: i32, max_plausible: i32) -> Result<i32, ReadingError> {
        match self {
            Self::PassThrough => Ok(raw),
            Self::Clamp => Ok(raw.clamp(0, max_plausible)),
            Self::Reject if raw < 0 => Err(ReadingError::Negative(raw)),
            Self::Reject if raw > max_plausible => Err(ReadingError::Implausible {
                speed: raw,
                max: max_plausible,
            }),
            Self::Reject => Ok(raw),
        }
    }

    /// Admitted speeds never exceed the plausible-speed ceiling.
    pub fn caps_speed(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}
