//! Unified error types for the speed governor.
//!
//! A single [`Error`] enum that every subsystem converts into, keeping the
//! caller's error handling uniform.  All variants are `Copy` so they can be
//! returned from the control path without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level governor error
// ---------------------------------------------------------------------------

/// Every fallible governor operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A threshold or configuration document was rejected.
    /// Governor state is left untouched.
    InvalidConfiguration(ConfigError),
    /// A speed reading was rejected by the configured reading policy.
    InvalidReading(ReadingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::InvalidReading(e) => write!(f, "invalid reading: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Threshold must be strictly positive.
    NonPositiveThreshold(i32),
    /// The plausible-speed ceiling must be strictly positive.
    NonPositiveSpeedCeiling(i32),
    /// A capping reading policy with the ceiling at or below the threshold;
    /// no admitted reading could ever exceed it.
    ThresholdAtOrAboveCeiling { threshold: i32, ceiling: i32 },
    /// Configuration document could not be parsed.
    Malformed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveThreshold(v) => write!(f, "threshold must be > 0, got {v}"),
            Self::NonPositiveSpeedCeiling(v) => {
                write!(f, "max plausible speed must be > 0, got {v}")
            }
            Self::ThresholdAtOrAboveCeiling { threshold, ceiling } => write!(
                f,
                "threshold {threshold} km/h unreachable under speed ceiling {ceiling} km/h"
            ),
            Self::Malformed => write!(f, "malformed configuration document"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

// ---------------------------------------------------------------------------
// Reading errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    /// Speed below zero.
    Negative(i32),
    /// Speed above the configured physical maximum.
    Implausible { speed: i32, max: i32 },
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(v) => write!(f, "negative speed {v} km/h"),
            Self::Implausible { speed, max } => {
                write!(f, "speed {speed} km/h exceeds plausible maximum {max} km/h")
            }
        }
    }
}

impl From<ReadingError> for Error {
    fn from(e: ReadingError) -> Self {
        Self::InvalidReading(e)
    }
}

// ---------------------------------------------------------------------------
// Port errors
// ---------------------------------------------------------------------------

/// Failure reported by an actuator, feedback or activation-log port.
///
/// Port failures are recoverable: they are reported alongside the
/// evaluation result and never abort the remaining effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// Output pin write failed.
    PinWriteFailed,
    /// The control unit refused the command.
    Rejected,
    /// The downstream sink is unreachable or full.
    Unavailable,
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinWriteFailed => write!(f, "pin write failed"),
            Self::Rejected => write!(f, "command rejected"),
            Self::Unavailable => write!(f, "port unavailable"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
