//! Governor configuration parameters.
//!
//! [`GovernorConfig`] is the construction-time document: initial threshold
//! plus the two policy switches that decide how threshold changes and
//! out-of-range readings are handled.  [`ThresholdConfig`] is the live,
//! validated threshold the governor owns at runtime.
//!
//! Values are validated before use.  Invalid ranges are rejected, never
//! silently clamped.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What happens when the threshold changes between readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdChangePolicy {
    /// Only the next speed reading is evaluated against the new threshold.
    #[default]
    NextReading,
    /// Re-evaluate against the last reading as soon as the threshold changes.
    Immediate,
}

/// How negative or implausibly high readings are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingPolicy {
    /// Accept every reading verbatim.
    #[default]
    PassThrough,
    /// Refuse out-of-range readings with `InvalidReading`.
    Reject,
    /// Saturate into `0..=max_plausible_speed_kmh`.
    Clamp,
}

/// Core governor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GovernorConfig {
    /// Threshold (km/h) at construction time.
    pub initial_threshold_kmh: i32,
    pub threshold_change: ThresholdChangePolicy,
    pub reading_policy: ReadingPolicy,
    /// Upper bound (km/h) used by the `Reject` and `Clamp` reading policies.
    pub max_plausible_speed_kmh: i32,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            initial_threshold_kmh: 100,
            threshold_change: ThresholdChangePolicy::NextReading,
            reading_policy: ReadingPolicy::PassThrough,
            max_plausible_speed_kmh: 400,
        }
    }
}

impl GovernorConfig {
    /// Config with the given initial threshold and default policies.
    pub fn with_threshold(initial_threshold_kmh: i32) -> Self {
        Self {
            initial_threshold_kmh,
            ..Self::default()
        }
    }

    /// Range-check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_threshold_kmh <= 0 {
            return Err(ConfigError::NonPositiveThreshold(self.initial_threshold_kmh));
        }
        if self.max_plausible_speed_kmh <= 0 {
            return Err(ConfigError::NonPositiveSpeedCeiling(
                self.max_plausible_speed_kmh,
            ));
        }
        if self.reading_policy.caps_speed()
            && self.max_plausible_speed_kmh <= self.initial_threshold_kmh
        {
            return Err(ConfigError::ThresholdAtOrAboveCeiling {
                threshold: self.initial_threshold_kmh,
                ceiling: self.max_plausible_speed_kmh,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document.  Missing fields take defaults;
    /// unknown fields are rejected as [`ConfigError::Malformed`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|e| {
            log::warn!("Config parse failed: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Runtime threshold holder
// ---------------------------------------------------------------------------

/// The live speed threshold.  Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdConfig {
    threshold: i32,
}

impl ThresholdConfig {
    pub fn new(initial: i32) -> Result<Self, ConfigError> {
        let mut cfg = Self { threshold: 1 };
        cfg.set(initial)?;
        Ok(cfg)
    }

    /// Replace the threshold.  A non-positive value is rejected and the
    /// previous threshold is retained.
    pub fn set(&mut self, value: i32) -> Result<(), ConfigError> {
        if value <= 0 {
            return Err(ConfigError::NonPositiveThreshold(value));
        }
        self.threshold = value;
        Ok(())
    }

    pub fn get(&self) -> i32 {
        self.threshold
    }
}
