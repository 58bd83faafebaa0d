//! Vehicle speed governor.
//!
//! Watches the current speed against a configurable threshold.  On the
//! reading that first exceeds it, the governor cuts throttle, alerts the
//! driver and records the activation, exactly once per crossing.  Dropping
//! back to or below the threshold resets it silently.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │   ThrottleCutPin   AlertIndicator   ActivationHistory    │
//! │   LogActuator      LogFeedback      LogActivationLog     │
//! │  ───────────────── Port Trait Boundary ────────────────  │
//! │   ┌──────────────────────────────────────────────────┐   │
//! │   │  Governor (service) ─▶ Fsm (pure transitions)    │   │
//! │   └──────────────────────────────────────────────────┘   │
//! │   SharedGovernor (one lock per operation)                │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod shared;
pub mod vehicle;

pub use app::events::{GovernorStatus, Report};
pub use app::service::Governor;
pub use config::{GovernorConfig, ReadingPolicy, ThresholdChangePolicy};
pub use error::{Error, Result};
pub use shared::SharedGovernor;
