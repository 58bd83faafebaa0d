//! Application core: governor logic with no I/O.
//!
//! This module holds the governor service and the views it exposes.  All
//! interaction with the vehicle happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
