//! Thread-safe governor handle.
//!
//! The governor is single-threaded.  When a multi-threaded host feeds it
//! from several tasks (speed sampler, configuration channel, display), the
//! whole governor sits behind one blocking mutex and every operation holds
//! the lock from start to finish.  That keeps the read-evaluate-effect
//! sequence atomic, so two readings can never both observe `Idle` and both
//! fire the activation effects.
//!
//! The lock is a [`CriticalSectionRawMutex`].  This crate does not pick a
//! critical-section implementation; the final binary does (for a host
//! build, `critical-section` with its `std` feature).

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::app::events::{GovernorStatus, Report};
use crate::app::ports::{ActivationLog, ActuatorPort, FeedbackPort};
use crate::app::service::Governor;
use crate::error::Result;

/// A [`Governor`] guarded by a single critical-section mutex.
pub struct SharedGovernor<A, F, L> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Governor<A, F, L>>>,
}

impl<A, F, L> SharedGovernor<A, F, L>
where
    A: ActuatorPort,
    F: FeedbackPort,
    L: ActivationLog,
{
    pub fn new(governor: Governor<A, F, L>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(governor)),
        }
    }

    pub fn set_speed_threshold(&self, value: i32) -> Result<Option<Report>> {
        self.with(|g| g.set_speed_threshold(value))
    }

    pub fn update_vehicle_speed(&self, value: i32) -> Result<Report> {
        self.with(|g| g.update_vehicle_speed(value))
    }

    pub fn status(&self) -> GovernorStatus {
        self.with(|g| g.status())
    }

    /// Run `f` with exclusive access to the governor, under the lock.
    ///
    /// `f` must not call back into this handle, directly or from a port.
    /// The critical section is reentrant on the same thread, so a nested
    /// call is not blocked and panics on the inner `RefCell` borrow.
    pub fn with<R>(&self, f: impl FnOnce(&mut Governor<A, F, L>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    pub fn into_inner(self) -> Governor<A, F, L> {
        self.inner.into_inner().into_inner()
    }
}
