//! Mock port adapters for integration tests.
//!
//! The three single-threaded mocks share one journal so tests can assert
//! on the relative order of calls across ports.  The atomic counters are
//! `Send` for tests that drive a `SharedGovernor` from several threads.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use speed_governor::app::ports::{ActivationLog, ActuatorPort, FeedbackPort};
use speed_governor::error::PortError;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    OverrideAcceleration,
    RaiseAlert,
    RecordActivation { speed: i32, threshold: i32 },
}

pub type Journal = Rc<RefCell<Vec<PortCall>>>;

// ── Journal-backed mocks ──────────────────────────────────────

pub struct MockActuator {
    journal: Journal,
    pub fail: bool,
}

pub struct MockFeedback {
    journal: Journal,
    pub fail: bool,
}

pub struct MockLog {
    journal: Journal,
    pub fail: bool,
}

/// Three mocks wired to one fresh journal.
pub fn mock_ports() -> (Journal, MockActuator, MockFeedback, MockLog) {
    let journal: Journal = Rc::new(RefCell::new(Vec::new()));
    (
        journal.clone(),
        MockActuator {
            journal: journal.clone(),
            fail: false,
        },
        MockFeedback {
            journal: journal.clone(),
            fail: false,
        },
        MockLog {
            journal,
            fail: false,
        },
    )
}

/// Number of activations visible in a journal.
#[allow(dead_code)]
pub fn activation_count(journal: &Journal) -> usize {
    journal
        .borrow()
        .iter()
        .filter(|c| matches!(c, PortCall::RecordActivation { .. }))
        .count()
}

impl ActuatorPort for MockActuator {
    fn override_acceleration(&mut self) -> Result<(), PortError> {
        if self.fail {
            return Err(PortError::Rejected);
        }
        self.journal.borrow_mut().push(PortCall::OverrideAcceleration);
        Ok(())
    }
}

impl FeedbackPort for MockFeedback {
    fn raise_alert(&mut self) -> Result<(), PortError> {
        if self.fail {
            return Err(PortError::Unavailable);
        }
        self.journal.borrow_mut().push(PortCall::RaiseAlert);
        Ok(())
    }
}

impl ActivationLog for MockLog {
    fn record_activation(&mut self, speed: i32, threshold: i32) -> Result<(), PortError> {
        if self.fail {
            return Err(PortError::Unavailable);
        }
        self.journal
            .borrow_mut()
            .push(PortCall::RecordActivation { speed, threshold });
        Ok(())
    }
}

// ── Thread-safe counters ──────────────────────────────────────

#[derive(Clone, Default)]
pub struct Counter(pub Arc<AtomicU32>);

#[allow(dead_code)]
impl Counter {
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) -> Result<(), PortError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl ActuatorPort for Counter {
    fn override_acceleration(&mut self) -> Result<(), PortError> {
        self.bump()
    }
}

impl FeedbackPort for Counter {
    fn raise_alert(&mut self) -> Result<(), PortError> {
        self.bump()
    }
}

impl ActivationLog for Counter {
    fn record_activation(&mut self, _speed: i32, _threshold: i32) -> Result<(), PortError> {
        self.bump()
    }
}
