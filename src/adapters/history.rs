//! In-memory activation history.
//!
//! Keeps the most recent `N` activation records in a fixed-capacity ring
//! without heap.  Older records are overwritten.  Not persisted.

use heapless::HistoryBuffer;
use serde::{Deserialize, Serialize};

use crate::app::ports::ActivationLog;
use crate::error::PortError;

/// One governor activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub speed: i32,
    pub threshold: i32,
}

/// Ring of the last `N` activation records.
pub struct ActivationHistory<const N: usize> {
    ring: HistoryBuffer<ActivationRecord, N>,
    total: u64,
}

impl<const N: usize> Default for ActivationHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ActivationHistory<N> {
    pub fn new() -> Self {
        Self {
            ring: HistoryBuffer::new(),
            total: 0,
        }
    }

    /// Records currently held (at most `N`).
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Records ever written, including overwritten ones.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn latest(&self) -> Option<&ActivationRecord> {
        self.ring.recent()
    }

    /// Held records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivationRecord> {
        self.ring.oldest_ordered()
    }
}

impl<const N: usize> ActivationLog for ActivationHistory<N> {
    fn record_activation(&mut self, speed: i32, threshold: i32) -> Result<(), PortError> {
        self.ring.write(ActivationRecord { speed, threshold });
        self.total += 1;
        Ok(())
    }
}
