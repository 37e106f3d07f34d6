//! Missed block detection

use crate::constants::health::MISSED_BLOCK_CONFIRMATIONS;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductionState {
    pub last_producing: bool,
    pub missed_count: u32,
}

impl Default for ProductionState {
    fn default() -> Self {
        Self {
            last_producing: true,
            missed_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionEvent {
    MissedBlock,
}

/// Counts missed slots while the delegate is believed to be producing.
///
/// Misses below [`MISSED_BLOCK_CONFIRMATIONS`] are absorbed and the delegate
/// is still considered producing. Reaching the threshold reports one missed
/// block and flips `last_producing` until production resumes.
#[derive(Debug, Clone, Default)]
pub struct ProductionTracker {
    state: ProductionState,
}

impl ProductionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, producing: bool) -> Option<ProductionEvent> {
        if producing {
            self.state.missed_count = 0;
            self.state.last_producing = true;
            return None;
        }

        if !self.state.last_producing {
            return None;
        }

        self.state.missed_count += 1;
        if self.state.missed_count == MISSED_BLOCK_CONFIRMATIONS {
            self.state.last_producing = false;
            Some(ProductionEvent::MissedBlock)
        } else {
            None
        }
    }

    pub fn state(&self) -> ProductionState {
        self.state
    }
}
