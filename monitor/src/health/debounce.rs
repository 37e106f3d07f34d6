//! N-confirmation state transition filter

use crate::constants::health::CONFIRMATION_THRESHOLD;

/// A state change that survived the confirmation window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedTransition<L> {
    pub from: L,
    pub to: L,
}

/// Confirms a label only after [`CONFIRMATION_THRESHOLD`] identical
/// observations in a row, so a single bad RPC answer does not flap alerts.
///
/// A transition is reported when a label is confirmed that differs from the
/// previously confirmed one. The very first confirmation only establishes the
/// baseline.
#[derive(Debug, Clone)]
pub struct DebouncedStateTracker<L> {
    last_observed: Option<L>,
    consecutive_count: u32,
    confirmed: Option<L>,
}

impl<L: Clone + PartialEq> DebouncedStateTracker<L> {
    pub fn new() -> Self {
        Self {
            last_observed: None,
            consecutive_count: 0,
            confirmed: None,
        }
    }

    pub fn observe(&mut self, label: L) -> Option<ConfirmedTransition<L>> {
        if self.last_observed.as_ref() != Some(&label) {
            self.consecutive_count = 0;
            self.last_observed = Some(label.clone());
        }
        self.consecutive_count = self.consecutive_count.saturating_add(1);

        if self.consecutive_count != CONFIRMATION_THRESHOLD {
            return None;
        }

        match self.confirmed.replace(label.clone()) {
            Some(from) if from != label => Some(ConfirmedTransition { from, to: label }),
            _ => None,
        }
    }

    pub fn confirmed(&self) -> Option<&L> {
        self.confirmed.as_ref()
    }

    pub fn last_observed(&self) -> Option<&L> {
        self.last_observed.as_ref()
    }

    pub fn consecutive_count(&self) -> u32 {
        self.consecutive_count
    }
}

impl<L: Clone + PartialEq> Default for DebouncedStateTracker<L> {
    fn default() -> Self {
        Self::new()
    }
}
