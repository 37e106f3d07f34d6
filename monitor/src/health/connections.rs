//! Peer count tracking

use super::types::{ConnectionEvent, ConnectionState};
use crate::constants::health::STARVED_CONNECTION_THRESHOLD;

/// Two-state peer count tracker with a single threshold.
///
/// State follows every reading immediately. Events are only emitted between
/// `Connected` and `Starved`, so a low reading straight after startup does
/// not alert.
#[derive(Debug, Clone, Default)]
pub struct ConnectionHealthTracker {
    state: ConnectionState,
}

impl ConnectionHealthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, connections: u64) -> Option<ConnectionEvent> {
        let next = if connections <= STARVED_CONNECTION_THRESHOLD {
            ConnectionState::Starved
        } else {
            ConnectionState::Connected
        };

        let event = match (self.state, next) {
            (ConnectionState::Connected, ConnectionState::Starved) => Some(ConnectionEvent::Starved),
            (ConnectionState::Starved, ConnectionState::Connected) => {
                Some(ConnectionEvent::Recovered)
            }
            _ => None,
        };

        self.state = next;
        event
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }
}
