//! Push client state management.

#![allow(clippy::redundant_pub_crate)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the push-notification client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientState {
    /// No connection and no pending attempt.
    Idle,
    /// Opening the transport.
    Connecting,
    /// Transport open, credentials sent, awaiting the server's verdict.
    Authenticating,
    /// Authenticated; notifications flow and the heartbeat runs.
    Ready,
    /// Waiting out the reconnect delay after a rejected authentication.
    Reconnecting,
    /// Authentication retry budget exhausted. Terminal.
    Failed,
}

impl ClientState {
    /// Returns true if the client is ready to receive notifications.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns true if the client has failed permanently.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns true if the client is in a transitional state.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Connecting | Self::Authenticating | Self::Reconnecting)
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Authenticating => write!(f, "Authenticating"),
            Self::Ready => write!(f, "Ready"),
            Self::Reconnecting => write!(f, "Reconnecting"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// State shared between the client handle and its actor task.
///
/// Mutated only by the actor; handles read it through the lock.
#[derive(Debug)]
pub(crate) struct SharedState {
    /// Current lifecycle state.
    pub state: ClientState,
    /// Rejected authentication attempts since the last reset.
    pub auth_failures: u32,
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            state: ClientState::Idle,
            auth_failures: 0,
        }
    }
}

impl SharedState {
    /// Creates a new shared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the client idle.
    pub fn mark_idle(&mut self) {
        self.state = ClientState::Idle;
    }

    /// Marks the client as opening the transport.
    pub fn mark_connecting(&mut self) {
        self.state = ClientState::Connecting;
    }

    /// Marks the client as awaiting the authentication verdict.
    pub fn mark_authenticating(&mut self) {
        self.state = ClientState::Authenticating;
    }

    /// Marks the client ready. Successful authentication clears the
    /// failure budget.
    pub fn mark_ready(&mut self) {
        self.state = ClientState::Ready;
        self.auth_failures = 0;
    }

    /// Marks the client as waiting out the reconnect delay.
    pub fn mark_reconnecting(&mut self) {
        self.state = ClientState::Reconnecting;
    }

    /// Marks the client permanently failed.
    pub fn mark_failed(&mut self) {
        self.state = ClientState::Failed;
    }

    /// Records a rejected authentication and returns the new count.
    pub fn record_auth_failure(&mut self) -> u32 {
        self.auth_failures += 1;
        self.auth_failures
    }

    /// Resets the rejected-authentication counter.
    pub fn reset_auth_failures(&mut self) {
        self.auth_failures = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_state_display() {
        assert_eq!(ClientState::Idle.to_string(), "Idle");
        assert_eq!(ClientState::Ready.to_string(), "Ready");
        assert_eq!(ClientState::Failed.to_string(), "Failed");
    }

    #[test]
    fn test_client_state_checks() {
        assert!(ClientState::Ready.is_ready());
        assert!(!ClientState::Authenticating.is_ready());

        assert!(ClientState::Failed.is_failed());
        assert!(!ClientState::Idle.is_failed());

        assert!(ClientState::Connecting.is_transitioning());
        assert!(ClientState::Reconnecting.is_transitioning());
        assert!(!ClientState::Ready.is_transitioning());
    }

    #[test]
    fn test_shared_state_transitions() {
        let mut state = SharedState::new();
        assert_eq!(state.state, ClientState::Idle);
        assert_eq!(state.auth_failures, 0);

        state.mark_connecting();
        assert_eq!(state.state, ClientState::Connecting);

        state.mark_authenticating();
        assert_eq!(state.record_auth_failure(), 1);
        assert_eq!(state.record_auth_failure(), 2);

        state.mark_ready();
        assert_eq!(state.state, ClientState::Ready);
        assert_eq!(state.auth_failures, 0, "ready clears the failure budget");

        state.mark_failed();
        assert!(state.state.is_failed());
    }

    #[test]
    fn test_reset_auth_failures() {
        let mut state = SharedState::new();
        state.record_auth_failure();
        state.record_auth_failure();
        state.reset_auth_failures();
        assert_eq!(state.auth_failures, 0);
    }
}
