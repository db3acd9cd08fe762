//! Push client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the push-notification client.
///
/// Contains connection settings, the reconnect delay, the heartbeat
/// interval, and the authentication retry budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Connection timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Delay before a retried connection attempt in milliseconds.
    /// Zero effectively disables backoff.
    #[serde(default = "default_reconnect_interval_ms")]
    pub reconnect_interval_ms: u64,

    /// Heartbeat interval in milliseconds. Used both as the idle delay
    /// before a probe and as the reply timeout after one.
    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,

    /// Maximum number of rejected authentication attempts before the
    /// client gives up permanently.
    #[serde(default = "default_max_auth_attempts")]
    pub max_auth_attempts: u32,
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_reconnect_interval_ms() -> u64 {
    20_000
}

fn default_heartbeat_interval_ms() -> u64 {
    30_000
}

fn default_max_auth_attempts() -> u32 {
    3
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            reconnect_interval_ms: default_reconnect_interval_ms(),
            heartbeat_interval_ms: default_heartbeat_interval_ms(),
            max_auth_attempts: default_max_auth_attempts(),
        }
    }
}

impl PushConfig {
    /// Creates a new builder for `PushConfig`.
    #[must_use]
    pub fn builder() -> PushConfigBuilder {
        PushConfigBuilder::default()
    }

    /// Returns the connection timeout as a Duration.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Returns the reconnect delay as a Duration.
    #[must_use]
    pub fn reconnect_interval(&self) -> Duration {
        Duration::from_millis(self.reconnect_interval_ms)
    }

    /// Returns the heartbeat interval as a Duration.
    #[must_use]
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms)
    }
}

/// Builder for `PushConfig`.
#[derive(Debug, Default)]
pub struct PushConfigBuilder {
    connect_timeout_ms: Option<u64>,
    reconnect_interval_ms: Option<u64>,
    heartbeat_interval_ms: Option<u64>,
    max_auth_attempts: Option<u32>,
}

impl PushConfigBuilder {
    /// Sets the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Sets the delay before a retried connection attempt.
    #[must_use]
    pub fn reconnect_interval(mut self, interval: Duration) -> Self {
        self.reconnect_interval_ms = Some(interval.as_millis() as u64);
        self
    }

    /// Sets the heartbeat interval.
    #[must_use]
    pub fn heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval_ms = Some(interval.as_millis() as u64);
        self
    }

    /// Sets the authentication retry budget.
    #[must_use]
    pub fn max_auth_attempts(mut self, attempts: u32) -> Self {
        self.max_auth_attempts = Some(attempts);
        self
    }

    /// Builds the `PushConfig`.
    #[must_use]
    pub fn build(self) -> PushConfig {
        PushConfig {
            connect_timeout_ms: self
                .connect_timeout_ms
                .unwrap_or_else(default_connect_timeout_ms),
            reconnect_interval_ms: self
                .reconnect_interval_ms
                .unwrap_or_else(default_reconnect_interval_ms),
            heartbeat_interval_ms: self
                .heartbeat_interval_ms
                .unwrap_or_else(default_heartbeat_interval_ms),
            max_auth_attempts: self
                .max_auth_attempts
                .unwrap_or_else(default_max_auth_attempts),
        }
    }
}
