//! Error types and handling framework.
//!
//! Errors are grouped by domain; networking is the only domain the push
//! subsystem needs, so [`NetworkError`] carries the full taxonomy for
//! connection, TLS, and WebSocket failures.
//!
//! # Severity
//!
//! Every error reports an [`ErrorSeverity`] which determines the
//! appropriate response: fatal errors must not be retried, recoverable
//! errors may be.

use serde::{Deserialize, Serialize};

mod network;

pub use network::NetworkError;

/// Error severity levels for categorizing errors.
///
/// Severity levels help determine the appropriate response to an error:
/// - `Fatal`: Unrecoverable errors that require immediate attention
/// - `Recoverable`: Errors that can be retried or recovered from
/// - `Warning`: Non-critical issues that should be logged
///
/// # Examples
///
/// ```
/// use nimbus_core::error::ErrorSeverity;
///
/// let severity = ErrorSeverity::Recoverable;
/// assert!(severity.is_recoverable());
/// assert!(!severity.is_fatal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Unrecoverable error requiring immediate attention.
    /// The operation must not be retried automatically.
    Fatal,

    /// Error that can potentially be recovered from through retry or fallback.
    /// The operation failed but the system can continue.
    #[default]
    Recoverable,

    /// Non-critical issue that should be logged but doesn't prevent operation.
    Warning,
}

impl ErrorSeverity {
    /// Returns true if this error is recoverable (not fatal).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Fatal)
    }

    /// Returns true if this error is fatal (unrecoverable).
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Returns the severity as a static string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Recoverable => "RECOVERABLE",
            Self::Warning => "WARNING",
        }
    }
}
