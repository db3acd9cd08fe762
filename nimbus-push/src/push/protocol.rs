//! Wire control vocabulary.
//!
//! The push channel is a minimal line-oriented control protocol, not a
//! general pub/sub format. The server sends one of a fixed set of text
//! tokens; everything else is ignored for forward compatibility.

/// Control message received from the push server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerMessage {
    /// Files changed on the server.
    NotifyFile,
    /// New activity on the server.
    NotifyActivity,
    /// New generic notification on the server.
    NotifyNotification,
    /// The submitted credentials were accepted.
    Authenticated,
    /// The submitted credentials were rejected.
    InvalidCredentials,
}

impl ServerMessage {
    /// Parses a text payload against the control vocabulary.
    ///
    /// Matching is exact and case-sensitive; unrecognized payloads
    /// return `None` and are dropped by the caller.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "notify_file" => Some(Self::NotifyFile),
            "notify_activity" => Some(Self::NotifyActivity),
            "notify_notification" => Some(Self::NotifyNotification),
            "authenticated" => Some(Self::Authenticated),
            "err: Invalid credentials" => Some(Self::InvalidCredentials),
            _ => None,
        }
    }
}
