//! User-status mapping for the status display.
//!
//! The server's user-status endpoint returns a raw payload of
//! `{icon, message, status}`. This module maps that payload to a typed
//! [`OnlineStatus`] and the display text shown next to the account,
//! independent of how the payload was fetched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Online status of the account's user as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnlineStatus {
    /// User is online. Also the fallback for unrecognized status strings.
    #[default]
    Online,
    /// User is away.
    Away,
    /// User has muted notifications.
    DoNotDisturb,
    /// User is offline.
    Offline,
    /// User is invisible to others.
    Invisible,
}

impl OnlineStatus {
    /// Maps a raw status string to a status, case-insensitively.
    ///
    /// Empty or unrecognized strings map to [`OnlineStatus::Online`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nimbus_core::status::OnlineStatus;
    ///
    /// assert_eq!(OnlineStatus::parse("DND"), OnlineStatus::DoNotDisturb);
    /// assert_eq!(OnlineStatus::parse(""), OnlineStatus::Online);
    /// assert_eq!(OnlineStatus::parse("sleeping"), OnlineStatus::Online);
    /// ```
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "away" => Self::Away,
            "dnd" => Self::DoNotDisturb,
            "offline" => Self::Offline,
            "invisible" => Self::Invisible,
            _ => Self::Online,
        }
    }

    /// Returns the display label for this status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Away => "Away",
            Self::DoNotDisturb => "Do not disturb",
            Self::Offline => "Offline",
            Self::Invisible => "Invisible",
        }
    }
}

impl fmt::Display for OnlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw user-status payload as returned by the server.
///
/// Fetch jobs substitute the default payload on any non-success outcome,
/// as if the user had not set any status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Emoji or icon string chosen by the user, possibly empty.
    #[serde(default)]
    pub icon: String,

    /// Free-form status message, possibly empty.
    #[serde(default)]
    pub message: String,

    /// Raw status string (e.g. "online", "dnd").
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "online".to_string()
}

impl Default for StatusPayload {
    fn default() -> Self {
        Self {
            icon: String::new(),
            message: String::new(),
            status: default_status(),
        }
    }
}

/// Resolved user status: the mapped [`OnlineStatus`] plus display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatus {
    status: OnlineStatus,
    display_text: String,
}

impl UserStatus {
    /// Resolves a raw payload into a displayable status.
    ///
    /// The display text is the user's message when set, otherwise the
    /// label for the mapped status, prefixed by the icon and a separator
    /// space, trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use nimbus_core::status::{StatusPayload, UserStatus};
    ///
    /// let payload = StatusPayload {
    ///     icon: String::new(),
    ///     message: "brb".to_string(),
    ///     status: "away".to_string(),
    /// };
    /// assert_eq!(UserStatus::from_payload(&payload).display_text(), "brb");
    /// ```
    #[must_use]
    pub fn from_payload(payload: &StatusPayload) -> Self {
        let status = OnlineStatus::parse(&payload.status);
        let text = if payload.message.is_empty() {
            status.label()
        } else {
            payload.message.as_str()
        };
        let display_text = format!("{} {}", payload.icon, text).trim().to_string();

        Self {
            status,
            display_text,
        }
    }

    /// Returns the mapped status.
    #[must_use]
    pub fn status(&self) -> OnlineStatus {
        self.status
    }

    /// Returns the text to display next to the account.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}
