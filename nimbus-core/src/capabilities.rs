//! Server capabilities document.
//!
//! Servers advertise optional features through a capabilities document;
//! push notifications appear under the `notify_push` key:
//!
//! ```json
//! {
//!     "notify_push": {
//!         "type": ["files", "activities", "notifications"],
//!         "endpoints": { "websocket": "wss://cloud.example.com/ws" }
//!     }
//! }
//! ```
//!
//! A missing `notify_push` entry or an empty websocket endpoint means the
//! server does not support push for this account.

use serde::{Deserialize, Serialize};

use crate::traits::EndpointResolver;

/// Parsed server capabilities.
///
/// # Examples
///
/// ```
/// use nimbus_core::capabilities::Capabilities;
///
/// let caps: Capabilities = serde_json::from_str(
///     r#"{"notify_push": {"type": ["files"], "endpoints": {"websocket": "wss://example.com/ws"}}}"#,
/// )
/// .unwrap();
/// assert_eq!(caps.websocket_endpoint(), Some("wss://example.com/ws"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Push-notification capabilities, absent when unsupported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notify_push: Option<NotifyPushCapabilities>,
}

/// The `notify_push` section of the capabilities document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyPushCapabilities {
    /// Notification kinds the server pushes (e.g. "files", "activities").
    #[serde(rename = "type", default)]
    kinds: Vec<String>,

    /// Endpoints to receive push notifications on.
    #[serde(default)]
    endpoints: NotifyPushEndpoints,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NotifyPushEndpoints {
    #[serde(default)]
    websocket: String,
}

impl Capabilities {
    /// Returns the push WebSocket endpoint, if the server advertises one.
    ///
    /// An absent `notify_push` section or an empty endpoint string both
    /// yield `None`.
    #[must_use]
    pub fn websocket_endpoint(&self) -> Option<&str> {
        let endpoint = self.notify_push.as_ref()?.endpoints.websocket.as_str();
        if endpoint.is_empty() {
            None
        } else {
            Some(endpoint)
        }
    }

    /// Returns the notification kinds the server pushes.
    #[must_use]
    pub fn available_push_notifications(&self) -> &[String] {
        self.notify_push
            .as_ref()
            .map_or(&[], |push| push.kinds.as_slice())
    }

    /// Returns true if the server pushes the given notification kind.
    #[must_use]
    pub fn supports_push_notification(&self, kind: &str) -> bool {
        self.available_push_notifications()
            .iter()
            .any(|k| k == kind)
    }
}

impl EndpointResolver for Capabilities {
    fn socket_endpoint(&self) -> Option<String> {
        self.websocket_endpoint().map(str::to_string)
    }
}
