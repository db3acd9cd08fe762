//! # Nimbus Push
//!
//! Push-notification client for the Nimbus sync client.
//!
//! This crate provides a long-lived, authenticated, self-healing
//! WebSocket connection per remote account. The server pushes small
//! control tokens over it (file changes, activity updates, generic
//! notifications) which the client exposes as discrete, typed events.
//!
//! # Architecture
//!
//! One [`push::PushNotificationClient`] per account, backed by a single
//! actor task that owns the socket and all timers. The client drives the
//! connect → authenticate → ready → heartbeat lifecycle, reconnects with
//! a bounded retry budget on rejected credentials, and reports transport
//! failures to the owner without consuming that budget.
//!
//! # Example
//!
//! ```ignore
//! use nimbus_push::push::{PushConfig, PushNotificationClient};
//!
//! let client = PushNotificationClient::new(
//!     account,
//!     credentials,
//!     endpoint,
//!     PushConfig::default(),
//!     callback,
//! );
//! client.setup();
//! ```

#![warn(missing_docs)]
#![allow(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::cargo)]
#![allow(clippy::nursery)]

/// Push-notification client infrastructure
pub mod push;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::push::{
        ClientState, PushCallback, PushConfig, PushConfigBuilder, PushNotificationClient,
        ServerMessage,
    };
}
