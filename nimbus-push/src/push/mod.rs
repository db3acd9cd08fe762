//! Push-notification client infrastructure.
//!
//! This module provides the per-account push client with:
//! - Credential handshake over a plaintext control channel
//! - Heartbeat/ping-pong liveness probing with an opaque token
//! - Bounded-retry reconnection on rejected credentials
//! - Typed dispatch of the server's control vocabulary
//!
//! # Example
//!
//! ```ignore
//! use nimbus_push::push::{PushCallback, PushConfig, PushNotificationClient};
//!
//! struct MyCallback;
//!
//! #[async_trait::async_trait]
//! impl PushCallback for MyCallback {
//!     async fn on_files_changed(&self, account: nimbus_core::types::AccountId) {
//!         println!("files changed on {account}");
//!     }
//! }
//!
//! let client = PushNotificationClient::new(
//!     account,
//!     credentials,
//!     endpoint,
//!     PushConfig::default(),
//!     std::sync::Arc::new(MyCallback),
//! );
//! client.setup();
//! ```

mod client;
mod config;
mod protocol;
mod state;

pub use client::{PushCallback, PushNotificationClient};
pub use config::{PushConfig, PushConfigBuilder};
pub use protocol::ServerMessage;
pub use state::ClientState;
