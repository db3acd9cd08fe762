//! Push-notification client with credential handshake, heartbeat
//! liveness probing, and bounded-retry reconnection.

#![allow(clippy::unused_async)]
#![allow(clippy::too_many_lines)]

use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::{timeout, Instant};
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::tungstenite::Error as WsError;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};
use uuid::Uuid;

use nimbus_core::error::NetworkError;
use nimbus_core::traits::{CredentialProvider, EndpointResolver};
use nimbus_core::types::AccountId;

use super::config::PushConfig;
use super::protocol::ServerMessage;
use super::state::{ClientState, SharedState};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Callback trait for push-notification events.
///
/// All methods default to no-ops so owners can override the subset they
/// care about. Events are fire-and-forget; the client never waits on a
/// return value.
#[async_trait]
pub trait PushCallback: Send + Sync {
    /// Called once the client is authenticated and notifications flow.
    async fn on_ready(&self) {}

    /// Called when the transport fails. Recovery is up to the owner,
    /// which may call [`PushNotificationClient::setup`] again.
    async fn on_connection_lost(&self, reason: NetworkError) {
        let _ = reason;
    }

    /// Called when the client gives up permanently: the authentication
    /// retry budget is exhausted or the transport is untrustworthy.
    /// The owner must discard the client.
    async fn on_authentication_failed(&self) {}

    /// Called when files changed on the server.
    async fn on_files_changed(&self, account: AccountId) {
        let _ = account;
    }

    /// Called when new activity arrived on the server.
    async fn on_activities_changed(&self, account: AccountId) {
        let _ = account;
    }

    /// Called when a new notification arrived on the server.
    async fn on_notifications_changed(&self, account: AccountId) {
        let _ = account;
    }
}

/// Commands posted from the client handle to its actor.
#[derive(Debug)]
enum Command {
    Setup,
    SetReconnectInterval(Duration),
    SetHeartbeatInterval(Duration),
    Shutdown,
}

/// Push-notification client for one remote account.
///
/// Owns a single WebSocket connection driven by a dedicated actor task:
/// connect → authenticate → ready → heartbeat, with automatic bounded
/// reconnection on rejected credentials. All operations are
/// fire-and-forget; outcomes surface through the [`PushCallback`].
///
/// Dropping the handle tears the actor down: the command channel closes,
/// the actor drops the socket and every pending timer with it.
///
/// # Example
///
/// ```ignore
/// use nimbus_push::push::{PushConfig, PushNotificationClient};
///
/// let client = PushNotificationClient::new(
///     account,
///     credentials,
///     endpoint,
///     PushConfig::default(),
///     callback,
/// );
/// client.setup();
/// ```
pub struct PushNotificationClient {
    account: AccountId,
    shared: Arc<RwLock<SharedState>>,
    commands: mpsc::UnboundedSender<Command>,
}

impl PushNotificationClient {
    /// Creates a new client and spawns its actor on the current Tokio
    /// runtime. The client stays [`ClientState::Idle`] until
    /// [`setup`](Self::setup) is called.
    #[must_use]
    pub fn new(
        account: AccountId,
        credentials: Arc<dyn CredentialProvider>,
        endpoint: Arc<dyn EndpointResolver>,
        config: PushConfig,
        callback: Arc<dyn PushCallback>,
    ) -> Self {
        let shared = Arc::new(RwLock::new(SharedState::new()));
        let (commands, command_rx) = mpsc::unbounded_channel();

        let actor = PushActor {
            account: account.clone(),
            credentials,
            endpoint,
            config,
            shared: Arc::clone(&shared),
            callback,
            ping_token: Uuid::new_v4().into_bytes().to_vec(),
            socket: None,
            reconnect_at: None,
            ping_at: None,
            pong_deadline: None,
        };
        tokio::spawn(actor.run(command_rx));

        Self {
            account,
            shared,
            commands,
        }
    }

    /// Sets up push notifications: resets the authentication retry
    /// budget and performs a full (re)connect cycle. Idempotent and
    /// callable at any time.
    pub fn setup(&self) {
        let _ = self.commands.send(Command::Setup);
    }

    /// Configures the delay before a retried connection attempt.
    /// Zero effectively disables backoff.
    pub fn set_reconnect_interval(&self, interval: Duration) {
        let _ = self.commands.send(Command::SetReconnectInterval(interval));
    }

    /// Configures the heartbeat interval, used both as the idle delay
    /// before a probe and as the reply timeout after one. While a
    /// connection exists the idle timer is rearmed immediately.
    pub fn set_heartbeat_interval(&self, interval: Duration) {
        let _ = self.commands.send(Command::SetHeartbeatInterval(interval));
    }

    /// Tears down the connection and all timers.
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }

    /// Returns true only while the client is authenticated and ready.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.shared.read().state.is_ready()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ClientState {
        self.shared.read().state
    }

    /// Returns the number of rejected authentication attempts since the
    /// last reset.
    #[must_use]
    pub fn auth_failures(&self) -> u32 {
        self.shared.read().auth_failures
    }

    /// Returns the account this client belongs to.
    #[must_use]
    pub fn account(&self) -> &AccountId {
        &self.account
    }
}

/// The actor owning the socket, the timers, and all state transitions.
///
/// Everything runs sequentially inside [`PushActor::run`]; no other task
/// ever touches the connection.
struct PushActor {
    account: AccountId,
    credentials: Arc<dyn CredentialProvider>,
    endpoint: Arc<dyn EndpointResolver>,
    config: PushConfig,
    shared: Arc<RwLock<SharedState>>,
    callback: Arc<dyn PushCallback>,
    /// Opaque per-instance probe payload; replies must echo it exactly.
    ping_token: Vec<u8>,
    socket: Option<WsStream>,
    reconnect_at: Option<Instant>,
    ping_at: Option<Instant>,
    pong_deadline: Option<Instant>,
}

impl PushActor {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        loop {
            // Deadlines are polled ahead of the socket so an expired
            // reply timeout beats a pong arriving in the same cycle.
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(Command::Setup) => self.setup().await,
                    Some(Command::SetReconnectInterval(interval)) => {
                        self.config.reconnect_interval_ms = interval.as_millis() as u64;
                    }
                    Some(Command::SetHeartbeatInterval(interval)) => {
                        self.set_heartbeat_interval(interval);
                    }
                    Some(Command::Shutdown) | None => {
                        self.close_socket().await;
                        let mut shared = self.shared.write();
                        if !shared.state.is_failed() {
                            shared.mark_idle();
                        }
                        debug!(account = %self.account, "push client shut down");
                        break;
                    }
                },

                () = deadline(self.reconnect_at) => {
                    self.reconnect_at = None;
                    self.open_socket().await;
                }

                () = deadline(self.ping_at) => {
                    self.ping_at = None;
                    self.ping_server().await;
                }

                () = deadline(self.pong_deadline) => {
                    self.pong_deadline = None;
                    info!(
                        account = %self.account,
                        "websocket did not answer the heartbeat probe in time, reconnecting"
                    );
                    self.setup().await;
                }

                event = next_message(&mut self.socket) => {
                    self.handle_socket_event(event).await;
                }
            }
        }
    }

    /// Resets the retry budget and performs a full reconnect cycle.
    async fn setup(&mut self) {
        info!(account = %self.account, "setting up push notifications");
        self.shared.write().reset_auth_failures();
        self.close_socket().await;
        self.open_socket().await;
    }

    /// Tears down the connection: all timers disarmed, socket dropped.
    /// Must precede every new `open_socket`.
    async fn close_socket(&mut self) {
        self.ping_at = None;
        self.pong_deadline = None;
        self.reconnect_at = None;

        if let Some(mut socket) = self.socket.take() {
            debug!(account = %self.account, "closing websocket");
            if let Err(error) = socket.close(None).await {
                if !is_teardown_artifact(&error) {
                    debug!(account = %self.account, error = %error, "error while closing websocket");
                }
            }
        }
    }

    async fn open_socket(&mut self) {
        let endpoint = self
            .endpoint
            .socket_endpoint()
            .filter(|url| !url.is_empty());
        let Some(url) = endpoint else {
            info!(account = %self.account, "no push endpoint advertised, staying idle");
            self.shared.write().mark_idle();
            return;
        };

        self.shared.write().mark_connecting();
        info!(account = %self.account, url = %url, "opening websocket");

        match timeout(self.config.connect_timeout(), connect_async(&url)).await {
            Ok(Ok((socket, _response))) => {
                self.socket = Some(socket);
                self.authenticate().await;
            }
            Ok(Err(error)) => {
                let error = classify_ws_error(&error);
                self.handle_transport_error(error).await;
            }
            Err(_) => {
                self.handle_transport_error(NetworkError::Timeout {
                    timeout_ms: self.config.connect_timeout_ms,
                })
                .await;
            }
        }
    }

    /// Sends the credential pair as two consecutive text frames.
    ///
    /// Nothing can interleave between them: the actor is the only writer
    /// and produces no other outbound traffic at this point.
    async fn authenticate(&mut self) {
        self.shared.write().mark_authenticating();

        let user = self.credentials.user();
        let secret = self.credentials.secret();
        debug!(account = %self.account, user = %user, "authenticating on websocket");

        for frame in [user, secret] {
            if let Err(error) = self.send_message(Message::Text(frame)).await {
                if is_teardown_artifact(&error) {
                    return;
                }
                let error = classify_ws_error(&error);
                self.handle_transport_error(error).await;
                return;
            }
        }
    }

    async fn handle_socket_event(&mut self, event: Option<Result<Message, WsError>>) {
        match event {
            Some(Ok(Message::Text(text))) => self.handle_text(&text).await,
            Some(Ok(Message::Pong(payload))) => self.handle_pong(&payload),
            Some(Ok(Message::Ping(_))) => {
                // tungstenite queues the pong reply on its own
            }
            Some(Ok(Message::Close(_))) => {
                self.handle_transport_error(NetworkError::ConnectionClosed {
                    reason: "server closed the connection".to_string(),
                })
                .await;
            }
            Some(Ok(_)) => {}
            Some(Err(error)) if is_teardown_artifact(&error) => {
                debug!(account = %self.account, error = %error, "ignoring teardown artifact");
                self.socket = None;
            }
            Some(Err(error)) => {
                let error = classify_ws_error(&error);
                self.handle_transport_error(error).await;
            }
            None => {
                self.handle_transport_error(NetworkError::ConnectionClosed {
                    reason: "websocket stream ended".to_string(),
                })
                .await;
            }
        }
    }

    async fn handle_text(&mut self, text: &str) {
        debug!(account = %self.account, message = text, "received push message");

        let Some(message) = ServerMessage::parse(text) else {
            debug!(account = %self.account, message = text, "ignoring unknown push message");
            return;
        };

        let state = self.shared.read().state;
        match (state, message) {
            (ClientState::Authenticating, ServerMessage::Authenticated) => {
                self.handle_authenticated().await;
            }
            (ClientState::Authenticating, ServerMessage::InvalidCredentials) => {
                self.handle_invalid_credentials().await;
            }
            (ClientState::Ready, ServerMessage::NotifyFile) => {
                info!(account = %self.account, "files push notification arrived");
                self.callback.on_files_changed(self.account.clone()).await;
            }
            (ClientState::Ready, ServerMessage::NotifyActivity) => {
                info!(account = %self.account, "activity push notification arrived");
                self.callback
                    .on_activities_changed(self.account.clone())
                    .await;
            }
            (ClientState::Ready, ServerMessage::NotifyNotification) => {
                info!(account = %self.account, "push notification arrived");
                self.callback
                    .on_notifications_changed(self.account.clone())
                    .await;
            }
            _ => {
                debug!(
                    account = %self.account,
                    state = %state,
                    message = text,
                    "dropping push message in current state"
                );
            }
        }
    }

    async fn handle_authenticated(&mut self) {
        info!(account = %self.account, "authenticated on websocket");
        self.shared.write().mark_ready();
        self.start_ping_timer();
        self.callback.on_ready().await;
    }

    async fn handle_invalid_credentials(&mut self) {
        info!(account = %self.account, "invalid credentials submitted to websocket");

        let failures = self.shared.write().record_auth_failure();
        if failures >= self.config.max_auth_attempts {
            info!(
                account = %self.account,
                attempts = failures,
                "max authentication attempts reached"
            );
            self.fail().await;
        } else {
            self.close_socket().await;
            self.shared.write().mark_reconnecting();
            self.reconnect_at = Some(Instant::now() + self.config.reconnect_interval());
        }
    }

    /// Gives up permanently. The owner must discard the client.
    async fn fail(&mut self) {
        self.close_socket().await;
        self.shared.write().mark_failed();
        self.callback.on_authentication_failed().await;
    }

    /// Transport failures never touch the authentication retry budget;
    /// recovery is the owner's call. Security failures are fatal with
    /// no automatic retry.
    async fn handle_transport_error(&mut self, error: NetworkError) {
        if error.severity().is_fatal() {
            warn!(account = %self.account, error = %error, "websocket transport security failure");
            self.fail().await;
        } else {
            warn!(account = %self.account, error = %error, "websocket connection lost");
            self.close_socket().await;
            self.shared.write().mark_idle();
            self.callback.on_connection_lost(error).await;
        }
    }

    fn set_heartbeat_interval(&mut self, interval: Duration) {
        self.config.heartbeat_interval_ms = interval.as_millis() as u64;
        if self.socket.is_some() {
            self.start_ping_timer();
        }
    }

    /// Arms the idle timer for the next probe cycle. The reply timeout
    /// is cleared first: the two timers are never armed together.
    fn start_ping_timer(&mut self) {
        self.pong_deadline = None;
        self.ping_at = Some(Instant::now() + self.config.heartbeat_interval());
    }

    async fn ping_server(&mut self) {
        debug!(account = %self.account, "pinging websocket server");

        match self
            .send_message(Message::Ping(self.ping_token.clone()))
            .await
        {
            Ok(()) => {
                self.pong_deadline = Some(Instant::now() + self.config.heartbeat_interval());
            }
            Err(error) if is_teardown_artifact(&error) => {}
            Err(error) => {
                let error = classify_ws_error(&error);
                self.handle_transport_error(error).await;
            }
        }
    }

    fn handle_pong(&mut self, payload: &[u8]) {
        // Stale or foreign probe replies carry a different token
        if payload != self.ping_token.as_slice() {
            debug!(account = %self.account, "discarding pong with foreign payload");
            return;
        }

        debug!(account = %self.account, "pong received in time");
        self.start_ping_timer();
    }

    async fn send_message(&mut self, message: Message) -> Result<(), WsError> {
        match self.socket.as_mut() {
            Some(socket) => socket.send(message).await,
            None => Err(WsError::AlreadyClosed),
        }
    }
}

/// Resolves to the deadline, or never when no deadline is armed.
async fn deadline(at: Option<Instant>) {
    match at {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Yields the next socket event, or never while disconnected.
async fn next_message(socket: &mut Option<WsStream>) -> Option<Result<Message, WsError>> {
    match socket.as_mut() {
        Some(socket) => socket.next().await,
        None => std::future::pending().await,
    }
}

/// Errors raised for operations against a close already in progress.
/// They are an artifact of the teardown sequence, not a real failure.
fn is_teardown_artifact(error: &WsError) -> bool {
    matches!(error, WsError::ConnectionClosed | WsError::AlreadyClosed)
}

fn classify_ws_error(error: &WsError) -> NetworkError {
    match error {
        WsError::Tls(error) => NetworkError::Tls {
            reason: error.to_string(),
        },
        WsError::Io(error) => NetworkError::ConnectionFailed {
            reason: error.to_string(),
        },
        WsError::Protocol(error) => NetworkError::ConnectionClosed {
            reason: error.to_string(),
        },
        other => NetworkError::WebSocket {
            reason: other.to_string(),
        },
    }
}
