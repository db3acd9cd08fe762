//! Core trait definitions.
//!
//! Seams between per-account components and the rest of the application:
//! - [`CredentialProvider`] - supplies the login pair for an account
//! - [`EndpointResolver`] - supplies the push socket endpoint, if any
//!
//! Both are synchronous and side-effect free; implementations typically
//! delegate to the account's credential store and its cached server
//! capabilities.

/// Supplies a username/secret pair on demand.
///
/// Queried exactly once per authentication attempt.
///
/// # Example
///
/// ```
/// use nimbus_core::traits::CredentialProvider;
///
/// struct Stored {
///     user: String,
///     secret: String,
/// }
///
/// impl CredentialProvider for Stored {
///     fn user(&self) -> String {
///         self.user.clone()
///     }
///
///     fn secret(&self) -> String {
///         self.secret.clone()
///     }
/// }
/// ```
pub trait CredentialProvider: Send + Sync {
    /// Returns the user identifier for the account.
    fn user(&self) -> String;

    /// Returns the secret for the account.
    fn secret(&self) -> String;
}

/// Supplies the socket endpoint to connect to.
///
/// Queried exactly once per connection attempt. Returning `None` means
/// the feature is unsupported for this account and no connection must be
/// attempted.
pub trait EndpointResolver: Send + Sync {
    /// Returns the WebSocket endpoint URL, if the server advertises one.
    fn socket_endpoint(&self) -> Option<String>;
}
