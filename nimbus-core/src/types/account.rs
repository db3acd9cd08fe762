//! Account identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a configured remote account.
///
/// Wraps the display identity of an account, typically in the form
/// `user@host`. Events emitted by per-account components carry this
/// identifier so receivers can tell originating accounts apart.
///
/// # Examples
///
/// ```
/// use nimbus_core::types::AccountId;
///
/// let account = AccountId::new("alice@cloud.example.com");
/// assert_eq!(account.as_str(), "alice@cloud.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new `AccountId` from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display() {
        let account = AccountId::new("alice@cloud.example.com");
        assert_eq!(account.to_string(), "alice@cloud.example.com");
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let account = AccountId::new("bob@nimbus.local");
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"bob@nimbus.local\"");

        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, account);
    }
}
