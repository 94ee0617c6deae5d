//! Stored account credentials

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Config key holding the account name.
pub const USERNAME_KEY: &str = "username";
/// Config key holding the account password.
pub const PASSWORD_KEY: &str = "password";

/// Read-only configuration lookup.
pub trait CredentialConfig {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
}

impl CredentialConfig for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<C: CredentialConfig + ?Sized> CredentialConfig for &C {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Single configured account, e.g. loaded from a JSON settings file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCredentials {
    pub username: String,
    pub password: String,
}

impl StaticCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parse `{"username": "...", "password": "..."}`.
    ///
    /// # Errors
    /// Returns the JSON error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl CredentialConfig for StaticCredentials {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            USERNAME_KEY => Some(self.username.clone()),
            PASSWORD_KEY => Some(self.password.clone()),
            _ => None,
        }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
