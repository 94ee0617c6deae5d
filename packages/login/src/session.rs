//! Logged-in user and the session slot that holds it

use serde::{Deserialize, Serialize};

/// Status code of the administrator account.
pub const ADMIN_STATUS: i64 = 1;

/// Authenticated account as stored in a session or carried in a token.
///
/// The password never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: String,
    pub status: i64,
}

impl LoginUser {
    #[must_use]
    pub fn new(username: impl Into<String>, status: i64) -> Self {
        Self {
            username: username.into(),
            status,
        }
    }

    /// Whether this is the administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.status == ADMIN_STATUS
    }
}

/// Server-side session slot holding the login marker.
pub trait SessionStore {
    /// Current login, if any.
    fn login(&self) -> Option<&LoginUser>;

    /// Record a successful login.
    fn set_login(&mut self, user: LoginUser);

    /// Forget the login.
    fn clear_login(&mut self);
}

/// In-memory session.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    login: Option<LoginUser>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn login(&self) -> Option<&LoginUser> {
        self.login.as_ref()
    }

    fn set_login(&mut self, user: LoginUser) {
        self.login = Some(user);
    }

    fn clear_login(&mut self) {
        self.login = None;
    }
}
