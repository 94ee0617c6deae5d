//! Submitted form input

use std::collections::HashMap;

/// Form field carrying the username.
pub const USERNAME_INPUT: &str = "login_username";
/// Form field carrying the password.
pub const PASSWORD_INPUT: &str = "login_password";
/// Query/form field selecting `logout` or `forgot`.
pub const ACTION_INPUT: &str = "action";

/// Read access to an incoming request.
pub trait RequestInput {
    /// Raw value of a posted form field, `None` when the field is absent.
    fn post(&self, key: &str) -> Option<String>;

    /// Value from the query string or the form, query first.
    fn request(&self, key: &str) -> Option<String> {
        self.post(key)
    }

    /// Whether the request came from one of our own pages.
    fn is_referer(&self) -> bool;
}

/// Map-backed request.
#[derive(Debug, Clone, Default)]
pub struct FormRequest {
    form: HashMap<String, String>,
    query: HashMap<String, String>,
    referer: bool,
}

impl FormRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_post(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_referer(mut self, referer: bool) -> Self {
        self.referer = referer;
        self
    }
}

impl RequestInput for FormRequest {
    fn post(&self, key: &str) -> Option<String> {
        self.form.get(key).cloned()
    }

    fn request(&self, key: &str) -> Option<String> {
        self.query.get(key).or_else(|| self.form.get(key)).cloned()
    }

    fn is_referer(&self) -> bool {
        self.referer
    }
}
