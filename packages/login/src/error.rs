//! Login error types

use hmacjwt::JwtError;
use thiserror::Error;

/// Login result type
pub type LoginResult<T> = Result<T, LoginError>;

/// Form input a failure should draw attention to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// `login_username`
    Username,
    /// `login_password`
    Password,
}

impl LoginField {
    /// Name of the form input.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            LoginField::Username => crate::request::USERNAME_INPUT,
            LoginField::Password => crate::request::PASSWORD_INPUT,
        }
    }
}

/// Login failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Username does not match the configured account
    #[error("not a registered user")]
    NotRegistered,

    /// Password does not match the configured account
    #[error("password incorrect")]
    PasswordIncorrect,

    /// Token could not be issued or was rejected
    #[error("token rejected: {0}")]
    Token(#[from] JwtError),
}

impl LoginError {
    /// Input to focus in the login form, if any.
    #[must_use]
    pub fn focus(&self) -> Option<LoginField> {
        match self {
            LoginError::NotRegistered => Some(LoginField::Username),
            LoginError::PasswordIncorrect => Some(LoginField::Password),
            LoginError::Token(_) => None,
        }
    }
}
