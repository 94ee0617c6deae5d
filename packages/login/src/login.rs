//! Single-account login flow
//!
//! Credentials are compared against one configured username/password pair.
//! A successful login is kept either as a session marker or as a signed
//! token issued through [`hmacjwt::JwtCodec`].

use crate::credentials::{CredentialConfig, PASSWORD_KEY, USERNAME_KEY};
use crate::error::{LoginError, LoginField, LoginResult};
use crate::request::{RequestInput, ACTION_INPUT, PASSWORD_INPUT, USERNAME_INPUT};
use crate::session::{LoginUser, SessionStore, ADMIN_STATUS};
use hmacjwt::{JwtCodec, JwtToken};
use subtle::ConstantTimeEq;

/// Shown when a submitted form lacks a username or password.
pub const MSG_FILL_FORM: &str = "Please fill up this form";
/// Shown after logging out.
pub const MSG_LOGOUT: &str = "Logout successful";

/// Submitted credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

impl LoginParams {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Result of running the login form flow for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Logged-in user after this request.
    pub user: Option<LoginUser>,
    /// Message for the login form.
    pub message: Option<String>,
    /// Input the form should focus.
    pub focus: Option<LoginField>,
    /// Whether the request was a login form submission.
    pub from_submit: bool,
}

impl LoginOutcome {
    fn prompt(message: &str, focus: LoginField) -> Self {
        Self {
            user: None,
            message: Some(message.to_string()),
            focus: Some(focus),
            from_submit: true,
        }
    }
}

/// Login operations. Stateless; all state lives in the session store.
pub struct Login;

impl Login {
    /// Compare `params` with the configured account.
    ///
    /// # Errors
    /// [`LoginError::NotRegistered`] on a username mismatch, otherwise
    /// [`LoginError::PasswordIncorrect`] on a password mismatch.
    pub fn check_login<C>(params: &LoginParams, cfg: &C) -> LoginResult<LoginUser>
    where
        C: CredentialConfig + ?Sized,
    {
        if cfg.get(USERNAME_KEY).as_deref() != Some(params.username.as_str()) {
            return Err(LoginError::NotRegistered);
        }

        let stored = cfg.get(PASSWORD_KEY).unwrap_or_default();
        let matches: bool = stored.as_bytes().ct_eq(params.password.as_bytes()).into();
        if stored.is_empty() || !matches {
            return Err(LoginError::PasswordIncorrect);
        }

        Ok(LoginUser::new(params.username.clone(), ADMIN_STATUS))
    }

    /// Check credentials and update the session: store the user on success,
    /// clear any previous login on failure.
    ///
    /// # Errors
    /// See [`Login::check_login`].
    pub fn login<S, C>(session: &mut S, params: &LoginParams, cfg: &C) -> LoginResult<LoginUser>
    where
        S: SessionStore + ?Sized,
        C: CredentialConfig + ?Sized,
    {
        match Self::check_login(params, cfg) {
            Ok(user) => {
                tracing::info!(username = %user.username, "login succeeded");
                session.set_login(user.clone());
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(username = %params.username, reason = %e, "login rejected");
                session.clear_login();
                Err(e)
            }
        }
    }

    /// Drop the session login.
    pub fn logout<S: SessionStore + ?Sized>(session: &mut S) {
        if let Some(user) = session.login() {
            tracing::info!(username = %user.username, "logout");
        }
        session.clear_login();
    }

    /// Password reset hook. There is no mail transport here, so the request
    /// is acknowledged and otherwise ignored.
    pub fn forgot<R: RequestInput + ?Sized>(_request: &R) {
        tracing::debug!("password reset requested");
    }

    /// Run the login form flow for one request.
    ///
    /// - `action=logout` (outside a form submission) logs out.
    /// - `action=forgot` runs the reset hook.
    /// - A submission missing either field is answered with
    ///   [`MSG_FILL_FORM`] and the empty field focused.
    /// - A complete submission logs in, but only when it carries our own
    ///   referer.
    /// - Anything else keeps the session login while its username still
    ///   matches the configured account.
    pub fn process<R, S, C>(request: &R, session: &mut S, cfg: &C) -> LoginOutcome
    where
        R: RequestInput + ?Sized,
        S: SessionStore + ?Sized,
        C: CredentialConfig + ?Sized,
    {
        let posted_username = request.post(USERNAME_INPUT);
        let from_submit = posted_username.is_some();
        let username = posted_username
            .map(|u| u.trim().to_string())
            .unwrap_or_default();
        let password = request.post(PASSWORD_INPUT).unwrap_or_default();

        match request.request(ACTION_INPUT).as_deref() {
            Some("logout") if !from_submit => {
                Self::logout(session);
                return LoginOutcome {
                    message: Some(MSG_LOGOUT.to_string()),
                    ..LoginOutcome::default()
                };
            }
            Some("forgot") => {
                Self::forgot(request);
                return LoginOutcome {
                    user: session.login().cloned(),
                    from_submit,
                    ..LoginOutcome::default()
                };
            }
            _ => {}
        }

        if !from_submit {
            return LoginOutcome {
                user: Self::restore(session, cfg),
                ..LoginOutcome::default()
            };
        }

        if username.is_empty() {
            return LoginOutcome::prompt(MSG_FILL_FORM, LoginField::Username);
        }
        if password.is_empty() {
            return LoginOutcome::prompt(MSG_FILL_FORM, LoginField::Password);
        }
        if !request.is_referer() {
            tracing::warn!(username = %username, "login submission without referer ignored");
            return LoginOutcome {
                user: session.login().cloned(),
                from_submit,
                ..LoginOutcome::default()
            };
        }

        match Self::login(session, &LoginParams::new(username, password), cfg) {
            Ok(user) => LoginOutcome {
                user: Some(user),
                from_submit,
                ..LoginOutcome::default()
            },
            Err(e) => LoginOutcome {
                user: None,
                message: Some(e.to_string()),
                focus: e.focus(),
                from_submit,
            },
        }
    }

    /// Keep a session login only while it still names the configured account.
    fn restore<S, C>(session: &mut S, cfg: &C) -> Option<LoginUser>
    where
        S: SessionStore + ?Sized,
        C: CredentialConfig + ?Sized,
    {
        let user = session.login()?.clone();
        if cfg.get(USERNAME_KEY).as_deref() == Some(user.username.as_str()) {
            Some(user)
        } else {
            tracing::info!(username = %user.username, "stale session login dropped");
            session.clear_login();
            None
        }
    }

    /// Logged-in user, if any.
    #[must_use]
    pub fn is_member<S: SessionStore + ?Sized>(session: &S) -> Option<&LoginUser> {
        session.login()
    }

    /// Logged-in administrator, if the session holds one.
    #[must_use]
    pub fn is_admin<S: SessionStore + ?Sized>(session: &S) -> Option<&LoginUser> {
        session.login().filter(|user| user.is_admin())
    }

    /// `user` when it may act with one of `statuses`. The administrator
    /// passes every check.
    #[must_use]
    pub fn check_status<'a>(user: Option<&'a LoginUser>, statuses: &[i64]) -> Option<&'a LoginUser> {
        user.filter(|u| u.is_admin() || statuses.contains(&u.status))
    }

    /// Sign `user` into a token.
    ///
    /// # Errors
    /// [`LoginError::Token`] if the codec fails to encode.
    pub fn issue_token(codec: &JwtCodec, user: &LoginUser) -> LoginResult<JwtToken> {
        Ok(codec.encode_claims(user)?)
    }

    /// Verify a token and read the user it carries.
    ///
    /// # Errors
    /// [`LoginError::Token`] wrapping the codec failure.
    pub fn user_from_token(codec: &JwtCodec, token: impl AsRef<str>) -> LoginResult<LoginUser> {
        Ok(codec.verify_claims(token)?)
    }
}
