//! Form flow and token hand-off tests

use hmacjwt::{Jwt, JwtError, ManualClock};
use hmacjwt_login::request::{ACTION_INPUT, PASSWORD_INPUT, USERNAME_INPUT};
use hmacjwt_login::*;
use std::sync::Arc;
use std::time::Duration;

fn cfg() -> StaticCredentials {
    StaticCredentials::new("admin", "s3cret")
}

fn submit(username: &str, password: &str) -> FormRequest {
    FormRequest::new()
        .with_post(USERNAME_INPUT, username)
        .with_post(PASSWORD_INPUT, password)
        .with_referer(true)
}

#[test]
fn successful_submit_stores_session() {
    let mut session = MemorySession::new();
    let outcome = Login::process(&submit("admin", "s3cret"), &mut session, &cfg());

    assert!(outcome.from_submit);
    assert_eq!(outcome.message, None);
    assert_eq!(outcome.user, Some(LoginUser::new("admin", ADMIN_STATUS)));
    assert!(Login::is_admin(&session).is_some());
}

#[test]
fn username_is_trimmed() {
    let mut session = MemorySession::new();
    let outcome = Login::process(&submit("  admin ", "s3cret"), &mut session, &cfg());
    assert!(outcome.user.is_some());
}

#[test]
fn empty_username_prompts_for_it() {
    let mut session = MemorySession::new();
    let outcome = Login::process(&submit("", "s3cret"), &mut session, &cfg());
    assert_eq!(outcome.message.as_deref(), Some(MSG_FILL_FORM));
    assert_eq!(outcome.focus, Some(LoginField::Username));
    assert_eq!(outcome.focus.map(LoginField::input_name), Some(USERNAME_INPUT));
}

#[test]
fn missing_password_prompts_for_it() {
    let mut session = MemorySession::new();
    let request = FormRequest::new()
        .with_post(USERNAME_INPUT, "admin")
        .with_referer(true);
    let outcome = Login::process(&request, &mut session, &cfg());
    assert_eq!(outcome.message.as_deref(), Some(MSG_FILL_FORM));
    assert_eq!(outcome.focus, Some(LoginField::Password));
}

#[test]
fn wrong_password_reports_and_focuses() {
    let mut session = MemorySession::new();
    session.set_login(LoginUser::new("admin", ADMIN_STATUS));
    let outcome = Login::process(&submit("admin", "wrong"), &mut session, &cfg());

    assert_eq!(outcome.message.as_deref(), Some("password incorrect"));
    assert_eq!(outcome.focus, Some(LoginField::Password));
    assert!(Login::is_member(&session).is_none());
}

#[test]
fn unknown_user_reports_and_focuses() {
    let mut session = MemorySession::new();
    let outcome = Login::process(&submit("eve", "s3cret"), &mut session, &cfg());
    assert_eq!(outcome.message.as_deref(), Some("not a registered user"));
    assert_eq!(outcome.focus, Some(LoginField::Username));
}

#[test]
fn submit_without_referer_is_ignored() {
    let mut session = MemorySession::new();
    let request = submit("admin", "s3cret").with_referer(false);
    let outcome = Login::process(&request, &mut session, &cfg());
    assert_eq!(outcome.user, None);
    assert_eq!(outcome.message, None);
    assert!(Login::is_member(&session).is_none());
}

#[test]
fn session_login_survives_plain_requests() {
    let mut session = MemorySession::new();
    Login::process(&submit("admin", "s3cret"), &mut session, &cfg());

    let outcome = Login::process(&FormRequest::new(), &mut session, &cfg());
    assert!(!outcome.from_submit);
    assert_eq!(outcome.user, Some(LoginUser::new("admin", ADMIN_STATUS)));
}

#[test]
fn session_login_dropped_when_account_renamed() {
    let mut session = MemorySession::new();
    Login::process(&submit("admin", "s3cret"), &mut session, &cfg());

    let renamed = StaticCredentials::new("root", "s3cret");
    let outcome = Login::process(&FormRequest::new(), &mut session, &renamed);
    assert_eq!(outcome.user, None);
    assert!(Login::is_member(&session).is_none());
}

#[test]
fn anonymous_request_has_no_message() {
    let mut session = MemorySession::new();
    let outcome = Login::process(&FormRequest::new(), &mut session, &cfg());
    assert_eq!(outcome, LoginOutcome::default());
}

#[test]
fn logout_action_clears_session() {
    let mut session = MemorySession::new();
    Login::process(&submit("admin", "s3cret"), &mut session, &cfg());

    let request = FormRequest::new().with_query(ACTION_INPUT, "logout");
    let outcome = Login::process(&request, &mut session, &cfg());
    assert_eq!(outcome.message.as_deref(), Some(MSG_LOGOUT));
    assert!(Login::is_member(&session).is_none());
}

#[test]
fn logout_action_ignored_during_submit() {
    let mut session = MemorySession::new();
    let request = submit("admin", "s3cret").with_query(ACTION_INPUT, "logout");
    let outcome = Login::process(&request, &mut session, &cfg());
    assert!(outcome.user.is_some());
    assert_ne!(outcome.message.as_deref(), Some(MSG_LOGOUT));
}

#[test]
fn forgot_action_leaves_session_alone() {
    let mut session = MemorySession::new();
    Login::process(&submit("admin", "s3cret"), &mut session, &cfg());

    let request = FormRequest::new().with_query(ACTION_INPUT, "forgot");
    let outcome = Login::process(&request, &mut session, &cfg());
    assert!(outcome.user.is_some());
    assert!(Login::is_member(&session).is_some());
}

#[test]
fn map_config_works_as_credentials() {
    let mut map = std::collections::HashMap::new();
    map.insert("username".to_string(), "admin".to_string());
    map.insert("password".to_string(), "s3cret".to_string());

    let mut session = MemorySession::new();
    let outcome = Login::process(&submit("admin", "s3cret"), &mut session, &map);
    assert!(outcome.user.is_some());
}

#[test]
fn token_round_trip() {
    let codec = Jwt::builder().with_secret("token-secret").build().unwrap();
    let user = Login::check_login(&LoginParams::new("admin", "s3cret"), &cfg()).unwrap();

    let token = Login::issue_token(&codec, &user).unwrap();
    assert_eq!(Login::user_from_token(&codec, &token).unwrap(), user);
}

#[test]
fn token_from_other_secret_is_rejected() {
    let issuer = Jwt::builder().with_secret("one").build().unwrap();
    let checker = Jwt::builder().with_secret("two").build().unwrap();
    let token = Login::issue_token(&issuer, &LoginUser::new("admin", ADMIN_STATUS)).unwrap();

    assert_eq!(
        Login::user_from_token(&checker, &token),
        Err(LoginError::Token(JwtError::InvalidSignature))
    );
}

#[test]
fn expired_login_token_is_rejected() {
    let clock = Arc::new(ManualClock::new(0));
    let codec = Jwt::builder()
        .with_secret("token-secret")
        .with_expiry(Duration::from_secs(60))
        .with_clock(clock.clone())
        .build()
        .unwrap();
    let token = Login::issue_token(&codec, &LoginUser::new("admin", ADMIN_STATUS)).unwrap();

    assert!(Login::user_from_token(&codec, &token).is_ok());
    clock.advance(61);
    assert_eq!(
        Login::user_from_token(&codec, &token),
        Err(LoginError::Token(JwtError::Expired))
    );
}

#[test]
fn token_without_user_fields_is_malformed() {
    let codec = Jwt::builder().with_secret("k").build().unwrap();
    let token = codec.encode(&hmacjwt::Payload::new()).unwrap();
    assert!(matches!(
        Login::user_from_token(&codec, &token),
        Err(LoginError::Token(JwtError::MalformedPayload(_)))
    ));
}
