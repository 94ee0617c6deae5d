//! Single-account login on top of the `hmacjwt` token codec
//!
//! This crate is glue: it compares submitted credentials with one configured
//! account, keeps the result in a session slot, and can hand the logged-in
//! user out as a signed token. Request parsing, session storage and
//! configuration are traits so the host application supplies them.

pub mod credentials;
mod error;
pub mod login;
pub mod request;
pub mod session;

pub use credentials::{CredentialConfig, StaticCredentials};
pub use error::*;
pub use login::{Login, LoginOutcome, LoginParams, MSG_FILL_FORM, MSG_LOGOUT};
pub use request::{FormRequest, RequestInput};
pub use session::{LoginUser, MemorySession, SessionStore, ADMIN_STATUS};
