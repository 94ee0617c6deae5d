//! Compact HMAC-signed token codec
//!
//! Tokens are `header.payload.signature`, each segment unpadded base64url:
//! - header: `{"typ":"JWT","alg":"HS256"|"HS384"|"HS512"}`
//! - payload: the caller's JSON object, key order preserved, ASCII-only
//! - signature: raw HMAC digest over `header.payload`
//!
//! An optional lifetime stamps a reserved `expired` field into the payload
//! on encode, enforces it on verify and strips it from every payload handed
//! back.
//!
//! ```
//! use hmacjwt::{JwtCodec, Payload};
//! use serde_json::json;
//!
//! let codec = JwtCodec::new("my_secret_key", 0, "HS256").unwrap();
//! let mut payload = Payload::new();
//! payload.insert("name".into(), json!("x"));
//! payload.insert("id".into(), json!(1));
//!
//! let token = codec.encode(&payload).unwrap();
//! assert_eq!(codec.verify(&token).unwrap(), payload);
//! ```

pub mod algorithm;
pub mod base64url;
pub mod builder;
pub mod codec;
pub(crate) mod crypto;
mod config;
mod error;
pub mod expiration;
pub mod segment;
pub mod signature;
mod types;

pub use algorithm::Algorithm;
pub use builder::{Jwt, JwtBuilder};
pub use codec::JwtCodec;
pub use config::{CodecConfig, SecretKey, DEFAULT_SECRET};
pub use error::*;
pub use expiration::{Clock, ManualClock, SystemClock, EXPIRY_CLAIM};
pub use types::*;
