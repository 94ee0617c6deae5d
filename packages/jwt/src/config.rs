//! Codec configuration and secret key handling

use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use zeroize::Zeroizing;

/// Placeholder secret used when none is supplied. Never rely on it outside
/// of local experiments: anyone who reads this source can forge tokens.
pub const DEFAULT_SECRET: &[u8] = b"my_secret_key";

/// Non-secret codec settings.
///
/// The secret is deliberately absent so a config can be logged, stored or
/// shipped in a file without leaking key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Signing algorithm (`HS256` when omitted).
    pub algorithm: Algorithm,
    /// Token lifetime in seconds; `0` disables expiration.
    pub expire_seconds: u64,
}

impl CodecConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm, expire_seconds: u64) -> Self {
        Self {
            algorithm,
            expire_seconds,
        }
    }

    /// Parse from JSON such as `{"algorithm":"HS384","expire_seconds":3600}`.
    ///
    /// # Errors
    /// [`JwtError::UnsupportedAlgorithm`] for an unknown algorithm, otherwise
    /// [`JwtError::Serialization`] for malformed input.
    pub fn from_json(json: &str) -> JwtResult<Self> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Raw {
            algorithm: Option<String>,
            expire_seconds: Option<u64>,
        }

        let raw: Raw =
            serde_json::from_str(json).map_err(|e| JwtError::serialization(&e.to_string()))?;
        let algorithm = match raw.algorithm {
            Some(id) => Algorithm::resolve(&id)?,
            None => Algorithm::default(),
        };
        Ok(Self::new(algorithm, raw.expire_seconds.unwrap_or(0)))
    }

    #[must_use]
    pub fn with_expiry(mut self, lifetime: Duration) -> Self {
        self.expire_seconds = lifetime.as_secs();
        self
    }

    /// Whether tokens carry and enforce an expiry.
    #[must_use]
    pub fn expires(&self) -> bool {
        self.expire_seconds > 0
    }
}

/// HMAC secret owned by a codec. Wiped from memory on drop and never
/// printed.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(bytes.into()))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }

    /// Length of the key in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when this is the built-in placeholder.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.expose() == DEFAULT_SECRET
    }
}

impl Default for SecretKey {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET)
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for SecretKey {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for SecretKey {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {}])", self.len())
    }
}
