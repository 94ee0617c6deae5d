//! Algorithm registry: the closed set of keyed-hash signing algorithms

use crate::crypto::hmac::{sign_hs256, sign_hs384, sign_hs512};
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Supported signing algorithm.
///
/// Resolution from an identifier happens once, when a codec is built, so
/// every later sign or verify call is free of algorithm errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    /// HMAC-SHA256
    #[default]
    Hs256,
    /// HMAC-SHA384
    Hs384,
    /// HMAC-SHA512
    Hs512,
}

impl Algorithm {
    /// Every registered algorithm.
    pub const ALL: [Algorithm; 3] = [Algorithm::Hs256, Algorithm::Hs384, Algorithm::Hs512];

    /// Look up an algorithm by its header identifier.
    ///
    /// # Errors
    /// Returns [`JwtError::UnsupportedAlgorithm`] for anything other than
    /// `HS256`, `HS384` or `HS512`. Matching is exact and case-sensitive.
    pub fn resolve(identifier: &str) -> JwtResult<Self> {
        match identifier {
            "HS256" => Ok(Algorithm::Hs256),
            "HS384" => Ok(Algorithm::Hs384),
            "HS512" => Ok(Algorithm::Hs512),
            other => Err(JwtError::unsupported_algorithm(other)),
        }
    }

    /// Identifier written into the header `alg` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
        }
    }

    /// Raw digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Hs256 => 32,
            Algorithm::Hs384 => 48,
            Algorithm::Hs512 => 64,
        }
    }

    /// Recommended minimum secret length in bytes (RFC 7518 §3.2).
    ///
    /// Informational: shorter secrets are still accepted.
    #[must_use]
    pub const fn recommended_key_size(self) -> usize {
        self.digest_len()
    }

    /// Keyed hash of `message` under `secret`.
    pub(crate) fn mac(self, message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            Algorithm::Hs256 => sign_hs256(message, secret),
            Algorithm::Hs384 => sign_hs384(message, secret),
            Algorithm::Hs512 => sign_hs512(message, secret),
        }
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for Algorithm {
    type Error = JwtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::resolve(&value)
    }
}

impl From<Algorithm> for &'static str {
    fn from(alg: Algorithm) -> Self {
        alg.as_str()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
