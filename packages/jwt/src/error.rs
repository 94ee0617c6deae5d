//! Token codec error types

use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Distinct failure kinds of the token codec.
///
/// Every variant is a terminal outcome: nothing is retried internally and
/// `decode`/`verify` never return a partially parsed payload alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Algorithm identifier outside `HS256`/`HS384`/`HS512`
    #[error("Algorithm `{0}` not supported")]
    UnsupportedAlgorithm(String),

    /// Token does not split into exactly three segments
    #[error("Invalid token format")]
    InvalidFormat,

    /// A segment is not valid base64url
    #[error("Malformed base64url encoding")]
    MalformedEncoding,

    /// Payload is not a JSON object, or the expiry field is missing/invalid
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Signature segment does not match the recomputed one
    #[error("Invalid signature")]
    InvalidSignature,

    /// Expiry timestamp has passed
    #[error("Token has expired")]
    Expired,

    /// Payload could not be serialized to a JSON object
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Keyed-hash initialization rejected the key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl JwtError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a malformed payload error
    #[inline]
    #[must_use]
    pub fn malformed_payload(msg: &str) -> Self {
        JwtError::MalformedPayload(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// True for failures that mean the token was forged or altered, as
    /// opposed to merely stale or unreadable.
    #[must_use]
    pub fn is_forgery(&self) -> bool {
        matches!(self, JwtError::InvalidSignature)
    }
}
