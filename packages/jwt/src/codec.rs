//! Token codec: composes segments, signature and expiration into
//! `encode`, `decode` and `verify`.

use crate::algorithm::Algorithm;
use crate::config::{CodecConfig, SecretKey};
use crate::error::{JwtError, JwtResult};
use crate::expiration::{self, Clock, SystemClock};
use crate::segment;
use crate::signature;
use crate::types::{JwtToken, Payload, TokenParts};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;

/// Signs and checks tokens for one (secret, lifetime, algorithm) triple.
///
/// Immutable after construction and safe to share across threads; rotate a
/// key by building a new codec.
#[derive(Clone)]
pub struct JwtCodec {
    config: CodecConfig,
    secret: SecretKey,
    header_segment: String,
    clock: Arc<dyn Clock>,
}

impl JwtCodec {
    /// Build from a secret, a lifetime in seconds (`0` = no expiry) and an
    /// algorithm identifier.
    ///
    /// # Errors
    /// Returns [`JwtError::UnsupportedAlgorithm`] for an unknown identifier.
    pub fn new(
        secret: impl Into<SecretKey>,
        expire_seconds: u64,
        algorithm: &str,
    ) -> JwtResult<Self> {
        let algorithm = Algorithm::resolve(algorithm)?;
        Self::from_config(secret, CodecConfig::new(algorithm, expire_seconds))
    }

    /// Build from an already-resolved config.
    ///
    /// # Errors
    /// Only if the header cannot be serialized.
    pub fn from_config(secret: impl Into<SecretKey>, config: CodecConfig) -> JwtResult<Self> {
        Self::with_parts(secret.into(), config, Arc::new(SystemClock))
    }

    pub(crate) fn with_parts(
        secret: SecretKey,
        config: CodecConfig,
        clock: Arc<dyn Clock>,
    ) -> JwtResult<Self> {
        let header_segment = segment::build_header_segment(config.algorithm)?;
        Ok(Self {
            config,
            secret,
            header_segment,
            clock,
        })
    }

    /// Signing algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Settings this codec was built with.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Sign `payload` into a token.
    ///
    /// With expiration enabled the reserved `expired` key is set to
    /// `now + lifetime`; any caller value under that key is replaced.
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`] if the payload cannot be written
    /// as JSON.
    pub fn encode(&self, payload: &Payload) -> JwtResult<JwtToken> {
        let payload = if self.config.expires() {
            expiration::apply_on_encode(payload.clone(), self.config.expire_seconds, self.clock.now())
        } else {
            payload.clone()
        };

        let payload_segment = segment::build_payload_segment(&payload)?;
        let signature_segment = signature::sign(
            &self.header_segment,
            &payload_segment,
            self.secret.expose(),
            self.config.algorithm,
        )?;

        tracing::debug!(
            alg = %self.config.algorithm,
            expires = self.config.expires(),
            "encoded token"
        );
        Ok(JwtToken::from_segments(
            &self.header_segment,
            &payload_segment,
            &signature_segment,
        ))
    }

    /// Sign any value that serializes to a JSON object.
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`] if `claims` does not serialize, or
    /// serializes to something other than an object.
    pub fn encode_claims<T: Serialize + ?Sized>(&self, claims: &T) -> JwtResult<JwtToken> {
        match serde_json::to_value(claims).map_err(|e| JwtError::serialization(&e.to_string()))? {
            serde_json::Value::Object(payload) => self.encode(&payload),
            _ => Err(JwtError::serialization("claims must serialize to a JSON object")),
        }
    }

    /// Read the payload without checking the signature or expiry.
    ///
    /// For inspection only: the result is attacker-controlled and must not
    /// drive a trust decision. Use [`JwtCodec::verify`] for that.
    ///
    /// # Errors
    /// [`JwtError::InvalidFormat`] or [`JwtError::MalformedPayload`].
    pub fn decode(&self, token: impl AsRef<str>) -> JwtResult<Payload> {
        let parts = TokenParts::split(token.as_ref())?;
        let payload = segment::parse_payload_segment(parts.payload)?;
        Ok(expiration::strip_on_read(payload))
    }

    /// Check the signature and expiry, then return the payload.
    ///
    /// # Errors
    /// Exactly one of [`JwtError::InvalidFormat`],
    /// [`JwtError::InvalidSignature`], [`JwtError::MalformedPayload`] or
    /// [`JwtError::Expired`], in that order of precedence.
    pub fn verify(&self, token: impl AsRef<str>) -> JwtResult<Payload> {
        let parts = TokenParts::split(token.as_ref())?;

        let valid = signature::verify(
            parts.header,
            parts.payload,
            parts.signature,
            self.secret.expose(),
            self.config.algorithm,
        )?;
        if !valid {
            return Err(JwtError::InvalidSignature);
        }

        let payload = segment::parse_payload_segment(parts.payload)?;
        if self.config.expires() {
            expiration::check_expiry(&payload, self.config.expire_seconds, self.clock.now())?;
        }

        tracing::debug!(alg = %self.config.algorithm, "verified token");
        Ok(expiration::strip_on_read(payload))
    }

    /// [`JwtCodec::verify`], then deserialize the payload into `T`.
    ///
    /// # Errors
    /// Any `verify` error, or [`JwtError::MalformedPayload`] when the
    /// payload does not fit `T`.
    pub fn verify_claims<T: DeserializeOwned>(&self, token: impl AsRef<str>) -> JwtResult<T> {
        let payload = self.verify(token)?;
        serde_json::from_value(serde_json::Value::Object(payload))
            .map_err(|e| JwtError::malformed_payload(&e.to_string()))
    }
}

impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("config", &self.config)
            .field("secret", &self.secret)
            .field("clock", &self.clock)
            .finish()
    }
}
