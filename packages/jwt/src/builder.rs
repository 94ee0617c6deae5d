//! Codec builder
//!
//! ```
//! use hmacjwt::Jwt;
//! use std::time::Duration;
//!
//! let codec = Jwt::builder()
//!     .with_secret(b"a long random secret")
//!     .with_algorithm("HS384")
//!     .with_expiry(Duration::from_secs(3600))
//!     .build()
//!     .unwrap();
//! assert_eq!(codec.algorithm().as_str(), "HS384");
//! ```

use crate::algorithm::Algorithm;
use crate::codec::JwtCodec;
use crate::config::{CodecConfig, SecretKey};
use crate::error::JwtResult;
use crate::expiration::{Clock, SystemClock};
use std::sync::Arc;
use std::time::Duration;

/// Entry point
pub struct Jwt;

impl Jwt {
    /// Start configuring a codec.
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }
}

/// Collects construction parameters; nothing is validated until
/// [`JwtBuilder::build`].
#[derive(Debug)]
pub struct JwtBuilder {
    algorithm: Option<String>,
    secret: Option<SecretKey>,
    expire_seconds: u64,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for JwtBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JwtBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: None,
            secret: None,
            expire_seconds: 0,
            clock: None,
        }
    }

    /// Algorithm identifier (`HS256` if never set).
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    /// HMAC secret.
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: impl AsRef<[u8]>) -> Self {
        self.secret = Some(SecretKey::new(secret.as_ref()));
        self
    }

    /// Token lifetime, whole seconds; zero disables expiration.
    #[inline]
    #[must_use]
    pub fn with_expiry(mut self, lifetime: Duration) -> Self {
        self.expire_seconds = lifetime.as_secs();
        self
    }

    /// Token lifetime in seconds; zero disables expiration.
    #[inline]
    #[must_use]
    pub fn with_expire_seconds(mut self, secs: u64) -> Self {
        self.expire_seconds = secs;
        self
    }

    /// Apply algorithm and lifetime from a config.
    #[must_use]
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.algorithm = Some(config.algorithm.as_str().to_string());
        self.expire_seconds = config.expire_seconds;
        self
    }

    /// Time source for expiry (wall clock by default).
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Resolve the algorithm and build the codec.
    ///
    /// # Errors
    /// Returns `JwtError::UnsupportedAlgorithm` for an unknown identifier.
    pub fn build(self) -> JwtResult<JwtCodec> {
        let algorithm = match self.algorithm.as_deref() {
            Some(id) => Algorithm::resolve(id)?,
            None => Algorithm::default(),
        };

        let secret = self.secret.unwrap_or_else(|| {
            tracing::warn!("no secret configured, falling back to the built-in placeholder");
            SecretKey::default()
        });
        if secret.is_empty() {
            tracing::warn!(alg = %algorithm, "codec built with an empty secret");
        } else if secret.len() < algorithm.recommended_key_size() {
            tracing::debug!(
                alg = %algorithm,
                len = secret.len(),
                recommended = algorithm.recommended_key_size(),
                "secret is shorter than the digest"
            );
        }

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        JwtCodec::with_parts(
            secret,
            CodecConfig::new(algorithm, self.expire_seconds),
            clock,
        )
    }
}
