//! Expiration policy and the wall clock it reads
//!
//! With a positive lifetime the codec owns one reserved payload key,
//! [`EXPIRY_CLAIM`], holding an absolute unix timestamp. It is added on
//! encode, checked on verify and removed from every payload handed back.

use crate::error::{JwtError, JwtResult};
use crate::types::Payload;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Reserved payload key carrying the expiry timestamp.
pub const EXPIRY_CLAIM: &str = "expired";

/// Source of the current time in unix seconds.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current unix time in seconds.
    fn now(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually driven clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    /// Start at `now` unix seconds.
    #[must_use]
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    /// Move forward by `secs`.
    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

/// Add `expired = now + lifetime` when `lifetime > 0`.
///
/// A caller-supplied value under the reserved key is overwritten in place.
#[must_use]
pub fn apply_on_encode(mut payload: Payload, lifetime: u64, now: i64) -> Payload {
    if lifetime > 0 {
        let lifetime = i64::try_from(lifetime).unwrap_or(i64::MAX);
        payload.insert(EXPIRY_CLAIM.to_string(), now.saturating_add(lifetime).into());
    }
    payload
}

/// Remove the reserved key, whatever the configured lifetime.
#[must_use]
pub fn strip_on_read(mut payload: Payload) -> Payload {
    payload.shift_remove(EXPIRY_CLAIM);
    payload
}

/// Enforce the expiry recorded in `payload` when `lifetime > 0`.
///
/// # Errors
/// - [`JwtError::MalformedPayload`] if the reserved key is absent or not an
///   integer timestamp.
/// - [`JwtError::Expired`] if the timestamp is earlier than `now`.
pub fn check_expiry(payload: &Payload, lifetime: u64, now: i64) -> JwtResult<()> {
    if lifetime == 0 {
        return Ok(());
    }

    let expires = payload
        .get(EXPIRY_CLAIM)
        .ok_or_else(|| JwtError::malformed_payload("missing expiry field"))?
        .as_i64()
        .ok_or_else(|| JwtError::malformed_payload("expiry field is not a timestamp"))?;

    if expires < now {
        return Err(JwtError::Expired);
    }
    Ok(())
}
