//! HMAC-SHA2 keyed hashes (HS256, HS384, HS512)

use crate::error::{JwtError, JwtResult};
use hmac::{digest::KeyInit, Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Raw digest of `message` under `secret` for any HMAC instance.
#[inline]
fn compute<M: Mac + KeyInit>(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Sign with HMAC-SHA256 (HS256)
#[inline]
pub(crate) fn sign_hs256(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    compute::<HmacSha256>(message, secret)
}

/// Sign with HMAC-SHA384 (HS384)
#[inline]
pub(crate) fn sign_hs384(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    compute::<HmacSha384>(message, secret)
}

/// Sign with HMAC-SHA512 (HS512)
#[inline]
pub(crate) fn sign_hs512(message: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    compute::<HmacSha512>(message, secret)
}
