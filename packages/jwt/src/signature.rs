//! Signature engine: keyed hash over `header.payload`

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::error::JwtResult;
use crate::types::SEPARATOR;
use subtle::ConstantTimeEq;

/// Exact signing input: `header_segment + "." + payload_segment`.
fn signing_input(header_segment: &str, payload_segment: &str) -> Vec<u8> {
    let mut input = Vec::with_capacity(header_segment.len() + payload_segment.len() + 1);
    input.extend_from_slice(header_segment.as_bytes());
    input.push(SEPARATOR as u8);
    input.extend_from_slice(payload_segment.as_bytes());
    input
}

/// Base64url-encoded raw digest over the two encoded segments.
///
/// # Errors
/// Propagates a keyed-hash initialization failure.
pub fn sign(
    header_segment: &str,
    payload_segment: &str,
    key: &[u8],
    algorithm: Algorithm,
) -> JwtResult<String> {
    let digest = algorithm.mac(&signing_input(header_segment, payload_segment), key)?;
    Ok(base64url::encode(&digest))
}

/// Recompute the signature segment and compare it in constant time.
///
/// Only an exact match of the full segment text succeeds; an alternative
/// encoding of the same digest does not.
///
/// # Errors
/// Propagates a keyed-hash initialization failure.
pub fn verify(
    header_segment: &str,
    payload_segment: &str,
    provided: &str,
    key: &[u8],
    algorithm: Algorithm,
) -> JwtResult<bool> {
    let expected = sign(header_segment, payload_segment, key, algorithm)?;
    Ok(expected.as_bytes().ct_eq(provided.as_bytes()).into())
}
