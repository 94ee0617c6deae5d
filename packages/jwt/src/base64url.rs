//! Base64url (RFC 4648 §5) without padding
//!
//! Encoding drops trailing `=`. Decoding re-adds padding up to the next
//! multiple of four before handing the text to a strict, canonical decoder.

use crate::error::{JwtError, JwtResult};
use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine as _,
};

/// Encode bytes to unpadded base64url. Never fails.
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url text.
///
/// # Errors
/// Returns [`JwtError::MalformedEncoding`] when the text contains anything
/// outside `[A-Za-z0-9_-]` (including `=`), has an impossible length, or
/// carries non-zero trailing bits.
pub fn decode(input: &str) -> JwtResult<Vec<u8>> {
    if !input.bytes().all(is_url_safe) {
        return Err(JwtError::MalformedEncoding);
    }

    let pad = padding_len(input.len());
    let mut padded = String::with_capacity(input.len() + pad);
    padded.push_str(input);
    padded.extend(std::iter::repeat_n('=', pad));

    URL_SAFE
        .decode(padded)
        .map_err(|_| JwtError::MalformedEncoding)
}

/// Number of `=` needed to reach the next multiple of four.
#[inline]
fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[inline]
fn is_url_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
