//! Token type definitions

use crate::algorithm::Algorithm;
use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};

/// Caller payload: an insertion-ordered JSON object.
///
/// Key order is part of the signed bytes, so two payloads with the same
/// entries in a different order produce different signatures.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Fixed `typ` tag of every header.
pub const TOKEN_TYPE: &str = "JWT";

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Token header. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    pub typ: String,
    pub alg: String,
}

impl JwtHeader {
    #[must_use]
    pub fn new(alg: Algorithm) -> Self {
        Self {
            typ: TOKEN_TYPE.to_string(),
            alg: alg.as_str().to_string(),
        }
    }
}

/// Signed token string `header.payload.signature`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(String);

impl JwtToken {
    pub(crate) fn from_segments(header: &str, payload: &str, signature: &str) -> Self {
        Self(format!("{header}{SEPARATOR}{payload}{SEPARATOR}{signature}"))
    }

    /// Borrow the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<JwtToken> for String {
    fn from(token: JwtToken) -> Self {
        token.0
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three raw segments of a token, borrowed from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split on `.`.
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidFormat`] unless exactly three parts result.
    /// Empty parts count, so `"a..b"` splits and `"a.b"` does not.
    pub fn split(token: &'a str) -> JwtResult<Self> {
        let mut parts = token.split(SEPARATOR);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header,
                payload,
                signature,
            }),
            _ => Err(JwtError::InvalidFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_exactly_three_parts() {
        let parts = TokenParts::split("aa.bb.cc").unwrap();
        assert_eq!(parts.header, "aa");
        assert_eq!(parts.payload, "bb");
        assert_eq!(parts.signature, "cc");
    }

    #[test]
    fn rejects_other_part_counts() {
        for token in ["onlyonepart", "a.b", "a.b.c.d", ""] {
            assert_eq!(TokenParts::split(token), Err(JwtError::InvalidFormat));
        }
    }

    #[test]
    fn empty_segments_still_count() {
        let parts = TokenParts::split("..").unwrap();
        assert_eq!(parts.header, "");
        assert_eq!(parts.signature, "");
    }

    #[test]
    fn token_joins_segments() {
        let token = JwtToken::from_segments("h", "p", "s");
        assert_eq!(token.as_str(), "h.p.s");
        assert_eq!(token.to_string(), "h.p.s");
        assert_eq!(String::from(token), "h.p.s");
    }
}
