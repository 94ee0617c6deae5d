//! Header and payload segments: value -> deterministic JSON -> base64url
//!
//! JSON is written compactly with object keys in insertion order and every
//! non-ASCII character escaped as a lowercase `\uXXXX` sequence, so the
//! serialized bytes (and therefore the signature) are reproducible.

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::error::{JwtError, JwtResult};
use crate::types::{JwtHeader, Payload};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Compact formatter that keeps JSON output pure ASCII.
#[derive(Debug, Default, Clone, Copy)]
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serialize to compact, ASCII-only JSON bytes.
pub(crate) fn to_ascii_json<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, AsciiFormatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

/// Encoded `{"typ":"JWT","alg":<id>}`.
///
/// # Errors
/// Only on a serializer failure, which a two-string struct cannot produce.
pub fn build_header_segment(algorithm: Algorithm) -> JwtResult<String> {
    let json = to_ascii_json(&JwtHeader::new(algorithm))
        .map_err(|e| JwtError::serialization(&e.to_string()))?;
    Ok(base64url::encode(&json))
}

/// Encoded caller payload, key order preserved.
///
/// # Errors
/// Returns [`JwtError::Serialization`] if a value cannot be written as JSON.
pub fn build_payload_segment(payload: &Payload) -> JwtResult<String> {
    let json = to_ascii_json(payload).map_err(|e| JwtError::serialization(&e.to_string()))?;
    Ok(base64url::encode(&json))
}

/// Decode a payload segment back into an ordered map.
///
/// # Errors
/// Returns [`JwtError::MalformedPayload`] for bad base64url, bad JSON, or
/// JSON that is not an object.
pub fn parse_payload_segment(segment: &str) -> JwtResult<Payload> {
    let bytes = base64url::decode(segment)
        .map_err(|_| JwtError::malformed_payload("payload segment is not valid base64url"))?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| JwtError::malformed_payload(&format!("invalid JSON: {e}")))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(JwtError::malformed_payload("payload is not a JSON object")),
    }
}
