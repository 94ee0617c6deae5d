//! Known-answer tests against fixed tokens, plus format and expiry behavior

use hmacjwt::{base64url, Jwt, JwtCodec, JwtError, ManualClock, Payload, TokenParts};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const THAI_TOKEN: &str = concat!(
    "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9",
    ".eyJuYW1lIjoiXHUwZTIwXHUwZTMyXHUwZTI5XHUwZTMyXHUwZTQ0XHUwZTE3XHUwZTIyIiwiaWQiOjEyMzQ1Njc4OTB9",
    ".fAdzmsl4AIGAyNGt7MfNum9DUIxn6DGMhdn1hw4PwwE",
);

fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => panic!("test payload must be an object"),
    }
}

fn default_codec() -> JwtCodec {
    JwtCodec::new("my_secret_key", 0, "HS256").unwrap()
}

fn decoded_json(segment: &str) -> Value {
    serde_json::from_slice(&base64url::decode(segment).unwrap()).unwrap()
}

#[test]
fn literal_scenario() {
    let codec = default_codec();
    let input = payload(json!({"name": "x", "id": 1}));
    let token = codec.encode(&input).unwrap();

    let parts = TokenParts::split(token.as_str()).unwrap();
    assert_eq!(
        base64url::decode(parts.header).unwrap(),
        br#"{"typ":"JWT","alg":"HS256"}"#
    );
    assert_eq!(
        base64url::decode(parts.payload).unwrap(),
        br#"{"name":"x","id":1}"#
    );
    assert_eq!(codec.verify(&token).unwrap(), input);
}

#[test]
fn encode_reproduces_reference_token() {
    let token = default_codec()
        .encode(&payload(json!({"name": "ภาษาไทย", "id": 1234567890})))
        .unwrap();
    assert_eq!(token.as_str(), THAI_TOKEN);
}

#[test]
fn decode_and_verify_reference_token() {
    let expected = payload(json!({"name": "ภาษาไทย", "id": 1234567890}));
    let codec = default_codec();
    assert_eq!(codec.decode(THAI_TOKEN).unwrap(), expected);
    assert_eq!(codec.verify(THAI_TOKEN).unwrap(), expected);
}

#[test]
fn reference_token_with_edited_payload_fails() {
    // one character of the payload changed, signature kept
    let forged = THAI_TOKEN.replacen("XHUwZTE3", "XHAwZTE3", 1);
    assert_ne!(forged, THAI_TOKEN);
    assert_eq!(default_codec().verify(&forged), Err(JwtError::InvalidSignature));
}

#[test]
fn headers_name_each_algorithm() {
    for alg in ["HS256", "HS384", "HS512"] {
        let codec = JwtCodec::new("k", 0, alg).unwrap();
        let token = codec.encode(&Payload::new()).unwrap();
        let parts = TokenParts::split(token.as_str()).unwrap();
        assert_eq!(decoded_json(parts.header), json!({"typ": "JWT", "alg": alg}));
        assert_eq!(decoded_json(parts.payload), json!({}));
    }
}

#[test]
fn rejects_wrong_segment_counts() {
    let codec = default_codec();
    for bad in ["onlyonepart", "a.b.c.d", "a.b", ""] {
        assert_eq!(codec.verify(bad), Err(JwtError::InvalidFormat), "{bad}");
        assert_eq!(codec.decode(bad), Err(JwtError::InvalidFormat), "{bad}");
    }
}

#[test]
fn decode_rejects_non_object_payload() {
    let seg = base64url::encode(b"[1,2,3]");
    let token = format!("eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9.{seg}.sig");
    assert!(matches!(
        default_codec().decode(&token),
        Err(JwtError::MalformedPayload(_))
    ));
}

#[test]
fn algorithm_mismatch_is_a_signature_failure() {
    let token = JwtCodec::new("k", 0, "HS512")
        .unwrap()
        .encode(&payload(json!({"a": 1})))
        .unwrap();
    let hs256 = JwtCodec::new("k", 0, "HS256").unwrap();
    assert_eq!(hs256.verify(&token), Err(JwtError::InvalidSignature));
}

#[test]
fn one_second_lifetime() {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let codec = Jwt::builder()
        .with_secret("my_secret_key")
        .with_expiry(Duration::from_secs(1))
        .with_clock(clock.clone())
        .build()
        .unwrap();

    let input = payload(json!({"name": "x", "id": 1}));
    let token = codec.encode(&input).unwrap();
    assert_eq!(codec.verify(&token).unwrap(), input);

    clock.advance(2);
    assert_eq!(codec.verify(&token), Err(JwtError::Expired));
    assert_eq!(codec.decode(&token).unwrap(), input);
}

#[test]
fn wall_clock_lifetime_is_valid_immediately() {
    let codec = Jwt::builder()
        .with_secret("my_secret_key")
        .with_expire_seconds(3600)
        .build()
        .unwrap();
    let input = payload(json!({"id": 7}));
    let token = codec.encode(&input).unwrap();
    assert_eq!(codec.verify(&token).unwrap(), input);
}

#[test]
fn shared_codec_across_threads() {
    let codec = Arc::new(JwtCodec::new("shared", 0, "HS384").unwrap());

    std::thread::scope(|s| {
        for i in 0..8 {
            let codec = Arc::clone(&codec);
            s.spawn(move || {
                for j in 0..50 {
                    let p = payload(json!({"thread": i, "n": j}));
                    let token = codec.encode(&p).unwrap();
                    assert_eq!(codec.verify(&token).unwrap(), p);
                }
            });
        }
    });
}
