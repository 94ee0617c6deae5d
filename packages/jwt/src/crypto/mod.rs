//! Keyed-hash primitives behind the algorithm registry

pub mod hmac;
