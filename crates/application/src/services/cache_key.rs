//! Deterministic cache keys.
//!
//! Inputs are normalized before hashing: surrounding whitespace is trimmed,
//! inner whitespace runs collapse to one space and letters are lowercased.
//! `"Paris, France"` and `" paris,  FRANCE"` therefore share a key.
//! A cached value keeps the spelling of whichever input first wrote it, so
//! an unresolved `"Nowhereland"` is served to a later `"NOWHERELAND"` lookup
//! with `formattedAddress: "Nowhereland"`.

use sha2::{Digest, Sha256};
use std::fmt::Write;

pub const OP_GEOCODE: &str = "geocode";
pub const OP_EXTRACT_LOCATION: &str = "extract_location";

pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// `"<operation>:<hex sha256>"` over the operation and normalized input.
pub fn derive(operation: &str, input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(operation.as_bytes());
    hasher.update([0u8]);
    hasher.update(normalize(input).as_bytes());
    let digest = hasher.finalize();

    let mut key = String::with_capacity(operation.len() + 1 + digest.len() * 2);
    key.push_str(operation);
    key.push(':');
    for byte in digest {
        let _ = write!(key, "{byte:02x}");
    }
    key
}

pub fn geocode_key(location_name: &str) -> String {
    derive(OP_GEOCODE, location_name)
}

pub fn extraction_key(description: &str) -> String {
    derive(OP_EXTRACT_LOCATION, description)
}
