//! Hashing kernel for the worker compute phase
//!
//! All functions here are pure: the same input always yields the same
//! digest, with no per-call state. Hex output is lowercase, fixed width,
//! two characters per digest byte.

use crate::config::DigestAlgorithm;
use crate::dispatch::WorkRange;
use sha2::{Digest, Sha256, Sha512};

/// Hex-encode the digest of an arbitrary byte slice
pub fn digest_hex(data: &[u8], algorithm: DigestAlgorithm) -> String {
    match algorithm {
        DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        DigestAlgorithm::Blake3 => blake3::hash(data).to_hex().to_string(),
    }
}

/// Digest record for one input integer: the hex digest of its canonical
/// base-10 text (no sign, no leading zeros)
pub fn hash_value(value: u64, algorithm: DigestAlgorithm) -> String {
    digest_hex(value.to_string().as_bytes(), algorithm)
}

/// Compute the records for a whole range, in increasing input order,
/// appending to the caller's buffer
///
/// A range of `len` inputs always appends exactly `len` records.
pub fn hash_range(range: WorkRange, algorithm: DigestAlgorithm, buffer: &mut Vec<String>) {
    buffer.reserve(range.len as usize);
    for value in range.values() {
        buffer.push(hash_value(value, algorithm));
    }
}
