//! Digest computation module
//!
//! Provides the hashing kernel the workers run: decimal-text rendering,
//! SHA-512/SHA-256/BLAKE3 digests, and lowercase hex encoding.

mod hasher;

pub use hasher::*;
