//! # Cryptographic Primitives
//!
//! Thin wrappers around audited hash implementations. The codec never signs
//! or verifies anything itself; it only hashes encoded bytes.

pub mod hash;

pub use hash::{blake3_hash, double_sha256, sha256, HashFunction};
