//! # Hashing Utilities
//!
//! Hash functions available for transaction content hashes. All of them
//! produce 32-byte digests so callers can store any of them in a
//! `[u8; 32]` without caring which one the network configured.
//!
//! - **SHA-256**: the regular hash function. Every node has to agree on
//!   it, so it stays the boring choice.
//! - **double SHA-256**: `SHA-256(SHA-256(data))`, for references that
//!   cross into Bitcoin-style tooling.
//! - **BLAKE3**: faster, used where a digest never leaves the local node.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// # Example
///
/// ```
/// use pydaten_protocol::crypto::sha256;
///
/// let hash = sha256(b"pydaten");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute the BLAKE3 hash of the input data.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

// ---------------------------------------------------------------------------
// HashFunction
// ---------------------------------------------------------------------------

/// Selector for the digest used when hashing a serialized transaction.
///
/// The network-wide choice is [`crate::config::REGULAR_HASH_FUNCTION`].
/// Other variants exist for tooling that needs to cross-reference
/// transactions under a different digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashFunction {
    /// Single SHA-256.
    Sha256,
    /// SHA-256 applied twice.
    DoubleSha256,
    /// BLAKE3 in default (unkeyed) mode.
    Blake3,
}

impl HashFunction {
    /// Hash `data` with the selected function.
    pub fn digest(&self, data: &[u8]) -> [u8; 32] {
        match self {
            Self::Sha256 => sha256(data),
            Self::DoubleSha256 => double_sha256(data),
            Self::Blake3 => blake3_hash(data),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::DoubleSha256 => write!(f, "double-sha256"),
            Self::Blake3 => write!(f, "blake3"),
        }
    }
}

impl FromStr for HashFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "double-sha256" => Ok(Self::DoubleSha256),
            "blake3" => Ok(Self::Blake3),
            other => Err(format!("unknown hash function: {}", other)),
        }
    }
}
