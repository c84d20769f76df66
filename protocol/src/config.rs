//! # Wire Format Configuration & Constants
//!
//! Every limit the transaction codec enforces lives here. These numbers are
//! part of the wire contract: a node that disagrees on any of them will
//! produce or accept bytes its peers reject, so they only change together
//! with a new transaction `version`.

use crate::crypto::hash::HashFunction;

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Transaction format version written by the builder when none is given.
pub const CURRENT_TX_VERSION: u8 = 1;

// ---------------------------------------------------------------------------
// Single-byte length prefixes
// ---------------------------------------------------------------------------

/// Maximum name length in bytes. The name length travels as a `u8`.
pub const MAX_NAME_LENGTH: usize = u8::MAX as usize;

/// Maximum signature length in bytes. The signature length travels as a `u8`.
pub const MAX_SIGNATURE_LENGTH: usize = u8::MAX as usize;

/// Maximum address key length in bytes.
pub const MAX_ADDRESS_KEY_LENGTH: usize = u8::MAX as usize;

/// Maximum number of name segments an address can carry.
pub const MAX_ADDRESS_SEGMENTS: usize = u8::MAX as usize;

/// Maximum length of a single address segment.
pub const MAX_ADDRESS_SEGMENT_LENGTH: usize = u8::MAX as usize;

// ---------------------------------------------------------------------------
// Four-byte length prefixes
// ---------------------------------------------------------------------------

/// Maximum payload size carried in a transaction's `data` field.
/// The prefix is a `u32`; anything above that cannot be framed.
pub const MAX_DATA_LENGTH: usize = u32::MAX as usize;

/// Largest signed transaction encoding [`crate::transaction::Transaction::valid`]
/// accepts. 256 KiB keeps a single record well under any sane frame size.
pub const MAX_TRANSACTION_SIZE: usize = 256 * 1024;

// ---------------------------------------------------------------------------
// Hashing
// ---------------------------------------------------------------------------

/// Digest length produced by every supported [`HashFunction`].
pub const HASH_OUTPUT_LENGTH: usize = 32;

/// Hash function used for transaction content hashes.
pub const REGULAR_HASH_FUNCTION: HashFunction = HashFunction::Sha256;
