//! # Transaction Module
//!
//! The canonical wire format for pydaten ledger transactions. Every node
//! must produce and accept these bytes exactly: hashes, signatures, and
//! batch exchange all depend on it.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   : Bounded field types (Name, AsciiName, Signature)
//! builder.rs : Transaction value type and its TransactionBuilder
//! wire.rs    : serialize / deserialize, signable form, content hash
//! list.rs    : count-prefixed, length-framed transaction batches
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: assemble fields with [`TransactionBuilder`].
//! 2. **Sign**: sign [`Transaction::signable`] externally, attach the bytes
//!    with [`Transaction::with_signature`].
//! 3. **Ship**: [`Transaction::serialize`] one record, or
//!    [`serialize_list`] a batch.
//! 4. **Receive**: [`Transaction::deserialize`] / [`deserialize_list`], then
//!    index by [`Transaction::calculate_hash`].
//!
//! ## Design Decisions
//!
//! - The content hash covers the signed form, so a re-signed transaction
//!   gets a new identity. The signable form is what gets signed.
//! - Bounded fields are checked when built, so serialization cannot fail.
//! - `deserialize` ignores trailing bytes; `deserialize_strict` does not.

pub mod builder;
pub mod list;
pub mod types;
pub mod wire;

pub use builder::{Transaction, TransactionBuilder};
pub use list::{deserialize_list, serialize_list};
pub use types::{AsciiName, Name, Signature};
