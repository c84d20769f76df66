// Copyright (c) 2026 pydaten developers. MIT License.
// See LICENSE for details.

//! # pydaten Protocol: Transaction Wire Format
//!
//! The byte-exact encoding every pydaten node agrees on: how a transaction
//! is serialized, what gets signed, what gets hashed, and how batches are
//! framed. Anything that moves transactions between nodes goes through
//! here, and any divergence splits the network.
//!
//! ## Architecture
//!
//! - **config**: Wire limits and the regular hash function.
//! - **crypto**: Hash functions over encoded bytes.
//! - **codec**: Byte stream primitives, wire traits, and error types.
//! - **primitives**: Reference `Address` and `Data` encodings.
//! - **transaction**: The transaction record, its signable form, content
//!   hash, and list framing.
//!
//! ## Example
//!
//! ```
//! use pydaten_protocol::primitives::Address;
//! use pydaten_protocol::transaction::{Transaction, TransactionBuilder};
//!
//! let tx: Transaction = TransactionBuilder::new(
//!     Address::new(vec![0x01; 32]).unwrap(),
//!     Address::new(vec![0x02; 32]).unwrap(),
//! )
//! .amount(500)
//! .signature(vec![0xAB; 64])
//! .build()
//! .unwrap();
//!
//! let bytes = tx.serialize(true);
//! let decoded: Transaction = Transaction::deserialize(&bytes, true).unwrap();
//! assert_eq!(decoded, tx);
//! assert_eq!(decoded.calculate_hash(), tx.calculate_hash());
//! ```

pub mod codec;
pub mod config;
pub mod crypto;
pub mod primitives;
pub mod transaction;
