//! # Wire Primitives
//!
//! Reference implementations of the values a transaction embeds but does
//! not own the format of. The transaction codec only sees them through
//! [`crate::codec::WireEncode`], [`crate::codec::WireDecode`], and
//! [`AccountAddress`], so a deployment can swap in its own formats.

pub mod address;
pub mod data;

pub use address::{AccountAddress, Address};
pub use data::Data;
