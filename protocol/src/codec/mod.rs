//! # Wire Codec
//!
//! The byte-level plumbing shared by every value that travels inside a
//! transaction.
//!
//! ```text
//! stream.rs : ByteWriter / ByteReader (fixed-width big-endian primitives)
//! error.rs  : DecodeError / EncodeError
//! ```
//!
//! Values that embed themselves in a transaction implement [`WireEncode`]
//! and [`WireDecode`]. Both must be self-delimiting: `decode` consumes
//! exactly the span `encode` produced, so the transaction codec never needs
//! to know a collaborator's length up front.

pub mod error;
pub mod stream;

pub use error::{DecodeError, EncodeError};
pub use stream::{ByteReader, ByteWriter};

/// A value that can write itself into a [`ByteWriter`].
pub trait WireEncode {
    fn encode(&self, writer: &mut ByteWriter);

    /// Exact number of bytes `encode` will write.
    fn encoded_len(&self) -> usize;

    fn to_wire_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(self.encoded_len());
        self.encode(&mut writer);
        writer.into_vec()
    }
}

/// A value that can read itself back from a [`ByteReader`].
pub trait WireDecode: Sized {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError>;

    /// Decodes from the start of `bytes`. Trailing bytes are ignored.
    fn from_wire_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(&mut ByteReader::new(bytes))
    }
}
