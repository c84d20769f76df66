//! Error types for the transaction wire format.
//!
//! Decoding and encoding fail for different reasons and are reported by
//! different parties: [`DecodeError`] means the bytes are bad, [`EncodeError`]
//! means the caller tried to build a value the format cannot carry.

use thiserror::Error;

/// Errors raised while decoding bytes into wire values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ran out before a field or a declared length was complete.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the current field required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// The name-presence flag was neither 0 nor 1.
    #[error("invalid name tag: {0:#04x}")]
    InvalidTag(u8),

    /// A text field contained bytes outside the ASCII range.
    #[error("invalid encoding in {field}: not ASCII")]
    InvalidEncoding {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A collaborator decoder rejected a structurally complete value.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// Strict decoding found bytes after the end of the record.
    #[error("{0} trailing bytes after transaction")]
    TrailingBytes(usize),

    /// An element of a transaction list failed to decode.
    #[error("list element {index}: {source}")]
    Element {
        /// Zero-based position of the element in the list.
        index: usize,
        /// The underlying decode failure.
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Returns `true` for [`DecodeError::Truncated`], looking through list
    /// element wrappers.
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::Truncated { .. } => true,
            Self::Element { source, .. } => source.is_truncated(),
            _ => false,
        }
    }
}

/// Errors raised when a value cannot be represented on the wire.
///
/// These are caller errors: they surface when a bounded value is
/// constructed, never halfway through writing a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Name longer than the single-byte length prefix allows.
    #[error("name is {0} bytes, maximum is 255")]
    NameTooLong(usize),

    /// Name contains non-ASCII characters.
    #[error("name must be ASCII")]
    NonAsciiName,

    /// Signature longer than the single-byte length prefix allows.
    #[error("signature is {0} bytes, maximum is 255")]
    SignatureTooLong(usize),

    /// Address key longer than the single-byte length prefix allows.
    #[error("address key is {0} bytes, maximum is 255")]
    KeyTooLong(usize),

    /// Address carries more segments than the segment count byte allows.
    #[error("address has {0} segments, maximum is 255")]
    TooManySegments(usize),

    /// Address segment is longer than its length byte allows.
    #[error("address segment is {0} bytes, maximum is 255")]
    SegmentTooLong(usize),

    /// Address segment contains non-ASCII characters.
    #[error("address segment must be ASCII")]
    NonAsciiSegment,

    /// Payload does not fit a 4-byte length prefix.
    #[error("data payload is {0} bytes, too large to frame")]
    DataTooLarge(usize),

    /// Transaction list count does not fit a 4-byte prefix.
    #[error("cannot frame {0} transactions in one list")]
    TooManyTransactions(usize),

    /// Serialized transaction does not fit a 4-byte element length.
    #[error("serialized transaction is {0} bytes, too large to frame")]
    ElementTooLarge(usize),
}
