//! Byte stream primitives for the wire format.
//!
//! All multi-byte integers are fixed-width and big-endian (network order).
//! [`ByteWriter`] never fails; [`ByteReader`] checks every read against the
//! remaining buffer and reports [`DecodeError::Truncated`] instead of
//! panicking.

use bytes::{Buf, BufMut, BytesMut};

use super::error::DecodeError;

// ---------------------------------------------------------------------------
// ByteWriter
// ---------------------------------------------------------------------------

/// Append-only buffer that encodes fixed-width integers and raw bytes.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: BytesMut,
}

impl ByteWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.put_u64(value);
    }

    /// Appends raw bytes with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consumes the writer and returns the encoded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf.into()
    }
}

// ---------------------------------------------------------------------------
// ByteReader
// ---------------------------------------------------------------------------

/// Cursor over a borrowed byte slice.
///
/// Slices returned by [`ByteReader::read_bytes`] borrow from the original
/// buffer, so decoding a list element does not copy it.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    rest: &'a [u8],
    consumed: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            rest: buf,
            consumed: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.consumed
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if self.rest.len() < needed {
            return Err(DecodeError::Truncated {
                needed,
                remaining: self.rest.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.ensure(1)?;
        self.consumed += 1;
        Ok(self.rest.get_u8())
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.ensure(4)?;
        self.consumed += 4;
        Ok(self.rest.get_u32())
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.ensure(8)?;
        self.consumed += 8;
        Ok(self.rest.get_u64())
    }

    /// Reads exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.ensure(len)?;
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        self.consumed += len;
        Ok(head)
    }

    /// Reads a `u8` length followed by that many bytes.
    pub fn read_short_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.read_u8()? as usize;
        self.read_bytes(len)
    }

    /// Reads a `u32` length followed by that many bytes.
    pub fn read_long_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = self.read_u32()? as usize;
        self.read_bytes(len)
    }
}
