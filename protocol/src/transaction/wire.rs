//! Canonical serialization, content hashing, and the signable form.
//!
//! Field order is part of the format contract:
//!
//! ```text
//! version | target | fee | name | source | destination | amount | data | [signature]
//! ```
//!
//! The signed form ends with `sig_len:u8 signature`. The signable form
//! stops after `data`; it is structurally shorter, not signature-zeroed.

use tracing::trace;

use super::builder::{attached, Transaction};
use super::types::{Name, Signature};
use crate::codec::{ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode};
use crate::config::{
    MAX_TRANSACTION_SIZE, REGULAR_HASH_FUNCTION,
};
use crate::crypto::hash::HashFunction;
use crate::primitives::AccountAddress;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

impl<A: WireEncode, D: WireEncode> Transaction<A, D> {
    /// Writes the canonical encoding into `writer`.
    ///
    /// With `include_signature`, an unsigned transaction is written with a
    /// zero-length signature.
    pub fn encode_into(&self, writer: &mut ByteWriter, include_signature: bool) {
        writer.write_u8(self.version);
        writer.write_u32(self.target);
        writer.write_u64(self.fee);
        self.name.encode(writer);
        self.source.encode(writer);
        self.destination.encode(writer);
        writer.write_u64(self.amount);
        self.data.encode(writer);

        if include_signature {
            match &self.signature {
                Some(signature) => signature.encode(writer),
                None => writer.write_u8(0),
            }
        }
    }

    /// Serializes the transaction. `include_signature = false` produces the
    /// signable form.
    pub fn serialize(&self, include_signature: bool) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(self.serialized_len(include_signature));
        self.encode_into(&mut writer, include_signature);
        writer.into_vec()
    }

    /// Exact length of [`Transaction::serialize`] output.
    pub fn serialized_len(&self, include_signature: bool) -> usize {
        let body = 1
            + 4
            + 8
            + self.name.encoded_len()
            + self.source.encoded_len()
            + self.destination.encoded_len()
            + 8
            + self.data.encoded_len();

        if !include_signature {
            return body;
        }
        body + self
            .signature
            .as_ref()
            .map_or(1, |signature| signature.encoded_len())
    }

    /// The bytes a signature must be computed over and verified against.
    ///
    /// Never reads the `signature` field, so it is identical before and
    /// after signing.
    pub fn signable(&self) -> Vec<u8> {
        self.serialize(false)
    }

    /// Content hash: [`REGULAR_HASH_FUNCTION`] over the signed form.
    ///
    /// Two transactions that differ only in signature hash differently.
    pub fn calculate_hash(&self) -> [u8; 32] {
        self.calculate_hash_with(REGULAR_HASH_FUNCTION)
    }

    /// Content hash under an explicitly chosen function.
    pub fn calculate_hash_with(&self, function: HashFunction) -> [u8; 32] {
        function.digest(&self.serialize(true))
    }

    /// Hex form of [`Transaction::calculate_hash`].
    pub fn hash_hex(&self) -> String {
        hex::encode(self.calculate_hash())
    }

    /// Size check: the signed encoding fits [`MAX_TRANSACTION_SIZE`].
    ///
    /// Name and signature bounds are enforced when those values are
    /// constructed, so they need no check here. Says nothing about balances
    /// or whether the signature verifies.
    pub fn valid(&self) -> bool {
        self.serialized_len(true) <= MAX_TRANSACTION_SIZE
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

impl<A: WireDecode, D: WireDecode> Transaction<A, D> {
    /// Reads one transaction from `reader`, leaving it positioned after the
    /// last consumed byte.
    pub fn decode_from(
        reader: &mut ByteReader<'_>,
        include_signature: bool,
    ) -> Result<Self, DecodeError> {
        let version = reader.read_u8()?;
        let target = reader.read_u32()?;
        let fee = reader.read_u64()?;
        let name = Name::decode(reader)?;
        let source = A::decode(reader)?;
        let destination = A::decode(reader)?;
        let amount = reader.read_u64()?;
        let data = D::decode(reader)?;
        let signature = if include_signature {
            attached(Signature::decode(reader)?)
        } else {
            None
        };

        Ok(Self {
            version,
            target,
            fee,
            name,
            source,
            destination,
            amount,
            data,
            signature,
        })
    }

    /// Decodes a transaction from the start of `bytes`.
    ///
    /// Pass `include_signature = false` only for a signable-form buffer.
    /// Bytes after the record are ignored; see
    /// [`Transaction::deserialize_strict`].
    pub fn deserialize(bytes: &[u8], include_signature: bool) -> Result<Self, DecodeError> {
        let mut reader = ByteReader::new(bytes);
        Self::decode_from(&mut reader, include_signature)
            .map_err(|e| log_decode_failure(bytes.len(), reader.position(), e))
    }

    /// Like [`Transaction::deserialize`] but rejects trailing bytes.
    pub fn deserialize_strict(bytes: &[u8], include_signature: bool) -> Result<Self, DecodeError> {
        let mut reader = ByteReader::new(bytes);
        Self::decode_from(&mut reader, include_signature)
            .and_then(|tx| match reader.remaining() {
                0 => Ok(tx),
                extra => Err(DecodeError::TrailingBytes(extra)),
            })
            .map_err(|e| log_decode_failure(bytes.len(), reader.position(), e))
    }
}

fn log_decode_failure(len: usize, position: usize, error: DecodeError) -> DecodeError {
    trace!(len, position, error = %error, "transaction decode failed");
    error
}

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

impl<A: AccountAddress, D> Transaction<A, D> {
    /// Account this transaction credits: the destination, extended by the
    /// registered name when there is one.
    pub fn address(&self) -> Result<A, EncodeError> {
        self.destination.push(self.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Wire traits (signed form)
// ---------------------------------------------------------------------------

impl<A: WireEncode, D: WireEncode> WireEncode for Transaction<A, D> {
    fn encode(&self, writer: &mut ByteWriter) {
        self.encode_into(writer, true);
    }

    fn encoded_len(&self) -> usize {
        self.serialized_len(true)
    }
}

impl<A: WireDecode, D: WireDecode> WireDecode for Transaction<A, D> {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Self::decode_from(reader, true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
