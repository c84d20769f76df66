//! Length-prefixed framing for batches of transactions.
//!
//! ```text
//! count:u32 | { elem_len:u32 | elem_bytes[elem_len] } * count
//! ```
//!
//! Every element is a signed-form transaction framed with its own length,
//! so a reader can bound-check or skip an element without parsing it.

use tracing::{debug, trace};

use super::builder::Transaction;
use crate::codec::{ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode};

/// Serializes `transactions` in order, each with its signature.
///
/// # Errors
///
/// [`EncodeError::TooManyTransactions`] if the count does not fit a `u32`,
/// [`EncodeError::ElementTooLarge`] if one encoding does not.
pub fn serialize_list<A: WireEncode, D: WireEncode>(
    transactions: &[Transaction<A, D>],
) -> Result<Vec<u8>, EncodeError> {
    let count = u32::try_from(transactions.len())
        .map_err(|_| EncodeError::TooManyTransactions(transactions.len()))?;

    let capacity = 4 + transactions
        .iter()
        .map(|tx| 4 + tx.serialized_len(true))
        .sum::<usize>();
    let mut writer = ByteWriter::with_capacity(capacity);
    writer.write_u32(count);

    for tx in transactions {
        let len = tx.serialized_len(true);
        let framed_len = u32::try_from(len).map_err(|_| EncodeError::ElementTooLarge(len))?;
        writer.write_u32(framed_len);
        tx.encode(&mut writer);
    }

    trace!(count, len = writer.len(), "serialized transaction list");
    Ok(writer.into_vec())
}

/// Decodes a framed list back into transactions, preserving order.
///
/// Fails as a whole if any element fails; no partial list is returned.
/// Each element is decoded permissively, like [`Transaction::deserialize`].
pub fn deserialize_list<A: WireDecode, D: WireDecode>(
    bytes: &[u8],
) -> Result<Vec<Transaction<A, D>>, DecodeError> {
    let mut reader = ByteReader::new(bytes);
    let count = reader.read_u32()? as usize;

    // Every element costs at least its 4-byte length, so a count larger
    // than that cannot be honest.
    let mut transactions = Vec::with_capacity(count.min(reader.remaining() / 4));

    for index in 0..count {
        let element = reader
            .read_long_bytes()
            .and_then(Transaction::<A, D>::from_wire_bytes)
            .map_err(|e| {
                debug!(index, count, error = %e, "transaction list element rejected");
                DecodeError::Element {
                    index,
                    source: Box::new(e),
                }
            })?;
        transactions.push(element);
    }

    trace!(count, consumed = reader.position(), "deserialized transaction list");
    Ok(transactions)
}
