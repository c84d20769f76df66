//! Opaque application payload carried by a transaction.
//!
//! The codec never interprets the bytes. On the wire the payload is framed
//! with a 4-byte big-endian length so it can be skipped without parsing.

use serde::{Deserialize, Serialize};

use crate::codec::{ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode};
use crate::config::MAX_DATA_LENGTH;

/// Length-prefixed opaque payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Data(Vec<u8>);

impl Data {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_DATA_LENGTH {
            return Err(EncodeError::DataTooLarge(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// An empty payload.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl WireEncode for Data {
    fn encode(&self, writer: &mut ByteWriter) {
        // Bounded by MAX_DATA_LENGTH at construction.
        writer.write_u32(self.0.len() as u32);
        writer.write_bytes(&self.0);
    }

    fn encoded_len(&self) -> usize {
        4 + self.0.len()
    }
}

impl WireDecode for Data {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(reader.read_long_bytes()?.to_vec()))
    }
}

impl From<Data> for String {
    fn from(data: Data) -> Self {
        hex::encode(data.0)
    }
}

impl TryFrom<String> for Data {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = hex::decode(&value).map_err(|e| format!("invalid data hex: {}", e))?;
        Data::new(bytes).map_err(|e| e.to_string())
    }
}
