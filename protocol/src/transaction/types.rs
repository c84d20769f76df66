//! Bounded field types for pydaten transactions.
//!
//! The name and signature fields travel behind a single-byte length, so
//! they are modelled as newtypes that refuse anything longer than 255 bytes
//! at construction. Once a value exists, writing it cannot fail.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode};
use crate::config::{MAX_NAME_LENGTH, MAX_SIGNATURE_LENGTH};

/// Wire tag for an absent name.
pub const NAME_ABSENT_TAG: u8 = 0;

/// Wire tag for a present name.
pub const NAME_PRESENT_TAG: u8 = 1;

// ---------------------------------------------------------------------------
// AsciiName
// ---------------------------------------------------------------------------

/// An ASCII string of at most 255 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AsciiName(String);

impl AsciiName {
    pub fn new(name: impl Into<String>) -> Result<Self, EncodeError> {
        let name = name.into();
        if !name.is_ascii() {
            return Err(EncodeError::NonAsciiName);
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(EncodeError::NameTooLong(name.len()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AsciiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AsciiName {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AsciiName {
    type Error = EncodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AsciiName> for String {
    fn from(name: AsciiName) -> Self {
        name.0
    }
}

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

/// Optional name registered by a transaction.
///
/// The wire tag byte encodes exactly this distinction, so the field is a
/// sum type rather than an `Option<String>` that could hold unchecked text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<AsciiName>", into = "Option<AsciiName>")]
pub enum Name {
    /// Plain transfer, no name registration.
    #[default]
    Absent,
    /// Name registration under the destination address.
    Present(AsciiName),
}

impl Name {
    /// Builds a present name, validating it.
    pub fn present(name: impl Into<String>) -> Result<Self, EncodeError> {
        AsciiName::new(name).map(Self::Present)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Absent => None,
            Self::Present(name) => Some(name.as_str()),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl From<Option<AsciiName>> for Name {
    fn from(value: Option<AsciiName>) -> Self {
        match value {
            Some(name) => Self::Present(name),
            None => Self::Absent,
        }
    }
}

impl From<Name> for Option<AsciiName> {
    fn from(value: Name) -> Self {
        match value {
            Name::Absent => None,
            Name::Present(name) => Some(name),
        }
    }
}

impl WireEncode for Name {
    fn encode(&self, writer: &mut ByteWriter) {
        match self {
            Self::Absent => writer.write_u8(NAME_ABSENT_TAG),
            Self::Present(name) => {
                writer.write_u8(NAME_PRESENT_TAG);
                writer.write_u8(name.len() as u8);
                writer.write_bytes(name.as_str().as_bytes());
            }
        }
    }

    fn encoded_len(&self) -> usize {
        match self {
            Self::Absent => 1,
            Self::Present(name) => 2 + name.len(),
        }
    }
}

impl WireDecode for Name {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        match reader.read_u8()? {
            NAME_ABSENT_TAG => Ok(Self::Absent),
            NAME_PRESENT_TAG => {
                let raw = reader.read_short_bytes()?;
                if !raw.is_ascii() {
                    return Err(DecodeError::InvalidEncoding { field: "name" });
                }
                // A u8 length cannot exceed MAX_NAME_LENGTH.
                Ok(Self::Present(AsciiName(
                    String::from_utf8_lossy(raw).into_owned(),
                )))
            }
            tag => Err(DecodeError::InvalidTag(tag)),
        }
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// Raw signature bytes, at most 255 of them.
///
/// The codec does not know or care which scheme produced the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_SIGNATURE_LENGTH {
            return Err(EncodeError::SignatureTooLong(bytes.len()));
        }
        Ok(Self(bytes))
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

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl TryFrom<Vec<u8>> for Signature {
    type Error = EncodeError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = EncodeError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        hex::encode(signature.0)
    }
}

impl TryFrom<String> for Signature {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = hex::decode(&value).map_err(|e| format!("invalid signature hex: {}", e))?;
        Signature::new(bytes).map_err(|e| e.to_string())
    }
}

impl WireEncode for Signature {
    fn encode(&self, writer: &mut ByteWriter) {
        writer.write_u8(self.0.len() as u8);
        writer.write_bytes(&self.0);
    }

    fn encoded_len(&self) -> usize {
        1 + self.0.len()
    }
}

impl WireDecode for Signature {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(reader.read_short_bytes()?.to_vec()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
