//! Account addresses.
//!
//! An [`Address`] is a key (the account root) plus an ordered path of ASCII
//! name segments. Registering a name under an address pushes a segment, so
//! `alice/shop` is the `shop` account owned by `alice`'s key.
//!
//! ## Wire Layout
//!
//! ```text
//! key_len:u8 | key[key_len] | segment_count:u8 | { seg_len:u8 | seg[seg_len] } * segment_count
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode};
use crate::config::{MAX_ADDRESS_KEY_LENGTH, MAX_ADDRESS_SEGMENTS, MAX_ADDRESS_SEGMENT_LENGTH};

/// Capability the transaction codec needs from its address type: wire
/// encoding plus the ability to derive a named sub-account.
pub trait AccountAddress: WireEncode + WireDecode + Clone {
    /// Returns the account reached by appending `name` to this address.
    /// `None` yields the address itself.
    fn push(&self, name: Option<&str>) -> Result<Self, EncodeError>;
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Reference address implementation: raw key bytes plus a name path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressRepr", into = "AddressRepr")]
pub struct Address {
    key: Vec<u8>,
    path: Vec<String>,
}

impl Address {
    /// Creates a root address (no path) for `key`.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self, EncodeError> {
        Self::with_path(key, Vec::new())
    }

    /// Creates an address with an explicit segment path.
    pub fn with_path(key: impl Into<Vec<u8>>, path: Vec<String>) -> Result<Self, EncodeError> {
        let key = key.into();
        if key.len() > MAX_ADDRESS_KEY_LENGTH {
            return Err(EncodeError::KeyTooLong(key.len()));
        }
        if path.len() > MAX_ADDRESS_SEGMENTS {
            return Err(EncodeError::TooManySegments(path.len()));
        }
        for segment in &path {
            check_segment(segment)?;
        }
        Ok(Self { key, path })
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns `true` if this address has no name segments.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

fn check_segment(segment: &str) -> Result<(), EncodeError> {
    if !segment.is_ascii() {
        return Err(EncodeError::NonAsciiSegment);
    }
    if segment.len() > MAX_ADDRESS_SEGMENT_LENGTH {
        return Err(EncodeError::SegmentTooLong(segment.len()));
    }
    Ok(())
}

impl AccountAddress for Address {
    fn push(&self, name: Option<&str>) -> Result<Self, EncodeError> {
        let Some(name) = name else {
            return Ok(self.clone());
        };
        check_segment(name)?;
        if self.path.len() >= MAX_ADDRESS_SEGMENTS {
            return Err(EncodeError::TooManySegments(self.path.len() + 1));
        }
        let mut path = self.path.clone();
        path.push(name.to_string());
        Ok(Self {
            key: self.key.clone(),
            path,
        })
    }
}

impl WireEncode for Address {
    fn encode(&self, writer: &mut ByteWriter) {
        // Lengths are bounded by the constructors.
        writer.write_u8(self.key.len() as u8);
        writer.write_bytes(&self.key);
        writer.write_u8(self.path.len() as u8);
        for segment in &self.path {
            writer.write_u8(segment.len() as u8);
            writer.write_bytes(segment.as_bytes());
        }
    }

    fn encoded_len(&self) -> usize {
        1 + self.key.len() + 1 + self.path.iter().map(|s| 1 + s.len()).sum::<usize>()
    }
}

impl WireDecode for Address {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let key = reader.read_short_bytes()?.to_vec();
        let count = reader.read_u8()? as usize;
        let mut path = Vec::with_capacity(count);
        for _ in 0..count {
            let raw = reader.read_short_bytes()?;
            if !raw.is_ascii() {
                return Err(DecodeError::InvalidEncoding {
                    field: "address segment",
                });
            }
            // ASCII is always valid UTF-8.
            path.push(String::from_utf8_lossy(raw).into_owned());
        }
        Ok(Self { key, path })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.key))?;
        for segment in &self.path {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

/// Human-readable form used by serde: hex key plus segment list.
#[derive(Serialize, Deserialize)]
struct AddressRepr {
    key: String,
    #[serde(default)]
    path: Vec<String>,
}

impl From<Address> for AddressRepr {
    fn from(address: Address) -> Self {
        Self {
            key: hex::encode(address.key),
            path: address.path,
        }
    }
}

impl TryFrom<AddressRepr> for Address {
    type Error = String;

    fn try_from(repr: AddressRepr) -> Result<Self, Self::Error> {
        let key = hex::decode(&repr.key).map_err(|e| format!("invalid address key: {}", e))?;
        Address::with_path(key, repr.path).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::new(vec![0xA1; 32]).unwrap()
    }

    #[test]
    fn root_address_layout() {
        let addr = Address::new(vec![0x01, 0x02]).unwrap();
        assert_eq!(addr.to_wire_bytes(), vec![0x02, 0x01, 0x02, 0x00]);
        assert_eq!(addr.encoded_len(), 4);
    }

    #[test]
    fn path_address_layout() {
        let addr = Address::with_path(vec![0xFF], vec!["ab".into(), "c".into()]).unwrap();
        assert_eq!(
            addr.to_wire_bytes(),
            vec![0x01, 0xFF, 0x02, 0x02, b'a', b'b', 0x01, b'c']
        );
        assert_eq!(addr.encoded_len(), addr.to_wire_bytes().len());
    }

    #[test]
    fn decode_consumes_exactly_its_span() {
        let addr = Address::with_path(vec![7; 20], vec!["shop".into()]).unwrap();
        let mut bytes = addr.to_wire_bytes();
        bytes.extend_from_slice(&[0xEE, 0xEE]);

        let mut reader = ByteReader::new(&bytes);
        let decoded = Address::decode(&mut reader).unwrap();
        assert_eq!(decoded, addr);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn push_appends_segment() {
        let named = alice().push(Some("shop")).unwrap();
        assert_eq!(named.path(), &["shop".to_string()]);
        assert_eq!(named.key(), alice().key());
        assert!(!named.is_root());
    }

    #[test]
    fn push_none_is_identity() {
        assert_eq!(alice().push(None).unwrap(), alice());
    }

    #[test]
    fn push_rejects_non_ascii() {
        assert_eq!(
            alice().push(Some("café")),
            Err(EncodeError::NonAsciiSegment)
        );
    }

    #[test]
    fn push_beyond_segment_limit_fails() {
        let path = vec!["x".to_string(); MAX_ADDRESS_SEGMENTS];
        let full = Address::with_path(vec![1], path).unwrap();
        assert_eq!(
            full.push(Some("y")),
            Err(EncodeError::TooManySegments(MAX_ADDRESS_SEGMENTS + 1))
        );
    }

    #[test]
    fn oversized_key_rejected() {
        assert_eq!(
            Address::new(vec![0; 256]),
            Err(EncodeError::KeyTooLong(256))
        );
    }

    #[test]
    fn decode_rejects_non_ascii_segment() {
        let bytes = [0x00, 0x01, 0x01, 0xC3];
        assert_eq!(
            Address::from_wire_bytes(&bytes),
            Err(DecodeError::InvalidEncoding {
                field: "address segment"
            })
        );
    }

    #[test]
    fn decode_truncated_key() {
        let bytes = [0x04, 0x01, 0x02];
        assert!(Address::from_wire_bytes(&bytes).unwrap_err().is_truncated());
    }

    #[test]
    fn display_is_hex_key_and_path() {
        let addr = Address::with_path(vec![0xAB, 0xCD], vec!["alice".into()]).unwrap();
        assert_eq!(addr.to_string(), "abcd/alice");
    }

    #[test]
    fn serde_roundtrip_uses_hex_key() {
        let addr = Address::with_path(vec![0xAB], vec!["inbox".into()]).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, r#"{"key":"ab","path":["inbox"]}"#);
        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, addr);
    }

    #[test]
    fn serde_rejects_invalid_segment() {
        let json = r#"{"key":"ab","path":["ünïcode"]}"#;
        assert!(serde_json::from_str::<Address>(json).is_err());
    }
}
