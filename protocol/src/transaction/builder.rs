//! Transaction construction via the builder pattern.
//!
//! A [`Transaction`] has no setters. Fields are filled in by
//! [`TransactionBuilder`] (or by decoding) and validated once, in
//! [`TransactionBuilder::build`], so every value that exists can be
//! serialized without further checks.

use serde::{Deserialize, Deserializer, Serialize};

use super::types::{Name, Signature};
use crate::codec::EncodeError;
use crate::config::CURRENT_TX_VERSION;
use crate::primitives::{Address, Data};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A pydaten ledger transaction.
///
/// Generic over the address type `A` and payload type `D`; both default to
/// the crate's reference [`Address`] and [`Data`]. The codec only relies on
/// their wire traits, see [`crate::codec`].
///
/// # Canonical Byte Format
///
/// ```text
/// version:u8 | target:u32 | fee:u64 | name_flag:u8 [name_len:u8 name]
/// | source:A | destination:A | amount:u64 | data:D | [sig_len:u8 signature]
/// ```
///
/// The trailing signature is present in the signed form and omitted from
/// the signable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction<A = Address, D = Data> {
    pub(super) version: u8,
    pub(super) target: u32,
    pub(super) fee: u64,
    pub(super) name: Name,
    pub(super) source: A,
    pub(super) destination: A,
    pub(super) amount: u64,
    pub(super) data: D,
    #[serde(default, deserialize_with = "deserialize_signature")]
    pub(super) signature: Option<Signature>,
}

/// An empty signature encodes exactly like a missing one, so it is stored
/// as `None`. Keeps one in-memory value per encoding.
pub(super) fn attached(signature: Signature) -> Option<Signature> {
    Some(signature).filter(|s| !s.is_empty())
}

fn deserialize_signature<'de, De: Deserializer<'de>>(
    deserializer: De,
) -> Result<Option<Signature>, De::Error> {
    Ok(Option::<Signature>::deserialize(deserializer)?.and_then(attached))
}

impl<A, D> Transaction<A, D> {
    /// Format version tag.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Destination shard/chain identifier.
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    /// Name being registered, if this is a name registration.
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    pub fn destination(&self) -> &A {
        &self.destination
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Returns `true` if the transaction carries a signature.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Returns a copy of this transaction carrying `signature`.
    ///
    /// Typical flow: build unsigned, sign [`Transaction::signable`] with the
    /// sender's key, then attach the result here. An empty signature leaves
    /// the copy unsigned.
    pub fn with_signature(&self, signature: Signature) -> Self
    where
        A: Clone,
        D: Clone,
    {
        Self {
            signature: attached(signature),
            ..self.clone()
        }
    }

    /// Returns a copy of this transaction with the signature removed.
    pub fn without_signature(&self) -> Self
    where
        A: Clone,
        D: Clone,
    {
        Self {
            signature: None,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Transaction`] values.
///
/// # Usage
///
/// ```
/// use pydaten_protocol::primitives::{Address, Data};
/// use pydaten_protocol::transaction::TransactionBuilder;
///
/// let tx = TransactionBuilder::new(
///     Address::new(vec![0xA1; 32]).unwrap(),
///     Address::new(vec![0xB2; 32]).unwrap(),
/// )
/// .target(7)
/// .fee(100)
/// .amount(500)
/// .data(Data::new(b"memo".to_vec()).unwrap())
/// .build()
/// .unwrap();
///
/// assert!(!tx.is_signed());
/// ```
///
/// `version` defaults to [`CURRENT_TX_VERSION`]; everything numeric
/// defaults to zero.
#[derive(Debug, Clone)]
pub struct TransactionBuilder<A = Address, D = Data> {
    version: u8,
    target: u32,
    fee: u64,
    name: Option<String>,
    source: A,
    destination: A,
    amount: u64,
    data: D,
    signature: Option<Vec<u8>>,
}

impl<A, D: Default> TransactionBuilder<A, D> {
    /// Starts a transaction from `source` to `destination` with an empty
    /// payload.
    pub fn new(source: A, destination: A) -> Self {
        Self {
            version: CURRENT_TX_VERSION,
            target: 0,
            fee: 0,
            name: None,
            source,
            destination,
            amount: 0,
            data: D::default(),
            signature: None,
        }
    }
}

impl<A, D> TransactionBuilder<A, D> {
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    pub fn target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    pub fn fee(mut self, fee: u64) -> Self {
        self.fee = fee;
        self
    }

    /// Turns the transaction into a name registration.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    pub fn data(mut self, data: D) -> Self {
        self.data = data;
        self
    }

    /// Attaches a signature produced elsewhere.
    pub fn signature(mut self, signature: impl Into<Vec<u8>>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Validates the bounded fields and produces the [`Transaction`].
    ///
    /// # Errors
    ///
    /// [`EncodeError::NonAsciiName`], [`EncodeError::NameTooLong`], or
    /// [`EncodeError::SignatureTooLong`] when a field cannot fit its
    /// single-byte length prefix.
    pub fn build(self) -> Result<Transaction<A, D>, EncodeError> {
        let name = match self.name {
            Some(name) => Name::present(name)?,
            None => Name::Absent,
        };
        let signature = self
            .signature
            .map(Signature::new)
            .transpose()?
            .and_then(attached);

        Ok(Transaction {
            version: self.version,
            target: self.target,
            fee: self.fee,
            name,
            source: self.source,
            destination: self.destination,
            amount: self.amount,
            data: self.data,
            signature,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
