//! Integration tests for the pydaten transaction wire format.
//!
//! These exercise the public API only: build, sign the signable form,
//! serialize, ship as a batch, decode, and re-derive hashes. A second
//! group swaps in stub address and payload codecs to show the transaction
//! codec only depends on the wire traits.

use ed25519_dalek::{Signer, SigningKey, Verifier};
use rand::rngs::OsRng;

use pydaten_protocol::codec::{
    ByteReader, ByteWriter, DecodeError, EncodeError, WireDecode, WireEncode,
};
use pydaten_protocol::config::{MAX_NAME_LENGTH, MAX_SIGNATURE_LENGTH};
use pydaten_protocol::primitives::{AccountAddress, Address, Data};
use pydaten_protocol::transaction::{
    deserialize_list, serialize_list, Signature, Transaction, TransactionBuilder,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn address(byte: u8) -> Address {
    Address::new(vec![byte; 32]).expect("32-byte key")
}

fn unsigned_transfer(amount: u64) -> Transaction {
    TransactionBuilder::new(address(0xA1), address(0xB2))
        .target(7)
        .fee(100)
        .amount(amount)
        .data(Data::new(b"invoice #42".to_vec()).unwrap())
        .build()
        .unwrap()
}

/// Signs the signable form with Ed25519 and attaches the 64-byte signature.
fn sign(tx: &Transaction, key: &SigningKey) -> Transaction {
    let signature = key.sign(&tx.signable());
    tx.with_signature(Signature::new(signature.to_bytes().to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// 1. Sign / ship / verify
// ---------------------------------------------------------------------------

#[test]
fn signature_over_signable_form_survives_the_wire() {
    let key = SigningKey::generate(&mut OsRng);
    let tx = sign(&unsigned_transfer(500), &key);

    let bytes = tx.serialize(true);
    let received: Transaction = Transaction::deserialize(&bytes, true).unwrap();
    assert_eq!(received, tx);

    // The receiver reproduces the signable bytes and checks them.
    let sig_bytes = received.signature().unwrap().as_bytes();
    let sig = ed25519_dalek::Signature::from_slice(sig_bytes).unwrap();
    assert!(key
        .verifying_key()
        .verify(&received.signable(), &sig)
        .is_ok());
}

#[test]
fn signing_does_not_change_signable_but_changes_hash() {
    let key = SigningKey::generate(&mut OsRng);
    let unsigned = unsigned_transfer(500);
    let signed = sign(&unsigned, &key);

    assert_eq!(unsigned.signable(), signed.signable());
    assert_ne!(unsigned.calculate_hash(), signed.calculate_hash());
}

#[test]
fn tampered_amount_breaks_verification() {
    let key = SigningKey::generate(&mut OsRng);
    let tx = sign(&unsigned_transfer(500), &key);

    let mut bytes = tx.serialize(true);
    // Walk back from the end: signature (1 + 64), data, then the u64 amount.
    let amount_offset = bytes.len() - (1 + 64) - tx.data().encoded_len() - 8;
    bytes[amount_offset + 7] ^= 0x01;

    let received: Transaction = Transaction::deserialize(&bytes, true).unwrap();
    assert_eq!(received.amount(), 501);
    let sig = ed25519_dalek::Signature::from_slice(received.signature().unwrap().as_bytes())
        .unwrap();
    assert!(key
        .verifying_key()
        .verify(&received.signable(), &sig)
        .is_err());
}

// ---------------------------------------------------------------------------
// 2. Batches
// ---------------------------------------------------------------------------

#[test]
fn batch_roundtrip_keeps_hashes() {
    let key = SigningKey::generate(&mut OsRng);
    let batch: Vec<Transaction> = (1..=5)
        .map(|amount| sign(&unsigned_transfer(amount), &key))
        .collect();

    let bytes = serialize_list(&batch).unwrap();
    let decoded: Vec<Transaction> = deserialize_list(&bytes).unwrap();

    assert_eq!(decoded, batch);
    let original: Vec<_> = batch.iter().map(Transaction::calculate_hash).collect();
    let received: Vec<_> = decoded.iter().map(Transaction::calculate_hash).collect();
    assert_eq!(original, received);
}

#[test]
fn unsigned_transactions_survive_single_and_batch_roundtrips() {
    let tx = unsigned_transfer(5);
    let single: Transaction = Transaction::deserialize(&tx.serialize(true), true).unwrap();
    assert_eq!(single, tx);

    let batch = vec![tx.clone(), unsigned_transfer(6)];
    let decoded: Vec<Transaction> = deserialize_list(&serialize_list(&batch).unwrap()).unwrap();
    assert_eq!(decoded, batch);
}

#[test]
fn batch_with_truncated_tail_is_rejected_whole() {
    let batch = vec![unsigned_transfer(1), unsigned_transfer(2)];
    let bytes = serialize_list(&batch).unwrap();

    for cut in [bytes.len() - 1, bytes.len() / 2, 5] {
        let err = deserialize_list::<Address, Data>(&bytes[..cut]).unwrap_err();
        assert!(err.is_truncated(), "cut at {} gave {:?}", cut, err);
    }
}

// ---------------------------------------------------------------------------
// 3. Boundaries
// ---------------------------------------------------------------------------

#[test]
fn maximum_name_and_signature_roundtrip() {
    let tx: Transaction = TransactionBuilder::new(address(1), address(2))
        .name("a".repeat(MAX_NAME_LENGTH))
        .signature(vec![0x5A; MAX_SIGNATURE_LENGTH])
        .build()
        .unwrap();

    let decoded: Transaction = Transaction::deserialize(&tx.serialize(true), true).unwrap();
    assert_eq!(decoded, tx);
    assert_eq!(
        decoded.address().unwrap().path(),
        &["a".repeat(MAX_NAME_LENGTH)]
    );
}

#[test]
fn oversized_fields_refused_before_encoding() {
    let long_name = TransactionBuilder::<Address, Data>::new(address(1), address(2))
        .name("a".repeat(MAX_NAME_LENGTH + 1))
        .build();
    assert_eq!(long_name.unwrap_err(), EncodeError::NameTooLong(256));

    let long_sig = TransactionBuilder::<Address, Data>::new(address(1), address(2))
        .signature(vec![0; MAX_SIGNATURE_LENGTH + 1])
        .build();
    assert_eq!(long_sig.unwrap_err(), EncodeError::SignatureTooLong(256));
}

#[test]
fn non_ascii_name_on_the_wire_is_invalid_encoding() {
    let tx: Transaction = TransactionBuilder::new(address(1), address(2))
        .name("ab")
        .build()
        .unwrap();
    let mut bytes = tx.serialize(true);
    // version(1) + target(4) + fee(8) + flag(1) + len(1) puts the name at 15.
    bytes[15] = 0xC3;

    assert_eq!(
        Transaction::<Address, Data>::deserialize(&bytes, true),
        Err(DecodeError::InvalidEncoding { field: "name" })
    );
}

// ---------------------------------------------------------------------------
// 4. Substituted collaborators
// ---------------------------------------------------------------------------

/// Fixed-width numeric account: 4 bytes, big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AccountId(u32);

impl WireEncode for AccountId {
    fn encode(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.0);
    }

    fn encoded_len(&self) -> usize {
        4
    }
}

impl WireDecode for AccountId {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        reader.read_u32().map(AccountId)
    }
}

impl AccountAddress for AccountId {
    fn push(&self, name: Option<&str>) -> Result<Self, EncodeError> {
        let offset = name.map_or(0, |n| n.bytes().map(u32::from).sum::<u32>());
        Ok(AccountId(self.0.wrapping_add(offset)))
    }
}

/// Payload framed with a single length byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Memo(Vec<u8>);

impl WireEncode for Memo {
    fn encode(&self, writer: &mut ByteWriter) {
        writer.write_u8(self.0.len() as u8);
        writer.write_bytes(&self.0);
    }

    fn encoded_len(&self) -> usize {
        1 + self.0.len()
    }
}

impl WireDecode for Memo {
    fn decode(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Memo(reader.read_short_bytes()?.to_vec()))
    }
}

#[test]
fn stub_collaborators_produce_exact_layout() {
    let tx: Transaction<AccountId, Memo> = TransactionBuilder::new(AccountId(1), AccountId(2))
        .target(7)
        .fee(100)
        .amount(500)
        .data(Memo(vec![0xEE]))
        .signature(vec![0x01, 0x02])
        .build()
        .unwrap();

    let bytes = tx.serialize(true);
    let mut expected = vec![0x01, 0, 0, 0, 7];
    expected.extend(100u64.to_be_bytes());
    expected.push(0x00);
    expected.extend([0, 0, 0, 1, 0, 0, 0, 2]);
    expected.extend(500u64.to_be_bytes());
    expected.extend([0x01, 0xEE, 0x02, 0x01, 0x02]);
    assert_eq!(bytes, expected);

    let decoded = Transaction::<AccountId, Memo>::deserialize(&bytes, true).unwrap();
    assert_eq!(decoded, tx);
}

#[test]
fn stub_address_push_is_used_for_derived_account() {
    let tx: Transaction<AccountId, Memo> = TransactionBuilder::new(AccountId(1), AccountId(100))
        .name("A")
        .build()
        .unwrap();
    assert_eq!(tx.address().unwrap(), AccountId(100 + u32::from(b'A')));
}

#[test]
fn stub_collaborator_lists_roundtrip() {
    let batch: Vec<Transaction<AccountId, Memo>> = (0..3)
        .map(|i| {
            TransactionBuilder::new(AccountId(i), AccountId(i + 1))
                .data(Memo(vec![i as u8; i as usize]))
                .signature(vec![i as u8])
                .build()
                .unwrap()
        })
        .collect();

    let bytes = serialize_list(&batch).unwrap();
    let decoded: Vec<Transaction<AccountId, Memo>> = deserialize_list(&bytes).unwrap();
    assert_eq!(decoded, batch);
}
