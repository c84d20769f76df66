// Copyright (c) 2026 pydaten developers. MIT License.
// See LICENSE for details.

//! # pydaten Transaction Inspector
//!
//! Entry point for the `pydaten-tx` binary. Parses CLI arguments,
//! initializes logging, decodes the hex input with the protocol codec, and
//! prints the result on stdout.
//!
//! - `decode`      : one transaction as JSON, with hash and derived address
//! - `decode-list` : a framed transaction list as a JSON array
//! - `hash`        : content hash of a signed transaction
//! - `signable`    : the bytes a signer signs, in hex
//! - `version`     : build and wire version

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use pydaten_protocol::config::CURRENT_TX_VERSION;
use pydaten_protocol::transaction::{deserialize_list, Transaction};

use cli::{Commands, PydatenTxCli};

fn main() -> Result<()> {
    let cli = PydatenTxCli::parse();
    logging::init_logging("pydaten_tx=info,pydaten_protocol=info", cli.log_format);

    match cli.command {
        Commands::Decode(args) => decode(args),
        Commands::DecodeList(input) => decode_list(input),
        Commands::Hash(args) => hash(args),
        Commands::Signable(input) => signable(input),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn decode(args: cli::DecodeArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let include_signature = !args.unsigned;

    let tx: Transaction = if args.strict {
        Transaction::deserialize_strict(&bytes, include_signature)
    } else {
        Transaction::deserialize(&bytes, include_signature)
    }
    .context("failed to decode transaction")?;

    tracing::info!(len = bytes.len(), signed = tx.is_signed(), "transaction decoded");
    print_json(&describe(&tx)?)
}

fn decode_list(input: cli::HexInput) -> Result<()> {
    let bytes = parse_hex(&input.hex)?;
    let txs: Vec<Transaction> =
        deserialize_list(&bytes).context("failed to decode transaction list")?;

    tracing::info!(count = txs.len(), "transaction list decoded");
    let described = txs.iter().map(describe).collect::<Result<Vec<_>>>()?;
    print_json(&Value::Array(described))
}

fn hash(args: cli::HashArgs) -> Result<()> {
    let bytes = parse_hex(&args.hex)?;
    let tx: Transaction =
        Transaction::deserialize(&bytes, true).context("failed to decode transaction")?;

    println!("{}", hex::encode(tx.calculate_hash_with(args.function)));
    Ok(())
}

fn signable(input: cli::HexInput) -> Result<()> {
    let bytes = parse_hex(&input.hex)?;
    let tx: Transaction =
        Transaction::deserialize(&bytes, true).context("failed to decode transaction")?;

    println!("{}", hex::encode(tx.signable()));
    Ok(())
}

/// Serializes a transaction and appends the fields a reader usually wants
/// next to it.
fn describe(tx: &Transaction) -> Result<Value> {
    let mut value = serde_json::to_value(tx).context("failed to serialize transaction")?;
    let address = tx
        .address()
        .context("failed to derive account address")?;

    if let Value::Object(map) = &mut value {
        map.insert("hash".into(), json!(tx.hash_hex()));
        map.insert("address".into(), json!(address.to_string()));
        map.insert("size".into(), json!(tx.serialized_len(true)));
        map.insert("valid".into(), json!(tx.valid()));
    }
    Ok(value)
}

fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("input is not valid hex ({} chars)", digits.len()))
}

fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}

fn print_version() {
    println!("pydaten-tx {}", env!("CARGO_PKG_VERSION"));
    println!("transaction wire version: {}", CURRENT_TX_VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pydaten_protocol::primitives::Address;
    use pydaten_protocol::transaction::TransactionBuilder;

    fn sample() -> Transaction {
        TransactionBuilder::new(
            Address::new(vec![0xA1; 4]).unwrap(),
            Address::new(vec![0xB2; 4]).unwrap(),
        )
        .name("savings")
        .amount(500)
        .signature(vec![0x01, 0x02])
        .build()
        .unwrap()
    }

    #[test]
    fn parse_hex_accepts_prefix_and_whitespace() {
        assert_eq!(parse_hex(" 0x0a0B ").unwrap(), vec![0x0A, 0x0B]);
        assert_eq!(parse_hex("ff").unwrap(), vec![0xFF]);
        assert!(parse_hex("0xzz").is_err());
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn describe_adds_hash_and_address() {
        let tx = sample();
        let value = describe(&tx).unwrap();

        assert_eq!(value["hash"], json!(tx.hash_hex()));
        assert_eq!(value["address"], json!("b2b2b2b2/savings"));
        assert_eq!(value["amount"], json!(500));
        assert_eq!(value["valid"], json!(true));
    }
}
