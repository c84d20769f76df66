//! # CLI Interface
//!
//! Defines the command-line argument structure for `pydaten-tx` using
//! `clap` derive. Every subcommand takes its input as a hex string so the
//! tool can sit at the end of a pipe.

use clap::{Parser, Subcommand};

use pydaten_protocol::crypto::HashFunction;

use crate::logging::LogFormat;

/// Decode, hash, and inspect pydaten transactions.
#[derive(Parser, Debug)]
#[command(
    name = "pydaten-tx",
    about = "Inspect pydaten transactions in their wire encoding",
    version,
    propagate_version = true
)]
pub struct PydatenTxCli {
    /// Log output format for stderr: `pretty` or `json`.
    #[arg(
        long,
        global = true,
        env = "PYDATEN_LOG_FORMAT",
        default_value = "pretty",
        value_parser = parse_log_format
    )]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a single transaction and print it as JSON.
    Decode(DecodeArgs),
    /// Decode a count-prefixed transaction list and print a JSON array.
    DecodeList(HexInput),
    /// Print the content hash of a signed transaction.
    Hash(HashArgs),
    /// Print the signable form of a signed transaction in hex.
    Signable(HexInput),
    /// Print version information and exit.
    Version,
}

/// A single hex-encoded payload.
#[derive(Parser, Debug)]
pub struct HexInput {
    /// Hex-encoded bytes. A leading `0x` is accepted.
    pub hex: String,
}

/// Arguments for the `decode` subcommand.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded transaction bytes.
    pub hex: String,

    /// Input is the signable form (no signature field).
    #[arg(long)]
    pub unsigned: bool,

    /// Reject input with bytes left over after the transaction.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `hash` subcommand.
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Hex-encoded signed transaction bytes.
    pub hex: String,

    /// Hash function applied to the signed encoding.
    #[arg(long, short = 'f', default_value = "sha256")]
    pub function: HashFunction,
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    Ok(LogFormat::from_str_lossy(s))
}
