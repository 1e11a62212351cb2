//! String-encoded value formats.
//!
//! # Data Flow
//! ```text
//! raw document field (String)
//!     → FromStr impl in this module
//!     → validated typed value (NetworkAddress, ValidatorKey, ...)
//!     → or FormatError (mapped to a Violation by the loader)
//! ```
//!
//! # Design Decisions
//! - Parsers are pure functions; no I/O, no globals
//! - Typed values are only constructible through their parser, so an
//!   invalid instance cannot exist once built
//! - Display re-serializes to the canonical grammar; parse/display
//!   round-trips are stable

pub mod addr;
pub mod genesis;
pub mod key;

pub use addr::NetworkAddress;
pub use genesis::GenesisBlock;
pub use key::{NodeKey, SignatureScheme, ValidatorKey};

use thiserror::Error;

/// Error type shared by all format parsers.
///
/// Variants are deliberately fine-grained so tooling can tell "fix the hex"
/// apart from "wrong scheme" apart from "wrong length".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string does not match the address grammar at all.
    #[error("malformed network address: {0}")]
    InvalidAddress(String),

    /// The port parsed as a number but falls outside 0..=65535.
    #[error("port {0} is out of range 0..=65535")]
    PortOutOfRange(u64),

    /// The key string does not start with the expected role prefix.
    #[error("unrecognized key prefix, expected `{expected}:<scheme>:<hex>`")]
    UnrecognizedPrefix { expected: &'static str },

    /// The scheme tag is not in the role's allow-list.
    #[error("unsupported signature scheme `{got}` for {role} keys")]
    UnsupportedScheme { role: &'static str, got: String },

    /// Valid hex, but the decoded byte count does not match the scheme.
    #[error("wrong key length: {scheme} keys are {expected} bytes, got {got}")]
    WrongKeyLength {
        scheme: &'static str,
        expected: usize,
        got: usize,
    },

    /// Odd-length or non-hex input.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    /// A genesis block field was present but empty.
    #[error("genesis block must not be empty")]
    EmptyBlock,
}
