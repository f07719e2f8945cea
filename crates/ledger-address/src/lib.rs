//! Ledger Address Library
//!
//! This crate provides the canonical text encoding for 32-byte ledger
//! account addresses: a SHA-512/256 checksum is appended to the raw bytes
//! and the result is rendered as unpadded RFC 4648 base32 (58 characters).
//!
//! # Modules
//!
//! - [`address`]: The [`Address`] value type, encoding and parsing
//! - [`checksum`]: Digest and checksum derivation
//! - [`canonical`]: Binary (postcard) framing for values holding addresses
//! - [`test_vectors`]: Pinned vectors for cross-implementation checks
//! - [`error`]: Error types

pub mod address;
pub mod canonical;
pub mod checksum;
pub mod error;
pub mod test_vectors;

pub use address::Address;
pub use checksum::{ADDRESS_LEN, CHECKSUMMED_LEN, CHECKSUM_LEN, ENCODED_LEN};
pub use error::{Error, Result};
