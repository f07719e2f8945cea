//! Checksum derivation for ledger addresses
//!
//! The checksum is the last 4 bytes of SHA-512/256 over the 32 raw
//! address bytes. It is appended to the address before text encoding.

use crate::error::{Error, Result};
use sha2::{Digest, Sha512_256};

/// Length of a raw address. Equal to the SHA-512/256 output size.
pub const ADDRESS_LEN: usize = 32;
/// Number of digest bytes appended as checksum
pub const CHECKSUM_LEN: usize = 4;
/// Length of the checksum-appended buffer
pub const CHECKSUMMED_LEN: usize = ADDRESS_LEN + CHECKSUM_LEN;
/// Length of the unpadded base32 text form
pub const ENCODED_LEN: usize = 58;

/// SHA-512/256 digest of `bytes`.
pub fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha512_256::digest(bytes).into()
}

/// Checksum for a raw address: the trailing `CHECKSUM_LEN` bytes of its digest.
pub fn checksum(addr: &[u8; ADDRESS_LEN]) -> [u8; CHECKSUM_LEN] {
    let hashed = digest(addr);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hashed[ADDRESS_LEN - CHECKSUM_LEN..]);
    out
}

/// Build the 36-byte `addr || checksum` buffer that gets base32-encoded.
pub fn append_checksum(addr: &[u8; ADDRESS_LEN]) -> [u8; CHECKSUMMED_LEN] {
    let mut buf = [0u8; CHECKSUMMED_LEN];
    buf[..ADDRESS_LEN].copy_from_slice(addr);
    buf[ADDRESS_LEN..].copy_from_slice(&checksum(addr));
    buf
}

/// Verify that `supplied` is the checksum of `addr`.
pub fn verify_checksum(addr: &[u8; ADDRESS_LEN], supplied: &[u8]) -> Result<()> {
    let computed = checksum(addr);
    if computed[..] != *supplied {
        return Err(Error::ChecksumMismatch {
            computed: hex::encode(computed),
            transmitted: hex::encode(supplied),
        });
    }
    Ok(())
}
