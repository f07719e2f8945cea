//! Binary framing for values that carry addresses
//!
//! Uses postcard serialization. Addresses encode as their 32 raw bytes
//! with no length prefix; the checksummed text form is only used by
//! human-readable formats.

use crate::error::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Serialize a value to canonical bytes using postcard.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    postcard::to_allocvec(value).map_err(Error::from)
}

/// Deserialize a value from canonical bytes. Trailing bytes are rejected.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let (value, rest) = postcard::take_from_bytes(bytes)?;
    if !rest.is_empty() {
        return Err(Error::InvalidLength {
            expected: bytes.len() - rest.len(),
            actual: bytes.len(),
        });
    }
    Ok(value)
}
