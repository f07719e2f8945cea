//! The ledger account address type
//!
//! An [`Address`] wraps exactly 32 raw bytes. Its text form is
//! `base32(addr || checksum)` with the `=` padding stripped, always
//! 58 characters long.
//!
//! ```text
//! | raw address (32 bytes) | checksum (4 bytes) |  ->  base32, unpadded (58 chars)
//! ```

use crate::checksum::{append_checksum, verify_checksum, ADDRESS_LEN, CHECKSUMMED_LEN, ENCODED_LEN};
use crate::error::{Error, Result};
use data_encoding::BASE32_NOPAD;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A 32-byte ledger account address.
///
/// Equality, ordering and hashing are over the raw bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Wrap a fixed-size buffer.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero address. Same value as `Address::default()`.
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }

    /// Copy an address out of a slice (must be exactly 32 bytes).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            debug!(len = bytes.len(), "rejected raw address");
            Error::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            }
        })?;
        Ok(Self(raw))
    }

    /// Copy of the underlying bytes.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Read-only view of the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the all-zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    /// Encode as the checksummed, unpadded base32 text form.
    ///
    /// # Panics
    ///
    /// Panics if the encoded length is not 58. That can only happen if the
    /// digest or base32 primitive is broken, never because of the input.
    pub fn encode(&self) -> String {
        let encoded = BASE32_NOPAD.encode(&append_checksum(&self.0));
        assert_eq!(
            encoded.len(),
            ENCODED_LEN,
            "unexpected address length {}",
            encoded.len()
        );
        encoded
    }

    /// Parse the text form produced by [`Address::encode`].
    ///
    /// Trailing `=` padding is tolerated. Lowercase or otherwise
    /// non-canonical base32 is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let unpadded = text.trim_end_matches('=');
        if unpadded.is_empty() {
            return Err(Error::InvalidInput("empty address string".into()));
        }

        let decoded = BASE32_NOPAD.decode(unpadded.as_bytes()).map_err(|e| {
            debug!(error = %e, "rejected address: not base32");
            Error::InvalidInput(format!("not valid base32: {}", e))
        })?;

        if decoded.len() != CHECKSUMMED_LEN {
            debug!(len = decoded.len(), "rejected address: wrong decoded length");
            return Err(Error::InvalidLength {
                expected: CHECKSUMMED_LEN,
                actual: decoded.len(),
            });
        }

        let (addr_bytes, supplied) = decoded.split_at(ADDRESS_LEN);
        let mut addr = [0u8; ADDRESS_LEN];
        addr.copy_from_slice(addr_bytes);

        verify_checksum(&addr, supplied).map_err(|e| {
            debug!(error = %e, "rejected address: bad checksum");
            e
        })?;

        Ok(Self(addr))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.encode()).finish()
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<Vec<u8>> for Address {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_slice(&bytes)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Text form for human-readable formats, raw bytes otherwise.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.encode())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            Self::parse(&text).map_err(de::Error::custom)
        } else {
            <[u8; ADDRESS_LEN]>::deserialize(deserializer).map(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ADDRESS: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";
    const FEE_SINK: &str = "Y76M3MSY6DKBRHBL7C3NNDXGS5IIMQVQVUAB6MP4XEMMGVF2QWNPL226CA";
    const FEE_SINK_HEX: &str = "c7fccdb258f0d4189c2bf8b6d68ee697508642b0ad001f31fcb918c354ba859a";

    fn raw_checksummed(text: &str) -> Vec<u8> {
        BASE32_NOPAD.decode(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_zero_address_golden() {
        let addr = Address::from_slice(&[0u8; 32]).unwrap();
        assert_eq!(addr.encode(), ZERO_ADDRESS);
        assert_eq!(Address::parse(ZERO_ADDRESS).unwrap(), addr);
        assert_eq!(addr, Address::zero());
        assert_eq!(addr, Address::default());
        assert!(addr.is_zero());
    }

    #[test]
    fn test_known_address_roundtrip() {
        let addr = Address::parse(FEE_SINK).unwrap();
        assert_eq!(hex::encode(addr.as_bytes()), FEE_SINK_HEX);
        assert_eq!(addr.encode(), FEE_SINK);
        assert_eq!(addr.to_string(), FEE_SINK);
        assert!(!addr.is_zero());
    }

    #[test]
    fn test_random_roundtrip_and_length() {
        for _ in 0..256 {
            let addr = Address::new(rand::random::<[u8; 32]>());
            let text = addr.encode();
            assert_eq!(text.len(), ENCODED_LEN);
            assert_eq!(Address::parse(&text).unwrap(), addr);
        }
    }

    #[test]
    fn test_from_slice_rejects_bad_length() {
        for len in [0usize, 1, 31, 33, 36, 64] {
            let bytes = vec![7u8; len];
            match Address::from_slice(&bytes) {
                Err(Error::InvalidLength { expected, actual }) => {
                    assert_eq!(expected, 32);
                    assert_eq!(actual, len);
                }
                other => panic!("len {}: expected InvalidLength, got {:?}", len, other),
            }
            assert!(Address::try_from(bytes).is_err());
        }
    }

    #[test]
    fn test_to_bytes_is_a_copy() {
        let addr = Address::new([5u8; 32]);
        let mut bytes = addr.to_bytes();
        bytes[0] = 0xff;
        assert_eq!(addr.as_bytes()[0], 5);
        assert_eq!(addr, Address::new([5u8; 32]));
    }

    #[test]
    fn test_equality() {
        let a = Address::from_slice(&[9u8; 32]).unwrap();
        let b = Address::try_from(&[9u8; 32][..]).unwrap();
        assert_eq!(a, b);

        let mut other = [9u8; 32];
        other[31] = 8;
        assert_ne!(a, Address::from(other));
    }

    #[test]
    fn test_address_bit_flip_is_checksum_mismatch() {
        let addr = Address::parse(FEE_SINK).unwrap();
        let original = raw_checksummed(FEE_SINK);

        for byte in 0..ADDRESS_LEN {
            for bit in 0..8 {
                let mut corrupted = original.clone();
                corrupted[byte] ^= 1 << bit;
                let text = BASE32_NOPAD.encode(&corrupted);
                assert!(
                    matches!(Address::parse(&text), Err(Error::ChecksumMismatch { .. })),
                    "flip byte {} bit {} not detected",
                    byte,
                    bit
                );
            }
        }
        assert_eq!(addr.encode(), FEE_SINK);
    }

    #[test]
    fn test_checksum_bit_flip_is_checksum_mismatch() {
        let original = raw_checksummed(ZERO_ADDRESS);
        for byte in ADDRESS_LEN..CHECKSUMMED_LEN {
            let mut corrupted = original.clone();
            corrupted[byte] ^= 0x01;
            let text = BASE32_NOPAD.encode(&corrupted);
            assert!(matches!(
                Address::parse(&text),
                Err(Error::ChecksumMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_parse_wrong_decoded_length() {
        let short = BASE32_NOPAD.encode(&[0u8; 35]);
        match Address::parse(&short) {
            Err(Error::InvalidLength { expected, actual }) => {
                assert_eq!(expected, 36);
                assert_eq!(actual, 35);
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }

        let long = BASE32_NOPAD.encode(&[0u8; 40]);
        assert!(matches!(
            Address::parse(&long),
            Err(Error::InvalidLength { actual: 40, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(matches!(Address::parse(""), Err(Error::InvalidInput(_))));
        assert!(matches!(Address::parse("===="), Err(Error::InvalidInput(_))));
        assert!(matches!(
            Address::parse("not an address!"),
            Err(Error::InvalidInput(_))
        ));
        // '1' and '8' are outside the base32 alphabet
        let bad = ZERO_ADDRESS.replacen('A', "1", 1);
        assert!(matches!(Address::parse(&bad), Err(Error::InvalidInput(_))));
        assert!(matches!(
            Address::parse(&FEE_SINK.to_lowercase()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_nonzero_trailing_bits() {
        // last char carries 2 unused bits; 'R' sets one of them
        let text = format!("{}R", &ZERO_ADDRESS[..ENCODED_LEN - 1]);
        assert!(matches!(Address::parse(&text), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_parse_tolerates_padding() {
        let padded = format!("{}======", FEE_SINK);
        assert_eq!(padded.len(), 64);
        assert_eq!(
            Address::parse(&padded).unwrap(),
            Address::parse(FEE_SINK).unwrap()
        );
    }

    #[test]
    fn test_from_str() {
        let addr: Address = FEE_SINK.parse().unwrap();
        assert_eq!(Address::try_from(FEE_SINK).unwrap(), addr);
        assert!("garbage".parse::<Address>().is_err());
    }

    #[test]
    fn test_debug_shows_text_form() {
        let rendered = format!("{:?}", Address::zero());
        assert_eq!(rendered, format!("Address(\"{}\")", ZERO_ADDRESS));
    }

    #[test]
    fn test_serde_json_uses_text_form() {
        let addr = Address::parse(FEE_SINK).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", FEE_SINK));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        let corrupted = format!("\"{}\"", ZERO_ADDRESS.replace("Y5HFKQ", "Y5HFKA"));
        assert!(serde_json::from_str::<Address>(&corrupted).is_err());
    }

    #[test]
    fn test_postcard_uses_raw_bytes() {
        let addr = Address::parse(FEE_SINK).unwrap();
        let bytes = postcard::to_allocvec(&addr).unwrap();
        assert_eq!(bytes, addr.to_bytes().to_vec());

        let back: Address = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(back, addr);
    }
}
