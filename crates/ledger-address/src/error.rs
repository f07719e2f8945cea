//! Error types for ledger addresses

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Address codec error types
#[derive(Debug, Error)]
pub enum Error {
    /// Raw input is not 32 bytes, or decoded text is not 36 bytes
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Text input is empty or not canonical base32
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Checksum carried in the text does not match the address bytes
    #[error("checksum mismatch: computed {computed} != transmitted {transmitted}")]
    ChecksumMismatch { computed: String, transmitted: String },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] postcard::Error),
}
