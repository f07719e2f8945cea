//! addrctl - ledger address command-line tool
//!
//! Provides:
//! - Encoding raw 32-byte addresses to their checksummed text form
//! - Decoding text addresses back to raw bytes
//! - Batch validation from arguments, files or stdin
//! - Export of the pinned cross-implementation test vectors

pub mod commands;
pub mod config;

pub use commands::{run, ValidationReport};
pub use config::{Command, Config};
