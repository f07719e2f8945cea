//! Configuration for addrctl

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// addrctl - ledger address encoder and validator
#[derive(Parser, Debug, Clone)]
#[command(name = "addrctl")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log format (json or pretty)
    #[arg(long, env = "ADDRCTL_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode 32 raw bytes (64 hex chars) as a checksummed address
    Encode {
        /// Raw address bytes, hex encoded
        hex: String,
    },

    /// Decode a checksummed address to its raw bytes (hex)
    Decode {
        /// Address text (58 chars)
        address: String,
    },

    /// Validate addresses given as arguments, in a file, or on stdin
    Validate {
        /// Addresses to check
        addresses: Vec<String>,

        /// Read addresses from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Emit one JSON object per address
        #[arg(long)]
        json: bool,
    },

    /// Print the pinned test vectors as JSON
    Vectors,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log_format != "pretty" && self.log_format != "json" {
            anyhow::bail!(
                "Unknown log format '{}' (expected json or pretty)",
                self.log_format
            );
        }
        if let Command::Validate {
            addresses,
            file: Some(_),
            ..
        } = &self.command
        {
            if !addresses.is_empty() {
                anyhow::bail!("Pass addresses either as arguments or with --file, not both");
            }
        }
        Ok(())
    }

    /// Default log filter directive
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "addrctl=debug,ledger_address=debug"
        } else {
            "addrctl=info"
        }
    }
}
