//! Subcommand implementations
//!
//! Results go to the supplied writer (stdout in the binary). Logging goes
//! through `tracing` so it never mixes with machine-readable output.

use crate::config::Command;
use anyhow::Context;
use ledger_address::test_vectors::generate_test_vectors;
use ledger_address::{Address, Error};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of validating one input line
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    fn check(input: &str) -> Self {
        match Address::parse(input) {
            Ok(addr) => Self {
                input: input.to_string(),
                valid: true,
                bytes_hex: Some(hex::encode(addr.as_bytes())),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                bytes_hex: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Run a subcommand. Returns `false` if any validated input was rejected.
pub fn run<W: Write>(command: &Command, out: &mut W) -> anyhow::Result<bool> {
    match command {
        Command::Encode { hex } => {
            let encoded = encode_hex(hex).with_context(|| format!("failed to encode {}", hex))?;
            writeln!(out, "{}", encoded)?;
            Ok(true)
        }
        Command::Decode { address } => {
            let addr = Address::parse(address)
                .with_context(|| format!("failed to decode {}", address))?;
            writeln!(out, "{}", hex::encode(addr.as_bytes()))?;
            Ok(true)
        }
        Command::Validate {
            addresses,
            file,
            json,
        } => {
            let inputs = match file {
                Some(path) => read_inputs_from_file(path)?,
                None if !addresses.is_empty() => addresses.clone(),
                None => {
                    debug!("reading addresses from stdin");
                    read_inputs(io::stdin().lock()).context("failed to read stdin")?
                }
            };
            let reports = validate_all(&inputs);
            write_reports(&reports, *json, out)?;
            Ok(reports.iter().all(|r| r.valid))
        }
        Command::Vectors => {
            let vectors = generate_test_vectors();
            serde_json::to_writer_pretty(&mut *out, &vectors)?;
            writeln!(out)?;
            Ok(true)
        }
    }
}

/// Encode 64 hex chars as an address string.
pub fn encode_hex(input: &str) -> ledger_address::Result<String> {
    let raw = hex::decode(input.trim())
        .map_err(|e| Error::InvalidInput(format!("not valid hex: {}", e)))?;
    Ok(Address::from_slice(&raw)?.encode())
}

/// Validate each input, logging a summary.
pub fn validate_all(inputs: &[String]) -> Vec<ValidationReport> {
    let reports: Vec<_> = inputs.iter().map(|i| ValidationReport::check(i)).collect();
    let rejected = reports.iter().filter(|r| !r.valid).count();
    if rejected > 0 {
        warn!("{} of {} addresses rejected", rejected, reports.len());
    } else {
        info!("{} addresses valid", reports.len());
    }
    reports
}

/// Collect non-blank, non-comment lines.
pub fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        inputs.push(trimmed.to_string());
    }
    Ok(inputs)
}

fn read_inputs_from_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let inputs = read_inputs(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), count = inputs.len(), "loaded addresses");
    Ok(inputs)
}

fn write_reports<W: Write>(reports: &[ValidationReport], json: bool, out: &mut W) -> anyhow::Result<()> {
    for report in reports {
        if json {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        } else if let Some(err) = &report.error {
            writeln!(out, "{}: invalid: {}", report.input, err)?;
        } else {
            writeln!(out, "{}: ok", report.input)?;
        }
    }
    Ok(())
}
