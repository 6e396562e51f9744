// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

use anyhow::Context as _;
use recordmsg::{AdapterConfig, RecordValue};
use tracing_subscriber::EnvFilter;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Event identifier used when none is given on the command line.
pub const DEFAULT_EVENT: &str = "urn:recordmsg:cli";

/// Install the stderr log subscriber.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the adapter configuration, or the defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<AdapterConfig> {
    match path {
        Some(path) => Ok(AdapterConfig::load(path)?),
        None => Ok(AdapterConfig::default()),
    }
}

/// Read a whole input file; `-` reads stdin.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read stdin")?;
        return Ok(data);
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// One-line description of a record value.
pub fn describe_value(value: &RecordValue) -> String {
    match value {
        RecordValue::Null => "null".to_string(),
        RecordValue::Bool(b) => b.to_string(),
        RecordValue::Int(i) => i.to_string(),
        RecordValue::UInt(u) => u.to_string(),
        RecordValue::Float(f) => f.to_string(),
        RecordValue::String(s) => format!("{s:?}"),
        RecordValue::Bytes(b) => format!("{} bytes", b.len()),
        RecordValue::Array(arr) => format!("{} items", arr.len()),
        RecordValue::Record(r) => format!("{} fields", r.len()),
    }
}
