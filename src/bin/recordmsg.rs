// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # recordmsg CLI
//!
//! Decode and re-encode record payloads through the record adapters.
//!
//! ## Usage
//!
//! ```sh
//! # Show the fields of a payload
//! recordmsg inspect payload.json --type application/json
//!
//! # Re-encode a payload, indented
//! recordmsg convert payload.json out.json --from application/json --pretty
//!
//! # Read from stdin, use adapter settings from a file
//! cat payload.json | recordmsg --config recordmsg.toml inspect -
//! ```

mod cmd;
mod common;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use cmd::{ConvertArgs, InspectArgs};
use common::Result;

/// recordmsg - structured record adapter toolkit
///
/// Payloads are decoded with the parser registered for their media type and
/// encoded with the builder for the target media type.
#[derive(Parser, Clone)]
#[command(name = "recordmsg")]
#[command(about = "Structured record adapter toolkit for media-typed payloads", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Adapter configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Decode a payload and list its fields
    Inspect(InspectArgs),

    /// Decode a payload and encode it with another media type
    Convert(ConvertArgs),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_tracing(cli.verbose);
    let config = common::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Inspect(args) => args.run(&config),
        Commands::Convert(args) => args.run(&config),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
