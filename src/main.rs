//! # Rebrand Docs CLI
//!
//! This is the binary entry point for the `rebrand-docs` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command and reporting top-level errors.
//!
//! The pipeline itself lives in the `rebrand_docs` library crate; the binary is
//! a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
