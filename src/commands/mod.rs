//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `rebrand-docs` command-line tool, one file per command.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `rebrand_docs` library.

pub mod rules;
pub mod sync;
