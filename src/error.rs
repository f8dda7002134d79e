//! # Error Handling
//!
//! This module defines the centralized error type for the `rebrand-docs`
//! library. It uses `thiserror` to build one `Error` enum covering every
//! failure the pipeline can hit, each variant carrying enough context (paths,
//! messages, hints) to tell the user what went wrong.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum for all library failures.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Only fatal conditions are errors. Recoverable situations (an existing rename
//! target, a missing listing document, a missing brand index page, a site
//! configuration copied onto itself) are logged and reported by the phase that
//! meets them instead of being raised here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rebrand-docs operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be understood, or describes a rule set
    /// that cannot be applied safely.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A required input (upstream tree, brand site configuration) does not
    /// exist.
    #[error("Source not found: {what} at {}", path.display())]
    SourceMissing { what: String, path: PathBuf },

    /// An error occurred while manipulating the output tree.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// A text document could not be decoded as UTF-8.
    #[error("Document is not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
