//! # Rebrand Docs Library
//!
//! This library synchronizes an upstream documentation tree into a
//! downstream MkDocs project and rebrands it on the way: brand-prefixed files
//! and directories are renamed, product names, anchors and a login URL are
//! rewritten line by line, one generated listing page is curated, and brand
//! assets are layered on top. It backs the `rebrand-docs` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use rebrand_docs::config::{BrandConfig, RuleOptions};
//! use rebrand_docs::rules::RuleSet;
//!
//! let rules = RuleSet::new(&BrandConfig::default(), &RuleOptions::default()).unwrap();
//!
//! assert_eq!(
//!     rules.apply_line("See [SingleID](#singleid-overview) on singleid.jp"),
//!     "See [PIO-ID](#pio-id-overview) on singleid.jp"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The `SyncConfig` value built once per run
//!   from built-in defaults and an optional `rebrand.yaml`.
//! - **Rules (`rules`)**: Pure line transformations folded in a fixed order.
//! - **Phases (`phases`)**: The ordered pipeline operating on disk.
//! - **Helpers (`filesystem`, `path`)**: Tree copy, walk and path renaming.
//!
//! ## Execution Flow
//!
//! `phases::orchestrator::execute_sync` runs:
//!
//! 1.  **Sync**: Reset the output tree and copy the upstream tree into it.
//! 2.  **Rename**: Rename brand-prefixed paths, deepest first.
//! 3.  **Rewrite**: Apply the rule set to every text document.
//! 4.  **Listing**: Drop excluded items and promote one item.
//! 5.  **Overlay**: Copy brand assets, stylesheets, landing page and site
//!     configuration.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod path;
pub mod phases;
pub mod rules;

#[cfg(test)]
mod path_proptest;
#[cfg(test)]
mod rules_proptest;
