//! Implementation of the phases of a documentation sync run.
//!
//! ## Overview
//!
//! A sync run follows these phases, each one working on the filesystem state
//! left by the previous one:
//! 1. Sync - Reset the output tree and copy the upstream tree into it
//! 2. Rename - Rename brand-prefixed files and directories, deepest first
//! 3. Rewrite - Apply the line rules to every text document
//! 4. Listing - Curate the generated listing page
//! 5. Overlay - Layer brand assets, landing page and site configuration on top
//!
//! The orchestrator runs them in order and collects a `SyncReport`.

use std::path::PathBuf;

pub mod listing;
pub mod orchestrator;
pub mod overlay;
pub mod rename;
pub mod rewrite;
pub mod sync;

/// What the rename phase did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenameReport {
    /// `(from, to)` pairs that were moved
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Directories whose content had already been moved into an existing
    /// target by deeper renames, and were removed once empty
    pub pruned: Vec<PathBuf>,
    /// `(from, to)` pairs left in place because the target already existed
    pub skipped: Vec<(PathBuf, PathBuf)>,
}

/// What the rewrite phase did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Text documents matched by the document patterns
    pub documents: usize,
    /// Documents whose content changed
    pub changed: usize,
}

/// What the listing phase did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The listing document does not exist in the output tree
    Missing,
    /// The listing was rewritten
    Reordered {
        /// Item lines dropped by the exclusion patterns
        removed: usize,
        /// Whether an item was moved to the front
        promoted: bool,
    },
}

/// What the overlay phase did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Files merged from the brand asset directory
    pub assets: usize,
    /// Files merged from the brand overrides directory
    pub overrides: usize,
    /// Stylesheet file names copied into the stylesheet directory
    pub stylesheets: Vec<String>,
    /// Whether the brand landing page was copied
    pub index_copied: bool,
    /// Whether the site configuration was overwritten
    pub site_config_copied: bool,
}

/// Summary of a complete sync run
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub files_copied: usize,
    pub rename: RenameReport,
    pub rewrite: RewriteReport,
    pub listing: ListingOutcome,
    pub overlay: OverlayReport,
}
