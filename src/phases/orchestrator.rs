//! Orchestrator for a complete sync run
//!
//! This module coordinates all phases in their fixed order. Each phase works on
//! the filesystem left by the previous one; a fatal error stops the run and
//! leaves the output tree as it was at that point.

use log::info;

use super::{listing, overlay, rename, rewrite, sync, SyncReport};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::rules::RuleSet;

/// Execute the complete sync
///
/// 1. Reset the output tree and copy the upstream tree into it
/// 2. Rename brand-prefixed paths, deepest first
/// 3. Rewrite every text document with the rule set
/// 4. Reorder the listing document
/// 5. Overlay brand assets, landing page and site configuration
///
/// The rule set is built before anything on disk changes, so an invalid brand
/// configuration fails without touching the previous output.
pub fn execute_sync(config: &SyncConfig) -> Result<SyncReport> {
    let layout = &config.layout;
    let rules = RuleSet::new(&config.brand, &config.rules)?;

    info!("1) Syncing upstream tree");
    let files_copied = sync::reset_and_copy(&layout.upstream, &layout.output)?;

    info!("2) Renaming brand-prefixed paths (deepest first)");
    let rename = rename::rename_tree(&layout.output, &config.brand)?;

    info!("3) Rewriting text documents");
    let rewrite = rewrite::execute(&layout.output, &config.documents, &rules)?;

    info!("4) Reordering {}", config.listing.path.display());
    let listing = listing::execute(&layout.output, &config.listing)?;

    info!("5) Applying brand overlay");
    let overlay = overlay::execute(layout)?;

    info!("Sync complete");

    Ok(SyncReport {
        files_copied,
        rename,
        rewrite,
        listing,
        overlay,
    })
}
