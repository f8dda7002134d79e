//! Phase 1: Tree Sync
//!
//! Produces a clean output tree that mirrors the upstream tree.
//!
//! ## Process
//!
//! 1.  **Check Source**: The upstream tree must exist. This is checked before
//!     anything is deleted, so a missing upstream never wipes the previous
//!     output.
//!
//! 2.  **Reset**: The output directory is removed recursively and recreated.
//!
//! 3.  **Copy**: Every file and directory of the upstream tree is copied into
//!     the output directory, keeping relative structure and permissions.

use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::filesystem;

/// Reset `dest_dir` and fill it with a copy of `source_dir`
///
/// Destructive: any prior content of `dest_dir` is lost. Returns the number of
/// files copied.
pub fn reset_and_copy(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.is_dir() {
        return Err(Error::SourceMissing {
            what: "upstream documentation tree".to_string(),
            path: source_dir.to_path_buf(),
        });
    }

    info!("Resetting {}", dest_dir.display());
    filesystem::reset_dir(dest_dir)?;

    info!(
        "Copying {} -> {}",
        source_dir.display(),
        dest_dir.display()
    );
    filesystem::copy_tree(source_dir, dest_dir)
}
