//! Phase 2: Path Rename
//!
//! Renames every file and directory of the output tree whose path contains the
//! source brand token followed by `-` or `_`.
//!
//! ## Process
//!
//! 1.  **Snapshot**: All paths under the root are collected before anything
//!     moves.
//!
//! 2.  **Order**: Paths are sorted deepest first, so children are moved before
//!     their parents and a parent rename never invalidates a pending child.
//!
//! 3.  **Move**: Each path is moved to its renamed location, creating missing
//!     parents. Moving a child creates the renamed parent directory, so by the
//!     time the old parent comes up it is usually empty and its target
//!     already exists: such an emptied directory is removed.
//!
//! An existing target is never merged into. A non-empty directory, or a file
//! whose target is a directory, is skipped with a warning. A file whose target
//! is a file replaces it.

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::RenameReport;
use crate::config::BrandConfig;
use crate::error::{Error, Result};
use crate::filesystem;
use crate::path::{depth, relative_str, rename_tokens, replace_tokens};

/// Rename brand-prefixed paths under `root`, deepest first
///
/// Only the part of each path below `root` is rewritten.
pub fn rename_tree(root: &Path, brand: &BrandConfig) -> Result<RenameReport> {
    let tokens = rename_tokens(brand);

    let mut paths = filesystem::snapshot_paths(root)?;
    // Stable: paths of equal depth keep walk order
    paths.sort_by_key(|p| Reverse(depth(p)));

    let mut report = RenameReport::default();

    for path in paths {
        let relative = match relative_str(&path, root)? {
            Some(relative) => relative,
            None => {
                warn!("Skipping rename of non-UTF-8 path: {}", path.display());
                continue;
            }
        };
        let renamed = match replace_tokens(&relative, &tokens) {
            Some(renamed) => root.join(renamed),
            None => continue,
        };

        if renamed.exists() {
            if path.is_dir() {
                if is_empty_dir(&path)? {
                    fs::remove_dir(&path).map_err(|e| Error::Filesystem {
                        message: format!(
                            "Failed to remove emptied directory '{}': {}",
                            path.display(),
                            e
                        ),
                    })?;
                    info!(
                        "Pruned emptied directory {} (content already in {})",
                        path.display(),
                        renamed.display()
                    );
                    report.pruned.push(path);
                } else {
                    warn!(
                        "Skipping rename of existing dir: {} -> {}",
                        path.display(),
                        renamed.display()
                    );
                    report.skipped.push((path, renamed));
                }
                continue;
            }

            if renamed.is_dir() {
                warn!(
                    "Skipping rename of file onto existing dir: {} -> {}",
                    path.display(),
                    renamed.display()
                );
                report.skipped.push((path, renamed));
                continue;
            }
        }

        if let Some(parent) = renamed.parent() {
            filesystem::create_dir_all(parent)?;
        }
        fs::rename(&path, &renamed).map_err(|e| Error::Filesystem {
            message: format!(
                "Failed to rename '{}' to '{}': {}",
                path.display(),
                renamed.display(),
                e
            ),
        })?;
        debug!("Renamed {} -> {}", path.display(), renamed.display());
        report.renamed.push((path, renamed));
    }

    info!(
        "Renamed {} path(s), removed {} emptied dir(s), skipped {}",
        report.renamed.len(),
        report.pruned.len(),
        report.skipped.len()
    );

    Ok(report)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
