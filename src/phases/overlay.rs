//! Phase 5: Brand Overlay
//!
//! Layers brand files on top of the synchronized tree. It runs after renaming
//! and rewriting so that brand content is never touched by the rules.
//!
//! ## Process
//!
//! 1.  **Assets and Overrides**: `brand/assets` and `brand/overrides` are
//!     merged into `<output>/assets` and `<output>/overrides`. Files at the same
//!     relative path are overwritten, other files are kept.
//!
//! 2.  **Stylesheets**: Every `*.css` directly inside `brand/assets/css` is
//!     copied flat into `<output>/css`, where the site configuration expects
//!     `extra_css`.
//!
//! 3.  **Landing Page**: `brand/index.md` replaces `<output>/index.md` when it
//!     exists.
//!
//! 4.  **Site Configuration**: `brand/mkdocs.yml` overwrites the project's
//!     `mkdocs.yml`, unless both are the same file.

use std::fs;
use std::path::Path;

use glob::Pattern;
use log::{debug, info};

use super::OverlayReport;
use crate::config::ProjectLayout;
use crate::error::{Error, Result};
use crate::filesystem;

/// Output subdirectory receiving brand assets
pub const ASSETS_DIR: &str = "assets";
/// Output subdirectory receiving theme overrides
pub const OVERRIDES_DIR: &str = "overrides";
/// Stylesheet directory, both under brand assets and in the output tree
pub const CSS_DIR: &str = "css";
/// Root landing page of the output tree
pub const INDEX_FILE: &str = "index.md";

const STYLESHEET_PATTERN: &str = "*.css";

/// Merge a brand directory into the output tree. A missing brand directory is
/// skipped.
fn merge_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        debug!("{} not found, nothing to merge", src.display());
        return Ok(0);
    }

    let copied = filesystem::copy_tree(src, dst)?;
    info!("Merged {} file(s) from {}", copied, src.display());
    Ok(copied)
}

/// Copy every stylesheet in `src` into `dst`, flat. Returns the copied names.
pub fn copy_stylesheets(src: &Path, dst: &Path) -> Result<Vec<String>> {
    if !src.is_dir() {
        debug!("{} not found, no stylesheets to copy", src.display());
        return Ok(Vec::new());
    }

    let pattern = Pattern::new(STYLESHEET_PATTERN)?;
    let mut entries = fs::read_dir(src)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    let mut copied = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.path().is_file() || !pattern.matches(&name) {
            continue;
        }

        filesystem::copy_file(&entry.path(), &dst.join(&name))?;
        info!("Copied stylesheet {} -> {}", name, dst.display());
        copied.push(name);
    }

    Ok(copied)
}

/// Copy the brand landing page over the output's root index, if present
pub fn copy_index(brand_index: &Path, output: &Path) -> Result<bool> {
    if !brand_index.is_file() {
        info!("{} not found, skipping landing page", brand_index.display());
        return Ok(false);
    }

    filesystem::copy_file(brand_index, &output.join(INDEX_FILE))?;
    info!("Copied {} -> {}", brand_index.display(), INDEX_FILE);
    Ok(true)
}

/// Overwrite the project site configuration with the brand's
///
/// Skipped when both paths resolve to the same file. A missing brand site
/// configuration is fatal.
pub fn copy_site_config(brand_site_config: &Path, site_config: &Path) -> Result<bool> {
    if !brand_site_config.is_file() {
        return Err(Error::SourceMissing {
            what: "brand site configuration".to_string(),
            path: brand_site_config.to_path_buf(),
        });
    }

    if filesystem::same_file(brand_site_config, site_config) {
        info!(
            "{} and {} are the same file, skipping",
            brand_site_config.display(),
            site_config.display()
        );
        return Ok(false);
    }

    filesystem::copy_file(brand_site_config, site_config)?;
    info!(
        "Overwrote {} with {}",
        site_config.display(),
        brand_site_config.display()
    );
    Ok(true)
}

/// Apply the whole brand overlay described by `layout`
pub fn execute(layout: &ProjectLayout) -> Result<OverlayReport> {
    let output = &layout.output;

    let assets = merge_dir(&layout.brand_assets, &output.join(ASSETS_DIR))?;
    let overrides = merge_dir(&layout.brand_overrides, &output.join(OVERRIDES_DIR))?;
    let stylesheets = copy_stylesheets(&layout.brand_assets.join(CSS_DIR), &output.join(CSS_DIR))?;
    let index_copied = copy_index(&layout.brand_index, output)?;
    let site_config_copied = copy_site_config(&layout.brand_site_config, &layout.site_config)?;

    Ok(OverlayReport {
        assets,
        overrides,
        stylesheets,
        index_copied,
        site_config_copied,
    })
}
