//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let project = ProjectFixture::new()
//!     .with_upstream("index.md", "# SingleID")
//!     .with_brand_site_config();
//! project.command().assert().success();
//! ```

use assert_fs::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{listings, tree_contents};
    pub use super::ProjectFixture;
}

/// Listing page snippets for testing.
#[allow(dead_code)]
pub mod listings {
    /// A generated PoC guide listing with excluded and promoted items.
    pub const POC_GUIDE: &str = "\
# SingleID PoC Guide

Pick the device you want to evaluate:

* [Subgate](./subgate/)
* [Anti Spreader Switch](./anti_spreader_switch/)
* [Generic Switch](./generic_switch/)
* [TiFRONT AP](./piolink_tifront-ap/)
* [Subgate AP](./subgate_ap/)
";

    /// The same listing after the pipeline ran.
    pub const POC_GUIDE_EXPECTED: &str = "\
# PIO-ID PoC Guide

Pick the device you want to evaluate:

* [TiFRONT AP](./piolink_tifront-ap/)
* [Generic Switch](./generic_switch/)
";
}

/// Every file under `root` with its content, keyed by relative path
#[allow(dead_code)]
pub fn tree_contents(root: &Path) -> BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            (relative, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// A temporary project directory laid out the way `rebrand-docs` expects:
/// `upstream/docs/`, `brand/` and an optional `rebrand.yaml`.
pub struct ProjectFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Create an empty project.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file to the upstream documentation tree.
    pub fn with_upstream(self, path: &str, content: &str) -> Self {
        self.with_file(&format!("upstream/docs/{}", path), content)
    }

    /// Add a file to the brand overlay tree.
    pub fn with_brand(self, path: &str, content: &str) -> Self {
        self.with_file(&format!("brand/{}", path), content)
    }

    /// Add the brand site configuration every sync needs.
    pub fn with_brand_site_config(self) -> Self {
        self.with_brand("mkdocs.yml", "site_name: PIO-ID Docs\n")
    }

    /// Add a `rebrand.yaml` at the project root.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file("rebrand.yaml", content)
    }

    /// Add a file at a project-relative path.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a binary file at a project-relative path.
    pub fn with_binary_file(self, path: &str, content: &[u8]) -> Self {
        self.temp_dir
            .child(path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Project root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Output documentation tree.
    pub fn docs(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("docs")
    }

    /// Read a file of the output tree as text.
    pub fn read_doc(&self, path: &str) -> String {
        fs::read_to_string(self.docs().join(path))
            .unwrap_or_else(|e| panic!("Failed to read docs/{}: {}", path, e))
    }

    /// Create a command running in the project root with plain output.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rebrand-docs");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("REBRAND_DOCS_ROOT")
            .env_remove("REBRAND_DOCS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
