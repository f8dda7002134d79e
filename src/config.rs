//! # Configuration
//!
//! This module defines the configuration value that drives a sync run. The
//! pipeline has no ambient state: `SyncConfig` is built once at startup and
//! handed by reference to every phase.
//!
//! ## Key Components
//!
//! - **`ConfigFile`**: The on-disk `rebrand.yaml` schema. Every section is
//!   optional and falls back to the built-in SingleID → PIO-ID defaults, so a
//!   project without a config file behaves exactly like one with an empty file.
//!
//! - **`LayoutConfig` / `ProjectLayout`**: Project-relative paths as written in
//!   the file, and the same paths resolved against the project root.
//!
//! - **`BrandConfig`**: Source and target brand identifiers used by the path
//!   renamer and the content rules.
//!
//! - **`RuleOptions`**: Toggles for optional content rules.
//!
//! - **`ListingConfig`**: Which listing document to curate and how.
//!
//! ## Example
//!
//! ```yaml
//! brand:
//!   source_token: singleid
//!   target_token: pioid
//! rules:
//!   enable_image_path_rewrite: true
//! listing:
//!   promote: piolink_tifront-ap
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up at the project root
pub const CONFIG_FILE_NAME: &str = "rebrand.yaml";

/// Directory whose presence marks a project root during discovery
pub const BRAND_DIR_NAME: &str = "brand";

/// Root-relative image directory rewritten by the image rule
pub const IMAGES_ROOT: &str = "/images/";

/// Project-relative locations of every input and output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Upstream documentation tree (read only)
    pub upstream: PathBuf,
    /// Output documentation tree consumed by the site generator
    pub output: PathBuf,
    /// Brand asset directory, merged into `<output>/assets`
    pub brand_assets: PathBuf,
    /// Brand theme overrides, merged into `<output>/overrides`
    pub brand_overrides: PathBuf,
    /// Brand site configuration copied over `site_config`
    pub brand_site_config: PathBuf,
    /// Brand landing page copied to `<output>/index.md`
    pub brand_index: PathBuf,
    /// Project-level site configuration read by the site generator
    pub site_config: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            upstream: PathBuf::from("upstream/docs"),
            output: PathBuf::from("docs"),
            brand_assets: PathBuf::from("brand/assets"),
            brand_overrides: PathBuf::from("brand/overrides"),
            brand_site_config: PathBuf::from("brand/mkdocs.yml"),
            brand_index: PathBuf::from("brand/index.md"),
            site_config: PathBuf::from("mkdocs.yml"),
        }
    }
}

/// A fixed URL replacement, matched only when wrapped in parentheses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UrlRemap {
    pub from: String,
    pub to: String,
}

/// Brand identifiers being migrated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    /// Lowercase slug being migrated away from (e.g. `singleid`)
    pub source_token: String,
    /// Lowercase slug being migrated to (e.g. `pioid`)
    pub target_token: String,
    /// Display name being migrated away from (e.g. `SingleID`)
    pub source_name: String,
    /// Display name being migrated to (e.g. `PIO-ID`)
    pub target_name: String,
    /// Replacement for `source_token` inside `(#fragment)` anchors
    pub anchor_token: String,
    /// Login page link swapped for the target product page
    pub login_url: UrlRemap,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            source_token: "singleid".to_string(),
            target_token: "pioid".to_string(),
            source_name: "SingleID".to_string(),
            target_name: "PIO-ID".to_string(),
            anchor_token: "pio-id".to_string(),
            login_url: UrlRemap {
                from: "https://login.singleid.jp/".to_string(),
                to: "https://www.piolink.co.jp/sec1/pioid.html".to_string(),
            },
        }
    }
}

impl BrandConfig {
    /// Check that every substitution derived from this brand can be reapplied
    /// to its own output without changing it.
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            ("source_token", &self.source_token, "target_token", &self.target_token),
            ("source_token", &self.source_token, "anchor_token", &self.anchor_token),
            ("source_name", &self.source_name, "target_name", &self.target_name),
            ("login_url.from", &self.login_url.from, "login_url.to", &self.login_url.to),
        ];

        for (from_key, from, to_key, to) in pairs {
            if from.is_empty() {
                return Err(Error::Config {
                    message: format!("brand.{} must not be empty", from_key),
                    hint: None,
                });
            }
            if to.contains(from.as_str()) {
                return Err(Error::Config {
                    message: format!(
                        "brand.{} ({:?}) contains brand.{} ({:?}), so rewriting would not be idempotent",
                        to_key, to, from_key, from
                    ),
                    hint: Some(format!("Choose a {} that does not embed {:?}", to_key, from)),
                });
            }
        }

        Ok(())
    }
}

/// Toggles for optional content rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOptions {
    /// Rewrite root-relative `/images/...` references to `image_prefix`.
    /// Needed when the site is served from a sub-path instead of a custom
    /// domain.
    pub enable_image_path_rewrite: bool,
    /// Prefix that replaces `/images/`
    pub image_prefix: String,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            enable_image_path_rewrite: false,
            image_prefix: "/pioid-docs/images/".to_string(),
        }
    }
}

impl RuleOptions {
    /// Check that the enabled optional rules can be reapplied to their own
    /// output without changing it.
    ///
    /// A prefix below `/images/` would be matched again on the next run and
    /// nest one level deeper each time.
    pub fn validate(&self) -> Result<()> {
        if self.enable_image_path_rewrite && self.image_prefix.starts_with(IMAGES_ROOT) {
            return Err(Error::Config {
                message: format!(
                    "rules.image_prefix ({:?}) starts with {:?}, so rewriting would not be idempotent",
                    self.image_prefix, IMAGES_ROOT
                ),
                hint: Some(format!(
                    "Choose a prefix outside {}, e.g. \"/pioid-docs/images/\"",
                    IMAGES_ROOT
                )),
            });
        }
        Ok(())
    }
}

/// Curation of the generated listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Listing document, relative to the output tree (after renaming)
    pub path: PathBuf,
    /// Item lines containing any of these substrings are dropped
    pub exclude: Vec<String>,
    /// The first item line containing this substring is moved to the front
    pub promote: Option<String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("pioid-pocguide/index.md"),
            exclude: vec![
                "./subgate_ap/".to_string(),
                "./subgate/".to_string(),
                "./anti_spreader_ap/".to_string(),
                "./anti_spreader_switch/".to_string(),
            ],
            promote: Some("piolink_tifront-ap".to_string()),
        }
    }
}

fn default_documents() -> Vec<String> {
    vec!["**/*.md".to_string()]
}

/// The `rebrand.yaml` schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub rules: RuleOptions,
    #[serde(default)]
    pub listing: ListingConfig,
    /// Glob patterns (relative to the output tree) selecting text documents
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            brand: BrandConfig::default(),
            rules: RuleOptions::default(),
            listing: ListingConfig::default(),
            documents: default_documents(),
        }
    }
}

/// Absolute locations of every input and output for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub upstream: PathBuf,
    pub output: PathBuf,
    pub brand_assets: PathBuf,
    pub brand_overrides: PathBuf,
    pub brand_site_config: PathBuf,
    pub brand_index: PathBuf,
    pub site_config: PathBuf,
}

impl ProjectLayout {
    /// Resolve project-relative paths against `root`. Absolute paths are kept.
    pub fn resolve(root: &Path, layout: &LayoutConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            upstream: root.join(&layout.upstream),
            output: root.join(&layout.output),
            brand_assets: root.join(&layout.brand_assets),
            brand_overrides: root.join(&layout.brand_overrides),
            brand_site_config: root.join(&layout.brand_site_config),
            brand_index: root.join(&layout.brand_index),
            site_config: root.join(&layout.site_config),
        }
    }
}

/// Everything a sync run needs, constructed once and passed to each phase
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub layout: ProjectLayout,
    pub brand: BrandConfig,
    pub rules: RuleOptions,
    pub listing: ListingConfig,
    pub documents: Vec<String>,
}

impl SyncConfig {
    /// Build a configuration from a parsed file, validating it
    pub fn from_file_config(root: &Path, file: ConfigFile) -> Result<Self> {
        file.brand.validate()?;
        file.rules.validate()?;
        for pattern in &file.documents {
            glob::Pattern::new(pattern)?;
        }

        Ok(Self {
            layout: ProjectLayout::resolve(root, &file.layout),
            brand: file.brand,
            rules: file.rules,
            listing: file.listing,
            documents: file.documents,
        })
    }

    /// Built-in configuration rooted at `root`
    pub fn with_defaults(root: &Path) -> Self {
        Self {
            layout: ProjectLayout::resolve(root, &LayoutConfig::default()),
            brand: BrandConfig::default(),
            rules: RuleOptions::default(),
            listing: ListingConfig::default(),
            documents: default_documents(),
        }
    }

    /// Load the configuration for the project at `root`.
    ///
    /// An explicit `config_path` must exist. Without one, `<root>/rebrand.yaml`
    /// is used when present and the built-in defaults otherwise.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::SourceMissing {
                        what: "configuration file".to_string(),
                        path: path.to_path_buf(),
                    });
                }
                from_file(path)?
            }
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    log::debug!("Using configuration {}", default_path.display());
                    from_file(&default_path)?
                } else {
                    log::debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
                    ConfigFile::default()
                }
            }
        };

        Self::from_file_config(root, file)
    }
}

/// Parse a `rebrand.yaml` document. An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<ConfigFile> {
    if yaml_content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str::<ConfigFile>(yaml_content).map_err(|e| {
        let message = e.to_string();
        if message.contains("unknown field") {
            Error::Config {
                message,
                hint: Some(
                    "Recognized sections are layout, brand, rules, listing and documents"
                        .to_string(),
                ),
            }
        } else {
            Error::Yaml(e)
        }
    })
}

/// Read and parse a configuration file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Find the project root for `start`.
///
/// Walks up from `start` to the first directory holding `rebrand.yaml` or a
/// `brand/` directory. Falls back to `start` when no ancestor qualifies.
pub fn discover_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join(BRAND_DIR_NAME).is_dir())
        .unwrap_or(start)
        .to_path_buf()
}
