//! # Rules Command Implementation
//!
//! Prints the content rules of the active configuration in the order they are
//! applied to every line. Read-only: nothing on disk is touched.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use rebrand_docs::config::SyncConfig;
use rebrand_docs::rules::RuleSet;

use super::sync::resolve_root;

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Project root (defaults to the nearest ancestor holding rebrand.yaml or brand/)
    #[arg(short, long, value_name = "PATH", env = "REBRAND_DOCS_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to config file (defaults to <root>/rebrand.yaml when present)
    #[arg(short, long, value_name = "PATH", env = "REBRAND_DOCS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Render the rule listing
pub fn render(config: &SyncConfig) -> Result<String> {
    let rules = RuleSet::new(&config.brand, &config.rules)?;

    let mut out = String::new();
    for (index, rule) in rules.rules().iter().enumerate() {
        out.push_str(&format!(
            "{}. {:<13} {}\n",
            index + 1,
            rule.name(),
            rule.describe()
        ));
    }
    out.push_str(&format!("Documents: {}\n", config.documents.join(", ")));
    Ok(out)
}

/// Execute the rules command
pub fn execute(args: RulesArgs) -> Result<()> {
    let root = resolve_root(args.root)?;
    let config = SyncConfig::load(&root, args.config.as_deref())
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

    print!("{}", render(&config)?);
    Ok(())
}
