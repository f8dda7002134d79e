//! Sync command implementation
//!
//! The sync command runs the full pipeline:
//! 1. Reset the output tree and copy the upstream tree
//! 2. Rename brand-prefixed paths
//! 3. Rewrite text documents
//! 4. Reorder the listing document
//! 5. Apply the brand overlay
//!
//! Running `rebrand-docs` without a subcommand is the same as `rebrand-docs sync`.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rebrand_docs::config::{discover_root, SyncConfig};
use rebrand_docs::output::{emoji, OutputConfig};
use rebrand_docs::phases::{orchestrator, ListingOutcome, SyncReport};

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Project root (defaults to the nearest ancestor holding rebrand.yaml or brand/)
    #[arg(short, long, value_name = "PATH", env = "REBRAND_DOCS_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to config file (defaults to <root>/rebrand.yaml when present)
    #[arg(short, long, value_name = "PATH", env = "REBRAND_DOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress the summary and all logs except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Resolve the project root from the argument or by discovery
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Ok(discover_root(&cwd))
        }
    }
}

/// Execute the sync command
pub fn execute(args: SyncArgs, color: &str) -> Result<()> {
    let start_time = Instant::now();
    let output = OutputConfig::from_env_and_flag(color);

    let root = resolve_root(args.root)?;
    let config = SyncConfig::load(&root, args.config.as_deref())
        .with_context(|| format!("Failed to load configuration for {}", root.display()))?;

    if !args.quiet {
        println!("{} Rebrand Docs Sync", emoji(&output, "🔄", "[SYNC]"));
        println!("   Project root: {}", root.display());
        println!();
    }

    match orchestrator::execute_sync(&config) {
        Ok(report) => {
            if !args.quiet {
                print_summary(&report, &output, &config, start_time.elapsed());
            }
            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Sync failed", emoji(&output, "❌", "[FAIL]"));
                println!();
            }
            Err(e.into())
        }
    }
}

fn print_summary(report: &SyncReport, output: &OutputConfig, config: &SyncConfig, elapsed: Duration) {
    println!(
        "{} Synchronized in {:.2}s",
        emoji(output, "✅", "[OK]"),
        elapsed.as_secs_f64()
    );
    println!("   {} files copied from upstream", report.files_copied);
    println!(
        "   {} paths renamed, {} skipped",
        report.rename.renamed.len(),
        report.rename.skipped.len()
    );
    for (from, to) in &report.rename.skipped {
        println!(
            "   {} kept {} ({} exists)",
            emoji(output, "⚠️", "[WARN]"),
            from.display(),
            to.display()
        );
    }
    println!(
        "   {} of {} documents rewritten",
        report.rewrite.changed, report.rewrite.documents
    );
    match report.listing {
        ListingOutcome::Missing => {
            println!("   listing {} not found", config.listing.path.display())
        }
        ListingOutcome::Reordered { removed, promoted } => println!(
            "   listing {}: {} items removed{}",
            config.listing.path.display(),
            removed,
            if promoted { ", 1 promoted" } else { "" }
        ),
    }
    if !report.overlay.stylesheets.is_empty() {
        println!("   stylesheets: {}", report.overlay.stylesheets.join(", "));
    }
    if report.overlay.site_config_copied {
        println!("   site config: {}", config.layout.site_config.display());
    }
    println!("   Output written to: {}", config.layout.output.display());
}
