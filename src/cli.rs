//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Rebrand Docs - Sync upstream documentation and rebrand it
#[derive(Parser, Debug)]
#[command(name = "rebrand-docs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `sync`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments of the default `sync` run, used when no subcommand is given
    #[command(flatten)]
    sync: commands::sync::SyncArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild the documentation tree from upstream and apply the brand
    Sync(commands::sync::SyncArgs),

    /// Show the content rules in the order they are applied
    Rules(commands::rules::RulesArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.effective_log_level());

        match self.command {
            Some(Commands::Sync(args)) => commands::sync::execute(args, &self.color),
            Some(Commands::Rules(args)) => commands::rules::execute(args),
            None => commands::sync::execute(self.sync, &self.color),
        }
    }

    /// Default log filter: `--quiet` limits logging to errors
    fn effective_log_level(&self) -> &str {
        let quiet = match &self.command {
            Some(Commands::Sync(args)) => args.quiet,
            Some(Commands::Rules(_)) => false,
            None => self.sync.quiet,
        };
        if quiet {
            "error"
        } else {
            &self.log_level
        }
    }
}

/// Install `env_logger`, with `RUST_LOG` taking precedence over `--log-level`
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A second initialization (e.g. in tests) is harmless
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
