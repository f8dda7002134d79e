//! # Terminal Output
//!
//! Decides whether the sync summary may use emoji markers or must fall back to
//! plain bracketed tags such as `[OK]`.
//!
//! The `--color` flag wins when it is `always` or `never`. With `auto`, the
//! environment decides:
//! - `NO_COLOR` set (any value) disables decoration
//! - `CLICOLOR=0` disables decoration
//! - `CLICOLOR_FORCE` set to a non-zero value enables it even without a TTY
//! - `TERM=dumb` disables decoration
//! - otherwise stdout's capabilities are probed with `console`

use std::env;

/// Value of the `--color` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Always,
    Never,
    Auto,
}

impl ColorChoice {
    /// Parse a flag value. Anything unrecognized means `Auto`.
    pub fn from_flag(flag: &str) -> Self {
        match flag.to_ascii_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Resolved output decoration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether emoji markers should be printed
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve settings from the `--color` flag and the environment
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match ColorChoice::from_flag(color_flag) {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => env_allows_color(),
        };
        Self { use_color }
    }
}

fn env_allows_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// Pick the emoji marker or its plain-text fallback
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
