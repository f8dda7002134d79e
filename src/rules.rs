//! Line rewrite rules for rebranding documentation text
//!
//! Each rule is a pure `&str -> String` transformation kept in its own module.
//! A `RuleSet` holds the enabled rules in their fixed order and folds every
//! line through them:
//!
//! 1. image paths (optional, off by default)
//! 2. fixed login URL
//! 3. anchor fragments
//! 4. capitalized brand name
//! 5. lowercase brand token, unless dot-adjacent
//!
//! Every rule's output never re-matches its own trigger, so a rule set applied
//! twice gives the same text as applied once.

use crate::config::{BrandConfig, RuleOptions};
use crate::error::Result;
use regex::{Captures, Regex};

/// Image path rule - points root-relative `/images/` references at a prefix
pub mod image_paths {
    use super::*;

    /// Markdown link or image target: `(/images/...)`
    pub const MARKDOWN_PATTERN: &str = r"\(/images/([^)\s]+)\)";
    /// HTML attribute: `src="/images/..."` or `href="/images/..."`
    pub const HTML_PATTERN: &str = r#"(href|src)="/images/([^"]+)""#;

    /// Rewrite both Markdown and HTML image references in `line`
    pub fn apply(markdown: &Regex, html: &Regex, prefix: &str, line: &str) -> String {
        let line = markdown.replace_all(line, |caps: &Captures| format!("({}{})", prefix, &caps[1]));
        html.replace_all(&line, |caps: &Captures| {
            format!("{}=\"{}{}\"", &caps[1], prefix, &caps[2])
        })
        .into_owned()
    }
}

/// Fixed URL rule - swaps one exact parenthesized URL for another
pub mod fixed_url {
    /// Replace `(from)` with `(to)`. Bare occurrences without parentheses are
    /// left alone.
    pub fn apply(from: &str, to: &str, line: &str) -> String {
        line.replace(&format!("({})", from), &format!("({})", to))
    }
}

/// Anchor link rule - rewrites the brand token inside `(#fragment)` only
pub mod anchor_links {
    use super::*;

    pub const PATTERN: &str = r"\(#([^)]+)\)";

    pub fn apply(pattern: &Regex, from: &str, to: &str, line: &str) -> String {
        pattern
            .replace_all(line, |caps: &Captures| {
                format!("(#{})", caps[1].replace(from, to))
            })
            .into_owned()
    }
}

/// Brand name rule - exact-case display name replacement
pub mod brand_name {
    pub fn apply(from: &str, to: &str, line: &str) -> String {
        line.replace(from, to)
    }
}

/// Brand token rule - lowercase slug replacement guarded against dots
pub mod brand_token {
    /// Replace `from` with `to` unless the occurrence is directly preceded or
    /// followed by `.`, so domains (`singleid.jp`) and extensions
    /// (`foo.singleid`) survive.
    ///
    /// A guarded occurrence resumes the search one character later, which
    /// matters for tokens that can overlap themselves.
    pub fn apply(from: &str, to: &str, line: &str) -> String {
        if from.is_empty() {
            return line.to_string();
        }

        let bytes = line.as_bytes();
        let mut out = String::with_capacity(line.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(offset) = line[search..].find(from) {
            let start = search + offset;
            let end = start + from.len();
            let dot_before = start > 0 && bytes[start - 1] == b'.';
            let dot_after = bytes.get(end) == Some(&b'.');

            if dot_before || dot_after {
                let step = line[start..].chars().next().map_or(1, char::len_utf8);
                search = start + step;
                continue;
            }

            out.push_str(&line[copied..start]);
            out.push_str(to);
            copied = end;
            search = end;
        }

        out.push_str(&line[copied..]);
        out
    }
}

/// One configured line rule
#[derive(Debug, Clone)]
pub enum Rule {
    ImagePaths {
        markdown: Regex,
        html: Regex,
        prefix: String,
    },
    FixedUrl {
        from: String,
        to: String,
    },
    AnchorLinks {
        pattern: Regex,
        from: String,
        to: String,
    },
    BrandName {
        from: String,
        to: String,
    },
    BrandToken {
        from: String,
        to: String,
    },
}

impl Rule {
    /// Short identifier used in logs and the `rules` listing
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ImagePaths { .. } => "image-paths",
            Rule::FixedUrl { .. } => "fixed-url",
            Rule::AnchorLinks { .. } => "anchor-links",
            Rule::BrandName { .. } => "brand-name",
            Rule::BrandToken { .. } => "brand-token",
        }
    }

    /// Human readable summary of what the rule replaces
    pub fn describe(&self) -> String {
        match self {
            Rule::ImagePaths { prefix, .. } => {
                format!("(/images/…) and src/href=\"/images/…\" → {}…", prefix)
            }
            Rule::FixedUrl { from, to } => format!("({}) → ({})", from, to),
            Rule::AnchorLinks { from, to, .. } => format!("(#…{}…) → (#…{}…)", from, to),
            Rule::BrandName { from, to } => format!("{} → {}", from, to),
            Rule::BrandToken { from, to } => {
                format!("{} → {} (not next to '.')", from, to)
            }
        }
    }

    /// Apply this rule to one line
    pub fn apply(&self, line: &str) -> String {
        match self {
            Rule::ImagePaths {
                markdown,
                html,
                prefix,
            } => image_paths::apply(markdown, html, prefix, line),
            Rule::FixedUrl { from, to } => fixed_url::apply(from, to, line),
            Rule::AnchorLinks { pattern, from, to } => anchor_links::apply(pattern, from, to, line),
            Rule::BrandName { from, to } => brand_name::apply(from, to, line),
            Rule::BrandToken { from, to } => brand_token::apply(from, to, line),
        }
    }
}

/// The ordered rules applied to every line of every text document
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the rule set for `brand`, validating that it is idempotent
    pub fn new(brand: &BrandConfig, options: &RuleOptions) -> Result<Self> {
        brand.validate()?;
        options.validate()?;

        let mut rules = Vec::with_capacity(5);
        if options.enable_image_path_rewrite {
            rules.push(Rule::ImagePaths {
                markdown: Regex::new(image_paths::MARKDOWN_PATTERN)?,
                html: Regex::new(image_paths::HTML_PATTERN)?,
                prefix: options.image_prefix.clone(),
            });
        }
        rules.push(Rule::FixedUrl {
            from: brand.login_url.from.clone(),
            to: brand.login_url.to.clone(),
        });
        rules.push(Rule::AnchorLinks {
            pattern: Regex::new(anchor_links::PATTERN)?,
            from: brand.source_token.clone(),
            to: brand.anchor_token.clone(),
        });
        rules.push(Rule::BrandName {
            from: brand.source_name.clone(),
            to: brand.target_name.clone(),
        });
        rules.push(Rule::BrandToken {
            from: brand.source_token.clone(),
            to: brand.target_token.clone(),
        });

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Fold one line through every rule in order
    pub fn apply_line(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// Rewrite a whole document line by line, keeping line terminators
    pub fn apply_text(&self, text: &str) -> String {
        text.split_inclusive('\n')
            .map(|line| self.apply_line(line))
            .collect()
    }
}
