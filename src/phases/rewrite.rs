//! Phase 3: Content Rewrite
//!
//! Applies the line rules to every text document of the output tree. Text
//! documents are the files whose root-relative path matches one of the
//! configured glob patterns. Each document is rewritten line by line and saved
//! only when its content changed.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, info};

use super::RewriteReport;
use crate::error::Result;
use crate::filesystem;
use crate::path::relative_str;
use crate::rules::RuleSet;

/// Files under `root` whose relative path matches any of `patterns`
pub fn select_documents(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = patterns
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut documents = Vec::new();
    for file in filesystem::list_files(root)? {
        let relative = match relative_str(&file, root)? {
            Some(relative) => relative,
            None => {
                debug!("Skipping non-UTF-8 path {}", file.display());
                continue;
            }
        };
        if patterns.iter().any(|p| p.matches(&relative)) {
            documents.push(file);
        }
    }

    Ok(documents)
}

/// Rewrite one document in place. Returns whether its content changed.
pub fn rewrite(document: &Path, rules: &RuleSet) -> Result<bool> {
    let text = filesystem::read_text(document)?;
    let rewritten = rules.apply_text(&text);

    if rewritten == text {
        return Ok(false);
    }

    filesystem::write_text(document, &rewritten)?;
    debug!("Rewrote {}", document.display());
    Ok(true)
}

/// Rewrite every text document under `root`
pub fn execute(root: &Path, patterns: &[String], rules: &RuleSet) -> Result<RewriteReport> {
    let documents = select_documents(root, patterns)?;

    let mut report = RewriteReport {
        documents: documents.len(),
        changed: 0,
    };
    for document in &documents {
        if rewrite(document, rules)? {
            report.changed += 1;
        }
    }

    info!(
        "Rewrote {} of {} document(s)",
        report.changed, report.documents
    );
    Ok(report)
}
