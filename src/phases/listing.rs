//! Phase 4: Listing Reorder
//!
//! Curates one generated listing page independently of the line rules. The
//! page is a header block followed by list items; a list item is a line whose
//! left-trimmed form starts with `*`. Header lines are never touched. Item
//! lines matching an exclusion pattern are dropped and the promoted item is
//! moved to the front.

use std::path::Path;

use log::{info, warn};

use super::ListingOutcome;
use crate::config::ListingConfig;
use crate::error::Result;
use crate::filesystem;

const LIST_MARKER: char = '*';

fn is_item(line: &str) -> bool {
    line.trim_start().starts_with(LIST_MARKER)
}

/// Result of reordering listing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub text: String,
    pub removed: usize,
    pub promoted: bool,
}

/// Reorder the items of a listing held in memory
///
/// Line terminators are kept as they are, except that a promoted last line
/// without a terminator gets a `\n` when other items follow it.
pub fn reorder_text(text: &str, exclude: &[String], promote: Option<&str>) -> Reordered {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let split_at = lines.iter().position(|l| is_item(l)).unwrap_or(lines.len());
    let (header, items) = lines.split_at(split_at);

    let mut kept: Vec<String> = items
        .iter()
        .filter(|line| !exclude.iter().any(|pat| line.contains(pat.as_str())))
        .map(|line| line.to_string())
        .collect();
    let removed = items.len() - kept.len();

    let mut promoted = false;
    if let Some(pattern) = promote {
        if let Some(index) = kept.iter().position(|l| l.contains(pattern)) {
            let mut line = kept.remove(index);
            if !line.ends_with('\n') && !kept.is_empty() {
                line.push('\n');
            }
            kept.insert(0, line);
            promoted = true;
        }
    }

    let mut out = header.concat();
    for line in &kept {
        out.push_str(line);
    }

    Reordered {
        text: out,
        removed,
        promoted,
    }
}

/// Reorder the listing document at `document`. A missing document is a no-op.
pub fn reorder(document: &Path, exclude: &[String], promote: Option<&str>) -> Result<ListingOutcome> {
    if !document.is_file() {
        warn!(
            "{} not found, skip reordering",
            document.display()
        );
        return Ok(ListingOutcome::Missing);
    }

    let text = filesystem::read_text(document)?;
    let reordered = reorder_text(&text, exclude, promote);
    if reordered.text != text {
        filesystem::write_text(document, &reordered.text)?;
    }

    info!(
        "Reordered {} (removed {} item(s){})",
        document.display(),
        reordered.removed,
        if reordered.promoted { ", promoted 1" } else { "" }
    );

    Ok(ListingOutcome::Reordered {
        removed: reordered.removed,
        promoted: reordered.promoted,
    })
}

/// Reorder the configured listing document of the output tree at `output`
pub fn execute(output: &Path, listing: &ListingConfig) -> Result<ListingOutcome> {
    reorder(
        &output.join(&listing.path),
        &listing.exclude,
        listing.promote.as_deref(),
    )
}
