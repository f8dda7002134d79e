//! Path manipulation utilities for rebrand-docs

use crate::config::BrandConfig;
use crate::error::{Error, Result};
use glob::Pattern;
use std::path::Path;

/// Separators that must follow the source token for a path segment to be
/// renamed. A bare token (`singleid.md`) is left alone.
const TOKEN_SEPARATORS: [char; 2] = ['-', '_'];

/// Match a path against a glob pattern
pub fn glob_match(pattern: &str, path: &str) -> Result<bool> {
    let pattern = Pattern::new(pattern).map_err(Error::Glob)?;
    Ok(pattern.matches(path))
}

/// Literal `(from, to)` pairs used to rename paths for `brand`
///
/// `singleid-` becomes `pioid-` and `singleid_` becomes `pioid_`.
pub fn rename_tokens(brand: &BrandConfig) -> Vec<(String, String)> {
    TOKEN_SEPARATORS
        .iter()
        .map(|sep| {
            (
                format!("{}{}", brand.source_token, sep),
                format!("{}{}", brand.target_token, sep),
            )
        })
        .collect()
}

/// Apply literal token replacements to a path string
///
/// Returns the new path if any token occurs, None if the path has nothing to
/// rename.
pub fn replace_tokens(path: &str, tokens: &[(String, String)]) -> Option<String> {
    if !tokens.iter().any(|(from, _)| path.contains(from.as_str())) {
        return None;
    }

    Some(
        tokens
            .iter()
            .fold(path.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to)),
    )
}

/// Number of components in a path, used to order renames deepest-first
pub fn depth(path: &Path) -> usize {
    path.components().count()
}

/// Path of `path` relative to `root`, with `/` separators
///
/// Returns None when a component is not valid UTF-8; such paths cannot be
/// renamed or matched without altering their bytes.
pub fn relative_str(path: &Path, root: &Path) -> Result<Option<String>> {
    let relative = path.strip_prefix(root).map_err(|_| Error::Path {
        message: format!(
            "Failed to make path relative: {} (root {})",
            path.display(),
            root.display()
        ),
    })?;

    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join("/")))
}
