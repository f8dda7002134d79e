//! On-disk filesystem helpers shared by the sync phases
//!
//! Every helper wraps `std::io::Error` into `Error::Filesystem` with the path
//! that failed, so a fatal error in the middle of a run says where it stopped.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Delete `dir` recursively if it exists, then recreate it empty
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| Error::Filesystem {
            message: format!("Failed to remove directory '{}': {}", dir.display(), e),
        })?;
    }
    create_dir_all(dir)
}

/// Create `dir` and all of its parents
pub fn create_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", dir.display(), e),
    })
}

/// Copy one file, creating the destination's parent directories
///
/// Permissions are carried over by `fs::copy`. The modification time is
/// copied on a best-effort basis.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        create_dir_all(parent)?;
    }

    fs::copy(src, dst).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            src.display(),
            dst.display(),
            e
        ),
    })?;

    if let Err(e) = copy_modified_time(src, dst) {
        log::debug!("Could not preserve mtime on {}: {}", dst.display(), e);
    }

    Ok(())
}

fn copy_modified_time(src: &Path, dst: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    fs::File::options()
        .write(true)
        .open(dst)?
        .set_modified(modified)
}

/// Recursively copy `src` into `dst` with merge semantics
///
/// Files already present in `dst` at the same relative path are overwritten;
/// everything else in `dst` is left alone. Symlinks are followed. Returns the
/// number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    create_dir_all(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .min_depth(1)
    {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(|_| Error::Path {
            message: format!("Failed to make path relative: {}", entry.path().display()),
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Every path under `root` (excluding `root` itself), in walk order
pub fn snapshot_paths(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name().min_depth(1) {
        paths.push(entry?.into_path());
    }
    Ok(paths)
}

/// Every regular file under `root`, in walk order
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Read a text document, rejecting content that is not UTF-8
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}

/// Overwrite a text document
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::Filesystem {
        message: format!("Failed to write file '{}': {}", path.display(), e),
    })
}

/// Whether two paths resolve to the same file on disk
///
/// Paths that cannot be resolved (typically because they do not exist) never
/// compare equal.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_dir_clears_content() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("docs");
        fs::create_dir_all(dir.join("old")).unwrap();
        fs::write(dir.join("old/stale.md"), "stale").unwrap();

        reset_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(fs::read_dir(&dir).unwrap().next().is_none());
    }

    #[test]
    fn test_reset_dir_creates_missing() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("a/b/docs");
        reset_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_copy_tree_nested() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        fs::create_dir_all(src.join("guide/deep")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("index.md"), "# Home").unwrap();
        fs::write(src.join("guide/deep/page.md"), "deep").unwrap();

        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.join("index.md")).unwrap(), "# Home");
        assert_eq!(
            fs::read_to_string(dst.join("guide/deep/page.md")).unwrap(),
            "deep"
        );
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_copy_tree_merges_into_existing() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("shared.css"), "new").unwrap();
        fs::write(dst.join("shared.css"), "old").unwrap();
        fs::write(dst.join("keep.css"), "keep").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("shared.css")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("keep.css")).unwrap(), "keep");
    }

    #[test]
    fn test_copy_tree_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        let binary = vec![0u8, 1, 2, 255, 128];
        fs::write(src.join("logo.png"), &binary).unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read(dst.join("logo.png")).unwrap(), binary);
    }

    #[test]
    #[cfg(unix)]
    fn test_copy_file_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("build.sh");
        fs::write(&src, "#!/bin/sh").unwrap();
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        let dst = temp_dir.path().join("out/build.sh");
        copy_file(&src, &dst).unwrap();

        let mode = fs::metadata(&dst).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_snapshot_paths_excludes_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("a/b")).unwrap();
        fs::write(temp_dir.path().join("a/b/c.md"), "").unwrap();

        let paths = snapshot_paths(temp_dir.path()).unwrap();

        assert_eq!(
            paths,
            vec![
                temp_dir.path().join("a"),
                temp_dir.path().join("a/b"),
                temp_dir.path().join("a/b/c.md"),
            ]
        );
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.md");
        fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn test_same_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, "site_name: x").unwrap();

        let indirect = temp_dir.path().join(".").join("mkdocs.yml");
        assert!(same_file(&path, &indirect));
        assert!(!same_file(&path, &temp_dir.path().join("missing.yml")));
    }
}
