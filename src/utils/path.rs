//! Filesystem path normalization.

use std::path::{Path, PathBuf};

/// Normalize a project root to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// A root that does not exist is joined onto the current directory
/// when relative, so the caller can name it in an error.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}
