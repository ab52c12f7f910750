//! Absolute asset references and their resolution against the project root.

use std::path::{Path, PathBuf};

/// A quoted absolute-path literal found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Literal as written, including the leading `/`.
    pub literal: String,
    /// Source file the literal was found in (relative to root).
    pub source: String,
}

/// Where an asset reference was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exists under the public directory.
    Public(PathBuf),
    /// Exists directly under the project root.
    Root(PathBuf),
    /// Neither location exists.
    Missing,
}

impl AssetRef {
    pub fn new(literal: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            source: source.into(),
        }
    }

    /// Site-relative path with every leading `/` removed.
    ///
    /// `/images/logo.png` -> `images/logo.png`, `//cdn/x.js` -> `cdn/x.js`
    #[inline]
    pub fn path(&self) -> &str {
        self.literal.trim_start_matches('/')
    }

    /// `path()` rebuilt from its components, so trailing, doubled and
    /// `.` separators do not reach the filesystem (`logo.png/` -> `logo.png`).
    fn relative(&self) -> PathBuf {
        Path::new(self.path()).components().collect()
    }

    /// Resolve against `root/<public_dir>` first, then `root`.
    pub fn resolve(&self, root: &Path, public_dir: &Path) -> Resolution {
        let path = self.relative();

        let public = root.join(public_dir).join(&path);
        if public.exists() {
            return Resolution::Public(public);
        }

        let direct = root.join(&path);
        if direct.exists() {
            return Resolution::Root(direct);
        }

        Resolution::Missing
    }
}
