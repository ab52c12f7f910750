//! Check failure taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// A single integrity check failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// The root has no index file.
    #[error("Missing index: {}", .0.display())]
    MissingIndex(PathBuf),

    /// A referenced asset resolves under neither the public dir nor the root.
    #[error("Missing asset: {path}")]
    MissingAsset {
        /// Site-relative path, leading `/` stripped.
        path: String,
    },
}
