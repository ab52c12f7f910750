//! Configuration section definitions.
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[index]`  | Index presence check                      |
//! | `[assets]` | Absolute asset reference audit            |

mod assets;
mod index;

pub use assets::AssetsConfig;
pub use index::IndexConfig;

use serde::{Deserialize, Serialize};

/// Check failure level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Treat failures as errors (non-zero exit).
    #[default]
    Error,
    /// Treat failures as warnings (run succeeds).
    Warn,
}
