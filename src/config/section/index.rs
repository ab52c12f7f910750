//! `[index]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [index]
//! enable = true          # Require an index file at the project root
//! file = "index.html"    # File name looked up directly under the root
//! level = "error"        # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

use super::CheckLevel;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Enable the index presence check.
    pub enable: bool,

    /// Index file name, relative to the project root.
    pub file: String,

    /// How to treat a missing index: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            enable: true,
            file: "index.html".to_string(),
            level: CheckLevel::default(),
        }
    }
}

impl IndexConfig {
    const FILE: FieldPath = FieldPath("index.file");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.file.trim().is_empty() {
            diag.error(Self::FILE, "must not be empty");
        } else if self.file.contains(['/', '\\']) {
            diag.error(Self::FILE, "must be a file name directly under the root");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_index_config_defaults() {
        let config = test_parse_config("");
        assert!(config.index.enable);
        assert_eq!(config.index.file, "index.html");
        assert_eq!(config.index.level, CheckLevel::Error);
    }

    #[test]
    fn test_index_config_custom() {
        let config = test_parse_config("[index]\nenable = false\nlevel = \"warn\"");
        assert!(!config.index.enable);
        assert_eq!(config.index.level, CheckLevel::Warn);
    }

    #[test]
    fn test_index_validate_rejects_nested_file() {
        let config = test_parse_config("[index]\nfile = \"docs/index.html\"");
        let mut diag = ConfigDiagnostics::new();
        config.index.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
