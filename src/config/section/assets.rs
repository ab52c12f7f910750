//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! enable = true                     # Audit absolute asset references
//! public_dir = "public"             # Checked before the project root
//! extensions = [".html", ".css", ".js", ".ts", ".tsx", ".jsx"]
//! exclude = ["node_modules"]        # Directory names skipped while walking
//! level = "error"                   # Failure level: error | warn
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::CheckLevel;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Source file suffixes scanned for references.
pub const DEFAULT_EXTENSIONS: [&str; 6] = [".html", ".css", ".js", ".ts", ".tsx", ".jsx"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Enable the asset audit.
    pub enable: bool,

    /// Directory mirroring absolute asset paths (relative to root).
    pub public_dir: PathBuf,

    /// File name suffixes scanned for references.
    pub extensions: Vec<String>,

    /// Directory names skipped during the walk.
    pub exclude: Vec<String>,

    /// How to treat missing assets: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            public_dir: PathBuf::from("public"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            level: CheckLevel::default(),
        }
    }
}

impl AssetsConfig {
    const PUBLIC_DIR: FieldPath = FieldPath("assets.public_dir");
    const EXTENSIONS: FieldPath = FieldPath("assets.extensions");

    /// Whether `name` ends with one of the recognized extensions.
    #[inline]
    pub fn is_source_name(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    /// Whether a directory with this name is skipped.
    #[inline]
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.public_dir.is_absolute() {
            diag.error(
                Self::PUBLIC_DIR,
                format!("must be relative to the root, got `{}`", self.public_dir.display()),
            );
        }

        if self.extensions.is_empty() {
            diag.error(Self::EXTENSIONS, "must not be empty");
        }
        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                diag.error(
                    Self::EXTENSIONS,
                    format!("invalid extension `{ext}`, expected a dotted suffix like `.html`"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_assets_config_defaults() {
        let config = test_parse_config("");
        assert!(config.assets.enable);
        assert_eq!(config.assets.public_dir, PathBuf::from("public"));
        assert_eq!(config.assets.extensions, DEFAULT_EXTENSIONS);
        assert!(config.assets.exclude.is_empty());
        assert_eq!(config.assets.level, CheckLevel::Error);
    }

    #[test]
    fn test_assets_config_custom() {
        let config = test_parse_config(
            r#"[assets]
public_dir = "static"
extensions = [".html", ".vue"]
exclude = ["node_modules", "dist"]
level = "warn""#,
        );
        assert_eq!(config.assets.public_dir, PathBuf::from("static"));
        assert!(config.assets.is_source_name("App.vue"));
        assert!(!config.assets.is_source_name("main.js"));
        assert!(config.assets.is_excluded_dir("dist"));
        assert_eq!(config.assets.level, CheckLevel::Warn);
    }

    #[test]
    fn test_is_source_name() {
        let assets = AssetsConfig::default();
        assert!(assets.is_source_name("index.html"));
        assert!(assets.is_source_name("App.tsx"));
        assert!(assets.is_source_name("vite.config.ts"));
        assert!(!assets.is_source_name("package.json"));
        assert!(!assets.is_source_name("logo.png"));
        assert!(!assets.is_source_name("notes.md"));
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let config = test_parse_config(
            r#"[assets]
public_dir = "/srv/public"
extensions = ["html", "."]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_empty_extensions() {
        let config = test_parse_config("[assets]\nextensions = []");
        let mut diag = ConfigDiagnostics::new();
        config.assets.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
