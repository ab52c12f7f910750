//! Checker configuration management for `sitecheck.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [index] and [assets] sections
//! ├── error          # ConfigError, ConfigDiagnostics
//! └── mod.rs         # CheckConfig (this file)
//! ```
//!
//! The config file is optional. When it is missing every section falls back
//! to its defaults, which check `index.html` and scan `.html`, `.css`, `.js`,
//! `.ts`, `.tsx` and `.jsx` files against `public/` and the root.

mod error;
pub mod section;

pub use error::{ConfigDiagnostics, ConfigError, FieldPath};
pub use section::{AssetsConfig, CheckLevel, IndexConfig};

use crate::{
    cli::{CheckArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE: &str = "sitecheck.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitecheck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Index presence check settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Asset reference audit settings
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl CheckConfig {
    /// Load configuration from CLI arguments.
    ///
    /// The project root comes from the command's `ROOT` argument. Without
    /// `--config`, an optional `sitecheck.toml` in the root is used; an
    /// explicit `--config` path (relative to the root) must exist.
    pub fn load(cli: &Cli) -> Result<Self> {
        let args = cli.command.args();
        let root = crate::utils::path::normalize_path(&args.root);
        if !root.is_dir() {
            bail!(ConfigError::RootNotDir(root));
        }

        let (config_path, required) = match &cli.config {
            Some(path) => (root.join(path), true),
            None => (root.join(CONFIG_FILE), false),
        };

        let mut config = if config_path.is_file() {
            debug!("config"; "loading {}", config_path.display());
            Self::from_path(&config_path)?
        } else if required {
            bail!(ConfigError::NotFound(config_path));
        } else {
            debug!("config"; "no {}, using defaults", CONFIG_FILE);
            Self::default()
        };

        config.set_root(&root);
        config.apply_command_options(&cli.command);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Check {
                index, assets, ..
            } => {
                Self::update_option(&mut self.index.enable, index.as_ref());
                Self::update_option(&mut self.assets.enable, assets.as_ref());
            }
            // Single-check commands run exactly that check
            Commands::Index { .. } => {
                self.index.enable = true;
                self.assets.enable = false;
            }
            Commands::Assets { .. } => {
                self.index.enable = false;
                self.assets.enable = true;
            }
        }

        self.apply_check_args(command.args());
    }

    /// Apply shared check arguments from CLI.
    fn apply_check_args(&mut self, args: &CheckArgs) {
        // --warn-only sets all levels to Warn
        if args.warn_only {
            self.index.level = CheckLevel::Warn;
            self.assets.level = CheckLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors and returning them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.index.validate(&mut diag);
        self.assets.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Invalid(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CheckConfig {
    let (parsed, ignored) = CheckConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
