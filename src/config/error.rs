//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::plural_count;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("Project root `{0}` is not a directory")]
    RootNotDir(PathBuf),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // No #[from]: the problem list is already the whole message
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// Dotted config field path, e.g. `assets.public_dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Invalid config values, collected so every problem is reported at once.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.problems.push((field, message.into()));
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("invalid config ({}):", plural_count(self.len(), "problem"));
        write!(f, "{}", header.red().bold())?;
        for (field, message) in &self.problems {
            write!(f, "\n  {} {}", format!("{field}:").cyan(), message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
