//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::core::CheckFailure;
use crate::utils::plural_s;

/// Unified report for both checks
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Index check failure, if any.
    pub index: Option<CheckFailure>,
    /// Missing assets, grouped by the source file that references them.
    pub assets: BTreeMap<String, Vec<CheckFailure>>,
}

impl CheckReport {
    /// Record a missing index.
    pub fn set_index(&mut self, failure: CheckFailure) {
        self.index = Some(failure);
    }

    /// Add an asset failure. Repeated failures within one source are kept once.
    pub fn add_asset(&mut self, source: String, failure: CheckFailure) {
        let errors = self.assets.entry(source).or_default();
        if !errors.contains(&failure) {
            errors.push(failure);
        }
    }

    /// Count of source files with asset failures.
    pub fn asset_file_count(&self) -> usize {
        self.assets.len()
    }

    /// Total asset failure count.
    pub fn asset_error_count(&self) -> usize {
        self.assets.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.assets.is_empty()
    }

    /// Print the full report to stderr (index -> assets).
    pub fn print(&self) {
        if let Some(failure) = &self.index {
            eprintln!();
            eprintln!("{}", "index".red().bold());
            eprintln!("{} {}", "→".red(), failure);
        }

        if self.assets.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.asset_file_count();
        let error_count = self.asset_error_count();

        eprintln!(
            "{} {}",
            "assets".red().bold(),
            format!(
                "({file_count} file{}, {error_count} error{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, errs) in &self.assets {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                eprintln!("{} {}", "→".red(), e);
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = usize::from(self.index.is_some()) + self.asset_error_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
