//! Site integrity check command.
//!
//! Two independent checks run against an explicit project root:
//!
//! - **index**: the index file exists directly under the root
//! - **assets**: every quoted absolute-path literal in a source file resolves
//!   to `root/<public_dir>/<path>` or `root/<path>`

mod report;
mod scan;

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::{AssetsConfig, CheckConfig, CheckLevel, IndexConfig};
use crate::core::{AssetRef, CheckFailure, Resolution};
use crate::logger::ProgressLine;
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

use report::CheckReport;
use scan::{collect_source_files, scan_sources};

/// Check that the index file exists directly under `root`.
pub fn check_index(root: &Path, index: &IndexConfig) -> Result<(), CheckFailure> {
    let path = root.join(&index.file);
    if path.is_file() {
        Ok(())
    } else {
        Err(CheckFailure::MissingIndex(path))
    }
}

/// Outcome of one asset audit
#[derive(Debug, Default)]
pub struct AssetAudit {
    /// Source files read.
    pub files: usize,
    /// Source files skipped (unreadable or not UTF-8).
    pub skipped: usize,
    /// References checked.
    pub checked: usize,
    /// References resolving under neither location, in scan order.
    pub missing: Vec<AssetRef>,
}

impl AssetAudit {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// Failures paired with the source file that references them.
    pub fn failures(&self) -> impl Iterator<Item = (&str, CheckFailure)> {
        self.missing.iter().map(|asset| {
            (
                asset.source.as_str(),
                CheckFailure::MissingAsset {
                    path: asset.path().to_string(),
                },
            )
        })
    }
}

/// Audit every absolute asset reference in the source files under `root`.
pub fn audit_assets(root: &Path, assets: &AssetsConfig) -> AssetAudit {
    let files = collect_source_files(root, assets);

    let progress = ProgressLine::new("assets", "files", files.len());
    let scanned = scan_sources(&files, root, Some(&progress));
    progress.finish();

    let mut audit = AssetAudit {
        files: scanned.files,
        skipped: scanned.skipped,
        checked: scanned.refs.len(),
        missing: Vec::new(),
    };

    for asset in scanned.refs {
        match asset.resolve(root, &assets.public_dir) {
            Resolution::Public(path) | Resolution::Root(path) => {
                debug!("assets"; "{} -> {}", asset.literal, path.display());
            }
            Resolution::Missing => audit.missing.push(asset),
        }
    }

    audit
}

/// Run every enabled check and report the results.
pub fn run_checks(config: &CheckConfig) -> Result<()> {
    if !config.index.enable && !config.assets.enable {
        log!("check"; "no checks enabled");
        return Ok(());
    }

    let root = config.get_root();
    log!("check"; "checking {}", root.display());

    let mut report = CheckReport::default();

    if config.index.enable {
        match check_index(root, &config.index) {
            Ok(()) => log!("index"; "found {}", config.index.file),
            Err(failure) => {
                log!("index"; "{} not found", config.index.file);
                report.set_index(failure);
            }
        }
    }

    if config.assets.enable {
        let audit = audit_assets(root, &config.assets);

        if audit.skipped > 0 {
            log!("assets"; "skipped {} (unreadable or not utf-8)", plural_count(audit.skipped, "file"));
        }

        for (source, failure) in audit.failures() {
            report.add_asset(source.to_string(), failure);
        }

        if audit.is_clean() {
            log!("assets"; "all {} valid", plural_count(audit.checked, "reference"));
        } else {
            let count = report.asset_error_count();
            log!("assets"; "found {} missing asset{}", count, plural_s(count));
        }
    }

    report.print();
    print_summary(&report, config)
}

/// Print final summary and return error if any error-level check failed
fn print_summary(report: &CheckReport, config: &CheckConfig) -> Result<()> {
    if !report.is_empty() {
        eprintln!();
    }
    log!("check"; "{}", report);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if report.index.is_some() {
        let part = format!("missing {}", config.index.file);
        match config.index.level {
            CheckLevel::Error => errors.push(part),
            CheckLevel::Warn => warnings.push(part),
        }
    }

    if !report.assets.is_empty() {
        let part = format!(
            "{} with missing assets",
            plural_count(report.asset_file_count(), "file")
        );
        match config.assets.level {
            CheckLevel::Error => errors.push(part),
            CheckLevel::Warn => warnings.push(part),
        }
    }

    if !warnings.is_empty() {
        log!("warning"; "{}", warnings.join(", "));
    }

    if !errors.is_empty() {
        bail!("found {}", errors.join(", "));
    }

    Ok(())
}
