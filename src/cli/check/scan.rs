//! Source file scanning for absolute asset references.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use jwalk::{Parallelism, WalkDir};
use regex::Regex;

use crate::config::AssetsConfig;
use crate::core::AssetRef;
use crate::debug;
use crate::logger::ProgressLine;

/// A double- or single-quoted literal whose content starts with `/`.
static ASSET_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["'](/[^"']+)["']"#).unwrap());

/// Collect every file under `root` whose name ends with a recognized extension.
///
/// Hidden files and directories are included. Directories named in
/// `assets.exclude` are not descended into. Symlinked files are kept,
/// symlinked directories are not followed. The walk runs on the calling
/// thread and output is sorted.
pub fn collect_source_files(root: &Path, assets: &AssetsConfig) -> Vec<PathBuf> {
    let filter = assets.clone();

    WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|entry| match entry {
                Ok(e) if e.file_type().is_dir() => e
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !filter.is_excluded_dir(name)),
                _ => true,
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            let file_type = e.file_type();
            file_type.is_file() || (file_type.is_symlink() && e.path().is_file())
        })
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| assets.is_source_name(name))
        })
        .map(|e| e.path())
        .collect()
}

/// Read a source file as UTF-8 text.
///
/// Unreadable or non-UTF-8 files contribute no content.
pub fn read_source(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("assets"; "skipping {}: {}", path.display(), e);
            None
        }
    }
}

/// Extract every quoted absolute-path literal from `text`.
pub fn extract_asset_refs(text: &str, source: &str) -> Vec<AssetRef> {
    ASSET_LITERAL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| AssetRef::new(m.as_str(), source))
        .collect()
}

/// Result of scanning all source files under a root
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Source files read successfully.
    pub files: usize,
    /// Source files skipped (unreadable or not UTF-8).
    pub skipped: usize,
    /// All references found, in file order.
    pub refs: Vec<AssetRef>,
}

/// Scan `files` for asset references, labeling each with its root-relative path.
pub fn scan_sources(files: &[PathBuf], root: &Path, progress: Option<&ProgressLine>) -> ScanResult {
    let mut result = ScanResult::default();

    for file in files {
        if let Some(progress) = progress {
            progress.inc();
        }

        let Some(text) = read_source(file) else {
            result.skipped += 1;
            continue;
        };

        let source = file
            .strip_prefix(root)
            .unwrap_or(file)
            .to_string_lossy()
            .to_string();

        result.files += 1;
        result.refs.extend(extract_asset_refs(&text, &source));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn literals(text: &str) -> Vec<String> {
        extract_asset_refs(text, "test")
            .into_iter()
            .map(|r| r.literal)
            .collect()
    }

    #[test]
    fn test_extract_double_and_single_quotes() {
        assert_eq!(
            literals(r#"<img src="/logo.png"><link href='/css/site.css'>"#),
            ["/logo.png", "/css/site.css"]
        );
    }

    #[test]
    fn test_extract_ignores_relative_and_external() {
        assert!(literals(r#"<a href="about.html"></a><a href="https://x.dev/a"></a>"#).is_empty());
        assert!(literals(r#"import x from './x';"#).is_empty());
    }

    #[test]
    fn test_extract_requires_content_after_slash() {
        assert!(literals(r#"const root = "/";"#).is_empty());
        assert_eq!(literals(r#"fetch("/api/data")"#), ["/api/data"]);
    }

    #[test]
    fn test_extract_mixed_quotes_close_at_first_quote() {
        // The closing quote may differ from the opening one
        assert_eq!(literals(r#"x = "/a.png';"#), ["/a.png"]);
    }

    #[test]
    fn test_extract_spans_lines() {
        assert_eq!(literals("'/multi\nline'"), ["/multi\nline"]);
    }

    #[test]
    fn test_extract_records_source() {
        let refs = extract_asset_refs(r#"url("/bg.jpg")"#, "src/index.css");
        assert_eq!(refs, [AssetRef::new("/bg.jpg", "src/index.css")]);
    }

    #[test]
    fn test_collect_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/components")).unwrap();
        fs::write(root.join("index.html"), "").unwrap();
        fs::write(root.join("src/main.tsx"), "").unwrap();
        fs::write(root.join("src/components/Card.jsx"), "").unwrap();
        fs::write(root.join("src/index.css"), "").unwrap();
        fs::write(root.join("vite.config.ts"), "").unwrap();
        fs::write(root.join("package.json"), "").unwrap();
        fs::write(root.join("logo.png"), "").unwrap();

        let files = collect_source_files(root, &AssetsConfig::default());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(names.len(), 5);
        assert!(names.contains(&"index.html".to_string()));
        assert!(names.contains(&"src/components/Card.jsx".to_string()));
        assert!(!names.iter().any(|n| n.ends_with(".json") || n.ends_with(".png")));
    }

    #[test]
    fn test_collect_includes_hidden() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".vitepress")).unwrap();
        fs::write(dir.path().join(".vitepress/config.js"), "").unwrap();

        let files = collect_source_files(dir.path(), &AssetsConfig::default());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_collect_respects_exclude() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();

        let assets = AssetsConfig {
            exclude: vec!["node_modules".to_string()],
            ..AssetsConfig::default()
        };
        let files = collect_source_files(dir.path(), &assets);
        assert_eq!(files, [dir.path().join("app.js")]);
    }

    #[test]
    fn test_collect_skips_directories_with_source_suffix() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("chart.js")).unwrap();

        let files = collect_source_files(dir.path(), &AssetsConfig::default());
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("real/app.js"), "").unwrap();
        symlink(root.join("real/app.js"), root.join("alias.js")).unwrap();
        symlink(root.join("real"), root.join("linked")).unwrap();

        let files = collect_source_files(root, &AssetsConfig::default());
        assert_eq!(files, [root.join("alias.js"), root.join("real/app.js")]);
    }

    #[test]
    fn test_scan_skips_undecodable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.js"), [0xff, 0xfe, b'"', b'/', b'x', b'"']).unwrap();
        fs::write(dir.path().join("good.js"), r#"import "/src/app.js";"#).unwrap();

        let files = collect_source_files(dir.path(), &AssetsConfig::default());
        let result = scan_sources(&files, dir.path(), None);

        assert_eq!(result.files, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.refs, [AssetRef::new("/src/app.js", "good.js")]);
    }
}
