//! Source file discovery

use codetree_core::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const SOURCE_EXTENSION: &str = "go";

static TEST_FILES: LazyLock<GlobSet> = LazyLock::new(|| glob_set(&["*_test.go"]));
static MOCK_FILES: LazyLock<GlobSet> = LazyLock::new(|| glob_set(&["*_mock.go*"]));

fn glob_set(patterns: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).expect("static glob"));
    }
    builder.build().expect("static glob set")
}

/// Which otherwise-skipped files to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub include_mocks: bool,
    pub include_tests: bool,
}

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Location on disk.
    pub path: PathBuf,
    /// Root-relative, `/`-separated path used as the graph key.
    pub key: String,
}

/// Walk `root` and return eligible Go files sorted by key.
///
/// Every directory is visited: no ignore files, no hidden-file filtering,
/// symlinks are not followed. A traversal error aborts the walk.
pub fn discover(root: &Path, options: ScanOptions) -> Result<Vec<SourceFile>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        if !is_eligible(entry.file_name(), options) {
            tracing::debug!("Skipping {}", path.display());
            continue;
        }

        files.push(SourceFile {
            key: relative_key(root, path),
            path: path.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.key.cmp(&b.key));
    tracing::info!("Discovered {} source files under {}", files.len(), root.display());
    Ok(files)
}

/// Test and mock rules, applied to the file name.
pub fn is_eligible(file_name: impl AsRef<Path>, options: ScanOptions) -> bool {
    let name = file_name.as_ref();
    if !options.include_tests && TEST_FILES.is_match(name) {
        return false;
    }
    if !options.include_mocks && MOCK_FILES.is_match(name) {
        return false;
    }
    true
}

fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let key = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if key.is_empty() {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        key
    }
}

fn walk_error(root: &Path, err: ignore::Error) -> Error {
    let path = match &err {
        ignore::Error::WithPath { path, .. } => path.clone(),
        _ => root.to_path_buf(),
    };
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    Error::io(path, source)
}
