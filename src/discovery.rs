// src/discovery.rs
use crate::config::DiscoveryConfig;
use globset::{GlobBuilder, GlobMatcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Resolves the files the source heuristics should scan.
///
/// With no targets, walks the conventional source directories under `root`.
/// Otherwise each target is a file (taken as-is), a directory (walked), or a
/// glob pattern relative to `root`. The result is sorted and de-duplicated.
#[must_use]
pub fn discover(root: &Path, config: &DiscoveryConfig, targets: &[String]) -> Vec<PathBuf> {
    let mut files = BTreeSet::new();

    if targets.is_empty() {
        for dir in &config.source_dirs {
            let dir_path = root.join(dir);
            if dir_path.is_dir() {
                files.extend(walk_sources(&dir_path, config));
            }
        }
    } else {
        for target in targets {
            let path = Path::new(target);
            if path.is_file() {
                files.insert(path.to_path_buf());
            } else if path.is_dir() {
                files.extend(walk_sources(path, config));
            } else {
                files.extend(glob_under(root, target));
            }
        }
    }

    debug!(count = files.len(), "discovered source files");
    files.into_iter().collect()
}

/// Recursively collects files under `dir` with a recognized extension.
fn walk_sources(dir: &Path, config: &DiscoveryConfig) -> Vec<PathBuf> {
    walk_files(dir)
        .into_iter()
        .filter(|p| has_source_extension(p, &config.extensions))
        .collect()
}

fn walk_files(dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut errors = 0usize;
    for item in WalkDir::new(dir).follow_links(false) {
        match item {
            Ok(entry) if entry.file_type().is_file() => paths.push(entry.into_path()),
            Ok(_) => {}
            Err(_) => errors += 1,
        }
    }
    if errors > 0 {
        debug!(dir = %dir.display(), errors, "errors during file walk");
    }
    paths
}

fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let suffix = format!(".{}", ext.to_string_lossy());
    extensions.iter().any(|e| *e == suffix)
}

/// Matches `pattern` against paths relative to `root`. `*` stays within one
/// path component; `**` crosses directories.
fn glob_under(root: &Path, pattern: &str) -> Vec<PathBuf> {
    let matcher = match compile_glob(pattern) {
        Ok(m) => m,
        Err(e) => {
            warn!(pattern, error = %e, "ignoring invalid target pattern");
            return Vec::new();
        }
    };

    walk_files(root)
        .into_iter()
        .filter(|p| p.strip_prefix(root).is_ok_and(|rel| matcher.is_match(rel)))
        .collect()
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}
