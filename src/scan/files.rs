//! Resolving the SBOM glob pattern to a concrete list of files.

use globset::GlobBuilder;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};

/// Characters that start the glob part of a pattern.
const GLOB_METACHARS: &[char] = &['*', '?', '[', '{'];

/// Resolve a glob pattern to the files it matches, sorted by path.
///
/// `*` and `?` do not cross directory separators; `**` matches recursively.
/// A pattern whose literal directory prefix does not exist resolves to an
/// empty list rather than an error, so a missing `sbom-data/` directory is
/// reported as "nothing to scan" instead of aborting the run.
///
/// # Errors
///
/// Returns [`ScanError::Pattern`] when the pattern itself is not valid glob
/// syntax.
pub fn resolve_sbom_paths(pattern: &str) -> Result<Vec<PathBuf>> {
    let (root, file_pattern) = split_pattern(pattern);

    let matcher = GlobBuilder::new(&file_pattern)
        .literal_separator(true)
        .build()
        .map_err(|err| ScanError::pattern(pattern, err.to_string()))?
        .compile_matcher();

    if !root.exists() {
        tracing::debug!(root = %root.display(), "pattern root does not exist");
        return Ok(Vec::new());
    }

    // Bound the walk to the pattern's depth unless it recurses with `**`.
    let mut walker = WalkDir::new(&root).follow_links(false);
    if !file_pattern.contains("**") {
        walker = walker.max_depth(file_pattern.split('/').count());
    }

    let strip_current_dir = root == Path::new(".");
    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if matcher.is_match(relative) {
            if strip_current_dir {
                paths.push(relative.to_path_buf());
            } else {
                paths.push(entry.into_path());
            }
        }
    }

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(paths)
}

/// Split a pattern into the literal directory to walk and the glob to match
/// beneath it: `sbom-data/*.json` becomes `sbom-data` and `*.json`.
fn split_pattern(pattern: &str) -> (PathBuf, String) {
    let Some(meta) = pattern.find(GLOB_METACHARS) else {
        // Literal path: walk its parent and match the file name exactly.
        let path = Path::new(pattern);
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .map_or_else(|| pattern.to_string(), |name| name.to_string_lossy().into_owned());
        return (root, name);
    };

    match pattern[..meta].rfind('/') {
        None => (PathBuf::from("."), pattern.to_string()),
        Some(0) => (PathBuf::from("/"), pattern[1..].to_string()),
        Some(idx) => (PathBuf::from(&pattern[..idx]), pattern[idx + 1..].to_string()),
    }
}
