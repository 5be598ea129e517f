//! Scan orchestration.
//!
//! A scan run loads the compromised-package list, resolves the SBOM glob to
//! a sorted file list, extracts package identifiers from each file, matches
//! them against the list, and folds the per-file results into a
//! [`ScanReport`]. Fatal configuration problems (unreadable list, invalid
//! pattern) abort the run; anything wrong with an individual SBOM file is
//! recorded on its [`FileReport`] and the run continues.

pub mod files;
pub mod matcher;
pub mod report;

pub use report::{FileReport, ScanOutcome, ScanReport, ScanSummary};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::compromised::CompromisedSet;
use crate::error::Result;
use crate::parsers::{self, ParsedSbom};

/// Default glob for SBOM files, one JSON document per repository.
pub const DEFAULT_SBOM_GLOB: &str = "sbom-data/*.json";

/// Default compromised-package list, one `name@version` per line.
pub const DEFAULT_COMPROMISED_FILE: &str = "compromised-packages.pkg-txt";

/// Configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Glob pattern selecting the SBOM files to scan
    pub pattern: String,
    /// Path to the compromised-package list
    pub compromised_file: PathBuf,
    /// Worker threads: 1 scans sequentially, 0 uses one thread per core
    pub jobs: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_SBOM_GLOB.to_string(),
            compromised_file: PathBuf::from(DEFAULT_COMPROMISED_FILE),
            jobs: 1,
        }
    }
}

/// Progress events emitted while a scan runs.
///
/// Reporters that stream output subscribe to these; the events arrive in
/// scan order even when files are scanned in parallel.
#[derive(Debug)]
pub enum ScanEvent<'a> {
    /// Inputs are loaded and the file list is resolved
    Started {
        compromised_count: usize,
        file_count: usize,
    },
    /// One file finished scanning
    FileScanned(&'a FileReport),
}

/// Run a scan without progress reporting.
///
/// # Errors
///
/// Returns [`crate::error::ScanError`] when the compromised list cannot be
/// read or the pattern is invalid.
pub fn run_scan(config: &ScanConfig) -> Result<ScanReport> {
    run_scan_with_progress(config, |_| {})
}

/// Run a scan, emitting a [`ScanEvent`] for each stage.
///
/// # Errors
///
/// Returns [`crate::error::ScanError`] when the compromised list cannot be
/// read or the pattern is invalid.
pub fn run_scan_with_progress(
    config: &ScanConfig,
    mut progress: impl FnMut(ScanEvent<'_>),
) -> Result<ScanReport> {
    let compromised = CompromisedSet::load(&config.compromised_file)?;
    let paths = files::resolve_sbom_paths(&config.pattern)?;

    tracing::info!(
        pattern = %config.pattern,
        files = paths.len(),
        entries = compromised.len(),
        "starting scan"
    );
    progress(ScanEvent::Started {
        compromised_count: compromised.len(),
        file_count: paths.len(),
    });

    let files = if config.jobs == 1 || paths.len() < 2 {
        scan_sequential(&paths, &compromised, &mut progress)
    } else {
        scan_parallel(&paths, &compromised, config.jobs, &mut progress)
    };

    let summary = ScanSummary::from_files(&files);
    Ok(ScanReport {
        pattern: config.pattern.clone(),
        compromised_file: config.compromised_file.clone(),
        compromised_count: compromised.len(),
        files,
        summary,
    })
}

/// Scan one SBOM file against the compromised set.
///
/// Parse failures are recorded on the report rather than propagated: one
/// unreadable file must not abort the run.
#[must_use]
pub fn scan_file(path: &Path, compromised: &CompromisedSet) -> FileReport {
    match parsers::parse_sbom(path) {
        Ok(ParsedSbom { dialect, packages }) => {
            let matches = matcher::find_compromised(&packages, compromised);
            if !matches.is_empty() {
                tracing::info!(
                    path = %path.display(),
                    matches = matches.len(),
                    "compromised packages found"
                );
            }
            FileReport {
                path: path.to_path_buf(),
                dialect: Some(dialect),
                package_count: packages.len(),
                matches,
                error: None,
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to parse SBOM file");
            FileReport {
                path: path.to_path_buf(),
                dialect: None,
                package_count: 0,
                matches: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

fn scan_sequential(
    paths: &[PathBuf],
    compromised: &CompromisedSet,
    progress: &mut impl FnMut(ScanEvent<'_>),
) -> Vec<FileReport> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let file = scan_file(path, compromised);
        progress(ScanEvent::FileScanned(&file));
        reports.push(file);
    }
    reports
}

fn scan_parallel(
    paths: &[PathBuf],
    compromised: &CompromisedSet,
    jobs: usize,
    progress: &mut impl FnMut(ScanEvent<'_>),
) -> Vec<FileReport> {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool,
        Err(err) => {
            tracing::warn!(error = %err, "thread pool unavailable, scanning sequentially");
            return scan_sequential(paths, compromised, progress);
        }
    };

    // collect() on the indexed parallel iterator preserves input order
    let reports: Vec<FileReport> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| scan_file(path, compromised))
            .collect()
    });
    for file in &reports {
        progress(ScanEvent::FileScanned(file));
    }
    reports
}
