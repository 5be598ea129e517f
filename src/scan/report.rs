//! Scan results: per-file records, aggregate totals, run outcome.

use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::model::PackageIdentifier;
use crate::parsers::Dialect;

/// Result of scanning one SBOM file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as resolved from the glob
    pub path: PathBuf,
    /// Detected dialect, or `None` when the file failed to parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    /// Number of identifiers extracted from the document
    pub package_count: usize,
    /// Matched identifiers in encounter order, duplicates retained
    pub matches: Vec<PackageIdentifier>,
    /// Parse diagnostic when the file could not be normalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// True if at least one compromised package matched in this file
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Aggregate totals over all scanned files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    /// Files the glob resolved to (parse failures included)
    pub files_scanned: usize,
    /// Files with at least one match
    pub files_with_matches: usize,
    /// Identifiers extracted across all files
    pub total_packages: usize,
    /// Match occurrences across all files, duplicates counted
    pub total_matches: usize,
    /// Distinct matched `name@version` identities
    pub distinct_matches: usize,
}

impl ScanSummary {
    /// Fold per-file results into aggregate totals.
    ///
    /// `total_matches` counts every occurrence; `distinct_matches` collapses
    /// them to unique canonical identities so a report can say "three
    /// compromised packages, pulled in five times".
    #[must_use]
    pub fn from_files(files: &[FileReport]) -> Self {
        let mut distinct: HashSet<String> = HashSet::new();
        let mut summary = Self {
            files_scanned: files.len(),
            ..Self::default()
        };

        for file in files {
            summary.total_packages += file.package_count;
            summary.total_matches += file.matches.len();
            if file.has_matches() {
                summary.files_with_matches += 1;
            }
            for package in &file.matches {
                distinct.insert(package.canonical());
            }
        }

        summary.distinct_matches = distinct.len();
        summary
    }
}

/// Overall outcome of a scan run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOutcome {
    /// The glob matched no files, distinct from a clean result so
    /// operators can tell "nothing to scan" from "scanned and clean"
    NothingScanned,
    /// Files were scanned and no compromised package matched
    Clean,
    /// At least one compromised package matched
    CompromisedFound,
}

impl ScanOutcome {
    /// Process exit code: 0 for clean (and for nothing scanned), 1 when
    /// compromised packages were found. Fatal configuration errors exit 2
    /// via [`crate::error::ScanError`].
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::NothingScanned | Self::Clean => 0,
            Self::CompromisedFound => 1,
        }
    }
}

/// Complete report for one scan run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Glob pattern the run was asked to scan
    pub pattern: String,
    /// Compromised-package list the run matched against
    pub compromised_file: PathBuf,
    /// Distinct entries loaded from the list
    pub compromised_count: usize,
    /// Per-file results, in scan order
    pub files: Vec<FileReport>,
    /// Aggregate totals
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Derive the run outcome from the aggregate.
    #[must_use]
    pub fn outcome(&self) -> ScanOutcome {
        if self.files.is_empty() {
            ScanOutcome::NothingScanned
        } else if self.summary.total_matches > 0 {
            ScanOutcome::CompromisedFound
        } else {
            ScanOutcome::Clean
        }
    }
}
