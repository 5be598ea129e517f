//! Compromised-package list loading.
//!
//! The list is a flat text file produced by an advisory-conversion
//! collaborator: one canonical `name@version` identifier per line, with `#`
//! comments and blank lines allowed. It is loaded once per run and read-only
//! afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScanError};
use crate::model::PackageIdentifier;

/// The set of known-compromised canonical identifiers.
///
/// Membership is exact string equality against `name@version`; lines are
/// stored verbatim after trimming, so the file author controls the precise
/// identity strings.
#[derive(Debug, Clone, Default)]
pub struct CompromisedSet {
    entries: HashSet<String>,
}

impl CompromisedSet {
    /// Load the set from a file.
    ///
    /// A missing or unreadable file is a fatal configuration error; the
    /// scan has no meaningful behavior without the list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ScanError::compromised_list(path, source))?;

        let set = Self::from_text(&text);
        tracing::debug!(
            path = %path.display(),
            entries = set.len(),
            "loaded compromised-package list"
        );
        Ok(set)
    }

    /// Build the set from list text.
    ///
    /// Lines are trimmed; blank lines and `#` comments are skipped; the
    /// remainder is inserted verbatim. Duplicate lines collapse.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Test whether a canonical `name@version` string is flagged
    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.contains(canonical)
    }

    /// Test whether a package identifier is flagged
    #[must_use]
    pub fn contains_package(&self, package: &PackageIdentifier) -> bool {
        self.contains(&package.canonical())
    }

    /// Number of distinct flagged identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the list contained no usable entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
