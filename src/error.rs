//! Unified error types for sbom-scan.
//!
//! Only run-fatal conditions live here: problems with the scan configuration
//! that make the whole run meaningless. Per-file conditions (an unreadable or
//! malformed SBOM document) are deliberately *not* represented here; those
//! are recovered inside the scan loop via [`crate::parsers::ParseError`] and
//! never abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error type for sbom-scan operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// The compromised-package list could not be read.
    ///
    /// The scan has no meaningful behavior without the list, so this aborts
    /// the run before any SBOM file is touched.
    #[error("cannot read compromised-package list {path:?}: {source}")]
    CompromisedList {
        /// Path that failed to open
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SBOM glob pattern does not compile.
    #[error("invalid SBOM glob pattern '{pattern}': {message}")]
    Pattern {
        /// The pattern as given on the command line
        pattern: String,
        message: String,
    },

    /// The rendered report could not be written to its destination.
    #[error("cannot write report to {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ScanError {
    /// Create an error for an unreadable compromised-package list
    pub fn compromised_list(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CompromisedList {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a glob pattern that failed to compile
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create an error for a report destination that could not be written
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure class.
    ///
    /// Every fatal configuration error maps to 2; exit code 1 is reserved
    /// for "compromised packages found" so CI pipelines can tell the two
    /// apart.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        2
    }
}
