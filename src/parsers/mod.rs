//! SBOM document normalization.
//!
//! This module turns the bytes of one SBOM document into an ordered sequence
//! of [`PackageIdentifier`]s, regardless of which dialect produced the
//! document.
//!
//! ## Dialect detection
//!
//! The dialect is decided by the first recognized top-level key, in a fixed
//! precedence order (see [`detection`]):
//!
//! | key         | dialect                  | identity fields            |
//! |-------------|--------------------------|----------------------------|
//! | `packages`  | SPDX                     | `name`, `versionInfo`      |
//! | `components`| CycloneDX                | `name`, `version`          |
//! | `artifacts` | GitHub dependency-graph  | `name`, `version`          |
//! | `manifests` | Syft github-json         | `resolved` purl keys       |
//!
//! An unrecognized document is not an error: it normalizes to an empty
//! sequence and the caller decides how loudly to complain.
//!
//! ## Usage
//!
//! ```no_run
//! use sbom_scan::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let sbom = parse_sbom(Path::new("sbom-data/2025-09-24_sbom_frontend.json"))?;
//! println!("{}: {} packages", sbom.dialect, sbom.packages.len());
//! # Ok::<(), sbom_scan::parsers::ParseError>(())
//! ```

mod cyclonedx;
mod detection;
mod github;
mod purl;
mod spdx;
mod syft;

pub use detection::Dialect;
pub use purl::parse_purl_key;

use std::path::Path;
use thiserror::Error;

use crate::model::PackageIdentifier;
use detection::RawSbomDocument;

/// Maximum SBOM file size (512 MB) accepted before parsing, to keep one
/// oversized document from exhausting memory mid-scan.
pub const MAX_SBOM_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Per-document parse failure.
///
/// These are recoverable: the scan loop records the file as
/// scanned-with-zero-packages and moves on. Only configuration problems
/// (see [`crate::error::ScanError`]) abort a run.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read
    #[error("I/O error: {0}")]
    IoError(String),

    /// The bytes are not valid JSON
    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// A normalized SBOM document.
#[derive(Debug, Clone)]
pub struct ParsedSbom {
    /// Which dialect the document was recognized as
    pub dialect: Dialect,
    /// Extracted identifiers, in document order, duplicates preserved
    pub packages: Vec<PackageIdentifier>,
}

/// Read and normalize one SBOM file.
///
/// Returns an error if the file exceeds [`MAX_SBOM_FILE_SIZE`], cannot be
/// read, or is not valid JSON.
pub fn parse_sbom(path: &Path) -> Result<ParsedSbom, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SBOM_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "SBOM file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_SBOM_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_sbom_str(&content)
}

/// Normalize one SBOM document from string content.
pub fn parse_sbom_str(content: &str) -> Result<ParsedSbom, ParseError> {
    let raw: RawSbomDocument = serde_json::from_str(content)?;
    let dialect = raw.dialect();
    let packages = raw.into_identifiers();
    tracing::debug!(%dialect, packages = packages.len(), "normalized SBOM document");
    Ok(ParsedSbom { dialect, packages })
}
