//! **Scan SBOM files for known-compromised package versions.**
//!
//! `sbom-scan` cross-references Software Bills of Materials against a plain
//! text list of compromised `name@version` pairs, the workflow used to answer
//! "are we affected?" after a supply-chain attack like the September 2025 npm
//! worm. It reads the JSON SBOM dialects that show up in real estates and
//! normalizes them into one identifier model before matching.
//!
//! ## Key Features
//!
//! - **Multi-dialect extraction**: SPDX (`packages`), CycloneDX
//!   (`components`), GitHub dependency-graph snapshots (`artifacts`) and Syft
//!   github-json exports (`manifests`) are detected automatically from the
//!   document shape.
//! - **Exact matching**: packages match on their canonical `name@version`
//!   form, nothing fuzzy, so a hit is actionable as-is.
//! - **Fleet-friendly scanning**: a glob pattern selects one SBOM per
//!   repository; unparseable files are reported and skipped, never fatal.
//! - **CI-ready output**: text or JSON reports, and exit code 1 reserved for
//!   "compromised packages found".
//!
//! ## Modules
//!
//! - **[`compromised`]**: the compromised-package list and its line format.
//! - **[`parsers`]**: dialect detection and package extraction.
//! - **[`scan`]**: glob resolution, matching, and run orchestration.
//! - **[`output`]**: text and JSON report rendering.
//!
//! ## Getting Started
//!
//! ```no_run
//! use sbom_scan::scan::{ScanConfig, run_scan};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScanConfig {
//!         pattern: "sbom-data/*.json".to_string(),
//!         ..ScanConfig::default()
//!     };
//!     let report = run_scan(&config)?;
//!
//!     println!(
//!         "{} compromised package(s) across {} file(s)",
//!         report.summary.total_matches, report.summary.files_scanned
//!     );
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // ScanError, ScanConfig, ScanReport etc. read better with the prefix
    clippy::module_name_repetitions
)]

pub mod compromised;
pub mod error;
pub mod model;
pub mod output;
pub mod parsers;
pub mod scan;

// Re-export main types for convenience
pub use compromised::CompromisedSet;
pub use error::{Result, ScanError};
pub use model::PackageIdentifier;
pub use output::{OutputTarget, ReportFormat};
pub use parsers::{Dialect, ParseError, parse_sbom, parse_sbom_str};
pub use scan::{
    ScanConfig, ScanEvent, ScanOutcome, ScanReport, run_scan, run_scan_with_progress,
};
