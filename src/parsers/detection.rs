//! SBOM dialect detection.
//!
//! A document's dialect is decided by the first recognized top-level key,
//! checked in a fixed order: `packages` (SPDX) → `components` (CycloneDX) →
//! `artifacts` (GitHub dependency-graph) → `manifests` (Syft github-json).
//! Real-world documents expose exactly one of these keys; the precedence
//! only matters for pathological documents carrying several.
//!
//! Detection and extraction share one deserialization pass: the envelope
//! below has one optional field per recognized key, so the precedence rule
//! is a single `if` chain over typed data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::PackageIdentifier;
use crate::parsers::{cyclonedx, github, spdx, syft};

/// The recognized SBOM dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// SPDX JSON (`packages[].name` + `packages[].versionInfo`)
    Spdx,
    /// CycloneDX JSON (`components[].name` + `components[].version`)
    CycloneDx,
    /// GitHub dependency-graph export (`artifacts[].name` + `artifacts[].version`)
    GithubDependencyGraph,
    /// Syft github-json (`manifests.*.resolved` purl keys)
    SyftGithubJson,
    /// No recognized top-level key; normalizes to an empty sequence
    Unknown,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spdx => "SPDX",
            Self::CycloneDx => "CycloneDX",
            Self::GithubDependencyGraph => "GitHub dependency-graph",
            Self::SyftGithubJson => "Syft github-json",
            Self::Unknown => "unrecognized",
        };
        write!(f, "{name}")
    }
}

/// Envelope over the dialect-bearing top-level keys of an SBOM document.
///
/// All fields are optional; which ones deserialized decides the dialect.
/// Everything else in the document is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSbomDocument {
    packages: Option<Vec<spdx::SpdxPackage>>,
    components: Option<Vec<cyclonedx::CycloneDxComponent>>,
    artifacts: Option<Vec<github::GithubArtifact>>,
    manifests: Option<IndexMap<String, syft::SyftManifest>>,
}

impl RawSbomDocument {
    /// Detect the dialect. The order of these checks is the precedence
    /// contract; do not reorder.
    pub(crate) fn dialect(&self) -> Dialect {
        if self.packages.is_some() {
            Dialect::Spdx
        } else if self.components.is_some() {
            Dialect::CycloneDx
        } else if self.artifacts.is_some() {
            Dialect::GithubDependencyGraph
        } else if self.manifests.is_some() {
            Dialect::SyftGithubJson
        } else {
            Dialect::Unknown
        }
    }

    /// Normalize the winning dialect's entries into identifiers.
    pub(crate) fn into_identifiers(self) -> Vec<PackageIdentifier> {
        match self.dialect() {
            Dialect::Spdx => spdx::normalize(self.packages.unwrap_or_default()),
            Dialect::CycloneDx => cyclonedx::normalize(self.components.unwrap_or_default()),
            Dialect::GithubDependencyGraph => github::normalize(self.artifacts.unwrap_or_default()),
            Dialect::SyftGithubJson => syft::normalize(self.manifests.unwrap_or_default()),
            Dialect::Unknown => Vec::new(),
        }
    }
}
