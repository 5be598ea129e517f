//! GitHub dependency-graph dialect normalization.
//!
//! Recognized by a top-level `artifacts` array, as exported by GitHub's
//! dependency-graph SBOM endpoint; identity comes from each entry's `name`
//! and `version` fields.

use serde::Deserialize;

use crate::model::PackageIdentifier;

/// One entry of the dependency-graph `artifacts` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GithubArtifact {
    name: Option<String>,
    version: Option<String>,
}

/// Extract identifiers from `artifacts` entries, in document order.
pub(crate) fn normalize(artifacts: Vec<GithubArtifact>) -> Vec<PackageIdentifier> {
    artifacts
        .into_iter()
        .filter_map(|artifact| match (artifact.name, artifact.version) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                Some(PackageIdentifier::new(name, version))
            }
            _ => None,
        })
        .collect()
}
