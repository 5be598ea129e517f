//! Syft github-json dialect normalization.
//!
//! Recognized by a top-level `manifests` object, as produced by Syft's
//! `github-json` output (the GitHub dependency-snapshot submission shape).
//! Every manifest carries a `resolved` mapping whose *keys* are purl strings;
//! each key is one identifier occurrence.
//!
//! Duplicates are intentional here: the same package resolved under two
//! manifests, or under two `#fragment` locations of one manifest, is pulled
//! in at two distinct places and must be counted twice.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::model::PackageIdentifier;
use crate::parsers::purl::parse_purl_key;

/// One value of the Syft `manifests` object.
///
/// `resolved` values carry per-dependency metadata this scanner never reads;
/// only the keys participate in identity.
#[derive(Debug, Deserialize)]
pub(crate) struct SyftManifest {
    #[serde(default)]
    resolved: IndexMap<String, serde_json::Value>,
}

/// Extract one identifier per `resolved` key, across all manifests in
/// document order.
///
/// Malformed purl keys (no `@` separator) are logged and skipped.
pub(crate) fn normalize(manifests: IndexMap<String, SyftManifest>) -> Vec<PackageIdentifier> {
    manifests
        .into_values()
        .flat_map(|manifest| manifest.resolved.into_keys())
        .filter_map(|key| {
            let parsed = parse_purl_key(&key);
            if parsed.is_none() {
                tracing::debug!(key = %key, "skipping malformed purl key");
            }
            parsed
        })
        .collect()
}
