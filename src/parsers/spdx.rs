//! SPDX dialect normalization.
//!
//! Recognized by a top-level `packages` array; identity comes from each
//! entry's `name` and `versionInfo` fields.

use serde::Deserialize;

use crate::model::PackageIdentifier;

/// One entry of the SPDX `packages` array.
///
/// Only the identity fields are modeled; the rest of the entry (license,
/// checksums, external refs) plays no part in compromise matching and is
/// ignored by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpdxPackage {
    name: Option<String>,
    version_info: Option<String>,
}

/// Extract identifiers from `packages` entries, in document order.
///
/// Entries missing `name` or `versionInfo`, or carrying empty strings, are
/// skipped silently.
pub(crate) fn normalize(packages: Vec<SpdxPackage>) -> Vec<PackageIdentifier> {
    packages
        .into_iter()
        .filter_map(|pkg| match (pkg.name, pkg.version_info) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                Some(PackageIdentifier::new(name, version))
            }
            _ => None,
        })
        .collect()
}
