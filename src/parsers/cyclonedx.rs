//! CycloneDX dialect normalization.
//!
//! Recognized by a top-level `components` array; identity comes from each
//! entry's `name` and `version` fields.

use serde::Deserialize;

use crate::model::PackageIdentifier;

/// One entry of the CycloneDX `components` array.
#[derive(Debug, Deserialize)]
pub(crate) struct CycloneDxComponent {
    name: Option<String>,
    version: Option<String>,
}

/// Extract identifiers from `components` entries, in document order.
///
/// Same skip policy as the other array dialects: entries missing `name` or
/// `version` (or with empty values) are dropped silently.
pub(crate) fn normalize(components: Vec<CycloneDxComponent>) -> Vec<PackageIdentifier> {
    components
        .into_iter()
        .filter_map(|component| match (component.name, component.version) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                Some(PackageIdentifier::new(name, version))
            }
            _ => None,
        })
        .collect()
}
