//! Matching extracted package identifiers against the compromised set.

use crate::compromised::CompromisedSet;
use crate::model::PackageIdentifier;

/// Return the identifiers whose canonical `name@version` appears in the
/// compromised set.
///
/// Matching is exact string equality on the canonical form. The input order
/// is preserved and duplicates are kept: the same compromised package pulled
/// in twice is two findings, not one.
#[must_use]
pub fn find_compromised(
    packages: &[PackageIdentifier],
    compromised: &CompromisedSet,
) -> Vec<PackageIdentifier> {
    packages
        .iter()
        .filter(|package| compromised.contains_package(package))
        .cloned()
        .collect()
}
