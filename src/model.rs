//! Core data model: the canonical package identity.
//!
//! Every SBOM dialect is normalized down to a flat `(name, version)` pair.
//! The comparison key is the concatenation `name@version`, compared as an
//! exact string, never as a parsed or ranged version: an entry in the
//! compromised list either names this exact release or it does not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package identity extracted from an SBOM document.
///
/// `name` may carry a scope or owner prefix (`@scope/name`, `owner/repo`);
/// `version` is an opaque string and is never semantically interpreted.
/// Identical identifiers appearing multiple times in one document are
/// intentionally kept as separate values; each occurrence is a distinct
/// place the dependency is pulled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageIdentifier {
    /// Package name, including any `@scope/` or `owner/` prefix
    pub name: String,
    /// Version string, exactly as the document records it
    pub version: String,
}

impl PackageIdentifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Canonical comparison form: `name@version`.
    ///
    /// This is the exact string looked up in the compromised set and the
    /// exact line format of the compromised-package file.
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
