//! Package-URL key splitting for the Syft github-json dialect.
//!
//! The keys of a Syft `resolved` mapping are purl strings of the form
//! `pkg:<ecosystem>/<name>@<version>[#fragment]`. This module turns one key
//! into one [`PackageIdentifier`] with a small set of explicit rules:
//!
//! 1. strip the `pkg:<ecosystem>/` prefix,
//! 2. percent-decode the remainder (`%40` → `@`, restoring npm scopes),
//! 3. split at the **last** `@` that precedes any `#`,
//! 4. drop everything from `#` onward; the fragment addresses a location
//!    inside the manifest, not a different package version.
//!
//! A key with no `@` left after decoding is malformed and yields `None`;
//! callers skip it.

use crate::model::PackageIdentifier;

/// Split one `resolved` key into a package identifier.
///
/// Returns `None` for malformed keys (no `@` separator, or an empty name or
/// version portion). The caller decides whether to log; this function stays
/// pure.
#[must_use]
pub fn parse_purl_key(key: &str) -> Option<PackageIdentifier> {
    let remainder = strip_type_prefix(key);
    let decoded = percent_decode(remainder);

    // The fragment starts at the first '#'; nothing after it participates
    // in the identity.
    let ident = match decoded.find('#') {
        Some(pos) => &decoded[..pos],
        None => &decoded[..],
    };

    let at = ident.rfind('@')?;
    let (name, version) = (&ident[..at], &ident[at + 1..]);
    if name.is_empty() || version.is_empty() {
        return None;
    }

    Some(PackageIdentifier::new(name, version))
}

/// Strip a leading `pkg:<ecosystem>/` from a purl key.
///
/// Keys without the prefix are returned unchanged; the `@`-split rule alone
/// decides whether they are usable.
fn strip_type_prefix(key: &str) -> &str {
    let Some(rest) = key.strip_prefix("pkg:") else {
        return key;
    };
    match rest.find('/') {
        Some(slash) => &rest[slash + 1..],
        None => rest,
    }
}

/// Decode `%XX` escapes, leaving malformed escapes untouched.
///
/// Purl keys URL-encode the npm scope separator (`%40`); decoding must
/// happen before the `@`-split so scoped names keep their leading `@` and
/// the version split still lands on the real separator.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = hex_value(bytes[i + 1]);
            let lo = hex_value(bytes[i + 2]);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
