#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the purl key splitter.
///
/// Arbitrary strings must either split into a name/version pair or come
/// back as None; the percent-decoding and fragment handling must never
/// panic or slice mid-codepoint.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_scan::parsers::parse_purl_key(s);
    }
});
