#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main SBOM parsing entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_sbom_str`, which runs dialect
/// detection and dispatches to the matching normalizer. This exercises the
/// envelope deserialization and every extraction path.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_scan::parsers::parse_sbom_str(s);
    }
});
