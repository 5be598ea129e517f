//! Integration tests for sbom-scan
//!
//! These tests verify end-to-end extraction, matching, and report generation
//! against fixture SBOMs in every supported dialect.

use sbom_scan::{
    compromised::CompromisedSet,
    output::{json, text},
    parsers::{Dialect, parse_sbom},
    scan::{ScanConfig, ScanOutcome, run_scan, scan_file},
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_compromised() -> CompromisedSet {
    CompromisedSet::load(fixture_path("compromised-packages.pkg-txt"))
        .expect("Failed to load fixture compromised list")
}

fn fixture_config() -> ScanConfig {
    ScanConfig {
        pattern: format!("{FIXTURES_DIR}/*.json"),
        compromised_file: fixture_path("compromised-packages.pkg-txt"),
        jobs: 1,
    }
}

// ============================================================================
// Extraction Tests
// ============================================================================

mod extraction_tests {
    use super::*;

    #[test]
    fn test_extract_spdx_document() {
        let parsed = parse_sbom(&fixture_path("spdx_api.json")).expect("Failed to parse SPDX");

        assert_eq!(parsed.dialect, Dialect::Spdx);
        // The root package has no versionInfo and is skipped
        assert_eq!(parsed.packages.len(), 4);
        assert!(parsed.packages.iter().any(|p| p.canonical() == "react@18.2.0"));
        assert!(parsed
            .packages
            .iter()
            .any(|p| p.canonical() == "@pkgjs/parseargs@0.11.0"));
    }

    #[test]
    fn test_extract_cyclonedx_document() {
        let parsed =
            parse_sbom(&fixture_path("cyclonedx_web.json")).expect("Failed to parse CycloneDX");

        assert_eq!(parsed.dialect, Dialect::CycloneDx);
        // detect-libc has an empty version and is skipped
        assert_eq!(parsed.packages.len(), 2);
        assert!(parsed.packages.iter().any(|p| p.canonical() == "chalk@5.6.1"));
        assert!(parsed.packages.iter().any(|p| p.canonical() == "express@4.18.2"));
    }

    #[test]
    fn test_extract_github_snapshot() {
        let parsed = parse_sbom(&fixture_path("github_snapshot.json"))
            .expect("Failed to parse dependency snapshot");

        assert_eq!(parsed.dialect, Dialect::GithubDependencyGraph);
        assert_eq!(parsed.packages.len(), 2);
        assert!(parsed.packages.iter().any(|p| p.canonical() == "left-pad@1.3.0"));
    }

    #[test]
    fn test_extract_syft_actions_document() {
        let parsed =
            parse_sbom(&fixture_path("syft_actions.json")).expect("Failed to parse Syft export");

        assert_eq!(parsed.dialect, Dialect::SyftGithubJson);
        assert_eq!(parsed.packages.len(), 6, "Both manifests contribute");

        let canonical: Vec<String> = parsed.packages.iter().map(|p| p.canonical()).collect();
        // The two fragment-qualified keys decode to the same identity
        assert_eq!(
            canonical
                .iter()
                .filter(|c| c.as_str() == "ljharb/actions@main")
                .count(),
            2
        );
        // checkout is pinned in both workflow manifests
        assert_eq!(
            canonical
                .iter()
                .filter(|c| c.as_str() == "actions/checkout@v2")
                .count(),
            2
        );
    }

    #[test]
    fn test_unrecognized_format_yields_no_packages() {
        let parsed = parse_sbom(&fixture_path("unknown_format.json"))
            .expect("Unrecognized JSON must still parse");

        assert_eq!(parsed.dialect, Dialect::Unknown);
        assert!(parsed.packages.is_empty());
    }

    #[test]
    fn test_broken_file_is_a_parse_error() {
        let result = parse_sbom(&fixture_path("broken.json"));
        assert!(result.is_err(), "Truncated JSON must fail to parse");
    }
}

// ============================================================================
// Matching Scenario Tests
// ============================================================================

mod matching_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_npm_wave_scenario() {
        let report = scan_file(&fixture_path("spdx_api.json"), &fixture_compromised());

        assert_eq!(report.package_count, 4);
        assert_eq!(report.matches.len(), 2);
        let canonical: Vec<String> = report.matches.iter().map(|p| p.canonical()).collect();
        assert!(canonical.contains(&"typed-array-byte-offset@1.0.2".to_string()));
        assert!(canonical.contains(&"@pkgjs/parseargs@0.11.0".to_string()));
    }

    #[test]
    fn test_actions_scenario_counts_every_occurrence() {
        let report = scan_file(&fixture_path("syft_actions.json"), &fixture_compromised());

        // checkout@v2 twice, ljharb/actions@main twice, setup-node@v3 once
        assert_eq!(report.matches.len(), 5);

        let distinct: HashSet<String> = report.matches.iter().map(|p| p.canonical()).collect();
        assert_eq!(distinct.len(), 3);
        assert!(distinct.contains("actions/checkout@v2"));
        assert!(distinct.contains("actions/setup-node@v3"));
        assert!(distinct.contains("ljharb/actions@main"));
    }

    #[test]
    fn test_near_miss_versions_do_not_match() {
        let compromised = fixture_compromised();
        // The list flags left-pad@1.3.1; the snapshot pins left-pad@1.3.0.
        assert!(compromised.contains("left-pad@1.3.1"));

        let report = scan_file(&fixture_path("github_snapshot.json"), &compromised);
        assert_eq!(report.package_count, 2);
        assert!(report.matches.is_empty());
    }
}

// ============================================================================
// Full Scan Tests
// ============================================================================

mod full_scan_tests {
    use super::*;

    #[test]
    fn test_scan_fixture_directory() {
        let report = run_scan(&fixture_config()).expect("Fixture scan must not be fatal");

        assert_eq!(report.compromised_count, 7);
        assert_eq!(report.summary.files_scanned, 6);
        assert_eq!(report.summary.files_with_matches, 3);
        assert_eq!(report.summary.total_packages, 14);
        assert_eq!(report.summary.total_matches, 8);
        assert_eq!(report.summary.distinct_matches, 6);
        assert_eq!(report.outcome(), ScanOutcome::CompromisedFound);
        assert_eq!(report.outcome().exit_code(), 1);

        // Files come back sorted by path; broken.json is first and carries
        // its parse diagnostic instead of aborting the run.
        assert!(report.files[0].path.ends_with("broken.json"));
        assert!(report.files[0].error.is_some());
        assert_eq!(report.files[0].package_count, 0);
    }

    #[test]
    fn test_parallel_fixture_scan_is_deterministic() {
        let sequential = run_scan(&fixture_config()).expect("sequential scan");
        let parallel = run_scan(&ScanConfig {
            jobs: 4,
            ..fixture_config()
        })
        .expect("parallel scan");

        assert_eq!(sequential.summary.total_matches, parallel.summary.total_matches);
        let seq: Vec<&Path> = sequential.files.iter().map(|f| f.path.as_path()).collect();
        let par: Vec<&Path> = parallel.files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_pattern_matching_nothing_is_exit_zero() {
        let config = ScanConfig {
            pattern: format!("{FIXTURES_DIR}/no-such-subdir/*.json"),
            ..fixture_config()
        };
        let report = run_scan(&config).expect("Empty resolution must not be fatal");

        assert!(report.files.is_empty());
        assert_eq!(report.outcome(), ScanOutcome::NothingScanned);
        assert_eq!(report.outcome().exit_code(), 0);
    }

    #[test]
    fn test_missing_compromised_list_is_fatal() {
        let config = ScanConfig {
            compromised_file: fixture_path("no-such-list.pkg-txt"),
            ..fixture_config()
        };
        let err = run_scan(&config).expect_err("Missing list must abort");
        assert_eq!(err.exit_code(), 2);
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_text_report_end_to_end() {
        let report = run_scan(&fixture_config()).expect("Fixture scan must not be fatal");
        let rendered = text::render(&report, false);

        assert!(rendered.contains("SBOM PACKAGE SCANNER"));
        assert!(rendered.contains("Package versions in compromised file: 7"));
        assert!(rendered.contains("SBOM files to scan: 6"));
        assert!(rendered.contains("COMPROMISED PACKAGES FOUND (2):"));
        assert!(rendered.contains("    - typed-array-byte-offset@1.0.2"));
        assert!(rendered.contains("No packages found or file could not be parsed"));
        assert!(rendered.contains("Total compromised packages found: 8"));
        assert!(rendered.contains("Distinct compromised packages: 6"));
        assert!(rendered.contains("COMPROMISED PACKAGES DETECTED"));
    }

    #[test]
    fn test_json_report_end_to_end() {
        let report = run_scan(&fixture_config()).expect("Fixture scan must not be fatal");
        let rendered = json::render(&report).expect("JSON serialization");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(value["tool"]["name"], "sbom-scan");
        assert_eq!(value["outcome"], "compromised-found");
        assert_eq!(value["compromised_count"], 7);
        assert_eq!(value["summary"]["files_scanned"], 6);
        assert_eq!(value["summary"]["total_matches"], 8);
        assert_eq!(value["summary"]["distinct_matches"], 6);

        let files = value["files"].as_array().expect("files array");
        assert_eq!(files.len(), 6);
        let spdx_entry = files
            .iter()
            .find(|f| f["path"].as_str().is_some_and(|p| p.ends_with("spdx_api.json")))
            .expect("spdx fixture in report");
        assert_eq!(spdx_entry["dialect"], "spdx");
        assert_eq!(spdx_entry["package_count"], 4);
    }

    #[test]
    fn test_clean_scan_reports_clean_verdict() {
        let dir = TempDir::new().expect("temp dir");
        let sbom = dir.path().join("clean.json");
        fs::write(
            &sbom,
            r#"{"spdxVersion": "SPDX-2.3", "packages": [{"name": "react", "versionInfo": "18.2.0"}]}"#,
        )
        .expect("write fixture");
        let list = dir.path().join("compromised-packages.pkg-txt");
        fs::write(&list, "chalk@5.6.1\n").expect("write list");

        let config = ScanConfig {
            pattern: format!("{}/*.json", dir.path().display()),
            compromised_file: list,
            jobs: 1,
        };
        let report = run_scan(&config).expect("clean scan");

        assert_eq!(report.outcome(), ScanOutcome::Clean);
        assert_eq!(report.outcome().exit_code(), 0);
        let rendered = text::render(&report, false);
        assert!(rendered.contains("No compromised packages found in scanned SBOM files."));
    }
}
