//! Machine-readable JSON report.

use chrono::Utc;
use serde::Serialize;
use std::path::Path;

use crate::scan::{FileReport, ScanOutcome, ScanReport, ScanSummary};

#[derive(Debug, Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

/// Top-level JSON document: run metadata, per-file results, aggregate totals.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    pattern: &'a str,
    compromised_file: &'a Path,
    compromised_count: usize,
    outcome: ScanOutcome,
    files: &'a [FileReport],
    summary: &'a ScanSummary,
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns the underlying serializer error, which for this data model only
/// occurs when a scanned path is not valid UTF-8.
pub fn render(report: &ScanReport) -> serde_json::Result<String> {
    let envelope = JsonReport {
        tool: ToolInfo {
            name: "sbom-scan",
            version: env!("CARGO_PKG_VERSION"),
        },
        generated_at: Utc::now().to_rfc3339(),
        pattern: &report.pattern,
        compromised_file: &report.compromised_file,
        compromised_count: report.compromised_count,
        outcome: report.outcome(),
        files: &report.files,
        summary: &report.summary,
    };
    serde_json::to_string_pretty(&envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PackageIdentifier;
    use crate::parsers::Dialect;
    use std::path::PathBuf;

    fn sample_report() -> ScanReport {
        let files = vec![
            FileReport {
                path: PathBuf::from("sbom-data/api.json"),
                dialect: Some(Dialect::Spdx),
                package_count: 3,
                matches: vec![PackageIdentifier::new("lodash", "4.17.20")],
                error: None,
            },
            FileReport {
                path: PathBuf::from("sbom-data/broken.json"),
                dialect: None,
                package_count: 0,
                matches: Vec::new(),
                error: Some("JSON parsing error: expected value".to_string()),
            },
        ];
        ScanReport {
            pattern: "sbom-data/*.json".to_string(),
            compromised_file: PathBuf::from("compromised-packages.pkg-txt"),
            compromised_count: 2,
            summary: ScanSummary::from_files(&files),
            files,
        }
    }

    #[test]
    fn test_json_report_shape() {
        let rendered = render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["tool"]["name"], "sbom-scan");
        assert_eq!(value["pattern"], "sbom-data/*.json");
        assert_eq!(value["compromised_count"], 2);
        assert_eq!(value["outcome"], "compromised-found");
        assert_eq!(value["summary"]["files_scanned"], 2);
        assert_eq!(value["summary"]["total_matches"], 1);

        let files = value["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["dialect"], "spdx");
        assert_eq!(files[0]["matches"][0]["name"], "lodash");
        assert_eq!(files[0]["matches"][0]["version"], "4.17.20");
    }

    #[test]
    fn test_parse_failure_carries_error_and_omits_dialect() {
        let rendered = render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let broken = &value["files"][1];
        assert!(broken.get("dialect").is_none());
        assert!(broken["error"]
            .as_str()
            .unwrap()
            .contains("JSON parsing error"));
    }

    #[test]
    fn test_generated_at_is_rfc3339() {
        let rendered = render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let stamp = value["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
