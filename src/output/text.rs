//! Human-readable text report.
//!
//! The report has three parts: a header block naming the inputs, one section
//! per scanned file, and a summary block with the aggregate counts and the
//! verdict. The sections are exposed individually so the terminal path can
//! stream them as files finish scanning; [`render`] composes the same parts
//! into one string for file output.

use std::path::Path;

use crate::scan::{FileReport, ScanOutcome, ScanReport};

const SEPARATOR_WIDTH: usize = 60;

const RED: &str = "1;31";
const GREEN: &str = "32";
const YELLOW: &str = "33";

fn colorize(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{color}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Line printed instead of a report when the glob matched nothing.
#[must_use]
pub fn render_no_files(pattern: &str) -> String {
    format!("No SBOM files found matching pattern: {pattern}\n")
}

/// Header block naming the compromised list and the file count.
#[must_use]
pub fn render_header(
    compromised_file: &Path,
    compromised_count: usize,
    file_count: usize,
) -> String {
    let lines = vec![
        separator(),
        "SBOM PACKAGE SCANNER".to_string(),
        separator(),
        format!("Compromised packages file: {}", compromised_file.display()),
        format!("Package versions in compromised file: {compromised_count}"),
        format!("SBOM files to scan: {file_count}"),
        separator(),
    ];
    format!("{}\n\n", lines.join("\n"))
}

/// Section for one scanned file.
#[must_use]
pub fn render_file_section(file: &FileReport, use_color: bool) -> String {
    let mut lines = vec![format!("Scanning: {}", file.path.display())];

    if file.package_count == 0 {
        lines.push(format!(
            "  {}",
            colorize("No packages found or file could not be parsed", YELLOW, use_color)
        ));
    } else {
        lines.push(format!("  Packages in SBOM: {}", file.package_count));
        if file.has_matches() {
            lines.push(format!(
                "  {}",
                colorize(
                    &format!("COMPROMISED PACKAGES FOUND ({}):", file.matches.len()),
                    RED,
                    use_color
                )
            ));
            for package in &file.matches {
                lines.push(format!("    - {package}"));
            }
        } else {
            lines.push(format!(
                "  {}",
                colorize("No compromised packages found", GREEN, use_color)
            ));
        }
    }

    format!("{}\n\n", lines.join("\n"))
}

/// Summary block with aggregate counts and the verdict line.
#[must_use]
pub fn render_summary(report: &ScanReport, use_color: bool) -> String {
    let mut lines = vec![
        separator(),
        "SCAN RESULTS SUMMARY".to_string(),
        separator(),
        format!("Compromised packages file: {}", report.compromised_file.display()),
        format!("Package versions in compromised file: {}", report.compromised_count),
        format!("SBOM files scanned: {}", report.summary.files_scanned),
        format!(
            "Files with compromised packages: {}",
            report.summary.files_with_matches
        ),
        format!(
            "Total compromised packages found: {}",
            report.summary.total_matches
        ),
        format!(
            "Distinct compromised packages: {}",
            report.summary.distinct_matches
        ),
        String::new(),
    ];

    match report.outcome() {
        ScanOutcome::CompromisedFound => lines.push(colorize(
            "COMPROMISED PACKAGES DETECTED - Review and update compromised packages!",
            RED,
            use_color,
        )),
        ScanOutcome::Clean | ScanOutcome::NothingScanned => lines.push(colorize(
            "No compromised packages found in scanned SBOM files.",
            GREEN,
            use_color,
        )),
    }

    format!("{}\n", lines.join("\n"))
}

/// Render the complete text report.
#[must_use]
pub fn render(report: &ScanReport, use_color: bool) -> String {
    if report.files.is_empty() {
        return render_no_files(&report.pattern);
    }

    let mut out = render_header(
        &report.compromised_file,
        report.compromised_count,
        report.files.len(),
    );
    for file in &report.files {
        out.push_str(&render_file_section(file, use_color));
    }
    out.push_str(&render_summary(report, use_color));
    out
}
