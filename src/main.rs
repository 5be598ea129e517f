//! sbom-scan: scan SBOM files for known-compromised package versions
//!
//! Cross-references JSON SBOMs (SPDX, CycloneDX, GitHub dependency-graph,
//! Syft github-json) against a plain text list of `name@version` pairs.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use sbom_scan::output::{self, OutputTarget, ReportFormat, json, text};
use sbom_scan::scan::{self, ScanConfig, ScanEvent, run_scan, run_scan_with_progress};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with dialect support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM dialects:",
        "\n  SPDX 2.x JSON            (packages)",
        "\n  CycloneDX JSON           (components)",
        "\n  GitHub dependency-graph  (artifacts)",
        "\n  Syft github-json         (manifests)",
        "\n\nOutput formats:",
        "\n  text, json"
    )
}

#[derive(Parser)]
#[command(name = "sbom-scan")]
#[command(version, long_version = build_long_version())]
#[command(about = "Scan SBOM files for known-compromised package versions", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No compromised packages found (or nothing to scan)
    1  Compromised packages found
    2  Configuration error (unreadable list, invalid pattern)

EXAMPLES:
    # Scan the default sbom-data/ directory
    sbom-scan

    # Scan a fleet export against a specific list
    sbom-scan 'fleet/**/*.json' --compromised-packages-file shai-hulud.pkg-txt

    # JSON report for CI, written to a file
    sbom-scan -f json -o scan-report.json

    # Parallel scan, one worker per core
    sbom-scan -j 0")]
struct Cli {
    /// Glob pattern selecting the SBOM files to scan
    #[arg(value_name = "PATTERN", default_value = scan::DEFAULT_SBOM_GLOB)]
    pattern: String,

    /// Compromised-package list, one name@version per line
    #[arg(
        long,
        value_name = "FILE",
        env = "SBOM_SCAN_COMPROMISED_FILE",
        default_value = scan::DEFAULT_COMPROMISED_FILE
    )]
    compromised_packages_file: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Worker threads (1 = sequential, 0 = one per core)
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; diagnostics go to stderr so stdout stays parseable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    match run(&cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    }
}

/// Run the scan and emit the report, returning the process exit code.
fn run(cli: &Cli) -> Result<i32> {
    let config = ScanConfig {
        pattern: cli.pattern.clone(),
        compromised_file: cli.compromised_packages_file.clone(),
        jobs: cli.jobs,
    };
    let target = OutputTarget::from_option(cli.output.as_deref());
    let colored = output::should_use_color(cli.no_color, &target);
    let streaming = cli.format == ReportFormat::Text && target == OutputTarget::Stdout;

    let report = if streaming {
        // Print sections as files finish scanning instead of buffering the
        // whole report.
        run_scan_with_progress(&config, |event| match event {
            ScanEvent::Started {
                compromised_count,
                file_count,
            } => {
                if file_count > 0 {
                    print!(
                        "{}",
                        text::render_header(&config.compromised_file, compromised_count, file_count)
                    );
                }
            }
            ScanEvent::FileScanned(file) => {
                print!("{}", text::render_file_section(file, colored));
            }
        })?
    } else {
        run_scan(&config)?
    };

    if streaming {
        if report.files.is_empty() {
            print!("{}", text::render_no_files(&report.pattern));
        } else {
            print!("{}", text::render_summary(&report, colored));
        }
    } else {
        let body = match cli.format {
            ReportFormat::Text => text::render(&report, colored),
            ReportFormat::Json => {
                json::render(&report).context("failed to serialize JSON report")?
            }
        };
        output::write_output(&target, &body)?;
    }

    Ok(report.outcome().exit_code())
}
