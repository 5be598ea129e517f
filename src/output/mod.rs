//! Report output: format selection and destination handling.

pub mod json;
pub mod text;

use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

/// Output format for scan reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report, streamed as files are scanned
    #[default]
    Text,
    /// Machine-readable JSON document
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Where the rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Build a target from an optional `--output` path.
    #[must_use]
    pub fn from_option(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdout, |path| Self::File(path.to_path_buf()))
    }

    /// True when the target is an interactive terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && io::stdout().is_terminal()
    }
}

/// Whether report output should use ANSI colors.
///
/// Color is disabled by the `--no-color` flag, by a set `NO_COLOR`
/// environment variable, or when the target is not a terminal.
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none() && target.is_terminal()
}

/// Write a rendered report to its target, ensuring a trailing newline.
///
/// # Errors
///
/// Returns [`ScanError::Output`] when the destination cannot be written.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    let needs_newline = !content.is_empty() && !content.ends_with('\n');
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| {
                    if needs_newline {
                        stdout.write_all(b"\n")
                    } else {
                        Ok(())
                    }
                })
                .map_err(|err| ScanError::output("stdout", err))
        }
        OutputTarget::File(path) => {
            let mut body = content.to_string();
            if needs_newline {
                body.push('\n');
            }
            fs::write(path, body).map_err(|err| ScanError::output(path.clone(), err))
        }
    }
}
