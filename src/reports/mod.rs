//! Report generation for diff results.
//!
//! This module provides multiple output formats for diff results:
//! - Human: Detailed terminal output with YAML rendered values
//! - Brief: One-line summary for scripts
//! - JSON: Structured data for programmatic integration

mod brief;
mod human;
mod json;
mod types;

pub use brief::BriefReporter;
pub use human::HumanReporter;
pub use json::JsonReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata, DEFAULT_MINOR_CHANGE_THRESHOLD};

use crate::diff::DiffResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Human => {
            if use_color {
                Box::new(HumanReporter::new())
            } else {
                Box::new(HumanReporter::new().no_color())
            }
        }
        ReportFormat::Brief => {
            if use_color {
                Box::new(BriefReporter::new())
            } else {
                Box::new(BriefReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// `no differences`, `one difference`, `3 differences`
pub(crate) fn plural(count: usize, noun: &str) -> String {
    match count {
        0 => format!("no {}", plural_noun(noun)),
        1 => format!("one {noun}"),
        n => format!("{n} {}", plural_noun(noun)),
    }
}

fn plural_noun(noun: &str) -> String {
    match noun.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{noun}s"),
    }
}
