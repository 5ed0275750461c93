//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Detailed terminal output, one block per changed path
    #[default]
    #[value(alias = "bosh")]
    Human,
    /// One-line summary
    #[value(alias = "short", alias = "summary")]
    Brief,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Brief => write!(f, "brief"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Default threshold below which a string modification counts as minor
pub const DEFAULT_MINOR_CHANGE_THRESHOLD: f64 = 0.1;

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Render paths Go-Patch style (`/a/name=x/b`) instead of dot style
    pub use_go_patch_paths: bool,
    /// Leave out the report header
    pub omit_header: bool,
    /// Relative edit distance below which a string change is minor
    pub minor_change_threshold: f64,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_go_patch_paths: false,
            omit_header: false,
            minor_change_threshold: DEFAULT_MINOR_CHANGE_THRESHOLD,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Create a config describing a comparison of two locations
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                from_location: Some(from.into()),
                to_location: Some(to.into()),
                ..ReportMetadata::new()
            },
            ..Self::default()
        }
    }

    /// Location label for the `from` side
    #[must_use]
    pub fn from_label(&self) -> &str {
        location_label(self.metadata.from_location.as_deref(), "from")
    }

    /// Location label for the `to` side
    #[must_use]
    pub fn to_label(&self) -> &str {
        location_label(self.metadata.to_location.as_deref(), "to")
    }
}

fn location_label<'a>(location: Option<&'a str>, fallback: &'a str) -> &'a str {
    match location {
        Some("-") => "<stdin>",
        Some(location) => location,
        None => fallback,
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Where the `from` documents were loaded from
    pub from_location: Option<String>,
    /// Where the `to` documents were loaded from
    pub to_location: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Content hash of the raw `from` input
    pub from_hash: Option<u64>,
    /// Content hash of the raw `to` input
    pub to_hash: Option<u64>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
