//! Configuration types for semdiff operations.

use crate::reports::{ReportFormat, DEFAULT_MINOR_CHANGE_THRESHOLD};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison options
    pub compare: CompareConfig,
    /// Output configuration (format, file, colors, paths)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Drop order changes from the result.
    pub fn ignore_order_changes(mut self, ignore: bool) -> Self {
        self.config.compare.ignore_order_changes = ignore;
        self
    }

    /// Swap the `from` and `to` inputs.
    pub fn swap(mut self, swap: bool) -> Self {
        self.config.compare.swap = swap;
        self
    }

    /// Set the output format.
    pub fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Render paths Go-Patch style.
    pub fn use_go_patch_paths(mut self, enabled: bool) -> Self {
        self.config.output.use_go_patch_paths = enabled;
        self
    }

    /// Leave out the report header.
    pub fn omit_header(mut self, omit: bool) -> Self {
        self.config.output.omit_header = omit;
        self
    }

    /// Enable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Enable verbose logging.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.behavior.verbose = verbose;
        self
    }

    /// Exit with the number of differences.
    pub fn set_exit_status(mut self, enabled: bool) -> Self {
        self.config.behavior.set_exit_status = enabled;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for one `between` run
#[derive(Debug, Clone)]
pub struct BetweenConfig {
    /// Locations to compare
    pub paths: ComparePaths,
    /// Comparison options
    pub compare: CompareConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl BetweenConfig {
    /// Bind an application config to two input locations.
    ///
    /// With `compare.swap` set the locations are exchanged here, so every
    /// later stage sees the effective order.
    pub fn new(paths: ComparePaths, config: AppConfig) -> Self {
        let paths = if config.compare.swap { paths.swapped() } else { paths };
        Self {
            paths,
            compare: config.compare,
            output: config.output,
            behavior: config.behavior,
        }
    }
}

/// Input locations for a comparison: a file path, `-` for stdin, or a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePaths {
    /// Location of the `from` documents
    pub from: String,
    /// Location of the `to` documents
    pub to: String,
}

impl ComparePaths {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same locations in reverse order.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Comparison options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CompareConfig {
    /// Drop order changes of lists from the result
    pub ignore_order_changes: bool,
    /// Swap `from` and `to` before comparing
    pub swap: bool,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Render paths Go-Patch style (`/a/name=x/b`) instead of dot style
    pub use_go_patch_paths: bool,
    /// Leave out the report header
    pub omit_header: bool,
    /// Relative edit distance below which a string change is reported as minor
    #[schemars(range(min = 0.0, max = 1.0))]
    pub minor_change_threshold: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Human,
            file: None,
            no_color: false,
            use_go_patch_paths: false,
            omit_header: false,
            minor_change_threshold: DEFAULT_MINOR_CHANGE_THRESHOLD,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Only log errors
    pub quiet: bool,
    /// Log progress information
    pub verbose: bool,
    /// Exit with the number of differences (capped at 255)
    pub set_exit_status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .ignore_order_changes(true)
            .output_format(ReportFormat::Brief)
            .use_go_patch_paths(true)
            .set_exit_status(true)
            .build();

        assert!(config.compare.ignore_order_changes);
        assert_eq!(config.output.format, ReportFormat::Brief);
        assert!(config.output.use_go_patch_paths);
        assert!(config.behavior.set_exit_status);
        assert!(!config.behavior.quiet);
    }

    #[test]
    fn test_between_config_applies_swap() {
        let paths = ComparePaths::new("a.yml", "b.yml");

        let config = BetweenConfig::new(paths.clone(), AppConfig::default());
        assert_eq!(config.paths, paths);

        let swapped = BetweenConfig::new(paths, AppConfig::builder().swap(true).build());
        assert_eq!(swapped.paths, ComparePaths::new("b.yml", "a.yml"));
    }

    #[test]
    fn test_yaml_round_trip_with_defaults() {
        let config: AppConfig = serde_yaml::from_str("output:\n  format: brief\n").expect("parse");
        assert_eq!(config.output.format, ReportFormat::Brief);
        assert!((config.output.minor_change_threshold - DEFAULT_MINOR_CHANGE_THRESHOLD).abs() < f64::EPSILON);
        assert_eq!(config.compare, CompareConfig::default());
    }
}
