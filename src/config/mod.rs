//! Configuration module for semdiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use semdiff::config::{AppConfig, Validatable};
//! use semdiff::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .ignore_order_changes(true)
//!     .output_format(ReportFormat::Brief)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.semdiff.yaml` file in your project root or `~/.config/semdiff/`:
//!
//! ```yaml
//! compare:
//!   ignore_order_changes: true
//! output:
//!   use_go_patch_paths: true
//!   minor_change_threshold: 0.2
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, BetweenConfig, CompareConfig, ComparePaths,
    OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, load_config_file, load_or_default, ConfigFileError};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.semdiff.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
