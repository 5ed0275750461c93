//! Configuration validation for semdiff.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.output.validate();
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.minor_change_threshold) {
            errors.push(ConfigError::new(
                "output.minor_change_threshold",
                format!("{} is outside 0.0..=1.0", self.minor_change_threshold),
            ));
        }

        if let Some(file) = &self.file {
            if file.is_dir() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("{} is a directory", file.display()),
                ));
            } else if let Some(parent) = file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("parent directory {} does not exist", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.quiet && self.verbose {
            vec![ConfigError::new(
                "behavior",
                "quiet and verbose cannot both be enabled",
            )]
        } else {
            Vec::new()
        }
    }
}
