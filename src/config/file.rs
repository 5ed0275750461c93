//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::{ReportFormat, DEFAULT_MINOR_CHANGE_THRESHOLD};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".semdiff.yaml",
    ".semdiff.yml",
    "semdiff.yaml",
    "semdiff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/semdiff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    let cwd = std::env::current_dir().ok();
    let candidates = [
        cwd.clone(),
        cwd.as_deref().and_then(find_git_root),
        dirs::config_dir().map(|dir| dir.join("semdiff")),
        dirs::home_dir(),
    ];

    candidates
        .iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from the discovered file, or return the default.
///
/// A file named explicitly must load. A discovered file that fails to load is
/// skipped with a warning.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    let Some(path) = discover_config_file(explicit_path) else {
        return Ok((AppConfig::default(), None));
    };

    match load_config_file(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        Err(e) if explicit_path.is_some() => Err(e),
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            Ok((AppConfig::default(), None))
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so unset CLI flags
    /// leave file settings alone.
    pub fn merge(&mut self, other: &Self) {
        // Compare config
        if other.compare.ignore_order_changes {
            self.compare.ignore_order_changes = true;
        }
        if other.compare.swap {
            self.compare.swap = true;
        }

        // Output config
        if other.output.format != ReportFormat::Human {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.use_go_patch_paths {
            self.output.use_go_patch_paths = true;
        }
        if other.output.omit_header {
            self.output.omit_header = true;
        }
        if (other.output.minor_change_threshold - DEFAULT_MINOR_CHANGE_THRESHOLD).abs() > f64::EPSILON {
            self.output.minor_change_threshold = other.output.minor_change_threshold;
        }

        // Behavior config
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.verbose {
            self.behavior.verbose = true;
        }
        if other.behavior.set_exit_status {
            self.behavior.set_exit_status = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().expect("temp dir");
        assert!(find_config_in_dir(tmp.path()).is_none());

        let config_path = tmp.path().join(".semdiff.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").expect("write");
        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_git_root() {
        let tmp = TempDir::new().expect("temp dir");
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).expect("mkdir");
        std::fs::create_dir(tmp.path().join(".git")).expect("mkdir .git");

        assert_eq!(find_git_root(&nested), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("semdiff.yml");
        std::fs::write(
            &path,
            "compare:\n  ignore_order_changes: true\noutput:\n  use_go_patch_paths: true\n",
        )
        .expect("write");

        let config = load_config_file(&path).expect("load");
        assert!(config.compare.ignore_order_changes);
        assert!(config.output.use_go_patch_paths);
        assert_eq!(config.output.format, ReportFormat::Human);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let result = load_or_default(Some(Path::new("/definitely/not/here.yaml")));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "output: [not, a, mapping]\n").expect("write");

        assert!(matches!(load_or_default(Some(&path)), Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_merge_cli_over_file() {
        let mut file_config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .use_go_patch_paths(true)
            .build();
        let cli = AppConfig::builder().ignore_order_changes(true).quiet(true).build();

        file_config.merge(&cli);

        assert_eq!(file_config.output.format, ReportFormat::Json);
        assert!(file_config.output.use_go_patch_paths);
        assert!(file_config.compare.ignore_order_changes);
        assert!(file_config.behavior.quiet);

        let cli = AppConfig::builder().output_format(ReportFormat::Brief).build();
        file_config.merge(&cli);
        assert_eq!(file_config.output.format, ReportFormat::Brief);
    }
}
