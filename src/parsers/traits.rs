//! Parser trait and error type.

use crate::model::Node;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading documents
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Unsupported mapping key: {0} (only scalar keys are supported)")]
    UnsupportedKey(String),

    #[error("Mapping key '{0}' is defined twice once keys are read as strings")]
    DuplicateKey(String),

    #[error("{location} is {size_mb} MB, exceeding the {limit_mb} MB limit")]
    FileTooLarge {
        location: String,
        size_mb: u64,
        limit_mb: u64,
    },

    #[error("Failed to fetch remote document: {0}")]
    RemoteError(String),

    #[error("Remote locations are not supported in this build: {0}")]
    RemoteUnavailable(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for ParseError {
    fn from(err: reqwest::Error) -> Self {
        Self::RemoteError(err.to_string())
    }
}

/// Trait for document format parsers
///
/// A parser turns raw text into one [`Node`] per top-level document.
pub trait DocumentParser {
    /// Parse documents from a file path
    fn parse(&self, path: &Path) -> Result<Vec<Node>, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse documents from string content
    fn parse_str(&self, content: &str) -> Result<Vec<Node>, ParseError>;

    /// Get format name
    fn format_name(&self) -> &str;
}
