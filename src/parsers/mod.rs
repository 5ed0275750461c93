//! Document loading.
//!
//! Turns YAML and JSON input into [`DocumentSet`]s for the diff engine.
//!
//! ## Format Detection
//!
//! Content whose first non-whitespace character is `{` or `[` is parsed as
//! JSON, falling back to YAML when that fails. Everything else is parsed as a
//! YAML stream, where each `---` separated section becomes one document.
//!
//! ## Usage
//!
//! ```no_run
//! use semdiff::parsers::{parse_documents, parse_documents_str};
//!
//! let from = parse_documents("deployment.yml")?;
//! let to = parse_documents_str("---\nspec:\n  replicas: 3\n")?;
//! assert_eq!(to.len(), 1);
//! # Ok::<(), semdiff::parsers::ParseError>(())
//! ```

mod detection;
mod json;
mod location;
mod traits;
mod yaml;

pub use detection::{detect_format, InputFormat};
pub use json::JsonParser;
pub use location::{is_remote, read_location, MAX_INPUT_SIZE};
pub use traits::{DocumentParser, ParseError};
pub use yaml::YamlParser;

use crate::model::{DocumentSet, Node};

/// Parse every document contained in `content`.
///
/// Empty or whitespace-only content holds no documents.
pub fn parse_documents_str(content: &str) -> Result<DocumentSet, ParseError> {
    Ok(DocumentSet::new(String::new(), parse_nodes(content)?))
}

/// Load and parse every document behind `location`.
///
/// See [`read_location`] for the supported location forms.
pub fn parse_documents(location: &str) -> Result<DocumentSet, ParseError> {
    let content = read_location(location)?;
    Ok(DocumentSet::new(location, parse_nodes(&content)?))
}

pub(crate) fn parse_nodes(content: &str) -> Result<Vec<Node>, ParseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    detection::parse_detected(content)
}
