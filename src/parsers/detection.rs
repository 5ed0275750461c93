//! Input format detection.

use super::traits::{DocumentParser, ParseError};
use super::{JsonParser, YamlParser};
use crate::model::Node;
use tracing::debug;

/// Concrete syntax of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Guess the format from the first non-whitespace character.
///
/// Content opening with `{` or `[` is treated as JSON. Everything else is
/// YAML, which is also a superset of most JSON.
#[must_use]
pub fn detect_format(content: &str) -> InputFormat {
    match content.trim_start_matches('\u{feff}').trim_start().chars().next() {
        Some('{' | '[') => InputFormat::Json,
        _ => InputFormat::Yaml,
    }
}

/// Parse content in the detected format.
///
/// Content that looks like JSON but fails to parse as JSON is retried as
/// YAML, since YAML flow collections start with the same characters. If both
/// fail, the JSON error is reported.
pub(super) fn parse_detected(content: &str) -> Result<Vec<Node>, ParseError> {
    match detect_format(content) {
        InputFormat::Yaml => YamlParser::new().parse_str(content),
        InputFormat::Json => match JsonParser::new().parse_str(content) {
            Ok(documents) => Ok(documents),
            Err(json_err) => {
                debug!("content is not valid JSON, retrying as YAML: {json_err}");
                YamlParser::new().parse_str(content).map_err(|_| json_err)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_json() {
        assert_eq!(detect_format("  {\"a\": 1}"), InputFormat::Json);
        assert_eq!(detect_format("\n[1, 2]"), InputFormat::Json);
        assert_eq!(detect_format("\u{feff}{}"), InputFormat::Json);
    }

    #[test]
    fn test_detect_yaml() {
        assert_eq!(detect_format("a: 1"), InputFormat::Yaml);
        assert_eq!(detect_format("---\n- a"), InputFormat::Yaml);
        assert_eq!(detect_format(""), InputFormat::Yaml);
    }

    #[test]
    fn test_flow_yaml_falls_back() {
        let documents = parse_detected("[a, b]").expect("flow sequence is YAML");
        assert_eq!(documents, vec![Node::Sequence(vec!["a".into(), "b".into()])]);
    }

    #[test]
    fn test_invalid_everywhere_reports_json_error() {
        let err = parse_detected("{\"a\": [1, 2}").expect_err("invalid");
        assert!(matches!(err, ParseError::JsonError(_)), "{err}");
    }
}
