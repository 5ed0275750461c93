//! JSON document parser.

use super::traits::{DocumentParser, ParseError};
use crate::model::{Mapping, Node};
use serde_json::Value;

/// Parser for JSON input.
///
/// Several whitespace separated JSON values in one input are read as
/// consecutive documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for JsonParser {
    fn parse_str(&self, content: &str) -> Result<Vec<Node>, ParseError> {
        serde_json::Deserializer::from_str(content)
            .into_iter::<Value>()
            .map(|document| document.map(convert).map_err(ParseError::from))
            .collect()
    }

    fn format_name(&self) -> &str {
        "JSON"
    }
}

fn convert(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(number) => {
            if let Some(i) = number.as_i64() {
                Node::Int(i)
            } else if let Some(u) = number.as_u64() {
                Node::UInt(u)
            } else if let Some(f) = number.as_f64() {
                Node::Float(f)
            } else {
                Node::String(number.to_string())
            }
        }
        Value::String(s) => Node::String(s),
        Value::Array(items) => Node::Sequence(items.into_iter().map(convert).collect()),
        Value::Object(object) => Node::Mapping(
            object
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect::<Mapping>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_order_is_preserved() {
        let documents = JsonParser::new()
            .parse_str(r#"{"zeta": 1, "alpha": [true, null], "mid": 2.5}"#)
            .expect("valid JSON");
        assert_eq!(documents.len(), 1);

        let mapping = documents[0].as_mapping().expect("mapping");
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            mapping.get("alpha"),
            Some(&Node::Sequence(vec![Node::Bool(true), Node::Null]))
        );
        assert_eq!(mapping.get("mid"), Some(&Node::Float(2.5)));
    }

    #[test]
    fn test_concatenated_documents() {
        let documents = JsonParser::new()
            .parse_str("{\"a\": 1}\n{\"a\": 2}\n")
            .expect("valid JSON stream");
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_large_unsigned() {
        let documents = JsonParser::new()
            .parse_str("[18446744073709551615, -1]")
            .expect("valid JSON");
        assert_eq!(
            documents[0],
            Node::Sequence(vec![Node::UInt(u64::MAX), Node::Int(-1)])
        );
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let documents = JsonParser::new()
            .parse_str(r#"{"a": 1, "a": 2}"#)
            .expect("valid JSON");
        let mapping = documents[0].as_mapping().expect("mapping");
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("a"), Some(&Node::Int(2)));
    }

    #[test]
    fn test_invalid_json() {
        let err = JsonParser::new().parse_str("{\"a\": }").expect_err("invalid");
        assert!(matches!(err, ParseError::JsonError(_)));
    }
}
