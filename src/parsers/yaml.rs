//! YAML document parser.

use super::traits::{DocumentParser, ParseError};
use crate::model::{Mapping, Node, TaggedNode};
use serde::Deserialize;
use serde_yaml::Value;

/// Parser for YAML streams, one [`Node`] per `---` separated document.
///
/// Merge keys (`<<: *anchor`) are resolved before conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for YamlParser {
    fn parse_str(&self, content: &str) -> Result<Vec<Node>, ParseError> {
        serde_yaml::Deserializer::from_str(content)
            .map(|document| {
                let mut value = Value::deserialize(document)?;
                value.apply_merge()?;
                convert(value)
            })
            .collect()
    }

    fn format_name(&self) -> &str {
        "YAML"
    }
}

fn convert(value: Value) -> Result<Node, ParseError> {
    Ok(match value {
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
        Value::Sequence(items) => Node::Sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<_, _>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut converted = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = convert_key(key)?;
                if converted.contains_key(&key) {
                    return Err(ParseError::DuplicateKey(key));
                }
                converted.insert(key, convert(value)?);
            }
            Node::Mapping(converted)
        }
        Value::Tagged(tagged) => Node::Tagged(Box::new(TaggedNode {
            tag: tagged.tag.to_string(),
            value: convert(tagged.value)?,
        })),
    })
}

/// Mapping keys must be scalars; they are stored in their string form.
fn convert_key(key: Value) -> Result<String, ParseError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        other => {
            let rendered = serde_yaml::to_string(&other)
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| format!("{other:?}"));
            Err(ParseError::UnsupportedKey(rendered))
        }
    }
}
