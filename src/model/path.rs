//! Addressing of locations inside a document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step of a [`Path`].
///
/// Without an identifier key the name is a mapping key or a stringified
/// sequence index. With an identifier key (`name`, `key`, or `id`) the element
/// addresses the entry of an identifier-keyed list whose identifier has the
/// given value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_key: Option<String>,
    pub name: String,
}

impl PathElement {
    /// A plain mapping key or sequence index.
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            identifier_key: None,
            name: name.into(),
        }
    }

    /// An entry of an identifier-keyed list, e.g. `name=web`.
    pub fn identified(identifier_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier_key: Some(identifier_key.into()),
            name: name.into(),
        }
    }
}

/// A position inside a document set: document index plus element chain.
///
/// Paths are values. Extending one always produces a new path and never
/// touches the storage of the original, so sibling branches of a recursive
/// walk cannot observe each other's elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    pub document_index: usize,
    pub elements: Vec<PathElement>,
}

impl Path {
    /// The root of the first document.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// The root of the document at `document_index`.
    #[must_use]
    pub fn document(document_index: usize) -> Self {
        Self {
            document_index,
            elements: Vec::new(),
        }
    }

    /// Return a new path with `element` appended.
    #[must_use]
    pub fn append(&self, element: PathElement) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);
        Self {
            document_index: self.document_index,
            elements,
        }
    }

    /// Shorthand for appending a plain key element.
    #[must_use]
    pub fn with_key(&self, name: impl Into<String>) -> Self {
        self.append(PathElement::key(name))
    }

    /// Shorthand for appending an identifier-keyed element.
    #[must_use]
    pub fn with_identifier(&self, identifier_key: &str, name: impl Into<String>) -> Self {
        self.append(PathElement::identified(identifier_key, name))
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render in dot style: `spec.containers.registry.image`.
    ///
    /// The root renders as `(root level)`. Elements named `.` are not escaped.
    #[must_use]
    pub fn to_dot_style(&self, show_document_index: bool) -> String {
        let body = if self.elements.is_empty() {
            "(root level)".to_string()
        } else {
            self.elements
                .iter()
                .map(|element| element.name.as_str())
                .collect::<Vec<_>>()
                .join(".")
        };

        self.with_document_suffix(body, show_document_index)
    }

    /// Render in Go-Patch style: `/spec/containers/name=registry/image`.
    #[must_use]
    pub fn to_go_patch_style(&self, show_document_index: bool) -> String {
        let body = self
            .elements
            .iter()
            .map(|element| match &element.identifier_key {
                Some(key) => format!("{key}={}", element.name),
                None => element.name.clone(),
            })
            .collect::<Vec<_>>()
            .join("/");

        self.with_document_suffix(format!("/{body}"), show_document_index)
    }

    fn with_document_suffix(&self, body: String, show_document_index: bool) -> String {
        if show_document_index {
            format!("{body}  (document #{})", self.document_index + 1)
        } else {
            body
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_go_patch_style(false))
    }
}

/// Errors produced when parsing a Go-Patch style path string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathParseError {
    #[error("path must not be empty")]
    Empty,

    #[error("path must start with '/' or '#<index>/', got '{0}'")]
    MissingLeadingSlash(String),

    #[error("invalid document index '{0}'")]
    InvalidDocumentIndex(String),

    #[error("path element '{0}' contains more than one '='")]
    AmbiguousElement(String),
}

/// Parse `/a/name=web/b`, optionally prefixed with a zero-based `#<index>`.
impl FromStr for Path {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }

        let (document_index, rest) = match s.strip_prefix('#') {
            Some(tail) => {
                let (index, rest) = tail.split_at(tail.find('/').unwrap_or(tail.len()));
                let index = index
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidDocumentIndex(index.to_string()))?;
                (index, rest)
            }
            None => (0, s),
        };

        let Some(body) = rest.strip_prefix('/') else {
            return Err(PathParseError::MissingLeadingSlash(s.to_string()));
        };

        let mut path = Self::document(document_index);
        if body.is_empty() {
            return Ok(path);
        }

        for section in body.split('/') {
            let mut parts = section.split('=');
            let element = match (parts.next(), parts.next(), parts.next()) {
                (Some(name), None, _) => PathElement::key(name),
                (Some(key), Some(name), None) => PathElement::identified(key, name),
                _ => return Err(PathParseError::AmbiguousElement(section.to_string())),
            };
            path.elements.push(element);
        }

        Ok(path)
    }
}
