//! Multi-document container.

use super::Node;

/// All top-level documents loaded from one input location.
///
/// A YAML stream with several `---` separated sections yields one entry in
/// `documents` per section, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    /// Where the documents were loaded from (path, URL, or `-` for stdin)
    pub location: String,
    pub documents: Vec<Node>,
}

impl DocumentSet {
    pub fn new(location: impl Into<String>, documents: Vec<Node>) -> Self {
        Self {
            location: location.into(),
            documents,
        }
    }

    /// A set holding exactly one document.
    pub fn single(location: impl Into<String>, document: Node) -> Self {
        Self::new(location, vec![document])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Human-friendly name of the location.
    #[must_use]
    pub fn display_location(&self) -> &str {
        if self.location == "-" {
            "<stdin>"
        } else {
            &self.location
        }
    }
}
