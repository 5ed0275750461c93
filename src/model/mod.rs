//! In-memory document model.
//!
//! Both YAML and JSON inputs are loaded into these structures before any
//! comparison happens:
//!
//! - [`Node`]: a mapping, sequence, scalar, null, or tagged value
//! - [`Path`]: a document index plus a chain of [`PathElement`]s
//! - [`DocumentSet`]: every top-level document of one input

mod document;
mod node;
mod path;

pub use document::DocumentSet;
pub use node::{Mapping, Node, NodeKind, TaggedNode};
pub use path::{Path, PathElement, PathParseError};
