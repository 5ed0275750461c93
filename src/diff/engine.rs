//! Structural comparison engine.
//!
//! The engine is a pure function of its two input trees: it holds no state
//! and takes no configuration. Diffs are returned depth-first in `from`
//! order, with the diff for a container placed ahead of the diffs of its
//! children.

use super::engine_lists::compare_lists;
use super::{Detail, Diff};
use crate::error::{Result, SemDiffError};
use crate::model::{Mapping, Node, Path};
use tracing::debug;

/// Compare two single-document trees starting at the root path.
pub fn compare_documents(from: &Node, to: &Node) -> Result<Vec<Diff>> {
    compare_objects(&Path::root(), from, to)
}

/// Compare two document sets index by index.
///
/// Both sets must hold the same number of documents. Each resulting diff
/// carries the index of the document it belongs to in its path.
pub fn compare_document_sets(from: &[Node], to: &[Node]) -> Result<Vec<Diff>> {
    if from.len() != to.len() {
        return Err(SemDiffError::document_count_mismatch(from.len(), to.len()));
    }

    let mut diffs = Vec::new();
    for (idx, (from_doc, to_doc)) in from.iter().zip(to).enumerate() {
        let doc_diffs = compare_objects(&Path::document(idx), from_doc, to_doc)?;
        debug!(document = idx, diffs = doc_diffs.len(), "compared document");
        diffs.extend(doc_diffs);
    }

    Ok(diffs)
}

/// Compare two values at `path`.
///
/// Null on one side is an addition or removal. Values of different kinds are
/// one atomic modification. Containers of the same kind are compared
/// recursively, scalars by native equality.
pub fn compare_objects(path: &Path, from: &Node, to: &Node) -> Result<Vec<Diff>> {
    match (from, to) {
        (Node::Null, Node::Null) => Ok(Vec::new()),
        (Node::Null, _) => Ok(vec![Diff::single(path.clone(), Detail::addition(to.clone()))]),
        (_, Node::Null) => Ok(vec![Diff::single(path.clone(), Detail::removal(from.clone()))]),

        _ if from.kind() != to.kind() => Ok(vec![modification(path, from, to)]),

        (Node::Mapping(from_map), Node::Mapping(to_map)) => compare_mappings(path, from_map, to_map),
        (Node::Sequence(from_list), Node::Sequence(to_list)) => compare_lists(path, from_list, to_list),

        (Node::Bool(_), _)
        | (Node::Int(_), _)
        | (Node::UInt(_), _)
        | (Node::Float(_), _)
        | (Node::String(_), _) => {
            if from == to {
                Ok(Vec::new())
            } else {
                Ok(vec![modification(path, from, to)])
            }
        }

        _ => Err(SemDiffError::unsupported_type(path, from.kind())),
    }
}

fn modification(path: &Path, from: &Node, to: &Node) -> Diff {
    Diff::single(path.clone(), Detail::modification(from.clone(), to.clone()))
}

/// Compare two mappings key by key.
///
/// Keys only in `from` become one removal holding all of them, keys only in
/// `to` one addition. That diff precedes the diffs of shared keys.
fn compare_mappings(path: &Path, from: &Mapping, to: &Mapping) -> Result<Vec<Diff>> {
    let mut children = Vec::new();
    let mut removed = Mapping::new();

    for (key, from_value) in from {
        match to.get(key) {
            Some(to_value) => {
                children.extend(compare_objects(&path.with_key(key.as_str()), from_value, to_value)?);
            }
            None => {
                removed.insert(key.as_str(), from_value.clone());
            }
        }
    }

    let added: Mapping = to
        .iter()
        .filter(|(key, _)| !from.contains_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut details = Vec::with_capacity(2);
    if !removed.is_empty() {
        details.push(Detail::removal(Node::Mapping(removed)));
    }
    if !added.is_empty() {
        details.push(Detail::addition(Node::Mapping(added)));
    }

    Ok(prepend(path, details, children))
}

/// Put a diff for `details` at `path` ahead of `children`, if there are any details.
pub(super) fn prepend(path: &Path, details: Vec<Detail>, children: Vec<Diff>) -> Vec<Diff> {
    if details.is_empty() {
        return children;
    }

    let mut diffs = Vec::with_capacity(children.len() + 1);
    diffs.push(Diff::new(path.clone(), details));
    diffs.extend(children);
    diffs
}
