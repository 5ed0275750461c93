//! List comparison for the diff engine.
//!
//! Lists whose entries are all mappings sharing an identifier key are matched
//! entry by entry through that identifier. Every other list is treated as a
//! bag of values matched by structural hash.

use super::engine::{compare_objects, prepend};
use super::result::coalesce_by_path;
use super::{Detail, Diff};
use crate::error::{Result, SemDiffError};
use crate::model::{Node, Path};
use crate::utils::structural_hash;
use std::collections::HashMap;

/// Candidate identifier keys, highest priority first.
pub const IDENTIFIER_KEYS: [&str; 3] = ["name", "key", "id"];

/// Determine the identifier key of a list, if it has one.
///
/// A list qualifies when it is non-empty, every entry is a mapping, and every
/// entry contains the key. Keys are tried in [`IDENTIFIER_KEYS`] order.
pub fn list_identifier(list: &[Node]) -> Option<&'static str> {
    if list.is_empty() {
        return None;
    }

    let mappings: Vec<_> = list.iter().map(Node::as_mapping).collect::<Option<_>>()?;

    IDENTIFIER_KEYS
        .into_iter()
        .find(|key| mappings.iter().all(|mapping| mapping.contains_key(key)))
}

pub(super) fn compare_lists(path: &Path, from: &[Node], to: &[Node]) -> Result<Vec<Diff>> {
    match (list_identifier(from), list_identifier(to)) {
        (Some(from_key), Some(to_key)) if from_key == to_key => {
            compare_identifier_lists(path, from, to, from_key)
        }
        _ => compare_positional_lists(path, from, to),
    }
}

/// Lookup of values by structural hash, confirmed by equality.
///
/// When several values are equal the first one wins.
struct HashIndex<'a> {
    values: Vec<&'a Node>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl<'a> HashIndex<'a> {
    fn new(values: Vec<&'a Node>) -> Self {
        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::with_capacity(values.len());
        for (idx, value) in values.iter().enumerate() {
            buckets.entry(structural_hash(value)).or_default().push(idx);
        }
        Self { values, buckets }
    }

    /// Index of the `occurrence`-th value equal to `value`, counting from zero.
    fn nth_position(&self, value: &Node, occurrence: usize) -> Option<usize> {
        self.buckets
            .get(&structural_hash(value))?
            .iter()
            .copied()
            .filter(|&idx| self.values[idx] == value)
            .nth(occurrence)
    }

    fn position(&self, value: &Node) -> Option<usize> {
        self.nth_position(value, 0)
    }

    fn contains(&self, value: &Node) -> bool {
        self.position(value).is_some()
    }
}

/// Numbers repeated values: the first `a` is occurrence 0, the second 1.
#[derive(Default)]
struct Occurrences(HashMap<usize, usize>);

impl Occurrences {
    /// Next occurrence of the value whose first position in `index` is `first`.
    fn next(&mut self, first: usize) -> usize {
        let count = self.0.entry(first).or_insert(0);
        let occurrence = *count;
        *count += 1;
        occurrence
    }
}

fn identifier_value<'a>(path: &Path, entry: &'a Node, identifier: &str) -> Result<&'a Node> {
    entry
        .as_mapping()
        .and_then(|mapping| mapping.get(identifier))
        .ok_or_else(|| SemDiffError::missing_identifier(path, identifier))
}

fn identifier_values<'a>(path: &Path, list: &'a [Node], identifier: &str) -> Result<Vec<&'a Node>> {
    list.iter()
        .map(|entry| identifier_value(path, entry, identifier))
        .collect()
}

/// Compare two lists whose entries are matched by the value of `identifier`.
///
/// Repeated identifiers pair up in order of appearance: the second `web` in
/// `from` is compared against the second `web` in `to`.
fn compare_identifier_lists(
    path: &Path,
    from: &[Node],
    to: &[Node],
    identifier: &str,
) -> Result<Vec<Diff>> {
    let from_ids = identifier_values(path, from, identifier)?;
    let to_ids = identifier_values(path, to, identifier)?;
    let from_index = HashIndex::new(from_ids.clone());
    let to_index = HashIndex::new(to_ids.clone());

    let mut children = Vec::new();
    let mut removed = Vec::new();
    let mut from_common = Vec::new();

    let mut seen = Occurrences::default();
    for (from_idx, (entry, id)) in from.iter().zip(&from_ids).enumerate() {
        let occurrence = seen.next(from_index.position(id).unwrap_or(from_idx));
        match to_index.nth_position(id, occurrence) {
            Some(to_idx) => {
                let entry_path = path.with_identifier(identifier, id.to_string());
                children.extend(compare_objects(&entry_path, entry, &to[to_idx])?);
                from_common.push((*id).clone());
            }
            None => removed.push(entry.clone()),
        }
    }

    let mut added = Vec::new();
    let mut to_common = Vec::new();

    let mut seen = Occurrences::default();
    for (to_idx, (entry, id)) in to.iter().zip(&to_ids).enumerate() {
        let occurrence = seen.next(to_index.position(id).unwrap_or(to_idx));
        if from_index.nth_position(id, occurrence).is_some() {
            to_common.push((*id).clone());
        } else {
            added.push(entry.clone());
        }
    }

    let mut details = Vec::with_capacity(3);
    if from_common != to_common {
        details.push(Detail::order_change(from_common, to_common));
    }
    push_removal_and_addition(&mut details, removed, added);

    Ok(prepend(path, details, coalesce_by_path(children)))
}

/// Compare two lists as bags of values.
///
/// Two singleton lists are compared slot against slot instead, so a changed
/// value inside a one-entry list is reported where it changed.
fn compare_positional_lists(path: &Path, from: &[Node], to: &[Node]) -> Result<Vec<Diff>> {
    match (from, to) {
        ([], []) => return Ok(Vec::new()),
        ([from_entry], [to_entry]) => {
            return compare_objects(&path.with_key("0"), from_entry, to_entry);
        }
        _ => {}
    }

    let from_index = HashIndex::new(from.iter().collect());
    let to_index = HashIndex::new(to.iter().collect());

    let (from_common, removed): (Vec<&Node>, Vec<&Node>) =
        from.iter().partition(|entry| to_index.contains(entry));
    let (to_common, added): (Vec<&Node>, Vec<&Node>) =
        to.iter().partition(|entry| from_index.contains(entry));

    let mut details = Vec::with_capacity(3);
    if from_common != to_common {
        details.push(Detail::order_change(cloned(&from_common), cloned(&to_common)));
    }
    push_removal_and_addition(&mut details, cloned(&removed), cloned(&added));

    Ok(prepend(path, details, Vec::new()))
}

fn push_removal_and_addition(details: &mut Vec<Detail>, removed: Vec<Node>, added: Vec<Node>) {
    if !removed.is_empty() {
        details.push(Detail::removal(Node::Sequence(removed)));
    }
    if !added.is_empty() {
        details.push(Detail::addition(Node::Sequence(added)));
    }
}

fn cloned(entries: &[&Node]) -> Vec<Node> {
    entries.iter().map(|entry| (*entry).clone()).collect()
}
