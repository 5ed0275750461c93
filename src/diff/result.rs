//! Diff result structures.

use crate::model::{Node, Path};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// The kind of a single change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Addition,
    Removal,
    Modification,
    OrderChange,
    /// Reserved for consumers that flag invalid input, never produced by the engine
    Illegal,
    /// Reserved for consumer warnings, never produced by the engine
    Attention,
}

impl DetailKind {
    /// Single-character marker used by the human report.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Removal => "-",
            Self::Modification => "±",
            Self::OrderChange => "⇆",
            Self::Illegal => "✕",
            Self::Attention => "⚠",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Removal => "removal",
            Self::Modification => "modification",
            Self::OrderChange => "order change",
            Self::Illegal => "illegal",
            Self::Attention => "attention",
        }
    }
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One typed change at a path.
///
/// `from` is `None` for additions and `to` is `None` for removals. Removals and
/// additions of mapping keys carry a mapping of all affected keys. List
/// removals and additions carry a sequence of the affected entries. Order
/// changes carry the common entries (or their identifiers) in `from` order and
/// in `to` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail {
    pub kind: DetailKind,
    pub from: Option<Node>,
    pub to: Option<Node>,
}

impl Detail {
    pub fn addition(to: Node) -> Self {
        Self {
            kind: DetailKind::Addition,
            from: None,
            to: Some(to),
        }
    }

    pub fn removal(from: Node) -> Self {
        Self {
            kind: DetailKind::Removal,
            from: Some(from),
            to: None,
        }
    }

    pub fn modification(from: Node, to: Node) -> Self {
        Self {
            kind: DetailKind::Modification,
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn order_change(from: Vec<Node>, to: Vec<Node>) -> Self {
        Self {
            kind: DetailKind::OrderChange,
            from: Some(Node::Sequence(from)),
            to: Some(Node::Sequence(to)),
        }
    }
}

/// All changes found at one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diff {
    pub path: Path,
    pub details: Vec<Detail>,
}

impl Diff {
    pub fn new(path: Path, details: Vec<Detail>) -> Self {
        Self { path, details }
    }

    /// A diff holding exactly one detail.
    pub fn single(path: Path, detail: Detail) -> Self {
        Self::new(path, vec![detail])
    }
}

/// Merge diffs that share a path into the first of them.
///
/// Order of first appearance is kept, as is the order of details.
pub(crate) fn coalesce_by_path(diffs: Vec<Diff>) -> Vec<Diff> {
    let mut merged: Vec<Diff> = Vec::with_capacity(diffs.len());
    let mut seen: HashMap<Path, usize> = HashMap::with_capacity(diffs.len());

    for diff in diffs {
        match seen.get(&diff.path) {
            Some(&idx) => merged[idx].details.extend(diff.details),
            None => {
                seen.insert(diff.path.clone(), merged.len());
                merged.push(diff);
            }
        }
    }

    merged
}

/// Complete result of comparing two document sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Ordered diffs, one per changed path
    pub diffs: Vec<Diff>,
    /// Number of documents in each compared set
    pub document_count: usize,
}

impl DiffResult {
    /// Wrap engine output and compute the summary.
    pub fn new(diffs: Vec<Diff>, document_count: usize) -> Self {
        let mut result = Self {
            summary: DiffSummary::default(),
            diffs,
            document_count,
        };
        result.calculate_summary();
        result
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        let mut summary = DiffSummary {
            total_diffs: self.diffs.len(),
            ..DiffSummary::default()
        };
        let mut documents = BTreeSet::new();

        for diff in &self.diffs {
            documents.insert(diff.path.document_index);
            for detail in &diff.details {
                match detail.kind {
                    DetailKind::Addition => summary.additions += 1,
                    DetailKind::Removal => summary.removals += 1,
                    DetailKind::Modification => summary.modifications += 1,
                    DetailKind::OrderChange => summary.order_changes += 1,
                    DetailKind::Illegal | DetailKind::Attention => {}
                }
            }
        }

        summary.documents_affected = documents.len();
        self.summary = summary;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Whether paths need a document suffix to be unambiguous.
    #[must_use]
    pub fn show_document_index(&self) -> bool {
        self.document_count > 1
    }

    /// Drop every order change, and every diff left without details.
    pub fn ignore_order_changes(mut self) -> Self {
        for diff in &mut self.diffs {
            diff.details
                .retain(|detail| detail.kind != DetailKind::OrderChange);
        }
        self.diffs.retain(|diff| !diff.details.is_empty());
        self.calculate_summary();
        self
    }

    /// Find the diff at a path.
    #[must_use]
    pub fn find(&self, path: &Path) -> Option<&Diff> {
        self.diffs.iter().find(|diff| &diff.path == path)
    }
}

/// Summary statistics for the diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub total_diffs: usize,
    pub additions: usize,
    pub removals: usize,
    pub modifications: usize,
    pub order_changes: usize,
    pub documents_affected: usize,
}
