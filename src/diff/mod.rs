//! Structural diff engine for document trees.
//!
//! # Architecture
//!
//! - [`compare_objects`] dispatches on the kinds of the two values and
//!   recurses into mappings and lists
//! - list entries are matched through an identifier key (see
//!   [`list_identifier`]) or by [structural hash](crate::utils::structural_hash)
//! - results are collected as [`Diff`] records and wrapped in a [`DiffResult`]
//!   for reporting
//!
//! # Example
//!
//! ```ignore
//! use semdiff::diff::{compare_document_sets, DiffResult};
//!
//! let diffs = compare_document_sets(&from.documents, &to.documents)?;
//! let result = DiffResult::new(diffs, from.len());
//! for diff in &result.diffs {
//!     println!("{}", diff.path);
//! }
//! ```

mod engine;
mod engine_lists;
mod result;

pub use engine::{compare_document_sets, compare_documents, compare_objects};
pub use engine_lists::{list_identifier, IDENTIFIER_KEYS};
pub use result::{Detail, DetailKind, Diff, DiffResult, DiffSummary};
