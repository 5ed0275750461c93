//! **Semantic diff for YAML and JSON documents.**
//!
//! `semdiff` compares two sets of structured documents by meaning rather than
//! by text. Mapping key order never produces a difference, list entries
//! carrying a `name`, `key` or `id` field are matched by that identifier, and
//! every reported change carries a precise path such as
//! `spec.template.spec.containers.web.image`.
//!
//! It powers both a command-line interface and a Rust library.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the document tree ([`Node`]), paths into it ([`Path`]),
//!   and multi-document containers ([`DocumentSet`]).
//! - **[`parsers`]**: loads YAML streams and JSON from files, stdin or URLs.
//! - **[`diff`]**: the comparison engine and its result types ([`Diff`],
//!   [`Detail`], [`DiffResult`]).
//! - **[`reports`]**: `human`, `brief` and `json` report generators.
//! - **[`pipeline`]**: load → compare → report orchestration used by the CLI.
//! - **[`config`]**: layered configuration with config-file discovery.
//!
//! ## Comparing Two Documents
//!
//! ```
//! use semdiff::{compare_document_sets, parse_documents_str, DetailKind};
//!
//! let from = parse_documents_str("name: web\nreplicas: 2\n")?;
//! let to = parse_documents_str("replicas: 3\nname: web\n")?;
//!
//! let diffs = compare_document_sets(&from.documents, &to.documents)?;
//! assert_eq!(diffs.len(), 1);
//! assert_eq!(diffs[0].path.to_dot_style(false), "replicas");
//! assert_eq!(diffs[0].details[0].kind, DetailKind::Modification);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Rendering a Report
//!
//! ```
//! use semdiff::{compare_document_sets, parse_documents_str, DiffResult};
//! use semdiff::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
//!
//! let from = parse_documents_str("list: [a, b]\n")?;
//! let to = parse_documents_str("list: [a, b, c]\n")?;
//! let result = DiffResult::new(compare_document_sets(&from.documents, &to.documents)?, 1);
//!
//! let reporter = create_reporter_with_options(ReportFormat::Brief, false);
//! let report = reporter.generate_diff_report(&result, &ReportConfig::between("old.yml", "new.yml"))?;
//! assert_eq!(report, "between old.yml and new.yml: one difference\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, OutputConfig};
pub use config::{BetweenConfig, ComparePaths, ConfigError, Validatable};
pub use diff::{
    compare_document_sets, compare_documents, compare_objects, Detail, DetailKind, Diff, DiffResult,
    DiffSummary,
};
pub use error::{CompareErrorKind, ErrorContext, Result, SemDiffError};
pub use model::{DocumentSet, Mapping, Node, NodeKind, Path, PathElement};
pub use parsers::{parse_documents, parse_documents_str, DocumentParser, ParseError};
pub use reports::{ReportFormat, ReportGenerator};
