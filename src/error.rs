//! Unified error types for semdiff.
//!
//! This module provides the error hierarchy for the library, with a distinct
//! kind for each fatal comparison condition so callers can tell a bad input
//! apart from a loader or classification defect.

use crate::model::{NodeKind, Path};
use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for semdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SemDiffError {
    /// Errors while loading or parsing an input document
    #[error("Failed to load document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Fatal conditions raised by the comparison engine
    #[error("Comparison failed: {context}")]
    Compare {
        context: String,
        #[source]
        source: CompareErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Fatal comparison conditions.
///
/// None of these describe a document difference. They abort the whole
/// comparison and no partial diff list is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareErrorKind {
    /// The two document sets hold a different number of documents
    #[error("comparing inputs with a different number of documents is not supported ({from} vs {to})")]
    DocumentCountMismatch { from: usize, to: usize },

    /// A value of a kind the engine does not know how to compare
    #[error("unsupported type {kind} at {path}")]
    UnsupportedType { path: String, kind: String },

    /// An entry of an identifier-keyed list lost its identifier
    #[error("implementation issue: entry at {path} has no '{identifier}' key although its list was classified by it")]
    MissingIdentifier { path: String, identifier: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for semdiff operations
pub type Result<T> = std::result::Result<T, SemDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SemDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a comparison error with context
    pub fn compare(context: impl Into<String>, source: CompareErrorKind) -> Self {
        Self::Compare {
            context: context.into(),
            source,
        }
    }

    /// Document sets of different length cannot be compared
    pub fn document_count_mismatch(from: usize, to: usize) -> Self {
        Self::compare(
            "document count mismatch",
            CompareErrorKind::DocumentCountMismatch { from, to },
        )
    }

    /// The engine met a value kind it cannot compare
    pub fn unsupported_type(path: &Path, kind: NodeKind) -> Self {
        Self::compare(
            "unsupported type",
            CompareErrorKind::UnsupportedType {
                path: path.to_go_patch_style(true),
                kind: kind.name().to_string(),
            },
        )
    }

    /// An identifier-keyed list entry is missing its identifier
    pub fn missing_identifier(path: &Path, identifier: &str) -> Self {
        Self::compare(
            "invariant violation",
            CompareErrorKind::MissingIdentifier {
                path: path.to_go_patch_style(true),
                identifier: identifier.to_string(),
            },
        )
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The comparison error kind, if this is a comparison failure.
    #[must_use]
    pub const fn compare_kind(&self) -> Option<&CompareErrorKind> {
        match self {
            Self::Compare { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SemDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for SemDiffError {
    fn from(err: ParseError) -> Self {
        Self::parse(String::new(), err)
    }
}

impl From<ReportError> for SemDiffError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first, so the final message shows
/// the path through the code.
///
/// # Example
///
/// ```ignore
/// use semdiff::error::ErrorContext;
///
/// fn load(location: &str) -> Result<DocumentSet> {
///     parse_documents(location).with_context(|| format!("loading {location}"))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SemDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SemDiffError, new_ctx: &str) -> SemDiffError {
    match err {
        SemDiffError::Parse {
            context: existing,
            source,
        } => SemDiffError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SemDiffError::Compare {
            context: existing,
            source,
        } => SemDiffError::Compare {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SemDiffError::Report {
            context: existing,
            source,
        } => SemDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SemDiffError::Io {
            path,
            message,
            source,
        } => SemDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SemDiffError::Validation(msg) => SemDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
