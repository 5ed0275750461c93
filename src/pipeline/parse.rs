//! Input loading stage.

use super::PipelineError;
use crate::error::{ErrorContext, Result};
use crate::model::DocumentSet;
use crate::parsers::{parse_nodes, read_location};
use crate::utils::content_hash;

/// The documents of one input location plus the hash of its raw bytes
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub documents: DocumentSet,
    /// xxh3 hash of the raw content, reported in JSON output
    pub content_hash: u64,
}

impl LoadedInput {
    #[must_use]
    pub fn location(&self) -> &str {
        &self.documents.location
    }
}

/// Read and parse every document behind `location`.
pub fn load_input(location: &str) -> Result<LoadedInput> {
    let raw = read_location(location).context("reading input")?;
    let hash = content_hash(raw.as_bytes());
    let nodes = parse_nodes(&raw).context("parsing input")?;
    let documents = DocumentSet::new(location, nodes);

    tracing::info!(
        location,
        documents = documents.len(),
        bytes = raw.len(),
        "loaded input"
    );

    Ok(LoadedInput {
        documents,
        content_hash: hash,
    })
}

/// Load both inputs concurrently.
///
/// The `from` result is checked before the `to` result, so when both fail
/// the `from` error is the one returned.
pub fn load_pair(from: &str, to: &str) -> anyhow::Result<(LoadedInput, LoadedInput)> {
    let (from_result, to_result) = rayon::join(|| load_input(from), || load_input(to));

    let from_input = from_result.map_err(|source| PipelineError::LoadFailed {
        location: from.to_string(),
        source,
    })?;
    let to_input = to_result.map_err(|source| PipelineError::LoadFailed {
        location: to.to_string(),
        source,
    })?;

    Ok((from_input, to_input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemDiffError;
    use crate::model::Node;
    use crate::parsers::ParseError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_load_input_hashes_raw_content() {
        let file = temp_file("a: 1\n");
        let location = file.path().to_string_lossy().to_string();

        let input = load_input(&location).expect("load");
        assert_eq!(input.location(), location);
        assert_eq!(input.documents.len(), 1);
        assert_eq!(input.content_hash, content_hash(b"a: 1\n"));
    }

    #[test]
    fn test_load_pair_keeps_order() {
        let from = temp_file("a: 1\n");
        let to = temp_file("---\na: 2\n---\nb: 3\n");
        let (from_input, to_input) = load_pair(
            &from.path().to_string_lossy(),
            &to.path().to_string_lossy(),
        )
        .expect("load pair");

        assert_eq!(from_input.documents.len(), 1);
        assert_eq!(to_input.documents.len(), 2);
        assert!(matches!(from_input.documents.documents[0], Node::Mapping(_)));
    }

    #[test]
    fn test_load_pair_reports_from_failure_first() {
        let err = load_pair("/missing/from.yml", "/missing/to.yml").expect_err("both missing");
        let pipeline = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert!(matches!(
            pipeline,
            PipelineError::LoadFailed { location, .. } if location == "/missing/from.yml"
        ));
    }

    #[test]
    fn test_load_pair_reports_to_failure() {
        let from = temp_file("a: 1\n");
        let err = load_pair(&from.path().to_string_lossy(), "/missing/to.yml").expect_err("to missing");
        assert!(err.to_string().contains("/missing/to.yml"));
    }

    #[test]
    fn test_load_input_errors_carry_stage_context() {
        let err = load_input("/missing/input.yml").expect_err("missing");
        match err {
            SemDiffError::Parse { context, source } => {
                assert_eq!(context, "reading input");
                assert!(matches!(source, ParseError::IoError(_)));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }

        let file = temp_file("a: [unclosed\n");
        match load_input(&file.path().to_string_lossy()) {
            Err(SemDiffError::Parse { context, .. }) => assert_eq!(context, "parsing input"),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }
}
