//! Diff computation stage.

use super::{LoadedInput, PipelineError};
use crate::config::CompareConfig;
use crate::diff::{compare_document_sets, DiffResult};

/// Compare the documents of two loaded inputs.
///
/// Order changes are dropped afterwards when the config asks for it; the
/// engine itself always reports them.
pub fn compute_diff(
    config: &CompareConfig,
    from: &LoadedInput,
    to: &LoadedInput,
) -> Result<DiffResult, PipelineError> {
    tracing::info!(
        from = from.location(),
        to = to.location(),
        "Computing semantic diff..."
    );

    let diffs = compare_document_sets(&from.documents.documents, &to.documents.documents)
        .map_err(|source| PipelineError::DiffFailed { source })?;

    let mut result = DiffResult::new(diffs, from.documents.len());
    if config.ignore_order_changes {
        let before = result.diffs.len();
        result = result.ignore_order_changes();
        tracing::debug!(dropped = before - result.diffs.len(), "ignored order changes");
    }

    tracing::info!(
        "Diff complete: {} differences ({} additions, {} removals, {} modifications, {} order changes)",
        result.summary.total_diffs,
        result.summary.additions,
        result.summary.removals,
        result.summary.modifications,
        result.summary.order_changes
    );

    Ok(result)
}
