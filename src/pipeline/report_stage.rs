//! Report output stage.

use super::{should_use_color, write_output, LoadedInput, OutputTarget, PipelineError};
use crate::config::OutputConfig;
use crate::diff::DiffResult;
use crate::error::ErrorContext;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};

/// Build the report configuration for a comparison of two loaded inputs.
#[must_use]
pub fn build_report_config(output: &OutputConfig, from: &LoadedInput, to: &LoadedInput) -> ReportConfig {
    ReportConfig {
        use_go_patch_paths: output.use_go_patch_paths,
        omit_header: output.omit_header,
        minor_change_threshold: output.minor_change_threshold,
        metadata: ReportMetadata {
            from_location: Some(from.location().to_string()),
            to_location: Some(to.location().to_string()),
            from_hash: Some(from.content_hash),
            to_hash: Some(to.content_hash),
            ..ReportMetadata::new()
        },
    }
}

/// Render the diff report and write it to the configured destination.
///
/// Colors are only used for a terminal on stdout, and never with
/// `--no-color` or `NO_COLOR`.
pub fn output_report(
    output: &OutputConfig,
    result: &DiffResult,
    from: &LoadedInput,
    to: &LoadedInput,
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(output.file.clone());
    let use_color = should_use_color(output.no_color) && target.is_terminal();
    let report_config = build_report_config(output, from, to);

    let reporter = create_reporter_with_options(output.format, use_color);
    tracing::debug!(format = %reporter.format(), use_color, "rendering report");

    let report = reporter
        .generate_diff_report(result, &report_config)
        .with_context(|| format!("rendering {} report", output.format))
        .map_err(|source| PipelineError::ReportFailed { source })?;

    write_output(&report, &target).map_err(|source| PipelineError::ReportFailed { source })
}
