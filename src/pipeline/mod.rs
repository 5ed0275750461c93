//! Pipeline orchestration for `between` runs.
//!
//! load → compare → report, shared by the CLI handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{load_input, load_pair, LoadedInput};
pub use report_stage::{build_report_config, output_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse one input location
    #[error("Failed to load {location}: {source}")]
    LoadFailed {
        location: String,
        #[source]
        source: crate::error::SemDiffError,
    },

    /// Comparison failed
    #[error("Failed to compare input files: {source}")]
    DiffFailed {
        #[source]
        source: crate::error::SemDiffError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: crate::error::SemDiffError,
    },
}

/// Process exit codes
pub mod exit_codes {
    /// Success, or differences found without `--set-exit-status`
    pub const SUCCESS: i32 = 0;
    /// An error occurred
    pub const ERROR: i32 = 1;
    /// Upper bound of the difference count reported through the exit status
    pub const MAX_DIFF_STATUS: i32 = 255;

    /// Exit status for `count` differences under `--set-exit-status`.
    #[must_use]
    pub fn for_diff_count(count: usize) -> i32 {
        i32::try_from(count).map_or(MAX_DIFF_STATUS, |count| count.min(MAX_DIFF_STATUS))
    }
}
