//! Between command handler.
//!
//! Implements the `between` subcommand for comparing two sets of documents.

use crate::config::{BetweenConfig, ConfigError, Validatable};
use crate::error::SemDiffError;
use crate::pipeline::{compute_diff, exit_codes, load_pair, output_report};
use anyhow::Result;

/// Run the between command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_between(config: BetweenConfig) -> Result<i32> {
    let errors: Vec<ConfigError> = config
        .output
        .validate()
        .into_iter()
        .chain(config.behavior.validate())
        .collect();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(SemDiffError::validation(messages.join("; ")).into());
    }

    let (from, to) = load_pair(&config.paths.from, &config.paths.to)?;
    let result = compute_diff(&config.compare, &from, &to)?;

    output_report(&config.output, &result, &from, &to)?;

    Ok(if config.behavior.set_exit_status {
        exit_codes::for_diff_count(result.diffs.len())
    } else {
        exit_codes::SUCCESS
    })
}
