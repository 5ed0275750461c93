//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per subcommand.

mod between;
mod config;

pub use between::run_between;
pub use config::{run_config_path, run_config_schema, run_config_show};

// Re-export config types used by handlers
pub use crate::config::{BetweenConfig, ComparePaths};
