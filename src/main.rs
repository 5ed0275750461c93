//! semdiff: semantic diff for YAML and JSON documents
//!
//! Compares two sets of documents structurally and reports what changed.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use semdiff::{
    cli,
    config::{AppConfig, BehaviorConfig, CompareConfig, OutputConfig},
    reports::{ReportFormat, DEFAULT_MINOR_CHANGE_THRESHOLD},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "semdiff")]
#[command(version)]
#[command(about = "Semantic diff for YAML and JSON documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison finished (any number of differences, unless --set-exit-status)
    1  Error occurred
    N  Number of differences, capped at 255 (with --set-exit-status)

EXAMPLES:
    # Compare two Kubernetes manifests
    semdiff between old.yml new.yml

    # Compare stdin against a file, one line of output
    kubectl get deploy web -o yaml | semdiff between - web.yml -o brief

    # Machine-readable output with Go-Patch paths
    semdiff between old.json new.json -o json > diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `between` subcommand
#[derive(Parser)]
struct BetweenArgs {
    /// Location of the `from` documents: a file, `-` for stdin, or an http(s) URL
    from: String,

    /// Location of the `to` documents: a file, `-` for stdin, or an http(s) URL
    to: String,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Do not report order changes of lists
    #[arg(short, long)]
    ignore_order_changes: bool,

    /// Swap `from` and `to` before comparing
    #[arg(short, long)]
    swap: bool,

    /// Render paths Go-Patch style (/spec/containers/name=web/image)
    #[arg(short = 'g', long = "use-go-patch-style")]
    use_go_patch_style: bool,

    /// Leave out the report header
    #[arg(short = 'b', long)]
    omit_header: bool,

    /// Relative edit distance below which a string change is reported as minor
    #[arg(long)]
    minor_change_threshold: Option<f64>,

    /// Set the exit status to the number of differences (capped at 255)
    #[arg(long)]
    set_exit_status: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the documents of two locations
    #[command(visible_alias = "bw")]
    Between(BetweenArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or discover configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Between(args) => {
            let overrides = AppConfig {
                compare: CompareConfig {
                    ignore_order_changes: args.ignore_order_changes,
                    swap: args.swap,
                },
                output: OutputConfig {
                    format: args.output.unwrap_or_default(),
                    file: args.output_file,
                    no_color: cli.no_color,
                    use_go_patch_paths: args.use_go_patch_style,
                    omit_header: args.omit_header,
                    minor_change_threshold: args
                        .minor_change_threshold
                        .unwrap_or(DEFAULT_MINOR_CHANGE_THRESHOLD),
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    verbose: cli.verbose,
                    set_exit_status: args.set_exit_status,
                },
            };

            let (app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)
                    .context("failed to load configuration")?;
            if let Some(path) = loaded_from {
                tracing::info!("Using config file {}", path.display());
            }

            let config = cli::BetweenConfig::new(cli::ComparePaths::new(args.from, args.to), app_config);
            let exit_code = cli::run_between(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "semdiff", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => cli::run_config_schema(output.as_deref()),

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
        },
    }
}
