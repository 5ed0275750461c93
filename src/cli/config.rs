//! Config command handlers.

use crate::config::{discover_config_file, generate_json_schema, load_or_default};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the JSON schema of the config file, or write it to `output`.
pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema().context("failed to serialize config schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{schema}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}

/// Print the effective configuration (defaults merged with the config file).
pub fn run_config_show(explicit: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = load_or_default(explicit)?;
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Print where config files are looked for and which one is active.
pub fn run_config_path(explicit: Option<&Path>) -> Result<()> {
    let search_paths: [Option<PathBuf>; 3] = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("semdiff")),
        dirs::home_dir(),
    ];
    eprintln!("Config file search paths (in order, git root after the current directory):");
    for path in search_paths.into_iter().flatten() {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    match discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(())
}
