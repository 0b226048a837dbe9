//! Configuration management commands.
//!
//! Configuration is loaded from TOML files and merged with environment variables
//! prefixed with `NANO_ADAPTER__`. For example, `NANO_ADAPTER__NANOINTERACTIVE__ENDPOINT`
//! will override `nanointeractive.endpoint` in the TOML file.

use std::fs;
use std::path::Path;

use nanointeractive_adapter::settings::Settings;
use validator::Validate;

use crate::error::CliError;

/// Load and merge configuration with environment variables.
///
/// Without a file the settings bundled with the adapter are used.
pub(crate) fn load_and_merge_config(
    file: Option<&Path>,
    verbose: bool,
) -> Result<(Settings, String), CliError> {
    let settings = match file {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            if verbose {
                eprintln!("Loading config from: {}", path.display());
                eprintln!("Environment variables with NANO_ADAPTER__ prefix will be merged");
            }
            Settings::from_toml(&content)
        }
        None => {
            if verbose {
                eprintln!("Using bundled config");
            }
            Settings::new()
        }
    }
    .map_err(|e| CliError::Config(format!("Failed to parse and merge config: {:?}", e)))?;

    settings
        .validate()
        .map_err(|e| CliError::Config(format!("Settings validation failed: {e}")))?;

    let merged_toml = settings
        .to_canonical_toml()
        .map_err(|e| CliError::Config(format!("Failed to serialize merged config: {e:?}")))?;

    Ok((settings, merged_toml))
}

/// Validate a configuration file and print a summary.
pub fn validate(file: &Path, verbose: bool) -> Result<(), CliError> {
    let (settings, merged_toml) = load_and_merge_config(Some(file), verbose)?;

    println!("Configuration is valid");
    println!("  File: {}", file.display());
    println!(
        "  NanoInteractive: {} ({})",
        if settings.nanointeractive.enabled {
            "enabled"
        } else {
            "disabled"
        },
        settings.nanointeractive.endpoint
    );
    println!("  Log level: {}", settings.logging.level_filter());

    if verbose {
        let value: toml::Value = toml::from_str(&merged_toml)?;
        if let Some(table) = value.as_table() {
            println!("\nSections found:");
            for key in table.keys() {
                println!("  - [{}]", key);
            }
        }
    }

    Ok(())
}
