//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from an explicit
//! path, the local directory, or the platform config directory, and merges
//! it with the command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use tmgraph::{
    TmGraphError,
    config::{AppConfig, ConfigError, GraphOptions},
};

use crate::Args;

/// Config file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "tmgraph/config.toml";

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tmgraph/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TmGraphError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(system_config) = system_config_path() {
        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Resolve the options for one run.
///
/// Flags can only switch options on; exclusion lists from the file and the
/// command line are combined.
pub fn resolve_options(config: &AppConfig, args: &Args) -> GraphOptions {
    let options = config.graph().to_options();
    let include_regex = options.include_regex() || args.enable_regex;
    let label_arrows = options.label_arrows() || args.label_arrows;
    let uncomment_regex = options.uncomment_regex() || args.uncomment_regex;

    options
        .with_exclude(args.exclude.iter().cloned())
        .with_regex(include_regex)
        .with_labels(label_arrows)
        .with_uncomment(uncomment_regex)
}

fn system_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "tmgraph", "tmgraph")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TmGraphError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    debug!(
        excluded_len = config.graph().to_options().excluded().count();
        "Configuration loaded",
    );

    Ok(config)
}
