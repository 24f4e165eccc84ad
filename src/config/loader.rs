//! Configuration loading functionality
//!
//! This module contains functions for reading and writing the preferences file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, info};
use serde_yaml::{from_str, to_string};

use crate::utils::find_project_folder;

use super::model::Config;

/// Loads a configuration from a file
///
/// A file that does not exist, or is empty, yields the default preferences.
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid YAML
pub fn load_config(file: &Path) -> Result<Config> {
    if !file.exists() {
        debug!(
            "Configuration file {} not found; using defaults",
            file.display()
        );
        return Ok(Config::default());
    }

    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    if content_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    debug!("Loaded configuration from {}: {config:?}", file.display());
    Ok(config)
}

/// Writes a configuration to a file, creating its directory if necessary
///
/// # Errors
/// Returns an error if the directory or the file cannot be written
pub fn save_config(config: &Config, file: &Path) -> Result<()> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            anyhow!(
                "Failed to create configuration directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }

    let content = to_string(config)?;
    fs::write(file, content).map_err(|e| {
        anyhow!(
            "Failed to write configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    info!("Preferences saved to {}", file.display());
    Ok(())
}

/// Resolves the configuration file path
///
/// An existing path is used as given; otherwise the file name is looked up in
/// the platform configuration directory.
///
/// # Errors
/// Returns an error if the configuration directory cannot be determined
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if config.exists() || config.is_absolute() {
        Ok(config)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(config))
    }
}
