//! Workflow engine
//!
//! This module contains the engine that applies the user's commands to a
//! session and produces the exported text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::clipboard::TextClipboard;
use crate::config::{Config, load_config, read_or_create, save_config};
use crate::export::ExportKind;
use crate::format::Format;
use crate::intake::location_from_entry;
use crate::session::{Command, Session};

/// Options for one run of the assistant
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Locations given on the command line
    pub entries: Vec<String>,
    /// Whether to append the locations on the clipboard
    pub paste: bool,
    /// Format chosen on the command line
    pub format: Option<Format>,
    /// Export kind chosen on the command line
    pub export: Option<ExportKind>,
    /// Whether to sort regardless of the preferences
    pub sort: bool,
    /// Indices of locations to remove, applied in the given order
    pub removals: Vec<usize>,
    /// Print the text rather than copying it
    pub to_stdout: bool,
    /// Store the effective format and export kind as preferences
    pub save_preferences: bool,
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The session after all commands were applied
    pub session: Session,
    /// The preferences in effect
    pub config: Config,
    /// Exported text; `None` if there was nothing to export
    pub text: Option<String>,
    /// Whether the text was put on the clipboard
    pub copied: bool,
}

/// Runs the assistant
///
/// This function orchestrates the steps:
/// 1. Read the preferences and apply command-line choices
/// 2. Append the locations from the command line, then from the clipboard
/// 3. Remove and sort locations
/// 4. Copy (or return) the exported text
///
/// # Errors
/// * Returns an error if the configuration cannot be read or written, an
///   entry is not a location, the clipboard has no locations when pasting,
///   or a removal index is out of range
pub fn run(options: &RunOptions, clipboard: &mut dyn TextClipboard) -> Result<RunOutcome> {
    // Step 1: Preferences
    let config_file_path = read_or_create(options.config_path.clone())?;
    let stored = load_config(&config_file_path)?;
    let config = stored.with_overrides(options.format, options.export, options.sort);
    if options.save_preferences {
        // `--sort` applies to this run only
        let preferences = Config {
            format: config.format,
            export: config.export,
            ..stored
        };
        save_config(&preferences, &config_file_path)?;
    }

    let mut session = Session::new(config.format);

    // Step 2: Locations
    let locations = options
        .entries
        .iter()
        .map(|entry| location_from_entry(entry))
        .collect::<crate::errors::Result<Vec<_>>>()?;
    session.append_locations(locations);

    if options.paste {
        let added = session
            .paste(clipboard)
            .context(Command::Paste.label())?;
        info!("Pasted {added} new locations");
    }

    // Step 3: Edit the list
    for &index in &options.removals {
        session
            .remove_location(index)
            .with_context(|| format!("Cannot remove location {index}"))?;
    }

    if config.sort && session.is_enabled(Command::SortLocations) && !session.sort_locations() {
        warn!("Locations from different file systems cannot be sorted; order kept");
    }

    // Step 4: Export
    let command = Command::copy(config.export);
    if !session.is_enabled(command) {
        info!("There are no locations to copy");
        return Ok(RunOutcome {
            session,
            config,
            text: None,
            copied: false,
        });
    }

    let (text, copied) = if options.to_stdout {
        (session.export(config.export), false)
    } else {
        let text = session
            .execute(command, clipboard)
            .context(command.label())?
            .unwrap_or_default();
        (text, true)
    };
    debug!("Exported {} as {}", config.export, config.format.key());

    Ok(RunOutcome {
        session,
        config,
        text: Some(text),
        copied,
    })
}
