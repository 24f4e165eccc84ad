//! Turning text into locations
//!
//! Text on the clipboard or on the command line may hold plain paths,
//! `~`-prefixed paths or `file:` URIs, one per line.

use std::path::PathBuf;

use log::debug;
use url::Url;

use crate::constants::FILE_SCHEME_PREFIX;
use crate::errors::{Result, invalid_location_error};
use crate::location::Location;
use crate::utils::expand_path;

/// Converts a single entry to an absolute location
///
/// # Errors
/// Returns `InvalidLocation` for blank entries and for URIs that do not
/// denote a local file.
pub fn location_from_entry(entry: &str) -> Result<Location> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(invalid_location_error(entry, "empty entry"));
    }

    let path = if has_file_scheme(entry) {
        let url = Url::parse(entry).map_err(|e| invalid_location_error(entry, &e.to_string()))?;
        url.to_file_path()
            .map_err(|()| invalid_location_error(entry, "not a local file URI"))?
    } else {
        PathBuf::from(expand_path(entry))
    };

    let location = Location::new(path);
    Ok(Location::new(location.absolute_path()))
}

/// Extracts every location found in `text`, skipping lines that are not one
pub fn parse_locations(text: &str) -> Vec<Location> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match location_from_entry(line) {
            Ok(location) => Some(location),
            Err(e) => {
                debug!("Ignoring clipboard line: {e}");
                None
            }
        })
        .collect()
}

fn has_file_scheme(entry: &str) -> bool {
    entry
        .get(..FILE_SCHEME_PREFIX.len())
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(FILE_SCHEME_PREFIX))
}
