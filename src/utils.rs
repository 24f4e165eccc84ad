use std::fs::create_dir_all;

use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

static USER_HOME: Lazy<Option<String>> = Lazy::new(|| {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
});

static SYSTEM_NAME: Lazy<String> = Lazy::new(|| system_name_for(std::env::consts::OS));

/// Pathname of the current user's home directory, read once per process
pub fn user_home_pathname() -> Option<&'static str> {
    USER_HOME.as_deref()
}

/// Human-readable name of the host operating system, read once per process
pub fn system_name() -> &'static str {
    SYSTEM_NAME.as_str()
}

fn system_name_for(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "macOS".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        other => other.to_string(),
    }
}

/// Expands `~` and environment variables in a path
///
/// Unknown variables are left untouched; only the tilde is expanded then.
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.into_owned(),
        Err(_) => tilde(path).into_owned(),
    }
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
