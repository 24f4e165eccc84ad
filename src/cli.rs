use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, EXPORT_HELP, FORMAT_HELP, LIST_FORMATS_HELP,
    LOCAL_LOGGING_HELP, LOCATIONS_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, PASTE_HELP, QUIET_HELP,
    REMOVE_HELP, SAVE_PREFERENCES_HELP, SORT_HELP, STDOUT_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::export::ExportKind;
use crate::format::Format;
use crate::logging::LogLevel;
use crate::utils::find_project_folder;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `locations`: locations to append
/// - `paste`: append the locations on the clipboard
/// - `format`, `export`, `sort`, `remove`: what to produce
/// - `stdout`: print instead of copying
/// - `list_formats`, `save_preferences`
/// - `config`, `verbose`, `quiet`, `log_file`, `log_locally`
pub fn build_command() -> Command {
    let arg_locations = Arg::new("locations")
        .help(LOCATIONS_HELP)
        .num_args(0..)
        .action(ArgAction::Append);

    let arg_paste = Arg::new("paste")
        .short('p')
        .long("paste")
        .help(PASTE_HELP)
        .action(ArgAction::SetTrue);

    let arg_format = Arg::new("format")
        .short('f')
        .long("format")
        .help(FORMAT_HELP)
        .value_parser(|s: &str| s.parse::<Format>());

    let arg_export = Arg::new("export")
        .short('e')
        .long("export")
        .help(EXPORT_HELP)
        .value_parser(|s: &str| s.parse::<ExportKind>());

    let arg_sort = Arg::new("sort")
        .short('s')
        .long("sort")
        .help(SORT_HELP)
        .action(ArgAction::SetTrue);

    let arg_remove = Arg::new("remove")
        .short('r')
        .long("remove")
        .help(REMOVE_HELP)
        .value_parser(value_parser!(usize))
        .action(ArgAction::Append);

    let arg_stdout = Arg::new("stdout")
        .short('o')
        .long("stdout")
        .help(STDOUT_HELP)
        .action(ArgAction::SetTrue);

    let arg_list_formats = Arg::new("list_formats")
        .long("list-formats")
        .help(LIST_FORMATS_HELP)
        .action(ArgAction::SetTrue);

    let arg_save_preferences = Arg::new("save_preferences")
        .long("save-preferences")
        .help(SAVE_PREFERENCES_HELP)
        .action(ArgAction::SetTrue);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help(QUIET_HELP)
        .conflicts_with("verbose")
        .action(ArgAction::SetTrue);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_locations)
        .arg(arg_paste)
        .arg(arg_format)
        .arg(arg_export)
        .arg(arg_sort)
        .arg(arg_remove)
        .arg(arg_stdout)
        .arg(arg_list_formats)
        .arg(arg_save_preferences)
        .arg(arg_config)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
        .arg(arg_quiet)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from `--quiet` and the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_flags(matches.get_flag("quiet"), matches.get_count("verbose"))
}

pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        Ok(filename)
    } else {
        let folder = find_project_folder()?;
        let path = folder.config_dir().join(filename);
        let path_str = path
            .as_path()
            .to_str()
            .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
        Ok(path_str.to_string())
    }
}

pub fn get_config_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn get_format(matches: &ArgMatches) -> Option<Format> {
    matches.get_one::<Format>("format").copied()
}

pub fn get_export_kind(matches: &ArgMatches) -> Option<ExportKind> {
    matches.get_one::<ExportKind>("export").copied()
}

pub fn get_locations(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("locations")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Indices to remove, highest first so earlier removals do not shift later ones
pub fn get_removals(matches: &ArgMatches) -> Vec<usize> {
    let mut indices: Vec<usize> = matches
        .get_many::<usize>("remove")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command().get_matches_from(args)
    }

    #[test]
    fn test_defaults() {
        let matches = parse(&["pnassist"]);

        assert_eq!(get_format(&matches), None);
        assert_eq!(get_export_kind(&matches), None);
        assert!(get_locations(&matches).is_empty());
        assert!(get_removals(&matches).is_empty());
        assert_eq!(get_config_path(&matches), PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(get_verbosity(&matches), LogLevel::Info);
        assert!(!matches.get_flag("paste"));
        assert!(!matches.get_flag("stdout"));
    }

    #[test]
    fn test_format_and_export() {
        let matches = parse(&["pnassist", "-f", "reduced", "--export", "stems"]);

        assert_eq!(get_format(&matches), Some(Format::ReducedUnix));
        assert_eq!(get_export_kind(&matches), Some(ExportKind::FilenameStems));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = build_command().try_get_matches_from(["pnassist", "--format", "dos"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_locations_and_removals() {
        let matches = parse(&["pnassist", "/a", "/b", "-r", "0", "-r", "2", "-r", "0"]);

        assert_eq!(get_locations(&matches), vec!["/a", "/b"]);
        assert_eq!(get_removals(&matches), vec![2, 0]);
    }

    #[test]
    fn test_verbosity() {
        let matches = parse(&["pnassist", "-vv"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
    }

    #[test]
    fn test_quiet() {
        let matches = parse(&["pnassist", "--quiet"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Warning);

        let result = build_command().try_get_matches_from(["pnassist", "-q", "-v"]);
        assert!(result.is_err(), "--quiet and --verbose conflict");
    }

    #[test]
    fn test_local_log_file() {
        let matches = parse(&["pnassist", "-L", "-l", "here.log"]);
        assert_eq!(get_log_file(&matches).unwrap(), "here.log");
    }
}
