/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "uk";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "blankaspect";

/// Application name used for identification
///
/// This is the name of the application used in configuration file paths.
pub const APPLICATION: &str = "pathnameAssistant";

/// Text that replaces the user's home directory in reduced pathnames
pub const USER_HOME_PREFIX: &str = "~";

/// Separator placed between the lines of exported text
pub const LINE_SEPARATOR: &str = "\n";

/// Scheme prefix of a location given as a URI
pub const FILE_SCHEME_PREFIX: &str = "file:";

/// Environment variable that starts `pnassist` as a clipboard keeper
pub const CLIPBOARD_KEEPER_ENV: &str = "PNASSIST_CLIPBOARD_KEEPER";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read preferences from a specific config file";

/// Help text for the locations positional argument
pub const LOCATIONS_HELP: &str = "File-system locations to append (paths or file: URIs)";

/// Help text for the paste command-line option
pub const PASTE_HELP: &str = "Append the file-system locations that are on the clipboard";

/// Help text for the format command-line option
pub const FORMAT_HELP: &str = "Pathname format: native, unix, reduced or uri";

/// Help text for the export command-line option
pub const EXPORT_HELP: &str = "What to copy: filenames, stems or pathnames";

/// Help text for the sort command-line option
pub const SORT_HELP: &str = "Sort the locations before copying them";

/// Help text for the remove command-line option
pub const REMOVE_HELP: &str = "Remove the location at the given index (can be used multiple times)";

/// Help text for the stdout command-line option
pub const STDOUT_HELP: &str = "Print the text instead of copying it to the clipboard";

/// Help text for the list-formats command-line option
pub const LIST_FORMATS_HELP: &str = "Print the available pathname formats and exit";

/// Help text for the save-preferences command-line option
pub const SAVE_PREFERENCES_HELP: &str = "Store the chosen format and export kind as defaults";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only report warnings and errors";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Name of the log file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Write the log file in the working directory";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Default name of the log file; an empty name disables file logging
pub const LOG_FILE_DEFAULT: &str = "pnassist.log";
