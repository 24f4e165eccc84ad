//! Pathname formats
//!
//! A [`Format`] selects how a [`Location`] is rendered as text. The rendering
//! itself is done by [`PathnameFormatter`], which carries the home directory
//! used by [`Format::ReducedUnix`].

use std::fmt;
use std::path::MAIN_SEPARATOR;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::USER_HOME_PREFIX;
use crate::location::Location;
use crate::utils::user_home_pathname;

/// The available formats of the pathname of a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Format {
    /// Elements separated with the platform separator ('/' or '\')
    #[default]
    #[serde(rename = "native")]
    Native,
    /// Elements separated with '/'
    #[serde(rename = "unix")]
    UnixSeparator,
    /// Elements separated with '/', the home directory shown as '~'
    #[serde(rename = "reduced")]
    ReducedUnix,
    /// A `file:` URI
    #[serde(rename = "uri")]
    Uri,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::Native,
        Format::UnixSeparator,
        Format::ReducedUnix,
        Format::Uri,
    ];

    /// Name used on the command line and in the configuration file
    pub fn key(self) -> &'static str {
        match self {
            Format::Native => "native",
            Format::UnixSeparator => "unix",
            Format::ReducedUnix => "reduced",
            Format::Uri => "uri",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Native => "Native",
            Format::UnixSeparator => "Unix separator",
            Format::ReducedUnix => "Reduced Unix",
            Format::Uri => "URI",
        }
    }

    /// Label for presentation; the native format names the operating system
    pub fn label_with_os(self, os_name: Option<&str>) -> String {
        match (self, os_name) {
            (Format::Native, Some(os)) if !os.is_empty() => format!("{} ({os})", self.label()),
            _ => self.label().to_string(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Format::Native),
            "unix" | "unix-separator" => Ok(Format::UnixSeparator),
            "reduced" | "reduced-unix" => Ok(Format::ReducedUnix),
            "uri" => Ok(Format::Uri),
            _ => Err(format!("Unknown pathname format: {s}")),
        }
    }
}

/// Converts locations to text in any [`Format`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathnameFormatter {
    home: Option<String>,
}

impl Default for PathnameFormatter {
    fn default() -> Self {
        PathnameFormatter::new()
    }
}

impl PathnameFormatter {
    /// Formatter that reduces against the current user's home directory
    pub fn new() -> Self {
        PathnameFormatter {
            home: user_home_pathname().map(str::to_string),
        }
    }

    /// Formatter that reduces against the given home directory, or never
    pub fn with_home<S: Into<String>>(home: Option<S>) -> Self {
        PathnameFormatter {
            home: home.map(Into::into),
        }
    }

    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    pub fn to_display_string(&self, location: &Location, format: Format) -> String {
        let absolute = location.absolute_path();
        let native = absolute.to_string_lossy();
        match format {
            Format::Native => native.into_owned(),
            Format::UnixSeparator => to_unix_separators(&native),
            Format::ReducedUnix => to_unix_separators(&self.reduce_home(&native)),
            Format::Uri => match Url::from_file_path(&absolute) {
                Ok(url) => url.to_string(),
                Err(()) => format!("file://{}", to_unix_separators(&native)),
            },
        }
    }

    /// Replaces a leading home directory with `~`
    ///
    /// The home directory only matches whole path segments, so a home of
    /// `/home/bob` leaves `/home/bobby` alone.
    fn reduce_home(&self, pathname: &str) -> String {
        let Some(home) = self.home.as_deref() else {
            return pathname.to_string();
        };
        let home = home.trim_end_matches(MAIN_SEPARATOR);
        if home.is_empty() {
            return pathname.to_string();
        }

        match pathname.strip_prefix(home) {
            Some(rest) if rest.is_empty() || rest.starts_with(MAIN_SEPARATOR) => {
                format!("{USER_HOME_PREFIX}{rest}")
            }
            _ => pathname.to_string(),
        }
    }
}

fn to_unix_separators(pathname: &str) -> String {
    pathname.replace(MAIN_SEPARATOR, "/")
}
