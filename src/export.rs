//! Export text for the clipboard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::LINE_SEPARATOR;
use crate::format::{Format, PathnameFormatter};
use crate::location::Location;
use crate::location_set::LocationSet;

/// What is exported for each location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExportKind {
    #[serde(rename = "filenames")]
    Filenames,
    #[serde(rename = "stems")]
    FilenameStems,
    #[default]
    #[serde(rename = "pathnames")]
    Pathnames,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [
        ExportKind::Filenames,
        ExportKind::FilenameStems,
        ExportKind::Pathnames,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ExportKind::Filenames => "filenames",
            ExportKind::FilenameStems => "stems",
            ExportKind::Pathnames => "pathnames",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filenames" => Ok(ExportKind::Filenames),
            "stems" | "filename-stems" => Ok(ExportKind::FilenameStems),
            "pathnames" => Ok(ExportKind::Pathnames),
            _ => Err(format!("Unknown export kind: {s}")),
        }
    }
}

/// Final segment of a location
///
/// A root has no final segment; its native pathname is used instead.
pub fn filename(location: &Location, formatter: &PathnameFormatter) -> String {
    location
        .file_name()
        .unwrap_or_else(|| formatter.to_display_string(location, Format::Native))
}

/// Filename up to, not including, its first dot
///
/// A dot in the first position does not start an extension, so names such as
/// `.gitignore` are their own stem. Any later dot does, even after a single
/// character: `a.txt` has the stem `a`.
pub fn filename_stem(filename: &str) -> &str {
    match filename.find('.') {
        Some(index) if index > 0 => &filename[..index],
        _ => filename,
    }
}

/// Builds the text for one export command
///
/// Entries are separated by a line feed; there is no trailing separator.
pub fn export_text(
    locations: &LocationSet,
    kind: ExportKind,
    format: Format,
    formatter: &PathnameFormatter,
) -> String {
    locations
        .iter()
        .map(|location| match kind {
            ExportKind::Filenames => filename(location, formatter),
            ExportKind::FilenameStems => filename_stem(&filename(location, formatter)).to_string(),
            ExportKind::Pathnames => formatter.to_display_string(location, format),
        })
        .collect::<Vec<String>>()
        .join(LINE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_stem() {
        assert_eq!(filename_stem("report.txt"), "report");
        assert_eq!(filename_stem("a.b.c"), "a");
        assert_eq!(filename_stem("a.txt"), "a");
        assert_eq!(filename_stem("x."), "x");
        assert_eq!(filename_stem("archive.tar.gz"), "archive");
        assert_eq!(filename_stem(".gitignore"), ".gitignore");
        assert_eq!(filename_stem("README"), "README");
        assert_eq!(filename_stem(""), "");
    }

    #[test]
    fn test_export_kind_from_str() {
        assert_eq!(
            ExportKind::from_str("filenames").unwrap(),
            ExportKind::Filenames
        );
        assert_eq!(
            ExportKind::from_str("Stems").unwrap(),
            ExportKind::FilenameStems
        );
        assert_eq!(
            ExportKind::from_str("pathnames").unwrap(),
            ExportKind::Pathnames
        );
        assert!(ExportKind::from_str("urls").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_filename_of_root_falls_back_to_pathname() {
        let formatter = PathnameFormatter::with_home(None::<String>);
        assert_eq!(filename(&Location::new("/"), &formatter), "/");
    }

    #[test]
    fn test_export_of_empty_set_is_empty() {
        let formatter = PathnameFormatter::with_home(None::<String>);
        for kind in ExportKind::ALL {
            assert_eq!(
                export_text(&LocationSet::new(), kind, Format::Native, &formatter),
                ""
            );
        }
    }
}
