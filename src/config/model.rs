//! Configuration data structures

use serde::{Deserialize, Serialize};

use crate::export::ExportKind;
use crate::format::Format;

/// User preferences of the Pathname Assistant
///
/// Every field has a default, so a partial or missing file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    /// Pathname format used when none is given on the command line
    pub format: Format,
    /// What is copied when no export kind is given on the command line
    pub export: ExportKind,
    /// Whether locations are sorted before they are copied
    pub sort: bool,
}

impl Config {
    /// Returns this configuration with any command-line choices applied
    pub fn with_overrides(
        mut self,
        format: Option<Format>,
        export: Option<ExportKind>,
        sort: bool,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(export) = export {
            self.export = export;
        }
        self.sort |= sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_preferences() {
        let config = Config::default().with_overrides(
            Some(Format::Uri),
            Some(ExportKind::Filenames),
            true,
        );

        assert_eq!(config.format, Format::Uri);
        assert_eq!(config.export, ExportKind::Filenames);
        assert!(config.sort);
    }

    #[test]
    fn test_missing_overrides_keep_preferences() {
        let stored = Config {
            format: Format::ReducedUnix,
            export: ExportKind::FilenameStems,
            sort: true,
        };

        assert_eq!(stored.with_overrides(None, None, false), stored);
    }
}
