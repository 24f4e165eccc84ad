//! Working session
//!
//! A [`Session`] owns the list of locations and the selected format. User
//! commands are applied to it explicitly; nothing reaches for a global.

use log::{debug, info};

use crate::clipboard::{TextClipboard, clipboard_locations};
use crate::errors::Result;
use crate::export::{ExportKind, export_text};
use crate::format::{Format, PathnameFormatter};
use crate::location::Location;
use crate::location_set::LocationSet;

/// What a command needs before it can be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    None,
    Locations,
    MultipleLocations,
}

/// The commands offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CopyFilenames,
    CopyFilenameStems,
    CopyPathnames,
    Paste,
    ClearLocations,
    SortLocations,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::CopyFilenames,
        Command::CopyFilenameStems,
        Command::CopyPathnames,
        Command::Paste,
        Command::ClearLocations,
        Command::SortLocations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::CopyFilenames => "Copy filenames",
            Command::CopyFilenameStems => "Copy filename stems",
            Command::CopyPathnames => "Copy pathnames",
            Command::Paste => "Paste",
            Command::ClearLocations => "Clear locations",
            Command::SortLocations => "Sort locations",
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Command::CopyFilenames
            | Command::CopyFilenameStems
            | Command::CopyPathnames
            | Command::ClearLocations => Requirement::Locations,
            Command::SortLocations => Requirement::MultipleLocations,
            Command::Paste => Requirement::None,
        }
    }

    /// Export carried out by a copy command
    pub fn export_kind(self) -> Option<ExportKind> {
        match self {
            Command::CopyFilenames => Some(ExportKind::Filenames),
            Command::CopyFilenameStems => Some(ExportKind::FilenameStems),
            Command::CopyPathnames => Some(ExportKind::Pathnames),
            _ => None,
        }
    }

    /// Copy command that carries out the given export
    pub fn copy(kind: ExportKind) -> Command {
        match kind {
            ExportKind::Filenames => Command::CopyFilenames,
            ExportKind::FilenameStems => Command::CopyFilenameStems,
            ExportKind::Pathnames => Command::CopyPathnames,
        }
    }
}

/// State of one user session
#[derive(Debug, Clone, Default)]
pub struct Session {
    locations: LocationSet,
    format: Format,
    formatter: PathnameFormatter,
}

impl Session {
    pub fn new(format: Format) -> Self {
        Session {
            locations: LocationSet::new(),
            format,
            formatter: PathnameFormatter::new(),
        }
    }

    pub fn with_formatter(format: Format, formatter: PathnameFormatter) -> Self {
        Session {
            locations: LocationSet::new(),
            format,
            formatter,
        }
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Whether `command` can be carried out with the current locations
    pub fn is_enabled(&self, command: Command) -> bool {
        match command.requirement() {
            Requirement::None => true,
            Requirement::Locations => !self.locations.is_empty(),
            Requirement::MultipleLocations => self.locations.len() > 1,
        }
    }

    pub fn append_locations<I>(&mut self, locations: I) -> usize
    where
        I: IntoIterator<Item = Location>,
    {
        let added = self.locations.append(locations);
        debug!(
            "Appended {added} locations, {} in the list",
            self.locations.len()
        );
        added
    }

    pub fn remove_location(&mut self, index: usize) -> Result<Location> {
        let removed = self.locations.delete_at(index)?;
        debug!("Removed location {index}: {removed}");
        Ok(removed)
    }

    pub fn clear_locations(&mut self) {
        self.locations.clear();
    }

    pub fn sort_locations(&mut self) -> bool {
        self.locations.sort()
    }

    /// The lines of the list view for the selected format
    pub fn display_lines(&self) -> Vec<String> {
        self.locations
            .iter()
            .map(|location| self.formatter.to_display_string(location, self.format))
            .collect()
    }

    pub fn export(&self, kind: ExportKind) -> String {
        export_text(&self.locations, kind, self.format, &self.formatter)
    }

    /// Appends the locations that are on the clipboard
    pub fn paste(&mut self, clipboard: &mut dyn TextClipboard) -> Result<usize> {
        let locations = clipboard_locations(clipboard)?;
        Ok(self.append_locations(locations))
    }

    /// Carries out a command
    ///
    /// Disabled commands are ignored. Copy commands put their text on the
    /// clipboard and also return it.
    pub fn execute(
        &mut self,
        command: Command,
        clipboard: &mut dyn TextClipboard,
    ) -> Result<Option<String>> {
        if !self.is_enabled(command) {
            debug!("{} is not available", command.label());
            return Ok(None);
        }

        if let Some(kind) = command.export_kind() {
            let text = self.export(kind);
            clipboard.write_text(&text)?;
            info!("{}: {} locations", command.label(), self.locations.len());
            return Ok(Some(text));
        }

        match command {
            Command::Paste => {
                self.paste(clipboard)?;
            }
            Command::ClearLocations => self.clear_locations(),
            Command::SortLocations => {
                self.sort_locations();
            }
            _ => {}
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn session_with(paths: &[&str]) -> Session {
        let mut session =
            Session::with_formatter(Format::Native, PathnameFormatter::with_home(Some("/home/alice")));
        session.append_locations(paths.iter().map(|p| Location::new(*p)));
        session
    }

    #[test]
    fn test_commands_disabled_without_locations() {
        let session = session_with(&[]);

        assert!(session.is_enabled(Command::Paste));
        assert!(!session.is_enabled(Command::CopyFilenames));
        assert!(!session.is_enabled(Command::CopyFilenameStems));
        assert!(!session.is_enabled(Command::CopyPathnames));
        assert!(!session.is_enabled(Command::ClearLocations));
        assert!(!session.is_enabled(Command::SortLocations));
    }

    #[test]
    fn test_sort_needs_two_locations() {
        let session = session_with(&["/a"]);
        assert!(session.is_enabled(Command::CopyPathnames));
        assert!(!session.is_enabled(Command::SortLocations));

        let session = session_with(&["/a", "/b"]);
        assert!(session.is_enabled(Command::SortLocations));
    }

    #[test]
    fn test_disabled_command_leaves_clipboard_alone() {
        let mut session = session_with(&[]);
        let mut clipboard = MemoryClipboard::with_text("untouched");

        let result = session.execute(Command::CopyPathnames, &mut clipboard).unwrap();

        assert_eq!(result, None);
        assert_eq!(clipboard.text.as_deref(), Some("untouched"));
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_pathnames_writes_clipboard() {
        let mut session = session_with(&["/home/alice/a.txt", "/srv/b.txt"]);
        session.set_format(Format::ReducedUnix);
        let mut clipboard = MemoryClipboard::default();

        let text = session.execute(Command::CopyPathnames, &mut clipboard).unwrap();

        assert_eq!(text.as_deref(), Some("~/a.txt\n/srv/b.txt"));
        assert_eq!(clipboard.text.as_deref(), Some("~/a.txt\n/srv/b.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_paste_then_sort_then_clear() {
        let mut session = session_with(&["/b"]);
        let mut clipboard = MemoryClipboard::with_text("/a\n/b\n/c");

        session.execute(Command::Paste, &mut clipboard).unwrap();
        assert_eq!(session.display_lines(), vec!["/b", "/a", "/c"]);

        session.execute(Command::SortLocations, &mut clipboard).unwrap();
        assert_eq!(session.display_lines(), vec!["/a", "/b", "/c"]);

        session.execute(Command::ClearLocations, &mut clipboard).unwrap();
        assert!(session.locations().is_empty());
    }

    #[test]
    fn test_paste_without_locations_is_an_error() {
        let mut session = session_with(&[]);
        let mut clipboard = MemoryClipboard::default();

        assert!(session.execute(Command::Paste, &mut clipboard).is_err());
    }

    #[test]
    fn test_copy_command_for_export_kind() {
        for kind in ExportKind::ALL {
            assert_eq!(Command::copy(kind).export_kind(), Some(kind));
        }
    }
}
