//! File-system locations
//!
//! A [`Location`] is a path tagged with the file system it belongs to. Two
//! locations of different file systems are never ordered relative to each
//! other, which is why [`Location`] implements [`PartialOrd`] but not [`Ord`].

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// The file system that a location belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    /// The host file system
    #[default]
    Default,
    /// Any other file system, e.g. the contents of an archive
    Named(String),
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Default => write!(f, "default"),
            Provider::Named(name) => write!(f, "{name}"),
        }
    }
}

/// An immutable file-system location
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    provider: Provider,
    path: PathBuf,
}

impl Location {
    /// Creates a location on the host file system
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Location::with_provider(Provider::Default, path)
    }

    /// Creates a location on the given file system
    ///
    /// Redundant and trailing separators are dropped, so `/srv//a/` and
    /// `/srv/a` are the same location.
    pub fn with_provider(provider: Provider, path: impl Into<PathBuf>) -> Self {
        Location {
            provider,
            path: normalise(&path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Returns the absolute form of this location
    ///
    /// The path is made absolute lexically against the working directory; the
    /// file system is not consulted. If that fails the captured path is kept.
    pub fn absolute_path(&self) -> PathBuf {
        if self.path.is_absolute() {
            return self.path.clone();
        }
        match std::path::absolute(&self.path) {
            Ok(absolute) => normalise(&absolute),
            Err(_) => self.path.clone(),
        }
    }

    /// Final segment of the path, if there is one
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

// `..` is kept; resolving it needs the file system.
fn normalise(path: &Path) -> PathBuf {
    path.components().collect()
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.provider != other.provider {
            return None;
        }
        Some(self.path.cmp(&other.path))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Location::new(path)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Location::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_on_same_provider_are_ordered() {
        let a = Location::new("/a/b");
        let b = Location::new("/a/c");

        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn test_locations_on_different_providers_are_unordered() {
        let host = Location::new("/a");
        let archive = Location::with_provider(Provider::Named("zip".to_string()), "/a");

        assert_eq!(host.partial_cmp(&archive), None);
        assert_ne!(host, archive, "Same path on different providers is distinct");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            Location::new("/home/alice/report.txt").file_name(),
            Some("report.txt".to_string())
        );
        assert_eq!(Location::new("/").file_name(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_path_keeps_absolute_input() {
        let location = Location::new("/var/log/syslog");
        assert_eq!(location.absolute_path(), PathBuf::from("/var/log/syslog"));
    }

    #[cfg(unix)]
    #[test]
    fn test_redundant_separators_are_dropped() {
        assert_eq!(Location::new("/home//alice/x").path(), Path::new("/home/alice/x"));
        assert_eq!(Location::new("/home/alice/").path(), Path::new("/home/alice"));
        assert_eq!(Location::new("/srv/./a"), Location::new("/srv/a"));
        assert_eq!(Location::new("/srv/../a").path(), Path::new("/srv/../a"));
    }

    #[test]
    fn test_absolute_path_resolves_relative_input() {
        let location = Location::new("notes.txt");
        let absolute = location.absolute_path();

        assert!(absolute.is_absolute());
        assert!(absolute.ends_with("notes.txt"));
    }
}
