//! Ordered, duplicate-free collection of locations

use std::cmp::Ordering;

use indexmap::IndexSet;
use indexmap::set::Iter;
use log::debug;

use crate::errors::{Result, index_out_of_range_error};
use crate::location::Location;

/// The working collection of locations assembled by the user
///
/// Insertion order is kept until [`LocationSet::sort`] is called, and no two
/// elements are ever equal.
#[derive(Debug, Clone, Default)]
pub struct LocationSet {
    items: IndexSet<Location>,
}

impl LocationSet {
    pub fn new() -> Self {
        LocationSet::default()
    }

    /// Appends every location that is not already present, in first-seen order
    ///
    /// Returns the number of locations that were added.
    pub fn append<I>(&mut self, locations: I) -> usize
    where
        I: IntoIterator<Item = Location>,
    {
        let before = self.items.len();
        for location in locations {
            if !self.items.insert(location.clone()) {
                debug!("Skipping location already in the list: {location}");
            }
        }
        self.items.len() - before
    }

    /// Removes the location at `index`, shifting later locations down
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if there is no location at `index`; the set is
    /// left unchanged.
    pub fn delete_at(&mut self, index: usize) -> Result<Location> {
        let len = self.items.len();
        self.items
            .shift_remove_index(index)
            .ok_or_else(|| index_out_of_range_error(index, len))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sorts the locations by the native path ordering of their file system
    ///
    /// Sorting is abandoned as soon as two locations turn out to be
    /// incomparable (they belong to different file systems); the original
    /// order is then kept and `false` is returned. This is not an error.
    pub fn sort(&mut self) -> bool {
        let comparable = self
            .items
            .iter()
            .zip(self.items.iter().skip(1))
            .all(|(a, b)| a.partial_cmp(b).is_some());

        if !comparable {
            debug!("Locations belong to different file systems; sort abandoned");
            return false;
        }

        // Comparability is transitive within one file system, so the ordering
        // is total from here on.
        self.items
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.items.get_index(index)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.items.contains(location)
    }

    pub fn iter(&self) -> Iter<'_, Location> {
        self.items.iter()
    }
}

// Equality is positional; `IndexSet` alone would ignore order.
impl PartialEq for LocationSet {
    fn eq(&self, other: &Self) -> bool {
        self.items.iter().eq(other.items.iter())
    }
}

impl Eq for LocationSet {}

impl<'a> IntoIterator for &'a LocationSet {
    type Item = &'a Location;
    type IntoIter = Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Location> for LocationSet {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut set = LocationSet::new();
        set.append(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::location::Provider;

    fn locations(paths: &[&str]) -> Vec<Location> {
        paths.iter().map(|p| Location::new(*p)).collect()
    }

    fn paths(set: &LocationSet) -> Vec<String> {
        set.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_append_skips_duplicates() {
        let mut set = LocationSet::new();
        assert_eq!(set.append(locations(&["/a", "/b", "/a"])), 2);
        assert_eq!(set.append(locations(&["/b"])), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_append_preserves_first_seen_order() {
        let mut set = LocationSet::new();
        set.append(locations(&["/a", "/b", "/c"]));
        set.append(locations(&["/b", "/d"]));

        assert_eq!(paths(&set), vec!["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_delete_at_removes_one_element() {
        let mut set: LocationSet = locations(&["/a", "/b", "/c"]).into_iter().collect();

        let removed = set.delete_at(1).unwrap();

        assert_eq!(removed, Location::new("/b"));
        assert_eq!(paths(&set), vec!["/a", "/c"]);
    }

    #[test]
    fn test_delete_at_out_of_range_leaves_set_unchanged() {
        let mut set: LocationSet = locations(&["/a", "/b", "/c"]).into_iter().collect();

        let result = set.delete_at(3);

        assert!(matches!(
            result,
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(paths(&set), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_clear() {
        let mut set: LocationSet = locations(&["/a", "/b"]).into_iter().collect();
        set.clear();
        assert!(set.is_empty());

        // Clearing an empty set is a no-op
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_sort_orders_by_path() {
        let mut set: LocationSet = locations(&["/c", "/a/z", "/b", "/a"]).into_iter().collect();

        assert!(set.sort());
        assert_eq!(paths(&set), vec!["/a", "/a/z", "/b", "/c"]);
    }

    #[test]
    fn test_sort_across_providers_keeps_original_order() {
        let archive = Provider::Named("archive.zip".to_string());
        let mut set = LocationSet::new();
        set.append(vec![
            Location::new("/z"),
            Location::with_provider(archive.clone(), "/b"),
            Location::new("/a"),
            Location::with_provider(archive, "/a"),
        ]);
        let before = set.clone();

        assert!(!set.sort(), "Sort should report that it was abandoned");
        assert_eq!(set, before);
    }

    #[test]
    fn test_get_and_contains() {
        let set: LocationSet = locations(&["/a", "/b"]).into_iter().collect();

        assert_eq!(set.get(1), Some(&Location::new("/b")));
        assert_eq!(set.get(2), None);
        assert!(set.contains(&Location::new("/a")));
        assert!(!set.contains(&Location::new("/c")));
    }
}
