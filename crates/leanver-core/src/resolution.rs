//! Insertion-ordered map of resolution results.
//!
//! Greedy resolution reuses versions in the order they were chosen, so the
//! map keeps an explicit entry list next to a key index instead of relying
//! on the iteration order of a hash map.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Maps each raw range to the version chosen for it, or `None` when no
/// available version satisfies it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionMap {
    entries: Vec<(String, Option<String>)>,
    index: HashMap<String, usize>,
}

impl ResolutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for `range`.
    ///
    /// A range that is already present keeps its position and has its value
    /// replaced; the previous value is returned.
    pub fn insert(
        &mut self,
        range: impl Into<String>,
        version: Option<String>,
    ) -> Option<Option<String>> {
        let range = range.into();
        match self.index.get(&range) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, version)),
            None => {
                self.index.insert(range.clone(), self.entries.len());
                self.entries.push((range, version));
                None
            }
        }
    }

    /// The entry for `range`: `None` if the range was never resolved,
    /// `Some(None)` if it was resolved to nothing.
    pub fn get(&self, range: &str) -> Option<Option<&str>> {
        self.index
            .get(range)
            .map(|&slot| self.entries[slot].1.as_deref())
    }

    /// The version chosen for `range`, if any.
    pub fn version(&self, range: &str) -> Option<&str> {
        self.get(range).flatten()
    }

    pub fn contains_range(&self, range: &str) -> bool {
        self.index.contains_key(range)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(range, version)| (range.as_str(), version.as_deref()))
    }

    pub fn ranges(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(range, _)| range.as_str())
    }

    /// All values in insertion order, unresolved entries included.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(|(_, version)| version.as_deref())
    }

    /// Chosen versions in insertion order, skipping unresolved entries.
    /// A version chosen for several ranges appears once per range.
    pub fn chosen_versions(&self) -> impl Iterator<Item = &str> {
        self.values().flatten()
    }

    /// Distinct chosen versions in the order they were first chosen.
    pub fn distinct_versions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.chosen_versions()
            .filter(|version| seen.insert(*version))
            .collect()
    }

    /// Ranges no available version satisfied.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, version)| version.is_none())
            .map(|(range, _)| range.as_str())
    }

    /// Sorted copy, convenient for comparing against expected results.
    pub fn to_btree(&self) -> BTreeMap<String, Option<String>> {
        self.entries.iter().cloned().collect()
    }
}

impl FromIterator<(String, Option<String>)> for ResolutionMap {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (range, version) in iter {
            map.insert(range, version);
        }
        map
    }
}

impl IntoIterator for ResolutionMap {
    type Item = (String, Option<String>);
    type IntoIter = std::vec::IntoIter<(String, Option<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut map = ResolutionMap::new();
        map.insert("a", Some("1.0.0".to_string()));
        map.insert("b", None);
        let previous = map.insert("a", Some("2.0.0".to_string()));

        assert_eq!(previous, Some(Some("1.0.0".to_string())));
        assert_eq!(map.len(), 2);
        assert_eq!(map.ranges().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.version("a"), Some("2.0.0"));
    }

    #[test]
    fn get_distinguishes_missing_from_unresolved() {
        let mut map = ResolutionMap::new();
        map.insert("~9", None);
        assert_eq!(map.get("~9"), Some(None));
        assert_eq!(map.get("~8"), None);
        assert!(map.contains_range("~9"));
        assert!(!map.contains_range("~8"));
    }
}
