//! Path-prefix keyed sidebar table.
//!
//! A [`SidebarMap`] keeps its entries in authored order. Lookups pick the
//! entry whose prefix is the longest string prefix of the page path, the
//! same rule the site renderer applies.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::MenuError;
use crate::link::ensure_leading_slash;
use crate::node::MenuNode;

/// One sidebar tree and the path prefix it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Path prefix with a leading slash (e.g., `/Algorithms/Blind75/`).
    pub prefix: String,
    /// Top-level nodes of the sidebar.
    pub items: Vec<MenuNode>,
}

/// Table of sidebar trees keyed by unique path prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarMap {
    entries: Vec<SidebarEntry>,
}

impl SidebarMap {
    /// Create an empty sidebar map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sidebar map from `(prefix, items)` pairs, keeping their order.
    ///
    /// Prefixes without a leading slash get one. Two prefixes that are equal
    /// after that are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::DuplicatePrefix`] naming the second occurrence.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, MenuError>
    where
        I: IntoIterator<Item = (S, Vec<MenuNode>)>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (prefix, items) in entries {
            map.insert(prefix.as_ref(), items)?;
        }
        Ok(map)
    }

    /// Append an entry.
    fn insert(&mut self, prefix: &str, items: Vec<MenuNode>) -> Result<(), MenuError> {
        let normalized = ensure_leading_slash(prefix);
        if self.entries.iter().any(|e| e.prefix == normalized) {
            return Err(MenuError::DuplicatePrefix {
                prefix: prefix.to_owned(),
            });
        }
        self.entries.push(SidebarEntry {
            prefix: normalized.into_owned(),
            items,
        });
        Ok(())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in authored order.
    #[must_use]
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Sidebar stored under exactly `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[MenuNode]> {
        let prefix = ensure_leading_slash(prefix);
        self.entries
            .iter()
            .find(|e| e.prefix == prefix)
            .map(|e| e.items.as_slice())
    }

    /// Entry whose prefix is the longest prefix of `path`.
    #[must_use]
    pub fn resolve_entry(&self, path: &str) -> Option<&SidebarEntry> {
        let path = ensure_leading_slash(path);
        self.entries
            .iter()
            .filter(|e| path.starts_with(e.prefix.as_str()))
            .max_by_key(|e| e.prefix.len())
    }

    /// Sidebar for the page at `path`, or an empty slice if none applies.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &[MenuNode] {
        self.resolve_entry(path)
            .map(|e| e.items.as_slice())
            .unwrap_or_default()
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prefix, &entry.items)?;
        }
        map.end()
    }
}

/// Sidebar nodes for `path`: the entry with the longest matching prefix.
///
/// Returns an empty slice when no prefix matches; the caller decides what
/// to show instead.
///
/// # Examples
///
/// ```
/// use sitenav_menu::{MenuNode, SidebarMap, resolve_sidebar};
///
/// let map = SidebarMap::from_entries([
///     ("/guide/", vec![MenuNode::leaf("Setup", "/guide/setup")]),
/// ])
/// .unwrap();
///
/// assert_eq!(resolve_sidebar("/guide/setup", &map)[0].text, "Setup");
/// assert!(resolve_sidebar("/blog/", &map).is_empty());
/// ```
#[must_use]
pub fn resolve_sidebar<'a>(path: &str, map: &'a SidebarMap) -> &'a [MenuNode] {
    map.resolve(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn algorithms_map() -> SidebarMap {
        SidebarMap::from_entries([
            (
                "/Algorithms/",
                vec![MenuNode::leaf("Overview", "/Algorithms/")],
            ),
            (
                "/Algorithms/Blind75/",
                vec![
                    MenuNode::group(
                        "Introduction",
                        vec![MenuNode::leaf("Overview", "/Algorithms/Blind75/intro")],
                    ),
                    MenuNode::group(
                        "Array",
                        vec![MenuNode::leaf("Two Sum", "/Algorithms/Blind75/Array/two-sum")],
                    ),
                    MenuNode::group(
                        "Binary",
                        vec![MenuNode::leaf("Sum", "/Algorithms/Blind75/Binary/sum")],
                    ),
                ],
            ),
            (
                "/DataStructures/",
                vec![MenuNode::leaf("Heap", "/DataStructures/heap")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_longest_prefix_wins() {
        let map = algorithms_map();

        let sidebar = resolve_sidebar("/Algorithms/Blind75/intro", &map);

        let groups: Vec<_> = sidebar.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(groups, vec!["Introduction", "Array", "Binary"]);
    }

    #[test]
    fn test_resolve_returns_exact_entry_sequence() {
        let map = algorithms_map();

        for entry in map.entries() {
            assert_eq!(resolve_sidebar(&entry.prefix, &map), entry.items.as_slice());
        }
    }

    #[test]
    fn test_resolve_shorter_prefix_for_sibling_path() {
        let map = algorithms_map();

        let sidebar = resolve_sidebar("/Algorithms/DP/knapsack", &map);

        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].text, "Overview");
    }

    #[test]
    fn test_resolve_no_match_returns_empty() {
        let map = algorithms_map();

        assert!(resolve_sidebar("/blog/2024/hello", &map).is_empty());
        assert!(resolve_sidebar("", &map).is_empty());
    }

    #[test]
    fn test_resolve_on_empty_map_returns_empty() {
        assert!(resolve_sidebar("/anything", &SidebarMap::new()).is_empty());
    }

    #[test]
    fn test_resolve_path_without_leading_slash() {
        let map = algorithms_map();

        let sidebar = resolve_sidebar("DataStructures/heap", &map);

        assert_eq!(sidebar[0].text, "Heap");
    }

    #[test]
    fn test_resolve_entry_reports_prefix() {
        let map = algorithms_map();

        let entry = map.resolve_entry("/Algorithms/Blind75/Array/two-sum").unwrap();

        assert_eq!(entry.prefix, "/Algorithms/Blind75/");
    }

    #[test]
    fn test_from_entries_preserves_order() {
        let map = algorithms_map();

        let prefixes: Vec<_> = map.entries().iter().map(|e| e.prefix.as_str()).collect();

        assert_eq!(
            prefixes,
            vec!["/Algorithms/", "/Algorithms/Blind75/", "/DataStructures/"]
        );
    }

    #[test]
    fn test_from_entries_adds_leading_slash() {
        let items = vec![MenuNode::leaf("Setup", "/guide/setup")];

        let map = SidebarMap::from_entries([("guide/", items)]).unwrap();

        assert!(map.get("/guide/").is_some());
        assert!(map.get("guide/").is_some());
    }

    #[test]
    fn test_from_entries_rejects_duplicate_prefix() {
        let result = SidebarMap::from_entries([
            ("/guide/", Vec::new()),
            ("/blog/", Vec::new()),
            ("/guide/", Vec::new()),
        ]);

        let err = result.unwrap_err();
        assert!(
            matches!(&err, MenuError::DuplicatePrefix { prefix } if prefix == "/guide/"),
            "Expected DuplicatePrefix, got {err:?}"
        );
        assert!(err.to_string().contains("/guide/"));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_after_normalization() {
        let result = SidebarMap::from_entries([("/guide/", Vec::new()), ("guide/", Vec::new())]);

        assert!(matches!(
            result,
            Err(MenuError::DuplicatePrefix { prefix }) if prefix == "guide/"
        ));
    }

    #[test]
    fn test_get_missing_prefix_returns_none() {
        assert!(algorithms_map().get("/blog/").is_none());
    }

    #[test]
    fn test_serialization_preserves_entry_order() {
        let map = algorithms_map();

        let json = serde_json::to_string(&map).unwrap();

        let first = json.find("\"/Algorithms/\"").unwrap();
        let second = json.find("\"/Algorithms/Blind75/\"").unwrap();
        let third = json.find("\"/DataStructures/\"").unwrap();
        assert!(first < second && second < third);
    }
}
