//! Consistency checks over loaded menus.
//!
//! None of these run at render time. They back `sitenav check` and can be
//! used from a site's own test suite.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::link::{is_external, normalize_link, strip_link_root};
use crate::locale::LocaleConfig;
use crate::node::MenuNode;
use crate::walk::flatten_links;

/// Links occurring more than once in `tree`, compared after normalization.
///
/// Each duplicate is reported once, in order of its first occurrence.
#[must_use]
pub fn duplicate_links(tree: &[MenuNode]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for link in flatten_links(tree).map(normalize_link) {
        if !seen.insert(link.clone()) && reported.insert(link.clone()) {
            duplicates.push(link);
        }
    }
    duplicates
}

/// Source files that could back the page at a normalized internal link.
fn page_candidates(content_root: &Path, link: &str) -> [PathBuf; 2] {
    let relative = link.trim_start_matches('/');
    if relative.is_empty() {
        let index = content_root.join("index.md");
        return [index.clone(), index];
    }
    [
        content_root.join(format!("{relative}.md")),
        content_root.join(relative).join("index.md"),
    ]
}

/// Whether a markdown page exists for `link` under `content_root`.
///
/// `/guide/setup` is backed by `guide/setup.md` or `guide/setup/index.md`.
/// External links always count as existing.
#[must_use]
pub fn page_exists(content_root: &Path, link: &str) -> bool {
    if is_external(link) {
        return true;
    }
    let normalized = normalize_link(link);
    page_candidates(content_root, &normalized)
        .iter()
        .any(|candidate| candidate.is_file())
}

/// Internal links in `tree` with no page under `content_root`, as authored.
#[must_use]
pub fn dead_links<'a>(tree: &'a [MenuNode], content_root: &Path) -> Vec<&'a str> {
    flatten_links(tree)
        .filter(|link| !page_exists(content_root, link))
        .collect()
}

/// Entries present on only one side of a comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SetDiff {
    /// Present in the left set only, sorted.
    pub only_in_left: Vec<String>,
    /// Present in the right set only, sorted.
    pub only_in_right: Vec<String>,
}

impl SetDiff {
    fn between(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Self {
        Self {
            only_in_left: left.difference(right).cloned().collect(),
            only_in_right: right.difference(left).cloned().collect(),
        }
    }

    /// Whether both sides agree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Differences between two locales that should cover the same content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocaleDiff {
    /// Links (nav and sidebar) compared without locale link roots.
    pub links: SetDiff,
    /// Sidebar prefixes compared without locale link roots.
    pub prefixes: SetDiff,
}

impl LocaleDiff {
    /// Whether the locales are path-equivalent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.prefixes.is_empty()
    }
}

/// Compare the link structure of two locales modulo their link roots.
///
/// Links such as `/Algorithms/two-sum` in the root locale and
/// `/zh/Algorithms/two-sum` in a `/zh/` locale are considered equal.
/// External links are compared verbatim.
#[must_use]
pub fn compare_locales(left: &LocaleConfig, right: &LocaleConfig) -> LocaleDiff {
    let links = |locale: &LocaleConfig| -> BTreeSet<String> {
        locale
            .links()
            .map(|link| strip_link_root(link, &locale.link))
            .collect()
    };
    let prefixes = |locale: &LocaleConfig| -> BTreeSet<String> {
        locale
            .sidebar
            .entries()
            .iter()
            .map(|entry| strip_link_root(&entry.prefix, &locale.link))
            .collect()
    };

    LocaleDiff {
        links: SetDiff::between(&links(left), &links(right)),
        prefixes: SetDiff::between(&prefixes(left), &prefixes(right)),
    }
}
