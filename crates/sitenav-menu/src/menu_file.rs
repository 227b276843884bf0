//! YAML menu file loading.
//!
//! A menu file holds one locale's top-bar navigation and sidebar table:
//!
//! ```yaml
//! nav:
//!   - text: Algorithms
//!     link: /Algorithms/
//!     activeMatch: ^/Algorithms/
//! sidebar:
//!   /Algorithms/Blind75/:
//!     - text: Introduction
//!       items:
//!         - text: Overview
//!           link: /Algorithms/Blind75/intro
//! ```
//!
//! The file is parsed into permissive raw structures first so validation
//! can name the offending node instead of failing inside the YAML parser.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::node::{ActiveMatch, MenuNode};
use crate::sidebar::SidebarMap;

/// Parsed and validated menu file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MenuFile {
    /// Top-bar navigation.
    pub nav: Vec<MenuNode>,
    /// Sidebar table.
    pub sidebar: SidebarMap,
}

/// Node as written in YAML, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    text: Option<String>,
    link: Option<String>,
    items: Option<Vec<RawNode>>,
    collapsed: Option<bool>,
    active_match: Option<String>,
}

/// Sidebar as written in YAML: a prefix map, or a bare list applying to `/`.
#[derive(Debug, Default)]
struct RawSidebar(Vec<(String, Vec<RawNode>)>);

impl<'de> Deserialize<'de> for RawSidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = RawSidebar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of path prefixes to menu items, or a list of menu items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((prefix, items)) =
                    map.next_entry::<String, Option<Vec<RawNode>>>()?
                {
                    entries.push((prefix, items.unwrap_or_default()));
                }
                Ok(RawSidebar(entries))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(node) = seq.next_element()? {
                    items.push(node);
                }
                Ok(RawSidebar(vec![("/".to_owned(), items)]))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawSidebar::default())
            }
        }

        deserializer.deserialize_any(SidebarVisitor)
    }
}

/// Whole file as written in YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawMenuFile {
    nav: Option<Vec<RawNode>>,
    sidebar: Option<RawSidebar>,
}

impl MenuFile {
    /// Parse and validate a menu file from YAML content.
    ///
    /// Empty content yields an empty menu.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Parse`] for malformed YAML and the validation
    /// variants of [`MenuError`] for malformed nodes or duplicate prefixes.
    pub fn from_yaml_str(content: &str) -> Result<Self, MenuError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let raw: RawMenuFile = serde_yaml::from_str(trimmed)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a menu file.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Io`] if the file cannot be read, otherwise as
    /// [`MenuFile::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let menu = Self::from_yaml_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            nav_items = menu.nav.len(),
            sidebar_entries = menu.sidebar.len(),
            "Loaded menu file"
        );
        Ok(menu)
    }

    fn from_raw(raw: RawMenuFile) -> Result<Self, MenuError> {
        let nav = build_nodes(raw.nav.unwrap_or_default(), "nav")?;

        let mut entries = Vec::new();
        for (prefix, items) in raw.sidebar.unwrap_or_default().0 {
            let location = format!("sidebar[{prefix:?}]");
            let items = build_nodes(items, &location)?;
            entries.push((prefix, items));
        }
        let sidebar = SidebarMap::from_entries(entries)?;

        Ok(Self { nav, sidebar })
    }
}

fn build_nodes(raw: Vec<RawNode>, location: &str) -> Result<Vec<MenuNode>, MenuError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, node)| build_node(node, &format!("{location}[{i}]")))
        .collect()
}

fn build_node(raw: RawNode, location: &str) -> Result<MenuNode, MenuError> {
    let text = raw
        .text
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| MenuError::MissingText {
            location: location.to_owned(),
        })?;

    let active_match = raw
        .active_match
        .as_deref()
        .map(ActiveMatch::new)
        .transpose()
        .map_err(|source| MenuError::InvalidPattern {
            location: location.to_owned(),
            source,
        })?;

    let items = build_nodes(raw.items.unwrap_or_default(), &format!("{location}.items"))?;

    Ok(MenuNode {
        text,
        link: raw.link,
        items,
        collapsed: raw.collapsed,
        active_match,
    })
}
