//! Menu node model.
//!
//! A [`MenuNode`] is one entry of a top-bar navigation tree or a sidebar
//! tree. Nodes nest through `items`; insertion order is display order.

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::link::{is_external, normalize_link};

/// One entry in a navigation or sidebar tree.
///
/// Serializes with the field names the site renderer expects
/// (`text`, `link`, `items`, `collapsed`, `activeMatch`), omitting
/// absent values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// Display label.
    pub text: String,
    /// Path to a content page. Absent for grouping nodes and headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child nodes in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuNode>,
    /// Initial collapse state of a group in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Regular expression deciding when a nav entry is highlighted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

/// Compiled `activeMatch` pattern.
///
/// Compares and serializes as its source text.
#[derive(Clone, Debug)]
pub struct ActiveMatch(Regex);

impl ActiveMatch {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error when `pattern` is not a valid expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Pattern source as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the pattern matches `path` as given or in canonical form.
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.0.is_match(path) || self.0.is_match(&normalize_link(path))
    }
}

impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ActiveMatch {}

impl Serialize for ActiveMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Structural role of a [`MenuNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Has children. May also carry a link, which wins for click navigation.
    Group,
    /// Has a link and no children.
    Leaf,
    /// Has neither link nor children.
    Header,
}

impl MenuNode {
    /// Create a leaf node pointing at `link`.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            link: Some(link.into()),
            ..Self::header(text)
        }
    }

    /// Create a group node with the given children.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<MenuNode>) -> Self {
        Self {
            items,
            ..Self::header(text)
        }
    }

    /// Create an informational node with neither link nor children.
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items: Vec::new(),
            collapsed: None,
            active_match: None,
        }
    }

    /// Set the link, keeping any children.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the initial collapse state.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Set the `activeMatch` pattern.
    #[must_use]
    pub fn with_active_match(mut self, pattern: ActiveMatch) -> Self {
        self.active_match = Some(pattern);
        self
    }

    /// Structural role of this node.
    ///
    /// An empty `items` list counts as no children.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if !self.items.is_empty() {
            NodeKind::Group
        } else if self.link.is_some() {
            NodeKind::Leaf
        } else {
            NodeKind::Header
        }
    }

    /// Whether the link points outside the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.link.as_deref().is_some_and(is_external)
    }

    /// Whether this node should be highlighted for the page at `path`.
    ///
    /// Uses `activeMatch` when present. Otherwise the node is active when
    /// its normalized link equals `path` or is an ancestor of it at a
    /// segment boundary. The root link `/` only matches the root page.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if let Some(pattern) = &self.active_match {
            return pattern.is_match(path);
        }

        let Some(link) = self.link.as_deref() else {
            return false;
        };
        if is_external(link) {
            return false;
        }

        let link = normalize_link(link);
        let path = normalize_link(path);
        if link == "/" {
            return path == "/";
        }
        path == link
            || path
                .strip_prefix(link.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}
