//! Page position within a menu tree: breadcrumbs and previous/next links.

use serde::Serialize;

use crate::link::{is_external, normalize_link};
use crate::node::MenuNode;
use crate::walk::walk;

/// Previous and next pages around the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pager<'a> {
    /// Page before the current one in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a MenuNode>,
    /// Page after the current one in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a MenuNode>,
}

/// Whether `node` links to the page whose normalized path is `target`.
fn links_to(node: &MenuNode, target: &str) -> bool {
    node.link
        .as_deref()
        .is_some_and(|link| !is_external(link) && normalize_link(link) == target)
}

/// Chain of nodes from a top-level node down to the node linking to `path`.
///
/// The first match in depth-first order wins. Returns an empty vector
/// when no node links to `path`.
#[must_use]
pub fn active_trail<'a>(tree: &'a [MenuNode], path: &str) -> Vec<&'a MenuNode> {
    fn find<'a>(nodes: &'a [MenuNode], target: &str, trail: &mut Vec<&'a MenuNode>) -> bool {
        for node in nodes {
            trail.push(node);
            if links_to(node, target) || find(&node.items, target, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let target = normalize_link(path);
    let mut trail = Vec::new();
    if find(tree, &target, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

/// Previous and next internal pages around `path` in flattened tree order.
///
/// External links are skipped. Both sides are `None` when `path` is not
/// linked from the tree.
#[must_use]
pub fn pager<'a>(tree: &'a [MenuNode], path: &str) -> Pager<'a> {
    let target = normalize_link(path);
    let pages: Vec<&MenuNode> = walk(tree)
        .map(|(_, node)| node)
        .filter(|node| node.link.as_deref().is_some_and(|l| !is_external(l)))
        .collect();

    let Some(pos) = pages.iter().position(|node| links_to(node, &target)) else {
        return Pager::default();
    };

    Pager {
        prev: pos.checked_sub(1).map(|i| pages[i]),
        next: pages.get(pos + 1).copied(),
    }
}
