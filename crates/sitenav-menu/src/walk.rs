//! Depth-first traversal of menu trees.
//!
//! Both iterators are lazy and borrow the tree. They are `Clone`, so a
//! traversal can be restarted from any point, and calling [`walk`] or
//! [`flatten_links`] again always yields the same sequence.

use std::iter::FusedIterator;
use std::slice;

use crate::node::MenuNode;

/// Pre-order, order-preserving iterator over every node of a tree.
///
/// Yields `(depth, node)` pairs where top-level nodes have depth 0.
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    stack: Vec<slice::Iter<'a, MenuNode>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let level = self.stack.last_mut()?;
            if let Some(node) = level.next() {
                if !node.items.is_empty() {
                    self.stack.push(node.items.iter());
                }
                return Some((depth, node));
            }
            self.stack.pop();
        }
    }
}

impl FusedIterator for Walk<'_> {}

/// Walk every node of `tree` depth-first.
#[must_use]
pub fn walk(tree: &[MenuNode]) -> Walk<'_> {
    Walk {
        stack: vec![tree.iter()],
    }
}

/// Iterator over the `link` values of a tree in depth-first order.
///
/// Created by [`flatten_links`].
#[derive(Clone, Debug)]
pub struct Links<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .by_ref()
            .find_map(|(_, node)| node.link.as_deref())
    }
}

impl FusedIterator for Links<'_> {}

/// All links reachable in `tree`, depth-first and in display order.
///
/// Group nodes that carry a link contribute it before their children.
/// Links are yielded as authored; see [`normalize_link`](crate::normalize_link)
/// for comparison.
///
/// # Examples
///
/// ```
/// use sitenav_menu::{MenuNode, flatten_links};
///
/// let tree = vec![
///     MenuNode::group("Array", vec![MenuNode::leaf("Two Sum", "/array/two-sum")]),
///     MenuNode::leaf("Binary", "/binary"),
/// ];
///
/// let links: Vec<_> = flatten_links(&tree).collect();
/// assert_eq!(links, ["/array/two-sum", "/binary"]);
/// ```
#[must_use]
pub fn flatten_links(tree: &[MenuNode]) -> Links<'_> {
    Links { walk: walk(tree) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn blind75() -> Vec<MenuNode> {
        vec![
            MenuNode::group(
                "Introduction",
                vec![MenuNode::leaf("Overview", "/Algorithms/Blind75/intro")],
            ),
            MenuNode::group(
                "Array",
                vec![
                    MenuNode::leaf("Two Sum", "/Algorithms/Blind75/Array/two-sum"),
                    MenuNode::group(
                        "Window",
                        vec![MenuNode::leaf(
                            "Max Subarray",
                            "/Algorithms/Blind75/Array/max-subarray",
                        )],
                    ),
                ],
            ),
            MenuNode::group(
                "Binary",
                vec![MenuNode::leaf("Sum of Two Integers", "/Algorithms/Blind75/Binary/sum")],
            ),
        ]
    }

    #[test]
    fn test_walk_empty_tree_yields_nothing() {
        assert_eq!(walk(&[]).count(), 0);
    }

    #[test]
    fn test_walk_pre_order_with_depth() {
        let tree = blind75();

        let visited: Vec<_> = walk(&tree)
            .map(|(depth, node)| (depth, node.text.as_str()))
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, "Introduction"),
                (1, "Overview"),
                (0, "Array"),
                (1, "Two Sum"),
                (1, "Window"),
                (2, "Max Subarray"),
                (0, "Binary"),
                (1, "Sum of Two Integers"),
            ]
        );
    }

    #[test]
    fn test_flatten_links_depth_first_order() {
        let tree = blind75();

        let links: Vec<_> = flatten_links(&tree).collect();

        assert_eq!(
            links,
            vec![
                "/Algorithms/Blind75/intro",
                "/Algorithms/Blind75/Array/two-sum",
                "/Algorithms/Blind75/Array/max-subarray",
                "/Algorithms/Blind75/Binary/sum",
            ]
        );
    }

    #[test]
    fn test_flatten_links_counts_every_leaf_link() {
        let tree = blind75();
        let leaves = walk(&tree)
            .filter(|(_, node)| node.items.is_empty() && node.link.is_some())
            .count();

        assert_eq!(flatten_links(&tree).count(), leaves);
    }

    #[test]
    fn test_flatten_links_is_idempotent() {
        let tree = blind75();

        let first: Vec<_> = flatten_links(&tree).collect();
        let second: Vec<_> = flatten_links(&tree).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_links_clone_restarts_from_same_point() {
        let tree = blind75();
        let mut links = flatten_links(&tree);
        links.next();

        let rest: Vec<_> = links.clone().collect();
        let again: Vec<_> = links.collect();

        assert_eq!(rest, again);
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn test_flatten_links_includes_group_link_before_children() {
        let tree = vec![
            MenuNode::group("Guide", vec![MenuNode::leaf("Setup", "/guide/setup")])
                .with_link("/guide/"),
        ];

        let links: Vec<_> = flatten_links(&tree).collect();

        assert_eq!(links, vec!["/guide/", "/guide/setup"]);
    }

    #[test]
    fn test_flatten_links_skips_headers() {
        let tree = vec![
            MenuNode::header("Notes"),
            MenuNode::leaf("Intro", "/intro"),
            MenuNode::group("Empty", Vec::new()),
        ];

        let links: Vec<_> = flatten_links(&tree).collect();

        assert_eq!(links, vec!["/intro"]);
    }

    #[test]
    fn test_walk_is_fused() {
        let tree = vec![MenuNode::leaf("Intro", "/intro")];
        let mut iter = walk(&tree);

        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
