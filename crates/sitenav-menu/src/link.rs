//! Link normalization helpers.
//!
//! Menu files spell the same page several ways (`/guide/`, `/guide/index`,
//! `/guide/index.md`, `guide.html#setup`). Everything that compares links
//! goes through [`normalize_link`] first.

use std::borrow::Cow;

/// Whether `link` points outside the site.
#[must_use]
pub fn is_external(link: &str) -> bool {
    link.contains("://") || link.starts_with("mailto:") || link.starts_with("tel:")
}

/// Canonical form of a site-internal link.
///
/// Strips any `#fragment` or `?query`, a trailing `.md` or `.html`, a
/// trailing `index` segment and trailing slashes, and ensures a leading
/// slash. The root page normalizes to `/`. External links are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use sitenav_menu::normalize_link;
///
/// assert_eq!(normalize_link("/guide/"), "/guide");
/// assert_eq!(normalize_link("guide/index.md#setup"), "/guide");
/// assert_eq!(normalize_link("/"), "/");
/// ```
#[must_use]
pub fn normalize_link(link: &str) -> String {
    if is_external(link) {
        return link.to_owned();
    }

    let end = link.find(['#', '?']).unwrap_or(link.len());
    let mut path = &link[..end];

    for ext in [".md", ".html"] {
        if let Some(stripped) = path.strip_suffix(ext) {
            path = stripped;
            break;
        }
    }

    if path == "index" {
        path = "";
    } else if let Some(stripped) = path.strip_suffix("/index") {
        path = stripped;
    }

    let path = path.trim_end_matches('/');
    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);
    normalized
}

/// Prefix `path` with `/` unless it already starts with one.
pub(crate) fn ensure_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Normalize `link` and remove a locale link root from its front.
///
/// `/zh/guide/setup` under root `/zh/` becomes `/guide/setup`, which makes
/// links of parallel locales comparable. Links outside the root and
/// external links are only normalized.
#[must_use]
pub fn strip_link_root(link: &str, root: &str) -> String {
    let normalized = normalize_link(link);
    if is_external(&normalized) {
        return normalized;
    }

    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return normalized;
    }

    match normalized.strip_prefix(root) {
        Some("") => "/".to_owned(),
        Some(rest) if rest.starts_with('/') => rest.to_owned(),
        _ => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_link("/Algorithms/Blind75/"), "/Algorithms/Blind75");
    }

    #[test]
    fn test_normalize_strips_extensions() {
        assert_eq!(normalize_link("/guide/setup.md"), "/guide/setup");
        assert_eq!(normalize_link("/guide/setup.html"), "/guide/setup");
    }

    #[test]
    fn test_normalize_strips_index_segment() {
        assert_eq!(normalize_link("/guide/index"), "/guide");
        assert_eq!(normalize_link("/guide/index.md"), "/guide");
        assert_eq!(normalize_link("index.md"), "/");
        assert_eq!(normalize_link("/index"), "/");
    }

    #[test]
    fn test_normalize_keeps_index_inside_name() {
        assert_eq!(normalize_link("/guide/reindex"), "/guide/reindex");
    }

    #[test]
    fn test_normalize_strips_fragment_and_query() {
        assert_eq!(normalize_link("/guide/setup#install"), "/guide/setup");
        assert_eq!(normalize_link("/search?q=tree"), "/search");
        assert_eq!(normalize_link("/guide/setup.md#install"), "/guide/setup");
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize_link("guide/setup"), "/guide/setup");
        assert_eq!(normalize_link(""), "/");
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_link("/"), "/");
    }

    #[test]
    fn test_normalize_external_unchanged() {
        let link = "https://leetcode.com/problems/two-sum/";
        assert_eq!(normalize_link(link), link);
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com"));
        assert!(is_external("mailto:team@example.com"));
        assert!(!is_external("/guide/setup"));
        assert!(!is_external("guide/setup.md"));
    }

    #[test]
    fn test_ensure_leading_slash() {
        assert_eq!(ensure_leading_slash("guide/"), "/guide/");
        assert!(matches!(ensure_leading_slash("/guide/"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_link_root_locale_prefix() {
        assert_eq!(strip_link_root("/zh/guide/setup", "/zh/"), "/guide/setup");
        assert_eq!(strip_link_root("/zh/", "/zh/"), "/");
        assert_eq!(strip_link_root("/zh", "/zh/"), "/");
    }

    #[test]
    fn test_strip_link_root_requires_segment_boundary() {
        assert_eq!(strip_link_root("/zhong/page", "/zh/"), "/zhong/page");
    }

    #[test]
    fn test_strip_link_root_root_locale_only_normalizes() {
        assert_eq!(strip_link_root("/guide/setup.md", "/"), "/guide/setup");
    }

    #[test]
    fn test_strip_link_root_external_unchanged() {
        assert_eq!(
            strip_link_root("https://example.com/zh/", "/zh/"),
            "https://example.com/zh/"
        );
    }
}
