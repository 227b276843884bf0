//! Per-locale menus and locale selection by page path.
//!
//! Every locale owns a link root (`/` for the root locale, `/zh/` for a
//! Chinese one) and an independently authored nav tree and sidebar table.

use serde::Serialize;

use crate::error::MenuError;
use crate::link::ensure_leading_slash;
use crate::menu_file::MenuFile;
use crate::node::MenuNode;
use crate::sidebar::SidebarMap;
use crate::walk::flatten_links;

/// Navigation data and metadata of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Language tag (e.g., `en-US`, `zh-CN`).
    pub lang: String,
    /// Name shown in the locale switcher.
    pub label: String,
    /// URL prefix owned by the locale, starting and ending with `/`.
    pub link: String,
    /// Site title override for this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description override for this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top-bar navigation.
    pub nav: Vec<MenuNode>,
    /// Sidebar table.
    pub sidebar: SidebarMap,
}

impl LocaleConfig {
    /// Create a locale from its language tag, link root and menu file.
    ///
    /// The label defaults to the language tag.
    #[must_use]
    pub fn new(lang: impl Into<String>, link: impl Into<String>, menu: MenuFile) -> Self {
        let lang = lang.into();
        Self {
            label: lang.clone(),
            lang,
            link: link.into(),
            title: None,
            description: None,
            nav: menu.nav,
            sidebar: menu.sidebar,
        }
    }

    /// Set the switcher label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the title override.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description override.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this is the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.link == "/"
    }

    /// Whether `path` falls under this locale's link root.
    #[must_use]
    pub fn owns(&self, path: &str) -> bool {
        let path = ensure_leading_slash(path);
        let root = self.link.trim_end_matches('/');
        root.is_empty()
            || path == root
            || path
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Sidebar for `path` within this locale.
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[MenuNode] {
        self.sidebar.resolve(path)
    }

    /// Every link of the locale: nav first, then each sidebar entry in order.
    pub fn links(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        flatten_links(&self.nav).chain(
            self.sidebar
                .entries()
                .iter()
                .flat_map(|entry| flatten_links(&entry.items)),
        )
    }
}

/// All locales of a site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SiteMenus {
    locales: Vec<LocaleConfig>,
}

impl SiteMenus {
    /// Group locales, rejecting two that own the same link root.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::DuplicateLocale`] naming the repeated root.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, MenuError> {
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].iter().any(|other| other.link == locale.link) {
                return Err(MenuError::DuplicateLocale {
                    link: locale.link.clone(),
                });
            }
        }
        Ok(Self { locales })
    }

    /// Locales in configured order.
    #[must_use]
    pub fn locales(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Locale with the given language tag.
    #[must_use]
    pub fn locale(&self, lang: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.lang == lang)
    }

    /// The locale owning `/`.
    #[must_use]
    pub fn root(&self) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.is_root())
    }

    /// Locale whose link root is the longest prefix of `path`.
    ///
    /// Falls back to the root locale, which owns every path.
    #[must_use]
    pub fn locale_for(&self, path: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|l| l.owns(path))
            .max_by_key(|l| l.link.len())
    }

    /// Sidebar for `path` in the locale that owns it.
    ///
    /// Empty when no locale owns the path or its sidebar has no match.
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[MenuNode] {
        self.locale_for(path)
            .map(|l| l.sidebar_for(path))
            .unwrap_or_default()
    }
}
