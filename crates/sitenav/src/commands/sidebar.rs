//! `sitenav sidebar` command implementation.

use clap::Args;
use serde::Serialize;
use sitenav_menu::{MenuNode, SiteMenus, active_trail};

use super::{SiteArgs, print_json, select_locale};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path to resolve (e.g., /Algorithms/Blind75/intro).
    path: String,

    /// Locale language tag (default: the locale owning the path).
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    site: SiteArgs,
}

/// Sidebar resolved for one page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SidebarView<'a> {
    /// Language tag of the locale that was searched.
    pub(crate) locale: Option<&'a str>,
    /// Matched sidebar prefix, if any.
    pub(crate) prefix: Option<&'a str>,
    /// Labels from the sidebar root down to the page.
    pub(crate) breadcrumbs: Vec<&'a str>,
    /// Sidebar nodes.
    pub(crate) items: &'a [MenuNode],
}

/// Resolve the sidebar for `path`, in `lang` or in the locale owning the path.
pub(crate) fn resolve_view<'a>(
    site: &'a SiteMenus,
    path: &str,
    lang: Option<&str>,
) -> Result<SidebarView<'a>, CliError> {
    let locale = match lang {
        Some(_) => Some(select_locale(site, lang)?),
        None => site.locale_for(path),
    };

    let entry = locale.and_then(|l| l.sidebar.resolve_entry(path));
    let items = entry.map(|e| e.items.as_slice()).unwrap_or_default();
    if entry.is_none() {
        tracing::info!(path, "No sidebar matches path");
    }

    Ok(SidebarView {
        locale: locale.map(|l| l.lang.as_str()),
        prefix: entry.map(|e| e.prefix.as_str()),
        breadcrumbs: active_trail(items, path)
            .into_iter()
            .map(|node| node.text.as_str())
            .collect(),
        items,
    })
}

impl SidebarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load()?;

        let view = resolve_view(&site, &self.path, self.locale.as_deref())?;
        print_json(&output, &view)
    }
}
