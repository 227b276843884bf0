//! `sitenav nav` command implementation.

use clap::Args;
use sitenav_menu::MenuNode;

use super::{SiteArgs, print_json, select_locale};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Locale language tag (default: root locale).
    #[arg(short, long)]
    locale: Option<String>,

    /// Only print the entries active for this page path.
    #[arg(long)]
    active: Option<String>,

    #[command(flatten)]
    site: SiteArgs,
}

/// Top-level nav entries highlighted for `path`.
fn active_entries<'a>(nav: &'a [MenuNode], path: &str) -> Vec<&'a MenuNode> {
    nav.iter().filter(|n| n.is_active(path)).collect()
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load()?;
        let locale = select_locale(&site, self.locale.as_deref())?;

        match self.active.as_deref() {
            Some(path) => print_json(&output, &active_entries(&locale.nav, path)),
            None => print_json(&output, &locale.nav),
        }
    }
}
