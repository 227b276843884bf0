//! `sitenav pager` command implementation.

use clap::Args;
use sitenav_menu::pager;

use super::{SiteArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pager command.
#[derive(Args)]
pub(crate) struct PagerArgs {
    /// Page path (e.g., /Algorithms/Blind75/intro).
    path: String,

    #[command(flatten)]
    site: SiteArgs,
}

impl PagerArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load()?;

        let sidebar = site.sidebar_for(&self.path);
        print_json(&output, &pager(sidebar, &self.path))
    }
}
