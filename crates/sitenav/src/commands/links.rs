//! `sitenav links` command implementation.

use clap::Args;
use sitenav_menu::{LocaleConfig, normalize_link, strip_link_root};

use super::{SiteArgs, select_locale};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the links command.
#[derive(Args)]
pub(crate) struct LinksArgs {
    /// Locale language tag (default: root locale).
    #[arg(short, long)]
    locale: Option<String>,

    /// Print links in canonical form.
    #[arg(long)]
    normalize: bool,

    /// Print links without the locale link root (implies --normalize).
    #[arg(long)]
    strip_locale: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl LinksArgs {
    /// Links of `locale` in the requested form, depth-first.
    fn collect(&self, locale: &LocaleConfig) -> Vec<String> {
        locale
            .links()
            .map(|link| {
                if self.strip_locale {
                    strip_link_root(link, &locale.link)
                } else if self.normalize {
                    normalize_link(link)
                } else {
                    link.to_owned()
                }
            })
            .collect()
    }

    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, site) = self.site.load()?;
        let locale = select_locale(&site, self.locale.as_deref())?;

        for link in self.collect(locale) {
            output.data(&link);
        }
        Ok(())
    }
}
