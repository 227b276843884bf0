//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod links;
pub(crate) mod nav;
pub(crate) mod pager;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use sitenav_config::{CliSettings, Config};
use sitenav_menu::{LocaleConfig, MenuFile, SiteMenus};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use check::CheckArgs;
pub(crate) use links::LinksArgs;
pub(crate) use nav::NavArgs;
pub(crate) use pager::PagerArgs;
pub(crate) use sidebar::SidebarArgs;

/// Arguments shared by every command for locating the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl SiteArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and every locale's menu file.
    pub(crate) fn load(&self) -> Result<(Config, SiteMenus), CliError> {
        let config = self.load_config()?;
        let site = load_site(&config)?;
        Ok((config, site))
    }
}

/// Read and validate the menu file of every configured locale.
pub(crate) fn load_site(config: &Config) -> Result<SiteMenus, CliError> {
    let locales = config
        .locales_resolved
        .iter()
        .map(|settings| {
            let menu = MenuFile::load(&settings.menu_path).map_err(|source| CliError::Menu {
                path: settings.menu_path.clone(),
                source,
            })?;

            let mut locale = LocaleConfig::new(&settings.lang, &settings.link, menu)
                .with_label(&settings.label);
            if let Some(title) = &settings.title {
                locale = locale.with_title(title);
            }
            if let Some(description) = &settings.description {
                locale = locale.with_description(description);
            }
            Ok(locale)
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    tracing::info!(locales = locales.len(), "Loaded site menus");
    Ok(SiteMenus::new(locales)?)
}

/// Locale named by `lang`, or the root locale when `lang` is `None`.
pub(crate) fn select_locale<'a>(
    site: &'a SiteMenus,
    lang: Option<&str>,
) -> Result<&'a LocaleConfig, CliError> {
    match lang {
        Some(lang) => site.locale(lang).ok_or_else(|| {
            let available: Vec<_> = site.locales().iter().map(|l| l.lang.as_str()).collect();
            CliError::Validation(format!(
                "Unknown locale: {lang} (available: {})",
                available.join(", ")
            ))
        }),
        None => site
            .root()
            .ok_or_else(|| CliError::Validation("No root locale configured".to_owned())),
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(output: &Output, value: &T) -> Result<(), CliError> {
    output.data(&serde_json::to_string_pretty(value)?);
    Ok(())
}
