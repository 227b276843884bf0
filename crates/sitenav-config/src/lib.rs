//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Locales
//!
//! Each `[locales.<key>]` table describes one locale and points at its
//! YAML menu file. The `root` key owns link `/`; any other key defaults
//! to link `/<key>/`. Without a `[locales]` section the site has a single
//! root locale whose menu is `menu.yaml` next to the config file.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base`
//! - `search.app_id`
//! - `search.api_key`
//! - `search.index_name`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Key of the locale owning `/`.
const ROOT_LOCALE_KEY: &str = "root";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Search provider.
    pub search: SearchConfig,
    /// Locale tables keyed by locale key.
    locales: BTreeMap<String, LocaleConfigRaw>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved locales, root locale first (set after loading).
    #[serde(skip)]
    pub locales_resolved: Vec<LocaleSettings>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: Option<String>,
    /// Base path the site is served under, starting and ending with `/`.
    pub base: String,
    /// Language tag of the root locale when `[locales]` does not set one.
    pub lang: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: None,
            base: "/".to_owned(),
            lang: "en-US".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown pages.
    pub source_dir: PathBuf,
}

/// Search provider configuration.
///
/// Selected by the `provider` key of the `[search]` section.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// No search box.
    #[serde(rename = "none")]
    Disabled,
    /// Built-in local index.
    #[default]
    Local,
    /// Hosted Algolia `DocSearch`.
    Algolia(AlgoliaConfig),
}

/// Algolia `DocSearch` credentials.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct AlgoliaConfig {
    /// Application ID.
    pub app_id: String,
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
}

/// Raw locale table as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct LocaleConfigRaw {
    lang: Option<String>,
    label: Option<String>,
    link: Option<String>,
    title: Option<String>,
    description: Option<String>,
    menu: Option<String>,
}

/// Resolved locale settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Key of the `[locales.<key>]` table.
    pub key: String,
    /// Language tag (e.g., `zh-CN`).
    pub lang: String,
    /// Name shown in the locale switcher.
    pub label: String,
    /// URL prefix owned by the locale.
    pub link: String,
    /// Title override.
    pub title: Option<String>,
    /// Description override.
    pub description: Option<String>,
    /// Absolute path of the YAML menu file.
    pub menu_path: PathBuf,
}

impl LocaleSettings {
    /// Whether this locale owns `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.link == "/"
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path field to start and end with `/`.
fn require_slashes(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start and end with '/' (got {value:?})"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. Validation runs
    /// last, on the merged result.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Resolved locale with the given language tag.
    #[must_use]
    pub fn locale(&self, lang: &str) -> Option<&LocaleSettings> {
        self.locales_resolved.iter().find(|l| l.lang == lang)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let site = SiteConfig::default();
        let locales_resolved = vec![Self::implicit_root_locale(&site, base)];
        Self {
            site,
            docs: DocsConfigRaw::default(),
            search: SearchConfig::default(),
            locales: BTreeMap::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            locales_resolved,
            config_path: None,
        }
    }

    /// Single root locale used when no `[locales]` section is present.
    fn implicit_root_locale(site: &SiteConfig, config_dir: &Path) -> LocaleSettings {
        LocaleSettings {
            key: ROOT_LOCALE_KEY.to_owned(),
            lang: site.lang.clone(),
            label: site.lang.clone(),
            link: "/".to_owned(),
            title: None,
            description: None,
            menu_path: config_dir.join("menu.yaml"),
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_search()?;
        self.validate_locales()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_slashes(&self.site.base, "site.base")?;
        Ok(())
    }

    /// Validate search configuration.
    fn validate_search(&self) -> Result<(), ConfigError> {
        if let SearchConfig::Algolia(algolia) = &self.search {
            require_non_empty(&algolia.app_id, "search.app_id")?;
            require_non_empty(&algolia.api_key, "search.api_key")?;
            require_non_empty(&algolia.index_name, "search.index_name")?;
        }
        Ok(())
    }

    /// Validate resolved locales.
    ///
    /// Every link root must be well-formed and unique, and exactly one
    /// locale must own `/`.
    fn validate_locales(&self) -> Result<(), ConfigError> {
        for (i, locale) in self.locales_resolved.iter().enumerate() {
            let field = format!("locales.{}", locale.key);
            require_non_empty(&locale.lang, &format!("{field}.lang"))?;
            require_slashes(&locale.link, &format!("{field}.link"))?;

            if let Some(other) = self.locales_resolved[..i]
                .iter()
                .find(|other| other.link == locale.link)
            {
                return Err(ConfigError::Validation(format!(
                    "locales.{} and {field} both use link {:?}",
                    other.key, locale.link
                )));
            }
        }

        if !self.locales_resolved.iter().any(LocaleSettings::is_root) {
            return Err(ConfigError::Validation(
                "one locale must use link \"/\" (add [locales.root])".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;

        if let SearchConfig::Algolia(ref mut algolia) = self.search {
            algolia.app_id = expand::expand_env(&algolia.app_id, "search.app_id")?;
            algolia.api_key = expand::expand_env(&algolia.api_key, "search.api_key")?;
            algolia.index_name = expand::expand_env(&algolia.index_name, "search.index_name")?;
        }

        Ok(())
    }

    /// Resolve relative paths and locale defaults based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };

        if self.locales.is_empty() {
            self.locales_resolved = vec![Self::implicit_root_locale(&self.site, config_dir)];
            return;
        }

        let mut locales: Vec<LocaleSettings> = self
            .locales
            .iter()
            .map(|(key, raw)| {
                let is_root_key = key == ROOT_LOCALE_KEY;
                let lang = raw.lang.clone().unwrap_or_else(|| {
                    if is_root_key {
                        self.site.lang.clone()
                    } else {
                        key.clone()
                    }
                });
                let link = raw.link.clone().unwrap_or_else(|| {
                    if is_root_key {
                        "/".to_owned()
                    } else {
                        format!("/{key}/")
                    }
                });
                let menu = raw
                    .menu
                    .clone()
                    .unwrap_or_else(|| format!("menus/{lang}.yaml"));

                LocaleSettings {
                    key: key.clone(),
                    label: raw.label.clone().unwrap_or_else(|| lang.clone()),
                    lang,
                    link,
                    title: raw.title.clone(),
                    description: raw.description.clone(),
                    menu_path: config_dir.join(menu),
                }
            })
            .collect();

        // Root locale first, others in key order
        locales.sort_by_key(|l| !l.is_root());
        self.locales_resolved = locales;
    }
}
