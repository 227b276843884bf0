//! CLI error types.

use std::path::PathBuf;

use sitenav_config::ConfigError;
use sitenav_menu::MenuError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{}: {source}", .path.display())]
    Menu {
        path: PathBuf,
        #[source]
        source: MenuError,
    },

    #[error("{0}")]
    Site(#[from] MenuError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
