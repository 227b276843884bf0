//! Menu loading and validation errors.

use std::path::PathBuf;

/// Error returned when menu data is rejected.
///
/// Resolving a path that has no sidebar is never an error; these only
/// come from loading and constructing menus.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// A node has no `text`, or it is blank.
    #[error("Menu node at {location} is missing required `text`")]
    MissingText {
        /// Location of the node (e.g., `sidebar["/guide/"][1].items[0]`).
        location: String,
    },
    /// Two sidebar entries share the same path prefix.
    #[error("Duplicate sidebar prefix: {prefix}")]
    DuplicatePrefix {
        /// Prefix as authored.
        prefix: String,
    },
    /// Two locales own the same link root.
    #[error("Duplicate locale link root: {link}")]
    DuplicateLocale {
        /// Link root as configured.
        link: String,
    },
    /// An `activeMatch` pattern is not a valid regular expression.
    #[error("Invalid activeMatch pattern at {location}: {source}")]
    InvalidPattern {
        /// Location of the node.
        location: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },
    /// Menu file is not valid YAML or has the wrong shape.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Menu file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the menu file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
