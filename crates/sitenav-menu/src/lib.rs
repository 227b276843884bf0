//! Locale-aware navigation and sidebar tree model for sitenav.
//!
//! This crate provides:
//! - [`MenuNode`]: one entry of a nav or sidebar tree
//! - [`SidebarMap`] and [`resolve_sidebar`]: longest-prefix sidebar lookup
//! - [`flatten_links`] and [`walk`]: lazy depth-first traversal
//! - [`MenuFile`]: YAML loading with validation
//! - [`LocaleConfig`] and [`SiteMenus`]: per-locale menus and locale selection
//! - [`check`]: duplicate, dead-link and cross-locale checks
//!
//! All types are immutable once built; every lookup is a pure read.
//!
//! # Quick Start
//!
//! ```
//! use sitenav_menu::{MenuFile, resolve_sidebar};
//!
//! let menu = MenuFile::from_yaml_str(r"
//! sidebar:
//!   /Algorithms/Blind75/:
//!     - text: Introduction
//!       items:
//!         - text: Overview
//!           link: /Algorithms/Blind75/intro
//! ").unwrap();
//!
//! let sidebar = resolve_sidebar("/Algorithms/Blind75/intro", &menu.sidebar);
//! assert_eq!(sidebar[0].text, "Introduction");
//! ```

pub mod check;
mod error;
mod link;
mod locale;
mod menu_file;
mod node;
mod sidebar;
mod trail;
mod walk;

pub use error::MenuError;
pub use link::{is_external, normalize_link, strip_link_root};
pub use locale::{LocaleConfig, SiteMenus};
pub use menu_file::MenuFile;
pub use node::{ActiveMatch, MenuNode, NodeKind};
pub use sidebar::{SidebarEntry, SidebarMap, resolve_sidebar};
pub use trail::{Pager, active_trail, pager};
pub use walk::{Links, Walk, flatten_links, walk};
