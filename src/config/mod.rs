//! Project configuration for chadcn.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and saving in [`loader`]
//! - Alias-to-path resolution in [`paths`]
//!
//! # Example
//!
//! ```
//! use chadcn::config::{ConfigStore, ProjectConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let store = ConfigStore::new(temp.path());
//! assert!(store.load().is_none());
//!
//! store.save(&ProjectConfig::default()).unwrap();
//! assert_eq!(store.load().unwrap().theme, "photoshop");
//! ```
//!
//! # Configuration File Locations
//!
//! The project root is searched for, in order:
//! 1. `chadcn.json`
//! 2. `chadchin.json`
//! 3. `.chadcnrc`
//! 4. `.chadcnrc.json`

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{
    load_config_file, parse_config, ConfigState, ConfigStore, CONFIG_FILE_NAME, CONFIG_FILE_NAMES,
};
pub use paths::{components_dir, resolve_alias, utils_file};
pub use schema::{Aliases, ProjectConfig, TailwindConfig, TailwindVersion};
