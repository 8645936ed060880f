//! chadcn - installer for hyper-dense UI components.
//!
//! chadcn copies component source files into a consuming project instead
//! of shipping them as a package. It keeps a per-project `chadcn.json`,
//! resolves component dependencies from an embedded catalog, rewrites
//! import aliases and writes the files without clobbering local edits.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `chadcn.json` schema, loading and alias resolution
//! - [`detection`] - Project layout and package manager detection
//! - [`embedded`] - Catalog, component snapshot and scaffold files
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install planning and materialization
//! - [`materialize`] - Non-clobbering file writes
//! - [`registry`] - Component and theme catalog, dependency resolution
//! - [`rewrite`] - Import alias rewriting
//! - [`shell`] - External process execution
//! - [`templates`] - Template fetching, theme CSS and scaffolds
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use chadcn::registry::Registry;
//!
//! let registry = Registry::builtin().unwrap();
//! let button = registry.lookup("button").unwrap();
//! assert_eq!(button.pascal_name(), "Button");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod embedded;
pub mod error;
pub mod install;
pub mod materialize;
pub mod registry;
pub mod rewrite;
pub mod shell;
pub mod templates;
pub mod ui;

pub use error::{ChadcnError, Result};
