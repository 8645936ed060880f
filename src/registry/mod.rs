//! Component registry for chadcn.
//!
//! The registry is the embedded catalog of installable components and
//! selectable themes. It answers lookups by name, groups entries by
//! category, validates user-supplied names, and expands a selection into
//! its transitive dependencies.
//!
//! # Example
//!
//! ```
//! use chadcn::registry::{DependencyResolver, Registry};
//!
//! let registry = Registry::builtin().unwrap();
//! let resolved = DependencyResolver::new(&registry).expand(&["toolbar".to_string()]);
//! assert_eq!(resolved.names(), &["tooltip".to_string(), "toolbar".to_string()]);
//! ```

pub mod catalog;
pub mod component;
pub mod index;
pub mod resolver;

// Re-exports
pub use catalog::{load_catalog, Catalog};
pub use component::{
    pascal_case, Category, CategoryInfo, ComponentDefinition, ThemeCategory, ThemeDefinition,
};
pub use index::Registry;
pub use resolver::{DependencyResolver, ResolvedSet};
