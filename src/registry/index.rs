//! Name-indexed view over the catalog.

use std::collections::{HashMap, HashSet};

use crate::error::{ChadcnError, Result};

use super::catalog::{load_catalog, Catalog};
use super::component::{CategoryInfo, ComponentDefinition, ThemeCategory, ThemeDefinition};

/// Component and theme registry.
///
/// Construction checks that the catalog is internally consistent: names are
/// unique, every dependency names a component in the catalog, and every
/// component belongs to a declared category.
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,
    components: HashMap<String, usize>,
    themes: HashMap<String, usize>,
}

impl Registry {
    /// Load the built-in registry.
    pub fn builtin() -> Result<Self> {
        Self::from_catalog(load_catalog()?)
    }

    /// Build a registry from an already-parsed catalog.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let mut components = HashMap::new();
        for (i, def) in catalog.components.iter().enumerate() {
            if components.insert(def.name.clone(), i).is_some() {
                return Err(catalog_error(format!(
                    "duplicate component '{}'",
                    def.name
                )));
            }
        }

        let declared: HashSet<_> = catalog.categories.iter().map(|c| c.name).collect();
        for def in &catalog.components {
            if !declared.contains(&def.category) {
                return Err(catalog_error(format!(
                    "component '{}' uses undeclared category '{}'",
                    def.name, def.category
                )));
            }
            for dep in &def.dependencies {
                if !components.contains_key(dep) {
                    return Err(catalog_error(format!(
                        "component '{}' depends on unknown component '{}'",
                        def.name, dep
                    )));
                }
            }
        }

        let mut themes = HashMap::new();
        for (i, theme) in catalog.themes.iter().enumerate() {
            if themes.insert(theme.name.clone(), i).is_some() {
                return Err(catalog_error(format!("duplicate theme '{}'", theme.name)));
            }
        }

        Ok(Self {
            catalog,
            components,
            themes,
        })
    }

    /// Look up a component by name.
    pub fn lookup(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components
            .get(name)
            .map(|&i| &self.catalog.components[i])
    }

    /// Check if a component exists.
    pub fn has(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// All components in catalog order.
    pub fn all(&self) -> &[ComponentDefinition] {
        &self.catalog.components
    }

    /// All component names in catalog order.
    pub fn component_names(&self) -> Vec<&str> {
        self.catalog
            .components
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Components grouped by category, in category declaration order.
    ///
    /// Categories without components are omitted.
    pub fn by_category(&self) -> Vec<(&CategoryInfo, Vec<&ComponentDefinition>)> {
        self.catalog
            .categories
            .iter()
            .filter_map(|info| {
                let members: Vec<_> = self
                    .catalog
                    .components
                    .iter()
                    .filter(|c| c.category == info.name)
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some((info, members))
                }
            })
            .collect()
    }

    /// Check that every name is a known component.
    ///
    /// Reports all unknown names at once, in the order given.
    pub fn validate_names(&self, names: &[String]) -> Result<()> {
        let invalid: Vec<String> = names
            .iter()
            .filter(|n| !self.has(n))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ChadcnError::InvalidComponentName { names: invalid })
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Packages every installation needs.
    pub fn baseline_packages(&self) -> &[String] {
        &self.catalog.baseline_packages
    }

    /// All themes in catalog order.
    pub fn themes(&self) -> &[ThemeDefinition] {
        &self.catalog.themes
    }

    /// Look up a theme by name.
    pub fn theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.get(name).map(|&i| &self.catalog.themes[i])
    }

    /// Themes grouped by category, in display order.
    pub fn themes_by_category(&self) -> Vec<(ThemeCategory, Vec<&ThemeDefinition>)> {
        ThemeCategory::all()
            .into_iter()
            .filter_map(|category| {
                let members: Vec<_> = self
                    .catalog
                    .themes
                    .iter()
                    .filter(|t| t.category == category)
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some((category, members))
                }
            })
            .collect()
    }
}

fn catalog_error(message: String) -> ChadcnError {
    ChadcnError::CatalogError { message }
}
