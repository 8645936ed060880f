//! Built-in catalog embedded at compile time.

use serde::{Deserialize, Serialize};

use crate::embedded;
use crate::error::{ChadcnError, Result};

use super::component::{CategoryInfo, ComponentDefinition, ThemeDefinition};

/// The raw catalog as declared in `templates/registry.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version.
    #[serde(default = "default_catalog_version")]
    pub version: u32,

    /// Packages required by every installation.
    #[serde(default)]
    pub baseline_packages: Vec<String>,

    /// Component categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryInfo>,

    /// Components in catalog order.
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,

    /// Themes in catalog order.
    #[serde(default)]
    pub themes: Vec<ThemeDefinition>,
}

fn default_catalog_version() -> u32 {
    1
}

impl Catalog {
    /// Parse a catalog from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ChadcnError::CatalogError {
            message: e.to_string(),
        })
    }
}

/// Load the built-in catalog.
pub fn load_catalog() -> Result<Catalog> {
    let content = embedded::file(embedded::CATALOG_PATH).ok_or_else(|| {
        ChadcnError::CatalogError {
            message: format!("templates/{} is not embedded", embedded::CATALOG_PATH),
        }
    })?;

    Catalog::from_yaml(content)
}
