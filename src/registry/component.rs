//! Catalog entry definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Component category used for grouping in prompts and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Input,
    Layout,
    Navigation,
    Overlay,
    Feedback,
    Creative,
    Utility,
}

impl Category {
    /// The catalog key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Layout => "layout",
            Self::Navigation => "navigation",
            Self::Overlay => "overlay",
            Self::Feedback => "feedback",
            Self::Creative => "creative",
            Self::Utility => "utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Category key.
    pub name: Category,

    /// Human-readable label (e.g. "Input Components").
    pub label: String,
}

/// An installable component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Unique component name (e.g. `number-spinner`).
    pub name: String,

    /// Short description shown in prompts.
    pub description: String,

    /// Grouping category.
    pub category: Category,

    /// Other components this one needs.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// External packages this component imports.
    #[serde(default, rename = "packages")]
    pub package_dependencies: Vec<String>,

    /// Source files, relative to the registry components root.
    pub files: Vec<String>,
}

impl ComponentDefinition {
    /// PascalCase form of the component name, as used for its directory
    /// and exported symbol (`number-spinner` -> `NumberSpinner`).
    pub fn pascal_name(&self) -> String {
        pascal_case(&self.name)
    }
}

/// Theme grouping used by the `init` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeCategory {
    Creative,
    Daisyui,
    RetroOs,
    Accessibility,
}

impl ThemeCategory {
    /// Display label for the prompt header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Creative => "Creative Tools",
            Self::Daisyui => "DaisyUI Inspired",
            Self::RetroOs => "Retro OS",
            Self::Accessibility => "Accessibility",
        }
    }

    /// All theme categories in display order.
    pub fn all() -> [ThemeCategory; 4] {
        [
            Self::Creative,
            Self::Daisyui,
            Self::RetroOs,
            Self::Accessibility,
        ]
    }
}

/// A selectable CSS theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Unique theme name (e.g. `photoshop`).
    pub name: String,

    /// Display label.
    pub label: String,

    /// Short description.
    pub description: String,

    /// Grouping category.
    pub category: ThemeCategory,

    /// CSS variable values keyed by variable name (without `--`).
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

/// Convert a kebab-case name to PascalCase.
pub fn pascal_case(name: &str) -> String {
    name.split('-')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_converts_kebab() {
        assert_eq!(pascal_case("number-spinner"), "NumberSpinner");
        assert_eq!(pascal_case("button"), "Button");
        assert_eq!(pascal_case("high-contrast"), "HighContrast");
    }

    #[test]
    fn category_parses_kebab_case() {
        let category: Category = serde_yaml::from_str("navigation").unwrap();
        assert_eq!(category, Category::Navigation);
        assert_eq!(category.to_string(), "navigation");
    }

    #[test]
    fn theme_category_parses_retro_os() {
        let category: ThemeCategory = serde_yaml::from_str("retro-os").unwrap();
        assert_eq!(category, ThemeCategory::RetroOs);
        assert_eq!(category.label(), "Retro OS");
    }

    #[test]
    fn component_definition_defaults_optional_lists() {
        let yaml = r#"
name: input
description: Compact text input field
category: input
files: [Input/Input.tsx]
"#;
        let def: ComponentDefinition = serde_yaml::from_str(yaml).unwrap();
        assert!(def.dependencies.is_empty());
        assert!(def.package_dependencies.is_empty());
        assert_eq!(def.pascal_name(), "Input");
    }

    #[test]
    fn component_definition_reads_packages_key() {
        let yaml = r#"
name: toolbar
description: Toolbar
category: layout
dependencies: [tooltip]
packages: ["@radix-ui/react-tooltip"]
files: [Toolbar/Toolbar.tsx]
"#;
        let def: ComponentDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.dependencies, vec!["tooltip"]);
        assert_eq!(def.package_dependencies, vec!["@radix-ui/react-tooltip"]);
    }
}
