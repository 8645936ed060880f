//! Configuration schema definitions for chadcn.
//!
//! This module contains the struct definitions that map to the
//! `chadcn.json` file written by `chadcn init`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root configuration structure for `chadcn.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Component style variant
    #[serde(default = "default_style")]
    pub style: String,

    /// Selected theme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Styling tool settings
    pub tailwind: TailwindConfig,

    /// Import alias prefixes
    pub aliases: Aliases,

    /// Whether the project uses TypeScript
    #[serde(default = "default_true")]
    pub typescript: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            theme: default_theme(),
            tailwind: TailwindConfig::default(),
            aliases: Aliases::default(),
            typescript: true,
        }
    }
}

/// Tailwind CSS settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Path to the tailwind config file (v3 only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    /// Path to the CSS file holding theme variables
    pub css: String,

    /// Base color token
    #[serde(default = "default_base_color")]
    pub base_color: String,

    /// Tailwind major version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<TailwindVersion>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self {
            config: Some("tailwind.config.ts".to_string()),
            css: "src/index.css".to_string(),
            base_color: default_base_color(),
            version: Some(TailwindVersion::V3),
        }
    }
}

/// Supported Tailwind major versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TailwindVersion {
    #[default]
    #[serde(rename = "3")]
    V3,
    #[serde(rename = "4")]
    V4,
}

impl TailwindVersion {
    /// Whether this version uses a JS/TS config file.
    pub fn uses_config_file(&self) -> bool {
        matches!(self, Self::V3)
    }
}

impl fmt::Display for TailwindVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => write!(f, "3"),
            Self::V4 => write!(f, "4"),
        }
    }
}

/// Import alias prefixes used by the consuming project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aliases {
    /// Alias for the components directory (e.g. `@/components/ui`)
    pub components: String,

    /// Alias for the utility module (e.g. `@/lib/utils`)
    pub utils: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            components: "@/components/ui".to_string(),
            utils: "@/lib/utils".to_string(),
        }
    }
}

fn default_style() -> String {
    "default".to_string()
}

fn default_theme() -> String {
    "photoshop".to_string()
}

fn default_base_color() -> String {
    "slate".to_string()
}

fn default_true() -> bool {
    true
}
