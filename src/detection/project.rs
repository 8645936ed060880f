//! Project signal detection for `chadcn init` defaults.
//!
//! Everything here is advisory. Detection never fails; unreadable or
//! malformed manifests simply produce no signal.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::TailwindVersion;

use super::file_detection::{any_file_exists, dir_exists, file_exists};

/// Tailwind config file names checked for v3, in order.
const TAILWIND_CONFIG_FILES: &[&str] = &[
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
];

/// Common global CSS locations, in order.
const CSS_CANDIDATES: &[&str] = &[
    "src/index.css",
    "src/app/globals.css",
    "app/globals.css",
    "src/styles/globals.css",
    "styles/globals.css",
    "src/globals.css",
    "index.css",
];

/// Detected Tailwind setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindDetection {
    /// Detected (or assumed) major version.
    pub version: TailwindVersion,

    /// Existing tailwind config file, if any.
    pub config_path: Option<String>,

    /// Existing global CSS file, if any.
    pub css_path: Option<String>,

    /// Whether `@tailwindcss/vite` is declared.
    pub has_vite_plugin: bool,
}

impl TailwindDetection {
    /// Whether a tailwind config file was found.
    pub fn has_config(&self) -> bool {
        self.config_path.is_some()
    }
}

/// Signals gathered from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSignals {
    pub has_package_json: bool,
    pub has_tsconfig: bool,
    pub has_src_dir: bool,
    pub tailwind: TailwindDetection,
}

impl ProjectSignals {
    /// Default CSS path: the detected file, else one matching the layout.
    pub fn default_css_path(&self) -> String {
        match &self.tailwind.css_path {
            Some(path) => path.clone(),
            None if self.has_src_dir => "src/index.css".to_string(),
            None => "index.css".to_string(),
        }
    }
}

/// Detects project layout signals.
pub struct ProjectDetector;

impl ProjectDetector {
    /// Gather all signals for a project.
    pub fn detect(project_root: &Path) -> ProjectSignals {
        ProjectSignals {
            has_package_json: file_exists(project_root, "package.json"),
            has_tsconfig: file_exists(project_root, "tsconfig.json"),
            has_src_dir: dir_exists(project_root, "src"),
            tailwind: Self::detect_tailwind(project_root),
        }
    }

    /// Detect the Tailwind version and related files.
    pub fn detect_tailwind(project_root: &Path) -> TailwindDetection {
        let manifest = read_package_json(project_root);
        let declared = |name: &str| manifest.as_ref().and_then(|m| dependency_version(m, name));

        let has_vite_plugin = declared("@tailwindcss/vite").is_some();
        let has_postcss_plugin = declared("@tailwindcss/postcss").is_some();
        let tailwind_major = declared("tailwindcss").and_then(|v| major_version(&v));

        let config_path = any_file_exists(project_root, TAILWIND_CONFIG_FILES);
        let css_path = any_file_exists(project_root, CSS_CANDIDATES);

        let version = if tailwind_major == Some(4) || has_vite_plugin || has_postcss_plugin {
            TailwindVersion::V4
        } else {
            TailwindVersion::V3
        };

        tracing::debug!(
            %version,
            config = ?config_path,
            css = ?css_path,
            vite = has_vite_plugin,
            "detected tailwind"
        );

        TailwindDetection {
            version,
            config_path,
            css_path,
            has_vite_plugin,
        }
    }
}

fn read_package_json(project_root: &Path) -> Option<Value> {
    let content = fs::read_to_string(project_root.join("package.json")).ok()?;
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unparsable package.json");
            None
        }
    }
}

/// Version range declared for `name` in dependencies or devDependencies.
fn dependency_version(manifest: &Value, name: &str) -> Option<String> {
    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(*section)?.get(name)?.as_str())
        .map(String::from)
        .next()
}

/// Major version from a semver range such as `^4.1.0` or `~3.4`.
fn major_version(range: &str) -> Option<u64> {
    let digits: String = range
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
