//! Configuration file discovery, loading and saving.
//!
//! The first existing file from [`CONFIG_FILE_NAMES`] wins. A file that
//! exists but fails to parse is treated the same as no file by
//! [`ConfigStore::load`]; use [`ConfigStore::inspect`] to tell them apart.

use crate::config::schema::ProjectConfig;
use crate::error::{ChadcnError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical config file name, always used by `save`.
pub const CONFIG_FILE_NAME: &str = "chadcn.json";

/// Candidate config file names in search order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    CONFIG_FILE_NAME,
    "chadchin.json",
    ".chadcnrc",
    ".chadcnrc.json",
];

/// Outcome of looking for a project config.
#[derive(Debug)]
pub enum ConfigState {
    /// A config file was found and parsed.
    Found { path: PathBuf, config: ProjectConfig },

    /// No candidate file exists.
    Missing,

    /// A candidate file exists but could not be parsed.
    Malformed { path: PathBuf, message: String },
}

/// Loads and persists the per-project configuration.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    project_root: PathBuf,
}

impl ConfigStore {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Project root this store reads from.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path of the first existing candidate config file.
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.project_root.join(name))
            .find(|path| path.is_file())
    }

    /// Look for a config file and report what was found.
    pub fn inspect(&self) -> ConfigState {
        let Some(path) = self.find() else {
            tracing::debug!(root = %self.project_root.display(), "no config file found");
            return ConfigState::Missing;
        };

        tracing::debug!(path = %path.display(), "found config file");
        match load_config_file(&path) {
            Ok(config) => ConfigState::Found { path, config },
            Err(e) => ConfigState::Malformed {
                path,
                message: e.to_string(),
            },
        }
    }

    /// Load the project config, treating a malformed file as absent.
    pub fn load(&self) -> Option<ProjectConfig> {
        match self.inspect() {
            ConfigState::Found { config, .. } => Some(config),
            ConfigState::Missing => None,
            ConfigState::Malformed { path, message } => {
                tracing::warn!(path = %path.display(), error = %message, "ignoring malformed config");
                None
            }
        }
    }

    /// Write the config to the canonical file, overwriting any existing one.
    pub fn save(&self, config: &ProjectConfig) -> Result<PathBuf> {
        let path = self.project_root.join(CONFIG_FILE_NAME);
        let mut content = serde_json::to_string_pretty(config)
            .map_err(|e| ChadcnError::Other(anyhow::Error::new(e)))?;
        content.push('\n');
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(path)
    }
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse config JSON text.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    serde_json::from_str(content).map_err(|e| ChadcnError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TailwindVersion;
    use tempfile::TempDir;

    const VALID: &str = r#"{
  "theme": "nord",
  "tailwind": { "css": "src/index.css" },
  "aliases": { "components": "@/components/ui", "utils": "@/lib/utils" }
}"#;

    #[test]
    fn load_returns_none_without_config() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path());
        assert!(store.load().is_none());
        assert!(matches!(store.inspect(), ConfigState::Missing));
    }

    #[test]
    fn load_reads_canonical_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chadcn.json"), VALID).unwrap();
        let config = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.theme, "nord");
    }

    #[test]
    fn load_reads_legacy_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".chadcnrc"), VALID).unwrap();
        assert!(ConfigStore::new(temp.path()).load().is_some());
    }

    #[test]
    fn canonical_name_wins_over_legacy() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".chadcnrc.json"), VALID).unwrap();
        fs::write(
            temp.path().join("chadcn.json"),
            VALID.replace("nord", "dracula"),
        )
        .unwrap();
        let config = ConfigStore::new(temp.path()).load().unwrap();
        assert_eq!(config.theme, "dracula");
    }

    #[test]
    fn malformed_config_loads_as_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chadcn.json"), "{ not json").unwrap();
        let store = ConfigStore::new(temp.path());
        assert!(store.load().is_none());
        match store.inspect() {
            ConfigState::Malformed { path, .. } => {
                assert!(path.ends_with("chadcn.json"));
            }
            other => panic!("expected malformed, got {:?}", other),
        }
    }

    #[test]
    fn schema_violation_is_malformed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chadcn.json"), r#"{"theme": "nord"}"#).unwrap();
        assert!(matches!(
            ConfigStore::new(temp.path()).inspect(),
            ConfigState::Malformed { .. }
        ));
    }

    #[test]
    fn save_writes_pretty_json_with_newline() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path());
        let path = store.save(&ProjectConfig::default()).unwrap();
        assert!(path.ends_with("chadcn.json"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"style\""));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path());
        let mut config = ProjectConfig::default();
        config.theme = "win95".to_string();
        config.tailwind.version = Some(TailwindVersion::V4);
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("chadcn.json"), "garbage").unwrap();
        let store = ConfigStore::new(temp.path());
        store.save(&ProjectConfig::default()).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn parse_config_reports_path() {
        let err = parse_config("[]", Path::new("/proj/chadcn.json")).unwrap_err();
        assert!(matches!(err, ChadcnError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/proj/chadcn.json"));
    }
}
