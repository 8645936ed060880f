//! Integration tests for the config module public API.

use chadcn::config::{
    components_dir, utils_file, Aliases, ConfigState, ConfigStore, ProjectConfig, TailwindVersion,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path());

    let mut config = ProjectConfig {
        theme: "bloomberg".into(),
        typescript: false,
        ..ProjectConfig::default()
    };
    config.tailwind.version = Some(TailwindVersion::V4);
    config.tailwind.config = None;

    let path = store.save(&config).unwrap();
    assert_eq!(path, temp.path().join("chadcn.json"));
    assert_eq!(store.load().unwrap(), config);
}

#[test]
fn legacy_file_name_is_read() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("chadchin.json"),
        r#"{
  "style": "default",
  "theme": "dracula",
  "tailwind": { "config": "tailwind.config.js", "css": "src/index.css", "baseColor": "slate" },
  "aliases": { "components": "@/components/ui", "utils": "@/lib/utils" },
  "typescript": false
}"#,
    )
    .unwrap();

    let config = ConfigStore::new(temp.path()).load().unwrap();
    assert_eq!(config.theme, "dracula");
    assert!(!config.typescript);
}

#[test]
fn malformed_file_is_reported_but_not_loaded() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("chadcn.json"), "{ not json").unwrap();
    let store = ConfigStore::new(temp.path());

    assert!(store.load().is_none());
    assert!(matches!(store.inspect(), ConfigState::Malformed { .. }));
}

#[test]
fn aliases_resolve_into_src_when_present() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    let config = ProjectConfig {
        aliases: Aliases {
            components: "@/ui".into(),
            utils: "@/lib/cn".into(),
        },
        ..ProjectConfig::default()
    };

    assert_eq!(
        components_dir(temp.path(), &config, None),
        temp.path().join("src/ui")
    );
    assert_eq!(
        utils_file(temp.path(), &config),
        temp.path().join("src/lib/cn.ts")
    );
}
