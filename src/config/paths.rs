//! Mapping import aliases to filesystem locations.

use crate::config::schema::ProjectConfig;
use std::path::{Path, PathBuf};

/// Alias prefixes that refer to the project's source root.
const ROOT_ALIAS_PREFIXES: &[&str] = &["@/", "~/"];

/// Resolve an alias (e.g. `@/components/ui`) to a directory under `cwd`.
///
/// Root-style aliases map into `src/` when the project has one; anything
/// else is treated as a path relative to `cwd`.
pub fn resolve_alias(cwd: &Path, alias: &str) -> PathBuf {
    for prefix in ROOT_ALIAS_PREFIXES {
        if let Some(rest) = alias.strip_prefix(prefix) {
            let base = if cwd.join("src").is_dir() {
                cwd.join("src")
            } else {
                cwd.to_path_buf()
            };
            return base.join(rest);
        }
    }
    cwd.join(alias.trim_start_matches("./"))
}

/// Directory components are written into.
///
/// An explicit `--path` wins over the configured components alias.
pub fn components_dir(cwd: &Path, config: &ProjectConfig, path_override: Option<&Path>) -> PathBuf {
    match path_override {
        Some(dir) => cwd.join(dir),
        None => resolve_alias(cwd, &config.aliases.components),
    }
}

/// File the `cn` utility module is written to.
pub fn utils_file(cwd: &Path, config: &ProjectConfig) -> PathBuf {
    let ext = if config.typescript { "ts" } else { "js" };
    let base = resolve_alias(cwd, &config.aliases.utils);
    let mut name = base.into_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn root_alias_maps_into_src_when_present() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        assert_eq!(
            resolve_alias(temp.path(), "@/components/ui"),
            temp.path().join("src/components/ui")
        );
    }

    #[test]
    fn root_alias_maps_to_cwd_without_src() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_alias(temp.path(), "~/components/ui"),
            temp.path().join("components/ui")
        );
    }

    #[test]
    fn plain_alias_is_relative_to_cwd() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        assert_eq!(
            resolve_alias(temp.path(), "./lib/ui"),
            temp.path().join("lib/ui")
        );
    }

    #[test]
    fn path_override_wins() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::default();
        assert_eq!(
            components_dir(temp.path(), &config, Some(Path::new("widgets"))),
            temp.path().join("widgets")
        );
    }

    #[test]
    fn utils_file_uses_language_extension() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        let mut config = ProjectConfig::default();
        assert_eq!(
            utils_file(temp.path(), &config),
            temp.path().join("src/lib/utils.ts")
        );
        config.typescript = false;
        assert_eq!(
            utils_file(temp.path(), &config),
            temp.path().join("src/lib/utils.js")
        );
    }
}
