//! Data embedded in the binary at compile time.
//!
//! Everything under `templates/` ships inside the executable:
//! - `registry.yml` - the component and theme catalog
//! - `components/` - offline snapshot of component sources
//! - `scaffold/` - files written by `chadcn init`

use include_dir::{include_dir, Dir};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Path of the catalog manifest inside the embedded directory.
pub const CATALOG_PATH: &str = "registry.yml";

/// Directory holding the component snapshot.
pub const COMPONENTS_ROOT: &str = "components";

/// Directory holding `init` scaffold files.
pub const SCAFFOLD_ROOT: &str = "scaffold";

/// Get an embedded file as UTF-8 text.
pub fn file(path: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(path).and_then(|f| f.contents_utf8())
}

/// Get a file from the component snapshot by its registry-relative path
/// (e.g. `Button/Button.tsx`).
pub fn component_file(relative_path: &str) -> Option<&'static str> {
    file(&format!("{}/{}", COMPONENTS_ROOT, relative_path))
}

/// Get a scaffold file by name (e.g. `utils.ts`).
pub fn scaffold_file(name: &str) -> Option<&'static str> {
    file(&format!("{}/{}", SCAFFOLD_ROOT, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_embedded() {
        let content = file(CATALOG_PATH).unwrap();
        assert!(content.contains("components:"));
        assert!(content.contains("themes:"));
    }

    #[test]
    fn component_snapshot_contains_button() {
        let button = component_file("Button/Button.tsx").unwrap();
        assert!(button.contains("buttonVariants"));
    }

    #[test]
    fn missing_component_file_is_none() {
        assert!(component_file("Nope/Nope.tsx").is_none());
    }

    #[test]
    fn scaffold_files_are_embedded() {
        for name in [
            "utils.ts",
            "utils.js",
            "tailwind.config.ts",
            "tailwind.config.js",
        ] {
            assert!(scaffold_file(name).is_some(), "missing scaffold {}", name);
        }
    }
}
