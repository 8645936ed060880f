//! File-based detection helpers.

use std::path::Path;

/// Check if a file exists relative to project root.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

/// First of `files` that exists, in the order given.
pub fn any_file_exists(project_root: &Path, files: &[&str]) -> Option<String> {
    files
        .iter()
        .find(|f| project_root.join(f).exists())
        .map(|f| f.to_string())
}

/// Check if a directory exists relative to project root.
pub fn dir_exists(project_root: &Path, dir: &str) -> bool {
    project_root.join(dir).is_dir()
}
