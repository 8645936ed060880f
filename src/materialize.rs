//! Writing component files to disk under conflict rules.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::error::Result;

/// A file payload: a relative path and its text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    /// Path relative to the components directory (e.g. `Button/Button.tsx`).
    pub name: String,

    /// File content.
    pub content: String,
}

impl ComponentFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Files written and skipped by a [`FileMaterializer::write`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Files written, in input order.
    pub added: Vec<PathBuf>,

    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
}

impl WriteReport {
    /// Append another report onto this one.
    pub fn extend(&mut self, other: WriteReport) {
        self.added.extend(other.added);
        self.skipped.extend(other.skipped);
    }

    /// Whether nothing was written.
    pub fn nothing_added(&self) -> bool {
        self.added.is_empty()
    }
}

/// Writes file payloads beneath a target directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMaterializer;

impl FileMaterializer {
    /// Write `files` under `target_dir`.
    ///
    /// Existing files are skipped unless `overwrite` is set. Each file is
    /// written to a temporary sibling and renamed into place, so a target
    /// is either untouched or fully written.
    pub fn write(
        &self,
        target_dir: &Path,
        files: &[ComponentFile],
        overwrite: bool,
    ) -> Result<WriteReport> {
        let mut report = WriteReport::default();

        for file in files {
            let target = target_dir.join(&file.name);

            if target.exists() && !overwrite {
                tracing::debug!(path = %target.display(), "skipping existing file");
                report.skipped.push(target);
                continue;
            }

            write_atomic(&target, &file.content)?;
            tracing::debug!(path = %target.display(), "wrote file");
            report.added.push(target);
        }

        Ok(report)
    }
}

/// Write `content` to `path` via a temp file in the same directory.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to persist {}", path.display()))?;

    Ok(())
}
