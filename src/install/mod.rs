//! Component installation.
//!
//! Installation is split into a pure planning step ([`plan`]) and an
//! effectful materialization step ([`Installer`]). Prompts and output stay
//! in the `add` command, so everything here runs without a terminal.
//!
//! # Example
//!
//! ```
//! use chadcn::config::Aliases;
//! use chadcn::install::{plan, InstallOptions, Installer};
//! use chadcn::registry::Registry;
//! use chadcn::templates::TemplateProvider;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let registry = Registry::builtin().unwrap();
//! let provider = TemplateProvider::offline();
//!
//! let plan = plan(&registry, &["button".to_string()]).unwrap();
//! let options = InstallOptions::new(temp.path().join("components/ui"));
//! let report = Installer::new(&registry, &provider)
//!     .run(&plan, &Aliases::default(), &options)
//!     .unwrap();
//!
//! assert_eq!(report.added_components, vec!["button".to_string()]);
//! ```

pub mod packages;
pub mod plan;

pub use packages::{aggregate_packages, install_packages, install_packages_with, CommandRunner};
pub use plan::{plan, InstallPlan, Selection};

use std::path::PathBuf;

use crate::config::Aliases;
use crate::error::{ChadcnError, Result};
use crate::materialize::{FileMaterializer, WriteReport};
use crate::registry::Registry;
use crate::rewrite::{ImportRewriter, PatternRewriter};
use crate::templates::TemplateProvider;

/// Progress events emitted while materializing components.
#[derive(Debug)]
pub enum InstallProgress<'a> {
    /// A component is about to be fetched and written.
    ComponentStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A component finished.
    ComponentFinished {
        name: &'a str,
        report: &'a WriteReport,
    },
}

/// Options for a materialization run.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Directory component files are written beneath.
    pub target_dir: PathBuf,
    /// Replace files that already exist.
    pub overwrite: bool,
}

impl InstallOptions {
    /// Options writing to `target_dir` without overwriting.
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            overwrite: false,
        }
    }

    /// Set the overwrite flag.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Outcome of materializing a plan.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Components with at least one file written, in resolved order.
    pub added_components: Vec<String>,
    /// Components with at least one file left in place, in resolved order.
    pub skipped_components: Vec<String>,
    /// Every file written or skipped.
    pub files: WriteReport,
    /// Templates that degraded to placeholders.
    pub warnings: Vec<ChadcnError>,
    /// External packages the installed components need.
    pub packages: Vec<String>,
}

/// Fetches, rewrites and writes every component of a plan.
pub struct Installer<'a> {
    registry: &'a Registry,
    provider: &'a TemplateProvider,
    rewriter: Box<dyn ImportRewriter + 'a>,
    materializer: FileMaterializer,
}

impl<'a> Installer<'a> {
    /// Create an installer using the pattern-based import rewriter.
    pub fn new(registry: &'a Registry, provider: &'a TemplateProvider) -> Self {
        Self {
            registry,
            provider,
            rewriter: Box::new(PatternRewriter),
            materializer: FileMaterializer,
        }
    }

    /// Replace the import rewriter.
    pub fn with_rewriter(mut self, rewriter: impl ImportRewriter + 'a) -> Self {
        self.rewriter = Box::new(rewriter);
        self
    }

    /// Materialize `plan`.
    pub fn run(
        &self,
        plan: &InstallPlan,
        aliases: &Aliases,
        options: &InstallOptions,
    ) -> Result<InstallReport> {
        self.run_with_progress(plan, aliases, options, |_| {})
    }

    /// Materialize `plan`, reporting progress per component.
    ///
    /// Components are processed in resolved order. A write error aborts the
    /// run; files already written stay on disk.
    pub fn run_with_progress<F>(
        &self,
        plan: &InstallPlan,
        aliases: &Aliases,
        options: &InstallOptions,
        mut on_progress: F,
    ) -> Result<InstallReport>
    where
        F: FnMut(InstallProgress<'_>),
    {
        let mut report = InstallReport {
            packages: plan.packages(self.registry),
            ..Default::default()
        };
        let total = plan.resolved.len();

        for (index, name) in plan.resolved.iter().enumerate() {
            let Some(component) = self.registry.lookup(name) else {
                unreachable!("resolved component '{}' missing from registry", name);
            };

            on_progress(InstallProgress::ComponentStarting {
                name,
                index,
                total,
            });

            let mut outcome = self.provider.fetch(component);
            for file in &mut outcome.files {
                file.content = self.rewriter.rewrite(&file.content, aliases);
            }

            let written =
                self.materializer
                    .write(&options.target_dir, &outcome.files, options.overwrite)?;

            if !written.added.is_empty() {
                report.added_components.push(name.clone());
            }
            if !written.skipped.is_empty() {
                report.skipped_components.push(name.clone());
            }

            on_progress(InstallProgress::ComponentFinished {
                name,
                report: &written,
            });

            report.warnings.append(&mut outcome.warnings);
            report.files.extend(written);
        }

        Ok(report)
    }
}
