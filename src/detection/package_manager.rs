//! Node package manager detection.

use std::fmt;
use std::path::Path;

use super::file_detection::file_exists;

/// Package manager used to install component dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    #[default]
    Npm,
}

impl PackageManager {
    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
            Self::Npm => "npm",
        }
    }

    /// Subcommand that adds packages.
    pub fn install_verb(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }

    /// Full argument list for installing `packages`.
    pub fn install_args(&self, packages: &[String]) -> Vec<String> {
        let mut args = vec![self.install_verb().to_string()];
        args.extend(packages.iter().cloned());
        args
    }

    /// Printable install command line.
    pub fn install_command(&self, packages: &[String]) -> String {
        let mut line = format!("{} {}", self.command(), self.install_verb());
        for pkg in packages {
            line.push(' ');
            line.push_str(pkg);
        }
        line
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Detects the project's package manager from lockfiles.
pub struct PackageManagerDetector;

impl PackageManagerDetector {
    /// Detect the package manager for a project.
    ///
    /// Precedence: pnpm, yarn, bun, then npm as the default.
    pub fn detect(project_root: &Path) -> PackageManager {
        let detected = if file_exists(project_root, "pnpm-lock.yaml") {
            PackageManager::Pnpm
        } else if file_exists(project_root, "yarn.lock") {
            PackageManager::Yarn
        } else if file_exists(project_root, "bun.lockb") || file_exists(project_root, "bun.lock")
        {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        };

        tracing::debug!(manager = %detected, "detected package manager");
        detected
    }
}
