//! External package aggregation and package-manager invocation.

use std::path::Path;

use crate::detection::PackageManager;
use crate::error::{ChadcnError, Result};
use crate::registry::{Registry, ResolvedSet};
use crate::shell::{execute, CommandOptions, ExecResult};

/// Runs a program with arguments in a directory.
pub type CommandRunner<'a> = &'a dyn Fn(&str, &[String], &Path) -> anyhow::Result<ExecResult>;

/// Union of baseline packages and every resolved component's packages.
///
/// Baseline packages come first, then component packages in resolved
/// order. Duplicates keep their first position.
pub fn aggregate_packages(registry: &Registry, resolved: &ResolvedSet) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();

    let component_packages = resolved
        .iter()
        .filter_map(|name| registry.lookup(name))
        .flat_map(|component| component.package_dependencies.iter());

    for package in registry.baseline_packages().iter().chain(component_packages) {
        if !packages.contains(package) {
            packages.push(package.clone());
        }
    }

    packages
}

/// Lines of package-manager output kept for a failure report.
const FAILURE_OUTPUT_LINES: usize = 20;

/// Install `packages` with `manager` in `cwd`.
///
/// Output is captured, not streamed, so it cannot interleave with a
/// spinner. It surfaces only when the install fails.
pub fn install_packages(manager: PackageManager, packages: &[String], cwd: &Path) -> Result<()> {
    install_packages_with(manager, packages, cwd, &run_captured)
}

/// Install `packages` through a custom runner.
///
/// A runner error or a non-zero exit becomes `PackageInstallFailed`.
pub fn install_packages_with(
    manager: PackageManager,
    packages: &[String],
    cwd: &Path,
    run: CommandRunner<'_>,
) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    let command = manager.install_command(packages);
    tracing::info!(%command, cwd = %cwd.display(), "installing packages");

    let result = run(manager.command(), &manager.install_args(packages), cwd).map_err(|e| {
        tracing::warn!(error = %format!("{:#}", e), "package manager did not start");
        ChadcnError::PackageInstallFailed {
            command: command.clone(),
            code: None,
            output: format!("{:#}", e),
        }
    })?;

    if !result.success {
        return Err(ChadcnError::PackageInstallFailed {
            command,
            code: result.exit_code,
            output: failure_output(&result),
        });
    }

    Ok(())
}

/// Last lines of stderr, or of stdout when stderr is empty.
fn failure_output(result: &ExecResult) -> String {
    let text = if result.stderr.trim().is_empty() {
        &result.stdout
    } else {
        &result.stderr
    };
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(FAILURE_OUTPUT_LINES);
    lines[start..].join("\n")
}

fn run_captured(program: &str, args: &[String], cwd: &Path) -> anyhow::Result<ExecResult> {
    let options = CommandOptions {
        cwd: Some(cwd.to_path_buf()),
        capture_output: true,
    };
    execute(program, args, &options)
}
