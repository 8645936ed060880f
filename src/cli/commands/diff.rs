//! Diff command implementation.
//!
//! `chadcn diff` will compare installed components against the registry.
//! For now it only checks that the project is initialized.

use std::path::{Path, PathBuf};

use crate::cli::args::DiffArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::require_config;

/// The diff command implementation.
pub struct DiffCommand {
    project_root: PathBuf,
    args: DiffArgs,
}

impl DiffCommand {
    /// Create a new diff command.
    pub fn new(project_root: &Path, args: DiffArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for DiffCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        require_config(&self.project_root, ui)?;

        if let Some(component) = &self.args.component {
            tracing::debug!(%component, "diff requested");
        }
        ui.message("Diff functionality coming soon!");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigStore, ProjectConfig};
    use crate::error::ChadcnError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn requires_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = DiffCommand::new(temp.path(), DiffArgs::default())
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, ChadcnError::NotInitialized { .. }));
    }

    #[test]
    fn reports_not_implemented() {
        let temp = TempDir::new().unwrap();
        ConfigStore::new(temp.path())
            .save(&ProjectConfig::default())
            .unwrap();
        let mut ui = MockUI::new();

        let result = DiffCommand::new(
            temp.path(),
            DiffArgs {
                component: Some("button".into()),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        assert!(ui.has_message("coming soon"));
    }
}
