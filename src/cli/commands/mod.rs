//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`chadcn init`, `chadcn add`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod add;
pub mod completions;
pub mod diff;
pub mod dispatcher;
pub mod init;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{ConfigState, ConfigStore, ProjectConfig};
use crate::error::{ChadcnError, Result};
use crate::ui::UserInterface;

/// Load the project config or fail with `NotInitialized`.
///
/// A malformed config file fails the same way, after a warning naming it.
pub(crate) fn require_config(
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> Result<ProjectConfig> {
    let store = ConfigStore::new(project_root);
    match store.inspect() {
        ConfigState::Found { config, .. } => Ok(config),
        ConfigState::Malformed { path, message } => {
            tracing::warn!(path = %path.display(), %message, "ignoring malformed config");
            ui.warning(&format!(
                "Ignoring invalid config file {}: {}",
                path.display(),
                message
            ));
            Err(ChadcnError::NotInitialized {
                path: project_root.to_path_buf(),
            })
        }
        ConfigState::Missing => Err(ChadcnError::NotInitialized {
            path: project_root.to_path_buf(),
        }),
    }
}
