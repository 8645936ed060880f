//! Add command implementation.
//!
//! The `chadcn add` command copies components (and the components they
//! depend on) into the project, rewriting their imports to the configured
//! aliases, then offers to install the npm packages they need.

use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::config::{components_dir, ProjectConfig};
use crate::detection::{PackageManager, PackageManagerDetector};
use crate::error::{ChadcnError, Result};
use crate::install::{
    install_packages, plan, InstallOptions, InstallPlan, InstallProgress, InstallReport,
    Installer, Selection,
};
use crate::registry::{pascal_case, Registry};
use crate::templates::TemplateProvider;
use crate::ui::theme::ChadcnTheme;
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::require_config;

/// Installs packages with a package manager in a directory.
pub type PackageInstaller = fn(PackageManager, &[String], &Path) -> Result<()>;

/// The add command implementation.
pub struct AddCommand {
    project_root: PathBuf,
    args: AddArgs,
    provider: TemplateProvider,
    package_installer: PackageInstaller,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(project_root: &Path, args: AddArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            provider: TemplateProvider::default(),
            package_installer: install_packages,
        }
    }

    /// Use a specific template provider.
    pub fn with_provider(mut self, provider: TemplateProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Use a specific package installer.
    pub fn with_package_installer(mut self, installer: PackageInstaller) -> Self {
        self.package_installer = installer;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AddArgs {
        &self.args
    }

    /// Ask which components to add. An empty answer means cancel.
    fn select_interactively(
        &self,
        registry: &Registry,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<String>> {
        let mut options = Vec::new();
        for (category, components) in registry.by_category() {
            for component in components {
                options.push(PromptOption {
                    label: format!(
                        "{:<20} {} ({})",
                        component.name, component.description, category.label
                    ),
                    value: component.name.clone(),
                });
            }
        }

        let prompt = Prompt {
            key: "components".to_string(),
            question: "Which components would you like to add?".to_string(),
            prompt_type: PromptType::MultiSelect { options },
            default: None,
        };

        Ok(ui.prompt(&prompt)?.into_strings())
    }

    /// Print the invalid names and every available component.
    fn report_invalid(&self, registry: &Registry, names: &[String], ui: &mut dyn UserInterface) {
        let theme = ChadcnTheme::detect();
        ui.error(&format!("Invalid component(s): {}", names.join(", ")));
        ui.message("");
        ui.message("Available components:");
        for (category, components) in registry.by_category() {
            let list: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
            ui.message(&format!(
                "  {} {}",
                theme.dim.apply_to(format!("{}:", category.name)),
                list.join(", ")
            ));
        }
    }

    fn confirm_extras(&self, plan: &InstallPlan, ui: &mut dyn UserInterface) -> Result<bool> {
        if !plan.needs_confirmation() || self.args.yes {
            return Ok(true);
        }

        ui.message("");
        ui.warning("The following dependencies will also be added:");
        ui.show_hint(&plan.extras.join(", "));
        ui.message("");

        let answer = ui.prompt(&Prompt::confirm("proceed", "Continue?", true))?;
        Ok(answer.as_bool().unwrap_or(false))
    }

    fn materialize(
        &self,
        registry: &Registry,
        plan: &InstallPlan,
        config: &ProjectConfig,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallReport> {
        let target_dir = components_dir(
            &self.project_root,
            config,
            self.args.path.as_deref(),
        );
        let options = InstallOptions::new(target_dir).overwrite(self.args.overwrite);

        let mut spinner = ui.start_spinner("Fetching components...");
        let result = Installer::new(registry, &self.provider).run_with_progress(
            plan,
            &config.aliases,
            &options,
            |event| {
                if let InstallProgress::ComponentStarting { name, .. } = event {
                    spinner.set_message(&format!("Fetching {}...", name));
                }
            },
        );

        match result {
            Ok(report) => {
                spinner.finish_success(&format!("Added {} file(s)", report.files.added.len()));
                Ok(report)
            }
            Err(e) => {
                spinner.finish_error("Failed to add components");
                Err(e)
            }
        }
    }

    fn show_report(&self, report: &InstallReport, ui: &mut dyn UserInterface) {
        for warning in &report.warnings {
            ui.warning(&warning.to_string());
        }

        if !report.added_components.is_empty() {
            ui.message("");
            ui.success("Added components:");
            ui.show_hint(&report.added_components.join(", "));
        }

        if !report.files.skipped.is_empty() {
            ui.message("");
            ui.warning(&format!(
                "Skipped {} file(s) that already exist.",
                report.files.skipped.len()
            ));
            if !report.skipped_components.is_empty() {
                ui.show_hint(&report.skipped_components.join(", "));
            }
            ui.show_hint("Use --overwrite to replace existing files.");
        }
    }

    fn offer_install(&self, packages: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let theme = ChadcnTheme::detect();
        ui.message("");
        ui.message(&format!(
            "{}",
            theme.highlight.apply_to("Install required dependencies:")
        ));
        ui.message("");
        ui.message(&format!(
            "  {}",
            theme
                .info
                .apply_to(PackageManager::Npm.install_command(packages))
        ));
        ui.show_hint("# or");
        ui.message(&format!(
            "  {}",
            theme
                .info
                .apply_to(PackageManager::Pnpm.install_command(packages))
        ));

        if self.args.yes || !ui.is_interactive() {
            return Ok(());
        }

        ui.message("");
        let answer = ui.prompt(&Prompt::confirm(
            "install",
            "Would you like to install dependencies now?",
            true,
        ))?;
        if answer.as_bool() != Some(true) {
            return Ok(());
        }

        let manager = PackageManagerDetector::detect(&self.project_root);
        let mut spinner = ui.start_spinner("Installing dependencies...");
        match (self.package_installer)(manager, packages, &self.project_root) {
            Ok(()) => spinner.finish_success("Dependencies installed!"),
            Err(e) => {
                tracing::warn!(error = %e, "dependency install failed");
                spinner.finish_error("Failed to install dependencies");
                ui.warning(&e.to_string());
                if let ChadcnError::PackageInstallFailed { output, .. } = &e {
                    for line in output.lines() {
                        ui.show_hint(line);
                    }
                }
                ui.show_hint(&format!(
                    "Please install manually: {}",
                    manager.install_command(packages)
                ));
            }
        }

        Ok(())
    }

    fn show_usage(&self, report: &InstallReport, config: &ProjectConfig, ui: &mut dyn UserInterface) {
        let Some(first) = report.added_components.first() else {
            return;
        };
        let pascal = pascal_case(first);
        let alias = config.aliases.components.trim_end_matches('/');

        ui.message("");
        ui.message("Usage example:");
        ui.message("");
        ui.show_hint(&format!("import {{ {} }} from '{}/{}'", pascal, alias, pascal));
        ui.message("");
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = require_config(&self.project_root, ui)?;
        let registry = Registry::builtin()?;

        let requested = match Selection::from_args(&self.args.components, self.args.all) {
            Selection::All => {
                ui.message("Adding all components...");
                registry.component_names().into_iter().map(String::from).collect()
            }
            Selection::Named(names) => names,
            Selection::Interactive => {
                if !ui.is_interactive() {
                    ui.message("No components specified.");
                    ui.show_hint("Pass component names (chadcn add button) or use --all.");
                    return Ok(CommandResult::success());
                }
                let selected = self.select_interactively(&registry, ui)?;
                if selected.is_empty() {
                    ui.message("No components selected.");
                    return Ok(CommandResult::success());
                }
                selected
            }
        };

        let plan = match plan(&registry, &requested) {
            Ok(plan) => plan,
            Err(ChadcnError::InvalidComponentName { names }) => {
                self.report_invalid(&registry, &names, ui);
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if !self.confirm_extras(&plan, ui)? {
            ui.message("Installation cancelled.");
            return Ok(CommandResult::success());
        }

        let report = self.materialize(&registry, &plan, &config, ui)?;
        self.show_report(&report, ui);
        self.offer_install(&report.packages, ui)?;

        ui.message("");
        ui.success("Components added successfully!");
        self.show_usage(&report, &config, ui);

        Ok(CommandResult::success())
    }
}
