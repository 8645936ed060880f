//! List command implementation.
//!
//! The `chadcn list` command prints the component and theme catalog. It
//! does not need a project configuration.

use anyhow::Context;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::theme::ChadcnTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = Registry::builtin()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(registry.catalog())
                .context("Failed to serialize catalog")?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = ChadcnTheme::detect();

        ui.message(&format!("{}", theme.header.apply_to("Components")));
        for (category, components) in registry.by_category() {
            ui.message("");
            ui.message(&format!("  {}", theme.highlight.apply_to(&category.label)));
            for component in components {
                ui.message(&format!(
                    "    {:<20} {}",
                    theme.info.apply_to(&component.name),
                    theme.dim.apply_to(&component.description)
                ));
                if !component.dependencies.is_empty() {
                    ui.message(&format!(
                        "      {}",
                        theme.dim.apply_to(format!(
                            "└── depends on: {}",
                            component.dependencies.join(", ")
                        ))
                    ));
                }
            }
        }

        ui.message("");
        ui.message(&format!("{}", theme.header.apply_to("Themes")));
        for (category, themes) in registry.themes_by_category() {
            ui.message("");
            ui.message(&format!("  {}", theme.highlight.apply_to(category.label())));
            for t in themes {
                ui.message(&format!(
                    "    {:<20} {}",
                    theme.info.apply_to(&t.name),
                    theme.dim.apply_to(&t.description)
                ));
            }
        }

        ui.message("");
        ui.message(&format!(
            "{} components, {} themes",
            registry.all().len(),
            registry.themes().len()
        ));

        Ok(CommandResult::success())
    }
}
